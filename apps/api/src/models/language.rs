/// Language requested when the caller does not specify one.
pub const DEFAULT_REQUEST_LANGUAGE: &str = "Hindi";

/// Languages the canned fallback content is translated into.
///
/// The caller's raw language label is still forwarded verbatim to the model;
/// this enum only decides which translation the mock response uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Gujarati,
}

impl Language {
    /// Case-insensitive match on the language name. Anything unrecognised is English.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "hindi" | "hi" | "हिन्दी" | "हिंदी" => Language::Hindi,
            "gujarati" | "gu" | "ગુજરાતી" => Language::Gujarati,
            _ => Language::English,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Gujarati => "Gujarati",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_ignores_case_and_whitespace() {
        assert_eq!(Language::from_label(" HINDI "), Language::Hindi);
        assert_eq!(Language::from_label("gujarati"), Language::Gujarati);
        assert_eq!(Language::from_label("English"), Language::English);
    }

    #[test]
    fn test_unknown_language_is_english() {
        assert_eq!(Language::from_label("Klingon"), Language::English);
        assert_eq!(Language::from_label(""), Language::English);
    }

    #[test]
    fn test_default_request_language_is_supported() {
        assert_eq!(Language::from_label(DEFAULT_REQUEST_LANGUAGE), Language::Hindi);
    }
}
