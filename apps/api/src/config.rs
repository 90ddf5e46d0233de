use anyhow::{Context, Result};

/// Base model used when no tuned model is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const DEFAULT_MAX_UPLOAD_MB: usize = 16;

/// Application configuration loaded from environment variables.
/// Built once at startup and shared read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` means the generative service is not configured and every
    /// analysis falls back to the localized mock response.
    pub gemini_api_key: Option<String>,
    pub tuned_model_name: Option<String>,
    /// Serve the mock response instead of a 400 when a request carries no resume.
    pub use_mock_data: bool,
    pub skill_taxonomy_path: Option<String>,
    /// Request body cap for the analyze routes. Larger uploads are rejected
    /// as unreadable documents.
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            tuned_model_name: optional_env("TUNED_MODEL_NAME"),
            use_mock_data: optional_env("USE_MOCK_DATA")
                .map(|v| parse_flag(&v))
                .transpose()
                .context("USE_MOCK_DATA must be a boolean (true/false/1/0)")?
                .unwrap_or(false),
            skill_taxonomy_path: optional_env("SKILL_TAXONOMY_PATH"),
            max_upload_bytes: optional_env("MAX_UPLOAD_MB")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_MB must be a whole number of megabytes")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_MB)
                .saturating_mul(1024 * 1024),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The model identifier sent to the generative service. A tuned model wins
    /// over the base model.
    pub fn model_name(&self) -> &str {
        self.tuned_model_name.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}

#[cfg(test)]
impl Config {
    /// Offline configuration: no API key, mock mode off.
    pub(crate) fn for_tests() -> Self {
        Config {
            gemini_api_key: None,
            tuned_model_name: None,
            use_mock_data: false,
            skill_taxonomy_path: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            port: 5000,
            rust_log: "info".to_string(),
        }
    }
}

/// Reads an env var, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised flag value '{other}'"),
    }
}
