//! Response normalizer: projects either known model vocabulary onto `CanonicalResponse`.
//!
//! Two prompt generations are in circulation:
//! - current: `summary` / `skill_gaps` / `duration` / `youtube_search_term` / `reason`
//! - legacy:  `summary_message` / `missing_skills` / `day` / `youtube_query` / `reason`
//!
//! Decoding is two-step: parse into a generic JSON object, rename aliased keys
//! via the tables below, then deserialize strictly into the canonical type.
//! Output that fails either step is rejected whole, never partially trusted.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::CanonicalResponse;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("model output is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    #[error("model output is JSON but not an object")]
    NotAnObject,

    #[error("model output does not match a known schema: {0}")]
    Schema(#[source] serde_json::Error),
}

/// A canonical key and the keys accepted in its place, highest priority first.
struct FieldAliases {
    canonical: &'static str,
    legacy: &'static [&'static str],
}

const RESPONSE_ALIASES: &[FieldAliases] = &[
    FieldAliases {
        canonical: "candidate_summary",
        legacy: &["summary", "summary_message"],
    },
    FieldAliases {
        canonical: "missing_skills",
        legacy: &["skill_gaps"],
    },
];

const PLAN_ITEM_ALIASES: &[FieldAliases] = &[
    FieldAliases {
        canonical: "day",
        legacy: &["duration"],
    },
    FieldAliases {
        canonical: "description",
        legacy: &["reason"],
    },
    FieldAliases {
        canonical: "youtube_query",
        legacy: &["youtube_search_term"],
    },
];

/// Strips a surrounding markdown code fence (```` ``` ```` or ```` ```json ````, any tag) from model output.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        .trim();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Renames aliased keys in place. An existing, non-null canonical key wins;
/// otherwise the first legacy key present supplies the value. Every legacy
/// key is removed so exactly one name per concept survives. Unlisted keys are
/// left alone.
fn reconcile_keys(object: &mut Map<String, Value>, aliases: &[FieldAliases]) {
    for alias in aliases {
        let mut found: Vec<Value> = alias
            .legacy
            .iter()
            .filter_map(|key| object.remove(*key))
            .collect();

        let canonical_present = object
            .get(alias.canonical)
            .is_some_and(|v| !v.is_null());

        if canonical_present {
            continue;
        }
        object.remove(alias.canonical);
        if !found.is_empty() {
            object.insert(alias.canonical.to_string(), found.swap_remove(0));
        }
    }
}

/// Normalizes an already-parsed JSON value.
pub fn normalize_value(value: Value) -> Result<CanonicalResponse, NormalizeError> {
    let Value::Object(mut object) = value else {
        return Err(NormalizeError::NotAnObject);
    };

    reconcile_keys(&mut object, RESPONSE_ALIASES);

    if let Some(Value::Array(items)) = object.get_mut("study_plan") {
        for item in items.iter_mut() {
            if let Value::Object(item) = item {
                reconcile_keys(item, PLAN_ITEM_ALIASES);
            }
        }
    }

    serde_json::from_value(Value::Object(object)).map_err(NormalizeError::Schema)
}

/// Normalizes raw model text: strip fences, parse, reconcile, decode.
pub fn normalize_model_output(raw: &str) -> Result<CanonicalResponse, NormalizeError> {
    let cleaned = strip_code_fences(raw);
    let value: Value = serde_json::from_str(cleaned).map_err(NormalizeError::NotJson)?;
    normalize_value(value)
}
