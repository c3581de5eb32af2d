use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError, food_parsing::entities::ParsedCandidate,
};

static CODE_FENCE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"```json|```").ok());

/// Greedy: first `{` through last `}`.
static JSON_OBJECT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").ok());

#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    #[serde(default)]
    products: Option<Vec<ParsedCandidate>>,
}

impl ProductsEnvelope {
    fn into_candidates(self) -> Vec<ParsedCandidate> {
        self.products.unwrap_or_default()
    }
}

pub fn strip_code_fences(raw: &str) -> String {
    match CODE_FENCE.as_ref() {
        Some(fence) => fence.replace_all(raw, "").trim().to_string(),
        None => raw.trim().to_string(),
    }
}

fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT
        .as_ref()
        .and_then(|re| re.find(text))
        .map(|m| m.as_str())
}

/// Parses completion text into candidates, tolerating code fences and surrounding prose.
///
/// Exactly one recovery attempt is made on the outermost brace span before giving up
/// with [`CoreError::FormatError`].
pub fn parse_completion(raw: &str) -> Result<Vec<ParsedCandidate>, CoreError> {
    let cleaned = strip_code_fences(raw);

    let strict_error = match serde_json::from_str::<ProductsEnvelope>(&cleaned) {
        Ok(envelope) => return Ok(envelope.into_candidates()),
        Err(e) => e,
    };

    tracing::warn!(error = %strict_error, "Completion is not pure JSON, trying to recover");

    let recovered = extract_json_object(&cleaned)
        .and_then(|span| serde_json::from_str::<ProductsEnvelope>(span).ok());

    match recovered {
        Some(envelope) => Ok(envelope.into_candidates()),
        None => {
            tracing::error!(
                length = cleaned.len(),
                "Failed to recover JSON from completion"
            );
            Err(CoreError::FormatError(
                "expected JSON, got unparseable text".to_string(),
            ))
        }
    }
}
