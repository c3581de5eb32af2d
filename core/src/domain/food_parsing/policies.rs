use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    food_parsing::entities::{ParseMode, ParsedCandidate},
};

/// Candidates must score strictly above this to be kept.
pub const CONFIDENCE_THRESHOLD: f64 = 0.3;

pub fn filter_confident(candidates: Vec<ParsedCandidate>) -> Vec<ParsedCandidate> {
    candidates
        .into_iter()
        .filter(|candidate| candidate.confidence > CONFIDENCE_THRESHOLD)
        .collect()
}

/// Whether the parser is offered at all, decided once from the client id/secret pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserPolicy {
    enabled: bool,
}

impl ParserPolicy {
    pub fn from_config(config: &LLMConfig) -> Self {
        Self {
            enabled: config.has_client_credentials(),
        }
    }

    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// `Ok(true)` when the pipeline may proceed. A disabled parser is `Ok(false)` in
    /// permissive mode and a [`CoreError::ConfigurationError`] in strict mode.
    pub fn ensure_enabled(&self, mode: ParseMode) -> Result<bool, CoreError> {
        match (self.enabled, mode) {
            (true, _) => Ok(true),
            (false, ParseMode::Permissive) => Ok(false),
            (false, ParseMode::Strict) => Err(CoreError::ConfigurationError(
                "set GIGACHAT_CLIENT_ID and GIGACHAT_CLIENT_SECRET to enable AI food parsing"
                    .to_string(),
            )),
        }
    }
}
