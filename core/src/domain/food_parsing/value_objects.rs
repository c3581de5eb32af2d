use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a credential check. Never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CredentialStatus {
    pub valid: bool,
    pub message: String,
}

impl CredentialStatus {
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParserStatus {
    /// Whether the strict path is configured at all.
    pub enabled: bool,
    /// Whether a probe parse currently succeeds.
    pub available: bool,
    pub credential: CredentialStatus,
}
