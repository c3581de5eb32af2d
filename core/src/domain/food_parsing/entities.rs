use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Food proposed by the completion service, not yet resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParsedCandidate {
    #[schema(example = "яблоко")]
    pub name: String,
    #[schema(example = 150.0)]
    pub grams: f64,
    /// Certainty in `[0, 1]`. Missing scores count as zero.
    #[serde(default)]
    #[schema(example = 0.9)]
    pub confidence: f64,
}

impl ParsedCandidate {
    pub fn new(name: impl Into<String>, grams: f64, confidence: f64) -> Self {
        Self {
            name: name.into(),
            grams,
            confidence,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Degrades to an empty list on any failure.
    Permissive,
    /// Propagates every failure to the caller.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Instruction payload sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionPayload {
    pub messages: Vec<ChatMessage>,
}

/// Shape of the configured completion credential, inspected without revealing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialState {
    Missing,
    NotBearer,
    Bearer,
}

impl CredentialState {
    pub fn inspect(credential: Option<&str>) -> Self {
        match credential.map(str::trim) {
            None | Some("") => Self::Missing,
            Some(value) if value.starts_with("Bearer ") => Self::Bearer,
            Some(_) => Self::NotBearer,
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_without_confidence_defaults_to_zero() {
        let candidate: ParsedCandidate =
            serde_json::from_str(r#"{"name":"хлеб","grams":50}"#).unwrap();

        assert_eq!(candidate, ParsedCandidate::new("хлеб", 50.0, 0.0));
    }

    #[test]
    fn test_chat_role_serializes_lowercase() {
        let json = serde_json::to_value(ChatMessage::system("hi")).unwrap();

        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "hi");
    }

    #[test]
    fn test_credential_state_inspect() {
        assert_eq!(CredentialState::inspect(None), CredentialState::Missing);
        assert_eq!(CredentialState::inspect(Some("  ")), CredentialState::Missing);
        assert_eq!(CredentialState::inspect(Some("abc")), CredentialState::NotBearer);
        assert_eq!(
            CredentialState::inspect(Some("Bearer token")),
            CredentialState::Bearer
        );
    }
}
