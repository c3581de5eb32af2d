use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_GIGACHAT_API_URL: &str =
    "https://gigachat.devices.sberbank.ru/api/v1/chat/completions";
pub const DEFAULT_GIGACHAT_MODEL: &str = "GigaChat";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, Default)]
pub struct MacronoteConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// Opaque credential sent as the `Authorization` header, expected as `Bearer <token>`.
    pub auth_key: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub model_name: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            auth_key: None,
            client_id: None,
            client_secret: None,
            model_name: DEFAULT_GIGACHAT_MODEL.to_string(),
            api_url: DEFAULT_GIGACHAT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
        }
    }
}

impl LLMConfig {
    /// Whether the client-id/secret pair that enables the strict parser is present.
    pub fn has_client_credentials(&self) -> bool {
        is_present(&self.client_id) && is_present(&self.client_secret)
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_credentials_require_both_values() {
        let mut config = LLMConfig {
            client_id: Some("id".to_string()),
            ..Default::default()
        };
        assert!(!config.has_client_credentials());

        config.client_secret = Some("   ".to_string());
        assert!(!config.has_client_credentials());

        config.client_secret = Some("secret".to_string());
        assert!(config.has_client_credentials());
    }

    #[test]
    fn test_generated_uuids_are_unique() {
        let a = generate_uuid_v7();
        let b = generate_uuid_v7();
        assert_ne!(a, b);
        assert_eq!(a.get_version_num(), 7);
    }
}
