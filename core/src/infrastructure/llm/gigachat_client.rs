use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    food_parsing::{
        entities::{ChatMessage, CompletionPayload, CredentialState},
        ports::LLMClient,
    },
};

const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 2000;
const JSON_MIME: &str = "application/json";

/// OpenAI-style chat-completion client for GigaChat.
#[derive(Debug, Clone)]
pub struct GigaChatLLMClient {
    auth_key: Option<String>,
    model_name: String,
    api_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl GigaChatLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::ConfigurationError(format!("HTTP client: {}", e))
            })?;

        let auth_key = config
            .auth_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string);

        Ok(Self {
            auth_key,
            model_name: config.model_name.clone(),
            api_url: config.api_url.clone(),
            client,
        })
    }

    fn classify_status(status: StatusCode, body: &str) -> CoreError {
        let detail = format!("{} - {}", status, body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CoreError::AuthError(detail),
            StatusCode::TOO_MANY_REQUESTS => CoreError::RateLimitError,
            s if s.is_server_error() => CoreError::ServiceError(detail),
            _ => CoreError::ProtocolError(detail),
        }
    }

    async fn call_chat_completions(
        &self,
        auth_key: &str,
        request: ChatCompletionRequest<'_>,
    ) -> Result<String, CoreError> {
        tracing::debug!(model = %self.model_name, "Sending chat completion request");

        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, auth_key)
            .header(CONTENT_TYPE, JSON_MIME)
            .header(ACCEPT, JSON_MIME)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("GigaChat request failed: {}", e);
                if e.is_builder() {
                    CoreError::ConfigurationError(format!("invalid request: {}", e))
                } else {
                    CoreError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read GigaChat response body: {}", e);
            CoreError::NetworkError(e.to_string())
        })?;

        if !status.is_success() {
            tracing::error!("GigaChat API error: {} - {}", status, body);
            return Err(Self::classify_status(status, &body));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse GigaChat response: {}", e);
            CoreError::ProtocolError(format!("invalid response body: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| {
                tracing::error!("GigaChat response has no message content");
                CoreError::ProtocolError("response has no message content".to_string())
            })
    }
}

impl LLMClient for GigaChatLLMClient {
    fn credential_state(&self) -> CredentialState {
        CredentialState::inspect(self.auth_key.as_deref())
    }

    async fn complete(&self, payload: CompletionPayload) -> Result<String, CoreError> {
        let auth_key = self.auth_key.as_deref().ok_or_else(|| {
            CoreError::ConfigurationError("set GIGACHAT_AUTH_KEY to call GigaChat".to_string())
        })?;

        let request = ChatCompletionRequest {
            model: &self.model_name,
            messages: &payload.messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        self.call_chat_completions(auth_key, request).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path},
    };

    use super::*;
    use crate::domain::food_parsing::prompt::build_completion_payload;

    const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

    fn config(server: &MockServer, auth_key: Option<&str>) -> LLMConfig {
        LLMConfig {
            auth_key: auth_key.map(str::to_string),
            api_url: format!("{}{}", server.uri(), COMPLETIONS_PATH),
            timeout: Duration::from_millis(500),
            ..LLMConfig::default()
        }
    }

    async fn complete_with(server: &MockServer) -> Result<String, CoreError> {
        let client = GigaChatLLMClient::new(&config(server, Some("Bearer test-token"))).unwrap();
        client.complete(build_completion_payload("яблоко")).await
    }

    async fn respond_with(template: ResponseTemplate) -> Result<String, CoreError> {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(template)
            .mount(&server)
            .await;

        complete_with(&server).await
    }

    #[tokio::test]
    async fn test_returns_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(header("authorization", "Bearer test-token"))
            .and(header("accept", "application/json"))
            .and(body_partial_json(json!({
                "model": "GigaChat",
                "temperature": 0.3,
                "max_tokens": 2000,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "{\"products\":[]}"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let content = complete_with(&server).await.unwrap();

        assert_eq!(content, "{\"products\":[]}");
    }

    #[tokio::test]
    async fn test_sends_system_and_user_messages() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "{}"}}]
            })))
            .mount(&server)
            .await;

        complete_with(&server).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
    }

    #[tokio::test]
    async fn test_status_classification() {
        assert!(matches!(
            respond_with(ResponseTemplate::new(401)).await,
            Err(CoreError::AuthError(_))
        ));
        assert!(matches!(
            respond_with(ResponseTemplate::new(403)).await,
            Err(CoreError::AuthError(_))
        ));
        assert_eq!(
            respond_with(ResponseTemplate::new(429)).await,
            Err(CoreError::RateLimitError)
        );
        assert!(matches!(
            respond_with(ResponseTemplate::new(500)).await,
            Err(CoreError::ServiceError(_))
        ));
        assert!(matches!(
            respond_with(ResponseTemplate::new(503)).await,
            Err(CoreError::ServiceError(_))
        ));
        assert!(matches!(
            respond_with(ResponseTemplate::new(400)).await,
            Err(CoreError::ProtocolError(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_content_is_protocol_error() {
        for body in [
            json!({"choices": []}),
            json!({"choices": [{"message": {}}]}),
            json!({"error": "nothing"}),
        ] {
            let result = respond_with(ResponseTemplate::new(200).set_body_json(body)).await;
            assert!(matches!(result, Err(CoreError::ProtocolError(_))));
        }

        let result = respond_with(ResponseTemplate::new(200).set_body_string("<html>")).await;
        assert!(matches!(result, Err(CoreError::ProtocolError(_))));
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let result = respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"choices": [{"message": {"content": "{}"}}]}))
                .set_delay(Duration::from_secs(2)),
        )
        .await;

        assert!(matches!(result, Err(CoreError::NetworkError(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let config = LLMConfig {
            auth_key: Some("Bearer test-token".to_string()),
            api_url: format!("http://127.0.0.1:1{}", COMPLETIONS_PATH),
            timeout: Duration::from_millis(500),
            ..LLMConfig::default()
        };

        let client = GigaChatLLMClient::new(&config).unwrap();
        let result = client.complete(build_completion_payload("яблоко")).await;

        assert!(matches!(result, Err(CoreError::NetworkError(_))));
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = GigaChatLLMClient::new(&config(&server, Some("  "))).unwrap();

        assert_eq!(client.credential_state(), CredentialState::Missing);
        assert!(matches!(
            client.complete(build_completion_payload("яблоко")).await,
            Err(CoreError::ConfigurationError(_))
        ));
    }
}
