use std::time::Duration;

use clap::Parser;
use macronote_core::domain::common::{
    DEFAULT_GIGACHAT_API_URL, DEFAULT_GIGACHAT_MODEL, DEFAULT_LLM_TIMEOUT_SECS, LLMConfig,
    MacronoteConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        num_args = 0..
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,
}

impl Default for ServerArgs {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            host: "0.0.0.0".to_string(),
            port: 3333,
            root_path: String::new(),
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    /// Sent verbatim as the Authorization header, e.g. `Bearer <token>`.
    #[arg(long = "gigachat-auth-key", env = "GIGACHAT_AUTH_KEY")]
    pub auth_key: Option<String>,

    #[arg(long = "gigachat-client-id", env = "GIGACHAT_CLIENT_ID")]
    pub client_id: Option<String>,

    #[arg(long = "gigachat-client-secret", env = "GIGACHAT_CLIENT_SECRET")]
    pub client_secret: Option<String>,

    #[arg(long = "gigachat-model", env = "GIGACHAT_MODEL", default_value = DEFAULT_GIGACHAT_MODEL)]
    pub model: String,

    #[arg(long = "gigachat-api-url", env = "GIGACHAT_API_URL", default_value = DEFAULT_GIGACHAT_API_URL)]
    pub api_url: String,

    #[arg(
        long = "gigachat-timeout-secs",
        env = "GIGACHAT_TIMEOUT_SECS",
        default_value_t = DEFAULT_LLM_TIMEOUT_SECS
    )]
    pub timeout_secs: u64,
}

impl Default for LlmArgs {
    fn default() -> Self {
        Self {
            auth_key: None,
            client_id: None,
            client_secret: None,
            model: DEFAULT_GIGACHAT_MODEL.to_string(),
            api_url: DEFAULT_GIGACHAT_API_URL.to_string(),
            timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        name = "LOG_FILTER",
        default_value = "info"
    )]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", name = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl Default for LogArgs {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl LogArgs {
    pub fn init_logger(&self) -> Result<(), anyhow::Error> {
        let filter = EnvFilter::try_new(&self.filter)?;
        let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

        if self.json {
            subscriber.json().init();
        } else {
            subscriber.init();
        }

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<Args> for MacronoteConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                auth_key: non_blank(args.llm.auth_key),
                client_id: non_blank(args.llm.client_id),
                client_secret: non_blank(args.llm.client_secret),
                model_name: args.llm.model,
                api_url: args.llm.api_url,
                timeout: Duration::from_secs(args.llm.timeout_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credentials_are_absent() {
        let mut args = Args::default();
        args.llm.auth_key = Some("   ".to_string());
        args.llm.client_id = Some(String::new());
        args.llm.client_secret = Some("secret".to_string());

        let config = MacronoteConfig::from(args);

        assert_eq!(config.llm.auth_key, None);
        assert_eq!(config.llm.client_id, None);
        assert_eq!(config.llm.client_secret.as_deref(), Some("secret"));
        assert_eq!(config.llm.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "macronote-api",
            "--server-port",
            "8080",
            "--server-allowed-origins",
            "http://localhost:5173,http://localhost:8081",
            "--gigachat-auth-key",
            "Bearer abc",
            "--gigachat-timeout-secs",
            "5",
        ])
        .unwrap();

        assert_eq!(args.server.port, 8080);
        assert_eq!(args.server.allowed_origins.len(), 2);
        assert_eq!(args.llm.auth_key.as_deref(), Some("Bearer abc"));
        assert_eq!(args.llm.model, "GigaChat");
        assert_eq!(args.llm.timeout_secs, 5);
    }
}
