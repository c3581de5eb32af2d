pub mod gigachat_client;

pub use gigachat_client::GigaChatLLMClient;
