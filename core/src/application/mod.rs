use std::sync::Arc;

use crate::{
    domain::{
        common::{MacronoteConfig, entities::app_errors::CoreError, services::Service},
        food_parsing::policies::ParserPolicy,
    },
    infrastructure::{
        catalog::StaticFoodCatalog, diary::InMemoryDiaryRepository, llm::GigaChatLLMClient,
    },
};

pub type MacronoteService = Service<StaticFoodCatalog, InMemoryDiaryRepository, GigaChatLLMClient>;

/// Wires the built-in catalog, an empty in-memory diary and the GigaChat client.
pub fn create_service(config: MacronoteConfig) -> Result<MacronoteService, CoreError> {
    let llm_client = GigaChatLLMClient::new(&config.llm)?;
    let parser_policy = ParserPolicy::from_config(&config.llm);

    tracing::info!(
        parser_enabled = parser_policy.is_enabled(),
        model = %config.llm.model_name,
        "Service created"
    );

    Ok(Service::new(
        Arc::new(StaticFoodCatalog::default()),
        Arc::new(InMemoryDiaryRepository::default()),
        Arc::new(llm_client),
        parser_policy,
    ))
}
