use std::sync::Arc;

use crate::domain::{
    catalog::ports::FoodCatalog,
    diary::ports::DiaryRepository,
    food_parsing::{policies::ParserPolicy, ports::LLMClient},
};

/// Aggregate holding the injected ports. Domain service traits are implemented on it.
pub struct Service<FC, DR, LLM>
where
    FC: FoodCatalog,
    DR: DiaryRepository,
    LLM: LLMClient,
{
    pub(crate) food_catalog: Arc<FC>,
    pub(crate) diary_repository: Arc<DR>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) parser_policy: ParserPolicy,
}

impl<FC, DR, LLM> Service<FC, DR, LLM>
where
    FC: FoodCatalog,
    DR: DiaryRepository,
    LLM: LLMClient,
{
    pub fn new(
        food_catalog: Arc<FC>,
        diary_repository: Arc<DR>,
        llm_client: Arc<LLM>,
        parser_policy: ParserPolicy,
    ) -> Self {
        Self {
            food_catalog,
            diary_repository,
            llm_client,
            parser_policy,
        }
    }
}

impl<FC, DR, LLM> Clone for Service<FC, DR, LLM>
where
    FC: FoodCatalog,
    DR: DiaryRepository,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            food_catalog: Arc::clone(&self.food_catalog),
            diary_repository: Arc::clone(&self.diary_repository),
            llm_client: Arc::clone(&self.llm_client),
            parser_policy: self.parser_policy,
        }
    }
}
