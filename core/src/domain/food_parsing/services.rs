use tracing::instrument;

use crate::domain::{
    catalog::ports::FoodCatalog,
    common::{entities::app_errors::CoreError, services::Service},
    diary::{entities::LineItem, ports::DiaryRepository},
    food_parsing::{
        entities::{CredentialState, ParseMode, ParsedCandidate},
        matcher::match_candidates,
        policies::filter_confident,
        ports::{FoodParsingService, LLMClient},
        prompt::build_completion_payload,
        response::parse_completion,
        value_objects::CredentialStatus,
    },
};

/// Text sent when probing whether the completion service answers.
pub const PROBE_TEXT: &str = "яблоко";

impl<FC, DR, LLM> Service<FC, DR, LLM>
where
    FC: FoodCatalog,
    DR: DiaryRepository,
    LLM: LLMClient,
{
    async fn run_pipeline(
        &self,
        text: &str,
        mode: ParseMode,
    ) -> Result<Vec<ParsedCandidate>, CoreError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        if !self.parser_policy.ensure_enabled(mode)? {
            return Ok(Vec::new());
        }

        let payload = build_completion_payload(text);
        let raw = self.llm_client.complete(payload).await?;
        let candidates = parse_completion(&raw)?;

        Ok(filter_confident(candidates))
    }
}

impl<FC, DR, LLM> FoodParsingService for Service<FC, DR, LLM>
where
    FC: FoodCatalog,
    DR: DiaryRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn parse_permissive(&self, text: String) -> Vec<ParsedCandidate> {
        if !self.llm_client.credential_state().is_present() {
            tracing::debug!("Completion credential missing, skipping quick parse");
            return Vec::new();
        }

        match self.run_pipeline(&text, ParseMode::Permissive).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!(error = %e, "Quick parse failed, returning no candidates");
                Vec::new()
            }
        }
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn parse_strict(&self, text: String) -> Result<Vec<ParsedCandidate>, CoreError> {
        let candidates = self.run_pipeline(&text, ParseMode::Strict).await?;

        tracing::info!(candidates = candidates.len(), "Meal text parsed");

        Ok(candidates)
    }

    fn match_against_catalog(&self, candidates: Vec<ParsedCandidate>) -> Vec<LineItem> {
        match_candidates(self.food_catalog.as_ref(), &candidates)
    }

    fn is_enabled(&self) -> bool {
        self.parser_policy.is_enabled()
    }

    #[instrument(skip(self))]
    async fn check_availability(&self) -> bool {
        if !self.parser_policy.is_enabled() || !self.llm_client.credential_state().is_present() {
            return false;
        }

        match self.run_pipeline(PROBE_TEXT, ParseMode::Strict).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Completion service is not available");
                false
            }
        }
    }

    #[instrument(skip(self))]
    async fn validate_credential(&self) -> CredentialStatus {
        match self.llm_client.credential_state() {
            CredentialState::Missing => CredentialStatus::invalid("credential is not configured"),
            CredentialState::NotBearer => {
                CredentialStatus::invalid("credential must start with \"Bearer \"")
            }
            CredentialState::Bearer => {
                let payload = build_completion_payload(PROBE_TEXT);

                match self.llm_client.complete(payload).await {
                    Ok(_) => CredentialStatus::valid("credential accepted"),
                    Err(e) => CredentialStatus::invalid(e.to_string()),
                }
            }
        }
    }
}
