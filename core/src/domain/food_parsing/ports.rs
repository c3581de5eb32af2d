use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diary::entities::LineItem,
    food_parsing::{
        entities::{CompletionPayload, CredentialState, ParsedCandidate},
        value_objects::CredentialStatus,
    },
};

/// Chat-completion backend. One call per parse, no retries.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn credential_state(&self) -> CredentialState;

    /// Returns the raw completion text of the first choice.
    fn complete(
        &self,
        payload: CompletionPayload,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for turning free-form meal text into food candidates
#[cfg_attr(test, mockall::automock)]
pub trait FoodParsingService: Send + Sync {
    fn parse_permissive(
        &self,
        text: String,
    ) -> impl Future<Output = Vec<ParsedCandidate>> + Send;

    fn parse_strict(
        &self,
        text: String,
    ) -> impl Future<Output = Result<Vec<ParsedCandidate>, CoreError>> + Send;

    fn match_against_catalog(&self, candidates: Vec<ParsedCandidate>) -> Vec<LineItem>;

    fn is_enabled(&self) -> bool;

    fn check_availability(&self) -> impl Future<Output = bool> + Send;

    fn validate_credential(&self) -> impl Future<Output = CredentialStatus> + Send;
}
