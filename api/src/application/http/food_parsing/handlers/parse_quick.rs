use axum::extract::State;
use macronote_core::domain::food_parsing::{entities::ParsedCandidate, ports::FoodParsingService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_parsing::validators::ParseFoodTextValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ParseFoodTextResponse {
    pub data: Vec<ParsedCandidate>,
}

#[utoipa::path(
    post,
    path = "/quick",
    tag = "food-parsing",
    summary = "Quick parse",
    description = "Extracts food candidates from meal text. Returns an empty list instead of failing when the AI service is not configured or unreachable.",
    request_body = ParseFoodTextValidator,
    responses(
        (status = 200, body = ParseFoodTextResponse),
        (status = 400, description = "Blank text")
    )
)]
pub async fn parse_quick(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ParseFoodTextValidator>,
) -> Result<Response<ParseFoodTextResponse>, ApiError> {
    let candidates = state.service.parse_permissive(payload.text).await;

    Ok(Response::OK(ParseFoodTextResponse { data: candidates }))
}
