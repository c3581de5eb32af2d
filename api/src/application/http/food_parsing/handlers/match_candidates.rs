use axum::{Json, extract::State};
use macronote_core::domain::{diary::entities::LineItem, food_parsing::ports::FoodParsingService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_parsing::validators::MatchCandidatesRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MatchCandidatesResponse {
    pub data: Vec<LineItem>,
}

#[utoipa::path(
    post,
    path = "/match",
    tag = "food-parsing",
    summary = "Match candidates against the catalog",
    description = "Resolves each candidate to a catalog food with computed macros, or to an `unknown` item with zero macros.",
    request_body = MatchCandidatesRequest,
    responses(
        (status = 200, body = MatchCandidatesResponse)
    )
)]
pub async fn match_candidates(
    State(state): State<AppState>,
    Json(payload): Json<MatchCandidatesRequest>,
) -> Result<Response<MatchCandidatesResponse>, ApiError> {
    let items = state.service.match_against_catalog(payload.candidates);

    Ok(Response::OK(MatchCandidatesResponse { data: items }))
}
