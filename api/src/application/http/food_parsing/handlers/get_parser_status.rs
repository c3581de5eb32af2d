use axum::extract::State;
use macronote_core::domain::food_parsing::{ports::FoodParsingService, value_objects::ParserStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetParserStatusResponse {
    pub data: ParserStatus,
}

#[utoipa::path(
    get,
    path = "/status",
    tag = "food-parsing",
    summary = "AI parser status",
    description = "Probes the AI service and validates the configured credential.",
    responses(
        (status = 200, body = GetParserStatusResponse)
    )
)]
pub async fn get_parser_status(
    State(state): State<AppState>,
) -> Result<Response<GetParserStatusResponse>, ApiError> {
    let available = state.service.check_availability().await;
    let credential = state.service.validate_credential().await;

    Ok(Response::OK(GetParserStatusResponse {
        data: ParserStatus {
            enabled: state.service.is_enabled(),
            available,
            credential,
        },
    }))
}
