use axum::extract::State;
use macronote_core::domain::food_parsing::ports::FoodParsingService;

use crate::application::http::{
    food_parsing::{
        handlers::parse_quick::ParseFoodTextResponse, validators::ParseFoodTextValidator,
    },
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/ai",
    tag = "food-parsing",
    summary = "AI parse",
    description = "Extracts food candidates from meal text and reports why when the AI service cannot be used.",
    request_body = ParseFoodTextValidator,
    responses(
        (status = 200, body = ParseFoodTextResponse),
        (status = 400, description = "Blank text"),
        (status = 429, description = "AI service rate limit, try again later"),
        (status = 502, description = "Credential rejected, upstream failure or unreadable response"),
        (status = 503, description = "AI parsing is not configured"),
        (status = 504, description = "AI service unreachable")
    )
)]
pub async fn parse_ai(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ParseFoodTextValidator>,
) -> Result<Response<ParseFoodTextResponse>, ApiError> {
    let candidates = state
        .service
        .parse_strict(payload.text)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ParseFoodTextResponse { data: candidates }))
}
