use axum::extract::State;
use macronote_core::domain::{
    diary::{entities::Goals, ports::DiaryService},
    nutrition::MacroSet,
};

use crate::application::http::{
    goals::{handlers::get_goals::GoalsResponse, validators::UpdateGoalsValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/goals",
    tag = "goals",
    summary = "Update daily goals",
    request_body = UpdateGoalsValidator,
    responses(
        (status = 200, body = GoalsResponse),
        (status = 400, description = "Invalid body")
    )
)]
pub async fn update_goals(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateGoalsValidator>,
) -> Result<Response<GoalsResponse>, ApiError> {
    let goals = Goals::new(MacroSet::new(
        payload.kcal,
        payload.protein,
        payload.fat,
        payload.carbs,
    ));

    let goals = state
        .service
        .update_goals(goals)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GoalsResponse { data: goals }))
}
