use axum::extract::State;
use macronote_core::domain::diary::{entities::Goals, ports::DiaryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GoalsResponse {
    pub data: Goals,
}

#[utoipa::path(
    get,
    path = "/goals",
    tag = "goals",
    summary = "Get daily goals",
    responses(
        (status = 200, body = GoalsResponse)
    )
)]
pub async fn get_goals(State(state): State<AppState>) -> Result<Response<GoalsResponse>, ApiError> {
    let goals = state.service.get_goals().await.map_err(ApiError::from)?;

    Ok(Response::OK(GoalsResponse { data: goals }))
}
