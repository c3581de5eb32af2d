use axum::extract::State;
use macronote_core::domain::diary::{ports::DiaryService, value_objects::DiaryDay};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDaysResponse {
    pub data: Vec<DiaryDay>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "diary",
    summary = "List days",
    description = "All days that have notes, newest first.",
    responses(
        (status = 200, body = GetDaysResponse)
    )
)]
pub async fn get_days(
    State(state): State<AppState>,
) -> Result<Response<GetDaysResponse>, ApiError> {
    let days = state.service.list_days().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetDaysResponse { data: days }))
}
