use axum::extract::{Path, State};
use macronote_core::domain::diary::{
    entities::DayKey, ports::DiaryService, value_objects::DailyProgress,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProgressResponse {
    pub data: DailyProgress,
}

#[utoipa::path(
    get,
    path = "/progress/{day_key}",
    tag = "goals",
    summary = "Daily progress",
    description = "Totals of a day against the goals, each percentage capped at 100.",
    params(
        ("day_key" = String, Path, description = "Day in YYYY-MM-DD format"),
    ),
    responses(
        (status = 200, body = GetProgressResponse),
        (status = 400, description = "Malformed day key")
    )
)]
pub async fn get_progress(
    Path(day_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetProgressResponse>, ApiError> {
    let day_key: DayKey = day_key.parse().map_err(ApiError::from)?;

    let progress = state
        .service
        .get_daily_progress(day_key)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetProgressResponse { data: progress }))
}
