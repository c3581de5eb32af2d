use axum::extract::{Path, State};
use macronote_core::domain::diary::{
    entities::DayKey, ports::DiaryService, value_objects::DiaryDay,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDayResponse {
    pub data: DiaryDay,
}

#[utoipa::path(
    get,
    path = "/{day_key}",
    tag = "diary",
    summary = "Get day",
    description = "Notes of one day, newest first, with their totals. Unknown days are empty.",
    params(
        ("day_key" = String, Path, description = "Day in YYYY-MM-DD format"),
    ),
    responses(
        (status = 200, body = GetDayResponse),
        (status = 400, description = "Malformed day key")
    )
)]
pub async fn get_day(
    Path(day_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetDayResponse>, ApiError> {
    let day_key: DayKey = day_key.parse().map_err(ApiError::from)?;

    let day = state
        .service
        .get_day(day_key)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDayResponse { data: day }))
}
