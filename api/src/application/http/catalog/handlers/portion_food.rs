use axum::{
    Json,
    extract::{Path, State},
};
use macronote_core::domain::{catalog::ports::CatalogService, diary::entities::LineItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    catalog::validators::PortionRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PortionFoodResponse {
    pub data: LineItem,
}

#[utoipa::path(
    post,
    path = "/{food_id}/portion",
    tag = "catalog",
    summary = "Compute a portion",
    description = "Builds a line item for the given weight of a catalog food.",
    params(
        ("food_id" = String, Path, description = "Catalog id"),
    ),
    request_body = PortionRequest,
    responses(
        (status = 200, body = PortionFoodResponse),
        (status = 404, description = "Unknown food")
    )
)]
pub async fn portion_food(
    Path(food_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<PortionRequest>,
) -> Result<Response<PortionFoodResponse>, ApiError> {
    let item = state
        .service
        .portion_from_catalog(&food_id, payload.grams)
        .map_err(ApiError::from)?;

    Ok(Response::OK(PortionFoodResponse { data: item }))
}
