use axum::extract::{Path, State};
use macronote_core::domain::catalog::{entities::FoodCatalogEntry, ports::CatalogService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFoodResponse {
    pub data: FoodCatalogEntry,
}

#[utoipa::path(
    get,
    path = "/{food_id}",
    tag = "catalog",
    summary = "Get food",
    params(
        ("food_id" = String, Path, description = "Catalog id"),
    ),
    responses(
        (status = 200, body = GetFoodResponse),
        (status = 404, description = "Unknown food")
    )
)]
pub async fn get_food(
    Path(food_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetFoodResponse>, ApiError> {
    let food = state.service.get_food(&food_id).map_err(ApiError::from)?;

    Ok(Response::OK(GetFoodResponse { data: food }))
}
