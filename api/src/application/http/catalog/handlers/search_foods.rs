use axum::extract::{Query, State};
use macronote_core::domain::catalog::{entities::FoodCatalogEntry, ports::CatalogService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    catalog::validators::SearchFoodsQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchFoodsResponse {
    pub data: Vec<FoodCatalogEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "catalog",
    summary = "Search foods",
    description = "Lists catalog foods whose name contains the query, in catalog order.",
    params(SearchFoodsQuery),
    responses(
        (status = 200, body = SearchFoodsResponse)
    )
)]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(query): Query<SearchFoodsQuery>,
) -> Result<Response<SearchFoodsResponse>, ApiError> {
    let foods = state
        .service
        .search_foods(query.q.as_deref().unwrap_or_default());

    Ok(Response::OK(SearchFoodsResponse { data: foods }))
}
