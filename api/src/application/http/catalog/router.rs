use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_food::{__path_get_food, get_food},
    portion_food::{__path_portion_food, portion_food},
    search_foods::{__path_search_foods, search_foods},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(search_foods, get_food, portion_food))]
pub struct CatalogApiDoc;

pub fn catalog_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/catalog", root_path), get(search_foods))
        .route(&format!("{}/catalog/{{food_id}}", root_path), get(get_food))
        .route(
            &format!("{}/catalog/{{food_id}}/portion", root_path),
            post(portion_food),
        )
}
