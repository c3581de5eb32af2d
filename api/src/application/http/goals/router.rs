use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_goals::{__path_get_goals, get_goals},
    get_progress::{__path_get_progress, get_progress},
    update_goals::{__path_update_goals, update_goals},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_goals, update_goals, get_progress))]
pub struct GoalsApiDoc;

pub fn goals_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/goals", root_path),
            get(get_goals).put(update_goals),
        )
        .route(
            &format!("{}/progress/{{day_key}}", root_path),
            get(get_progress),
        )
}
