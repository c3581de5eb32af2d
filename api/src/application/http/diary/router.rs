use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_note::{__path_create_note, create_note},
    delete_note::{__path_delete_note, delete_note},
    get_day::{__path_get_day, get_day},
    get_days::{__path_get_days, get_days},
    get_note::{__path_get_note, get_note},
    update_note::{__path_update_note, update_note},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_days, get_day, create_note, get_note, update_note, delete_note))]
pub struct DiaryApiDoc;

pub fn diary_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/diary", root_path), get(get_days))
        .route(&format!("{}/diary/notes", root_path), post(create_note))
        .route(
            &format!("{}/diary/notes/{{note_id}}", root_path),
            get(get_note).put(update_note).delete(delete_note),
        )
        .route(&format!("{}/diary/{{day_key}}", root_path), get(get_day))
}
