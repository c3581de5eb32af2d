use axum::extract::{Path, State};
use macronote_core::domain::diary::ports::DiaryService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/notes/{note_id}",
    tag = "diary",
    summary = "Delete note",
    params(
        ("note_id" = Uuid, Path, description = "Note ID"),
    ),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 404, description = "Note not found")
    )
)]
pub async fn delete_note(
    Path(note_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_note(note_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
