use axum::extract::{Path, State};
use macronote_core::domain::diary::{ports::DiaryService, value_objects::UpdateNoteInput};
use uuid::Uuid;

use crate::application::http::{
    diary::{handlers::create_note::NoteResponse, validators::UpdateNoteValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/notes/{note_id}",
    tag = "diary",
    summary = "Update note",
    description = "Replaces the text and items of a note, moving it when the day changes.",
    params(
        ("note_id" = Uuid, Path, description = "Note ID"),
    ),
    request_body = UpdateNoteValidator,
    responses(
        (status = 200, body = NoteResponse),
        (status = 404, description = "Note not found")
    )
)]
pub async fn update_note(
    Path(note_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateNoteValidator>,
) -> Result<Response<NoteResponse>, ApiError> {
    let note = state
        .service
        .update_note(UpdateNoteInput {
            note_id,
            day_key: payload.day_key,
            text: payload.text,
            items: payload.items,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(NoteResponse { data: note }))
}
