use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diary::{
        entities::{DayKey, Goals, Note},
        value_objects::{CreateNoteInput, DailyProgress, DiaryDay, UpdateNoteInput},
    },
};

/// Storage for day buckets and the goals record.
///
/// A day-key never maps to an empty bucket: removing the last note removes the key.
#[cfg_attr(test, mockall::automock)]
pub trait DiaryRepository: Send + Sync {
    /// Inserts the note at the front of its day bucket.
    fn prepend_note(
        &self,
        day_key: DayKey,
        note: Note,
    ) -> impl Future<Output = Result<Note, CoreError>> + Send;

    /// Replaces the note with the same id inside `day_key`, keeping its position.
    fn replace_note(
        &self,
        day_key: DayKey,
        note: Note,
    ) -> impl Future<Output = Result<Note, CoreError>> + Send;

    /// Takes the note out of `from` and inserts `note` at the front of `to` as one step.
    /// Fails with `NotFound` when the note is no longer stored under `from`.
    fn move_note(
        &self,
        from: DayKey,
        to: DayKey,
        note: Note,
    ) -> impl Future<Output = Result<Note, CoreError>> + Send;

    fn find_note(
        &self,
        note_id: Uuid,
    ) -> impl Future<Output = Result<Option<(DayKey, Note)>, CoreError>> + Send;

    fn remove_note(
        &self,
        note_id: Uuid,
    ) -> impl Future<Output = Result<Option<(DayKey, Note)>, CoreError>> + Send;

    fn get_notes_by_day(
        &self,
        day_key: DayKey,
    ) -> impl Future<Output = Result<Vec<Note>, CoreError>> + Send;

    /// Every non-empty bucket, newest day first.
    fn list_days(&self) -> impl Future<Output = Result<Vec<(DayKey, Vec<Note>)>, CoreError>> + Send;

    fn get_goals(&self) -> impl Future<Output = Result<Goals, CoreError>> + Send;

    fn save_goals(&self, goals: Goals) -> impl Future<Output = Result<Goals, CoreError>> + Send;
}

/// Service trait for diary notes, goals and daily progress
#[cfg_attr(test, mockall::automock)]
pub trait DiaryService: Send + Sync {
    fn save_note(
        &self,
        input: CreateNoteInput,
    ) -> impl Future<Output = Result<Note, CoreError>> + Send;

    fn update_note(
        &self,
        input: UpdateNoteInput,
    ) -> impl Future<Output = Result<Note, CoreError>> + Send;

    fn delete_note(&self, note_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_note(
        &self,
        note_id: Uuid,
    ) -> impl Future<Output = Result<(DayKey, Note), CoreError>> + Send;

    fn get_day(&self, day_key: DayKey) -> impl Future<Output = Result<DiaryDay, CoreError>> + Send;

    fn list_days(&self) -> impl Future<Output = Result<Vec<DiaryDay>, CoreError>> + Send;

    fn get_goals(&self) -> impl Future<Output = Result<Goals, CoreError>> + Send;

    fn update_goals(&self, goals: Goals) -> impl Future<Output = Result<Goals, CoreError>> + Send;

    fn get_daily_progress(
        &self,
        day_key: DayKey,
    ) -> impl Future<Output = Result<DailyProgress, CoreError>> + Send;
}
