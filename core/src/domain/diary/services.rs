use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    catalog::ports::FoodCatalog,
    common::{entities::app_errors::CoreError, services::Service},
    diary::{
        entities::{DayKey, Goals, LineItem, Note},
        ports::{DiaryRepository, DiaryService},
        value_objects::{CreateNoteInput, DailyProgress, DiaryDay, UpdateNoteInput},
    },
    food_parsing::ports::LLMClient,
    nutrition::{MacroPercent, sum_macros},
};

fn diary_day(day_key: DayKey, notes: Vec<Note>) -> DiaryDay {
    let totals = sum_macros(notes.iter().flat_map(|note| note.items.iter()));

    DiaryDay {
        day_key,
        notes,
        totals,
    }
}

impl<FC, DR, LLM> Service<FC, DR, LLM>
where
    FC: FoodCatalog,
    DR: DiaryRepository,
    LLM: LLMClient,
{
    fn normalize_items(&self, items: Vec<LineItem>) -> Vec<LineItem> {
        items
            .into_iter()
            .map(|item| {
                let entry = self.food_catalog.find_by_id(&item.product_id);
                item.normalized(entry)
            })
            .collect()
    }
}

impl<FC, DR, LLM> DiaryService for Service<FC, DR, LLM>
where
    FC: FoodCatalog,
    DR: DiaryRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(items = input.items.len()))]
    async fn save_note(&self, input: CreateNoteInput) -> Result<Note, CoreError> {
        let day_key = input.day_key.unwrap_or_else(DayKey::today);
        let note = Note::new(input.text, self.normalize_items(input.items));

        let note = self
            .diary_repository
            .prepend_note(day_key.clone(), note)
            .await?;

        tracing::info!(note_id = %note.id, day_key = %day_key, "Note saved");

        Ok(note)
    }

    #[instrument(skip(self, input), fields(note_id = %input.note_id, day_key = %input.day_key))]
    async fn update_note(&self, input: UpdateNoteInput) -> Result<Note, CoreError> {
        let (current_day, mut note) = self
            .diary_repository
            .find_note(input.note_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        note.update(input.text, self.normalize_items(input.items));

        if current_day == input.day_key {
            return self.diary_repository.replace_note(current_day, note).await;
        }

        let note = self
            .diary_repository
            .move_note(current_day.clone(), input.day_key.clone(), note)
            .await?;

        tracing::info!(
            from = %current_day,
            to = %input.day_key,
            "Note moved to another day"
        );

        Ok(note)
    }

    #[instrument(skip(self))]
    async fn delete_note(&self, note_id: Uuid) -> Result<(), CoreError> {
        let (day_key, _) = self
            .diary_repository
            .remove_note(note_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        tracing::info!(day_key = %day_key, "Note deleted");

        Ok(())
    }

    async fn get_note(&self, note_id: Uuid) -> Result<(DayKey, Note), CoreError> {
        self.diary_repository
            .find_note(note_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_day(&self, day_key: DayKey) -> Result<DiaryDay, CoreError> {
        let notes = self
            .diary_repository
            .get_notes_by_day(day_key.clone())
            .await?;

        Ok(diary_day(day_key, notes))
    }

    async fn list_days(&self) -> Result<Vec<DiaryDay>, CoreError> {
        let days = self.diary_repository.list_days().await?;

        Ok(days
            .into_iter()
            .map(|(day_key, notes)| diary_day(day_key, notes))
            .collect())
    }

    async fn get_goals(&self) -> Result<Goals, CoreError> {
        self.diary_repository.get_goals().await
    }

    #[instrument(skip(self))]
    async fn update_goals(&self, goals: Goals) -> Result<Goals, CoreError> {
        self.diary_repository
            .save_goals(Goals::new(goals.targets))
            .await
    }

    async fn get_daily_progress(&self, day_key: DayKey) -> Result<DailyProgress, CoreError> {
        let day = self.get_day(day_key).await?;
        let goals = self.diary_repository.get_goals().await?;

        Ok(DailyProgress {
            percent: MacroPercent::of(&day.totals, &goals.targets),
            day_key: day.day_key,
            totals: day.totals,
            goals,
        })
    }
}
