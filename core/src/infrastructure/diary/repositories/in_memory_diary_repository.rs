use std::collections::BTreeMap;

use tokio::sync::RwLock;
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diary::{
        entities::{DayKey, Goals, Note},
        ports::DiaryRepository,
    },
};

#[derive(Debug, Default)]
struct DiaryState {
    notes_by_day: BTreeMap<DayKey, Vec<Note>>,
    goals: Goals,
}

impl DiaryState {
    fn locate(&self, note_id: Uuid) -> Option<(&DayKey, usize)> {
        self.notes_by_day.iter().find_map(|(day_key, notes)| {
            notes
                .iter()
                .position(|note| note.id == note_id)
                .map(|index| (day_key, index))
        })
    }
}

/// Process-lifetime diary storage. Nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryDiaryRepository {
    state: RwLock<DiaryState>,
}

impl InMemoryDiaryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiaryRepository for InMemoryDiaryRepository {
    async fn prepend_note(&self, day_key: DayKey, note: Note) -> Result<Note, CoreError> {
        let mut state = self.state.write().await;

        if state.locate(note.id).is_some() {
            error!(note_id = %note.id, "Note is already stored");
            return Err(CoreError::Invalid);
        }

        state
            .notes_by_day
            .entry(day_key)
            .or_default()
            .insert(0, note.clone());

        Ok(note)
    }

    async fn replace_note(&self, day_key: DayKey, note: Note) -> Result<Note, CoreError> {
        let mut state = self.state.write().await;

        let slot = state
            .notes_by_day
            .get_mut(&day_key)
            .and_then(|notes| notes.iter_mut().find(|stored| stored.id == note.id))
            .ok_or(CoreError::NotFound)?;
        *slot = note.clone();

        Ok(note)
    }

    async fn move_note(&self, from: DayKey, to: DayKey, note: Note) -> Result<Note, CoreError> {
        let mut state = self.state.write().await;

        let notes = state
            .notes_by_day
            .get_mut(&from)
            .ok_or(CoreError::NotFound)?;
        let index = notes
            .iter()
            .position(|stored| stored.id == note.id)
            .ok_or(CoreError::NotFound)?;
        notes.remove(index);

        if notes.is_empty() {
            state.notes_by_day.remove(&from);
        }

        state
            .notes_by_day
            .entry(to)
            .or_default()
            .insert(0, note.clone());

        Ok(note)
    }

    async fn find_note(&self, note_id: Uuid) -> Result<Option<(DayKey, Note)>, CoreError> {
        let state = self.state.read().await;

        Ok(state.locate(note_id).and_then(|(day_key, index)| {
            state
                .notes_by_day
                .get(day_key)
                .and_then(|notes| notes.get(index))
                .map(|note| (day_key.clone(), note.clone()))
        }))
    }

    async fn remove_note(&self, note_id: Uuid) -> Result<Option<(DayKey, Note)>, CoreError> {
        let mut state = self.state.write().await;

        let Some((day_key, index)) = state
            .locate(note_id)
            .map(|(day_key, index)| (day_key.clone(), index))
        else {
            return Ok(None);
        };

        let Some(notes) = state.notes_by_day.get_mut(&day_key) else {
            return Ok(None);
        };
        let note = notes.remove(index);

        if notes.is_empty() {
            state.notes_by_day.remove(&day_key);
        }

        Ok(Some((day_key, note)))
    }

    async fn get_notes_by_day(&self, day_key: DayKey) -> Result<Vec<Note>, CoreError> {
        let state = self.state.read().await;

        Ok(state
            .notes_by_day
            .get(&day_key)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_days(&self) -> Result<Vec<(DayKey, Vec<Note>)>, CoreError> {
        let state = self.state.read().await;

        Ok(state
            .notes_by_day
            .iter()
            .rev()
            .map(|(day_key, notes)| (day_key.clone(), notes.clone()))
            .collect())
    }

    async fn get_goals(&self) -> Result<Goals, CoreError> {
        Ok(self.state.read().await.goals)
    }

    async fn save_goals(&self, goals: Goals) -> Result<Goals, CoreError> {
        self.state.write().await.goals = goals;
        Ok(goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_no_empty_bucket_survives_removal() {
        let repository = InMemoryDiaryRepository::new();
        let note = repository
            .prepend_note(day("2025-01-01"), Note::new("a".to_string(), vec![]))
            .await
            .unwrap();

        let removed = repository.remove_note(note.id).await.unwrap();
        assert_eq!(removed.map(|(key, _)| key), Some(day("2025-01-01")));
        assert!(repository.list_days().await.unwrap().is_empty());
        assert!(repository.remove_note(note.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_note_id_is_rejected() {
        let repository = InMemoryDiaryRepository::new();
        let note = Note::new("a".to_string(), vec![]);

        repository
            .prepend_note(day("2025-01-01"), note.clone())
            .await
            .unwrap();
        let result = repository.prepend_note(day("2025-01-02"), note).await;
        assert_eq!(result.unwrap_err(), CoreError::Invalid);
    }

    #[tokio::test]
    async fn test_move_note_relocates_and_drops_empty_bucket() {
        let repository = InMemoryDiaryRepository::new();
        let note = repository
            .prepend_note(day("2025-01-01"), Note::new("a".to_string(), vec![]))
            .await
            .unwrap();

        repository
            .move_note(day("2025-01-01"), day("2025-01-03"), note.clone())
            .await
            .unwrap();

        let days = repository.list_days().await.unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].0, day("2025-01-03"));
        assert_eq!(days[0].1, vec![note]);
    }

    #[tokio::test]
    async fn test_move_of_removed_note_does_not_restore_it() {
        let repository = InMemoryDiaryRepository::new();
        let note = repository
            .prepend_note(day("2025-01-01"), Note::new("a".to_string(), vec![]))
            .await
            .unwrap();
        repository.remove_note(note.id).await.unwrap();

        let result = repository
            .move_note(day("2025-01-01"), day("2025-01-02"), note.clone())
            .await;

        assert_eq!(result.unwrap_err(), CoreError::NotFound);
        assert!(repository.list_days().await.unwrap().is_empty());
        assert!(repository.find_note(note.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_requires_matching_day() {
        let repository = InMemoryDiaryRepository::new();
        let mut note = repository
            .prepend_note(day("2025-01-01"), Note::new("a".to_string(), vec![]))
            .await
            .unwrap();
        note.update("b".to_string(), vec![]);

        let wrong_day = repository.replace_note(day("2025-01-02"), note.clone()).await;
        assert_eq!(wrong_day.unwrap_err(), CoreError::NotFound);

        repository
            .replace_note(day("2025-01-01"), note.clone())
            .await
            .unwrap();
        let (_, stored) = repository.find_note(note.id).await.unwrap().unwrap();
        assert_eq!(stored.text, "b");
    }
}
