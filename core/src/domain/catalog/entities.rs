use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::nutrition::MacroSet;

/// Leading characters compared when two words are checked for a shared stem.
pub const STEM_LEN: usize = 4;

fn word_stems(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| word.chars().count() >= STEM_LEN)
        .map(|word| word.to_lowercase().chars().take(STEM_LEN).collect())
}

/// Immutable food table row with its macro profile per 100 grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodCatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub per_100g: MacroSet,
}

impl FoodCatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, per_100g: MacroSet) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            per_100g,
        }
    }

    /// Case-insensitive substring test in both directions.
    pub fn matches_name(&self, name: &str) -> bool {
        let entry_name = self.name.to_lowercase();
        let name = name.to_lowercase();

        entry_name.contains(&name) || name.contains(&entry_name)
    }

    /// True when any word of `name` starts like any word of the entry name,
    /// so that inflected forms ("курица", "хлеба") still resolve.
    pub fn shares_stem_with(&self, name: &str) -> bool {
        let entry_stems: Vec<String> = word_stems(&self.name).collect();

        word_stems(name).any(|stem| entry_stems.contains(&stem))
    }
}
