use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    catalog::entities::FoodCatalogEntry,
    common::{entities::app_errors::CoreError, generate_timestamp, generate_uuid_v7},
    nutrition::{MacroSet, sanitize_quantity, scale_by_grams, sum_macros},
};

/// Product id of line items that did not resolve against the catalog.
pub const UNKNOWN_PRODUCT_ID: &str = "unknown";

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Food entry attached to a note, carrying macros for its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    /// Assigned on insertion when the client does not send one.
    #[serde(default = "generate_uuid_v7")]
    pub uid: Uuid,
    /// Catalog id, or `"unknown"` for unresolved names.
    pub product_id: String,
    pub name: String,
    pub grams: f64,
    #[serde(flatten)]
    pub macros: MacroSet,
}

impl LineItem {
    pub fn from_catalog(entry: &FoodCatalogEntry, grams: f64) -> Self {
        let grams = sanitize_quantity(grams);

        Self {
            uid: generate_uuid_v7(),
            product_id: entry.id.clone(),
            name: entry.name.clone(),
            grams,
            macros: scale_by_grams(entry, grams),
        }
    }

    /// Placeholder for a name the catalog does not know. Name and grams are kept as given.
    pub fn unmatched(name: impl Into<String>, grams: f64) -> Self {
        Self {
            uid: generate_uuid_v7(),
            product_id: UNKNOWN_PRODUCT_ID.to_string(),
            name: name.into(),
            grams,
            macros: MacroSet::default(),
        }
    }

    pub fn with_macros(mut self, macros: MacroSet) -> Self {
        self.macros = macros;
        self
    }

    /// Recomputes a client supplied item: catalog items get their name and macros
    /// from the entry, anything else keeps its values clamped to non-negative.
    pub fn normalized(self, entry: Option<&FoodCatalogEntry>) -> Self {
        match entry {
            Some(entry) => Self {
                uid: self.uid,
                ..Self::from_catalog(entry, self.grams)
            },
            None => Self {
                grams: sanitize_quantity(self.grams),
                macros: self.macros.sanitized(),
                ..self
            },
        }
    }

    pub fn is_matched(&self) -> bool {
        self.product_id != UNKNOWN_PRODUCT_ID
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Note {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub text: String,
    pub items: Vec<LineItem>,
}

impl Note {
    pub fn new(text: String, items: Vec<LineItem>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            date: now,
            text,
            items,
        }
    }

    pub fn update(&mut self, text: String, items: Vec<LineItem>) {
        self.text = text;
        self.items = items;
    }

    pub fn totals(&self) -> MacroSet {
        sum_macros(&self.items)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Goals {
    #[serde(flatten)]
    pub targets: MacroSet,
}

impl Goals {
    /// Negative or non-finite targets are stored as 0.
    pub fn new(targets: MacroSet) -> Self {
        Self {
            targets: targets.sanitized(),
        }
    }
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            targets: MacroSet::new(2000.0, 130.0, 70.0, 240.0),
        }
    }
}

/// Calendar day (`YYYY-MM-DD`) used to bucket notes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "2025-01-31")]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn from_datetime(date: &DateTime<Utc>) -> Self {
        Self(date.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for DayKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DAY_KEY_FORMAT)
            .map(Self)
            .map_err(|_| CoreError::InvalidDayKey(s.to_string()))
    }
}

impl TryFrom<String> for DayKey {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayKey> for String {
    fn from(value: DayKey) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}
