use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{catalog::entities::FoodCatalogEntry, diary::entities::LineItem};

/// Calories and macronutrients. Per-100g on catalog entries, absolute on line items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroSet {
    pub kcal: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl MacroSet {
    pub const fn new(kcal: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            kcal,
            protein,
            fat,
            carbs,
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            kcal: self.kcal * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
        }
    }

    pub fn rounded(self) -> Self {
        Self {
            kcal: round_to_tenth(self.kcal),
            protein: round_to_tenth(self.protein),
            fat: round_to_tenth(self.fat),
            carbs: round_to_tenth(self.carbs),
        }
    }

    /// Every component passed through [`sanitize_quantity`].
    pub fn sanitized(self) -> Self {
        Self {
            kcal: sanitize_quantity(self.kcal),
            protein: sanitize_quantity(self.protein),
            fat: sanitize_quantity(self.fat),
            carbs: sanitize_quantity(self.carbs),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for MacroSet {
    type Output = MacroSet;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            kcal: self.kcal + rhs.kcal,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbs: self.carbs + rhs.carbs,
        }
    }
}

impl Sum for MacroSet {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MacroSet::default(), Add::add)
    }
}

/// Percentage of each goal reached, capped at 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MacroPercent {
    pub kcal: u32,
    pub protein: u32,
    pub fat: u32,
    pub carbs: u32,
}

impl MacroPercent {
    pub fn of(totals: &MacroSet, goals: &MacroSet) -> Self {
        Self {
            kcal: goal_percent(totals.kcal, goals.kcal),
            protein: goal_percent(totals.protein, goals.protein),
            fat: goal_percent(totals.fat, goals.fat),
            carbs: goal_percent(totals.carbs, goals.carbs),
        }
    }
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Clamps user supplied quantities: negative or non-finite values become 0.
pub fn sanitize_quantity(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Macros of `grams` of a catalog entry, each rounded to one decimal.
pub fn scale_by_grams(entry: &FoodCatalogEntry, grams: f64) -> MacroSet {
    entry
        .per_100g
        .scaled(sanitize_quantity(grams) / 100.0)
        .rounded()
}

/// Element-wise sum of the items' macros, rounded once at the end.
pub fn sum_macros<'a, I>(items: I) -> MacroSet
where
    I: IntoIterator<Item = &'a LineItem>,
{
    items
        .into_iter()
        .map(|item| item.macros)
        .sum::<MacroSet>()
        .rounded()
}

/// A zero goal counts as 1 so an unset goal never divides by zero.
pub fn goal_percent(value: f64, goal: f64) -> u32 {
    let goal = if goal > 0.0 { goal } else { 1.0 };
    let percent = (value / goal * 100.0).round();
    if percent.is_finite() {
        percent.clamp(0.0, 100.0) as u32
    } else {
        0
    }
}
