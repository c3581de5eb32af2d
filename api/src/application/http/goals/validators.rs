use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Daily targets. Negative values are stored as 0.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateGoalsValidator {
    #[schema(example = 2000.0)]
    pub kcal: f64,
    #[schema(example = 130.0)]
    pub protein: f64,
    #[schema(example = 70.0)]
    pub fat: f64,
    #[schema(example = 240.0)]
    pub carbs: f64,
}
