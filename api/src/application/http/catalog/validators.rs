use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchFoodsQuery {
    /// Case-insensitive name filter. Blank returns the whole catalog.
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PortionRequest {
    /// Negative values are treated as 0.
    #[schema(example = 150.0)]
    pub grams: f64,
}
