use macronote_core::domain::food_parsing::entities::ParsedCandidate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("text must not be blank".into()));
    }

    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ParseFoodTextValidator {
    /// Free-form meal description, e.g. "съел яблоко и банан".
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "съел яблоко и банан")]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MatchCandidatesRequest {
    pub candidates: Vec<ParsedCandidate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_rejected() {
        let blank = ParseFoodTextValidator {
            text: " \n\t".to_string(),
        };
        let filled = ParseFoodTextValidator {
            text: "овсянка".to_string(),
        };

        assert!(blank.validate().is_err());
        assert!(filled.validate().is_ok());
    }
}
