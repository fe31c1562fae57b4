//! Slider domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Homepage slider entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Slider {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a slider
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSliderInput {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
}

/// Input for updating a slider
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSliderInput {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_slider_input_validation() {
        let input = CreateSliderInput {
            title: String::new(),
            description: "Grand opening".to_string(),
        };
        assert!(input.validate().is_err());

        let valid = CreateSliderInput {
            title: "Grand Opening".to_string(),
            description: "50% off this week".to_string(),
        };
        assert!(valid.validate().is_ok());
    }
}
