//! Currency domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Currency exchange-rate entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Currency {
    pub id: i64,
    /// ISO-style code, e.g. "USD"
    pub code: String,
    pub buy_rate: f64,
    pub sell_rate: f64,
    pub buy_status: bool,
    pub sell_status: bool,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a currency entry
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCurrencyInput {
    #[validate(length(min = 1, max = 10))]
    pub code: String,
    #[validate(range(min = 0.0))]
    pub buy_rate: f64,
    #[validate(range(min = 0.0))]
    pub sell_rate: f64,
    pub buy_status: Option<bool>,
    pub sell_status: Option<bool>,
    pub image: Option<String>,
}

/// Input for updating a currency entry
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCurrencyInput {
    #[validate(length(min = 1, max = 10))]
    pub code: Option<String>,
    #[validate(range(min = 0.0))]
    pub buy_rate: Option<f64>,
    #[validate(range(min = 0.0))]
    pub sell_rate: Option<f64>,
    pub buy_status: Option<bool>,
    pub sell_status: Option<bool>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_currency_input_validation() {
        let input = CreateCurrencyInput {
            code: "USD".to_string(),
            buy_rate: -1.0,
            sell_rate: 4100.0,
            buy_status: None,
            sell_status: None,
            image: None,
        };
        assert!(input.validate().is_err());

        let valid = CreateCurrencyInput {
            code: "USD".to_string(),
            buy_rate: 4050.0,
            sell_rate: 4100.0,
            buy_status: Some(true),
            sell_status: Some(true),
            image: None,
        };
        assert!(valid.validate().is_ok());
    }
}
