//! Country domain model

use super::common::StringUuid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Country entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Country {
    pub id: StringUuid,
    /// Unique country name
    pub name: String,
    pub description: Option<String>,
    /// Flag image path
    pub flag: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Country {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: StringUuid::new_v4(),
            name: String::new(),
            description: None,
            flag: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input for creating a country
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCountryInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
}

/// Input for updating a country
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCountryInput {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
}
