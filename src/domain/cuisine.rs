//! Cuisine domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Cuisine entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cuisine {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a cuisine
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCuisineInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
}

/// Input for updating a cuisine
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCuisineInput {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
}
