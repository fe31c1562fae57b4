//! Newsletter subscription domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Newsletter subscription
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Newsletter {
    pub id: i64,
    /// Unique subscriber email
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for subscribing to the newsletter
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubscribeInput {
    #[validate(email)]
    pub email: String,
}
