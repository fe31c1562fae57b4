//! User domain model

use super::common::StringUuid;
use super::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Admin user entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: StringUuid,
    pub email: String,
    /// Bcrypt hash, never serialized
    #[serde(skip)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Currently valid refresh token, never serialized
    #[serde(skip)]
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for User {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: StringUuid::new_v4(),
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// User with roles attached (for API responses)
#[derive(Debug, Clone, Serialize)]
pub struct UserWithRoles {
    #[serde(flatten)]
    pub user: User,
    pub roles: Vec<Role>,
}

/// Input for creating a user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[serde(default)]
    pub role_ids: Vec<StringUuid>,
}

/// Input for updating a user
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserInput {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    pub role_ids: Option<Vec<StringUuid>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_default() {
        let user = User::default();
        assert!(!user.id.is_nil());
        assert!(user.refresh_token.is_none());
    }

    #[test]
    fn test_user_never_serializes_secrets() {
        let user = User {
            email: "admin@example.com".to_string(),
            password: "$2b$12$hash".to_string(),
            refresh_token: Some("some.refresh.token".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("$2b$12$hash"));
        assert!(!json.contains("some.refresh.token"));
        assert!(json.contains("admin@example.com"));
    }

    #[test]
    fn test_create_user_input_validation() {
        let input = CreateUserInput {
            email: "admin@example.com".to_string(),
            password: "short".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role_ids: vec![],
        };
        assert!(input.validate().is_err());

        let valid = CreateUserInput {
            email: "admin@example.com".to_string(),
            password: "a-long-enough-password".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role_ids: vec![],
        };
        assert!(valid.validate().is_ok());
    }
}
