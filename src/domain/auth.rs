//! Authentication request/response types

use super::common::StringUuid;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for registering a new admin user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterInput {
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

/// Input for logging in
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Input for refreshing a token pair
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshInput {
    pub refresh_token: String,
}

/// Access + refresh token pair returned by the auth endpoints
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_input_validation() {
        let input = LoginInput {
            email: "bad".to_string(),
            password: "secret".to_string(),
        };
        assert!(input.validate().is_err());

        let valid = LoginInput {
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_token_pair_serialization() {
        let pair = TokenPair::new("a".to_string(), "r".to_string(), 3600);
        let json = serde_json::to_string(&pair).unwrap();
        assert!(json.contains("\"token_type\":\"Bearer\""));
        assert!(json.contains("\"expires_in\":3600"));
    }
}
