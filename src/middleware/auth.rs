//! JWT authentication extractor
//!
//! `AuthUser` validates the Bearer access token from the Authorization
//! header and exposes the caller's identity to handlers.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::jwt::AccessClaims;
use crate::server::AppState;

/// Authenticated user information extracted from the access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// User ID from the token's `sub` claim
    pub user_id: Uuid,
    /// User's email address
    pub email: String,
}

impl AuthUser {
    fn from_claims(claims: AccessClaims) -> Result<Self, AuthError> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AuthError::InvalidToken("Invalid user ID in token".to_string()))?;

        Ok(Self {
            user_id,
            email: claims.email,
        })
    }
}

/// Authentication errors
#[derive(Debug, Clone)]
pub enum AuthError {
    /// No Authorization header present
    MissingToken,
    /// Invalid Authorization header format
    InvalidHeader(String),
    /// Token validation failed
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingToken => "Missing authorization token",
            AuthError::InvalidHeader(_) => "Invalid authorization header",
            AuthError::InvalidToken(_) => "Invalid token",
        };

        let body = serde_json::json!({
            "error": "unauthorized",
            "message": message
        });

        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}

/// Extract and validate Bearer token from Authorization header
fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader("Invalid header encoding".to_string()))?;

    if !auth_header.starts_with("Bearer ") {
        return Err(AuthError::InvalidHeader(
            "Authorization header must use Bearer scheme".to_string(),
        ));
    }

    Ok(&auth_header[7..])
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        let claims = state
            .jwt
            .verify_access_token(token)
            .map_err(|_| AuthError::InvalidToken("Token validation failed".to_string()))?;

        AuthUser::from_claims(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());

        let token = extract_bearer_token(&headers).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn test_extract_bearer_token_missing() {
        let headers = HeaderMap::new();
        assert!(matches!(
            extract_bearer_token(&headers),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn test_extract_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());

        assert!(matches!(
            extract_bearer_token(&headers),
            Err(AuthError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_auth_user_from_claims_invalid_sub() {
        let claims = AccessClaims {
            sub: "not-a-uuid".to_string(),
            email: "admin@example.com".to_string(),
            iss: "dinemap".to_string(),
            aud: "dinemap-admin".to_string(),
            token_type: "access".to_string(),
            iat: 0,
            exp: 0,
        };

        assert!(matches!(
            AuthUser::from_claims(claims),
            Err(AuthError::InvalidToken(_))
        ));
    }
}
