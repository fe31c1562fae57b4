//! Authentication API handlers

use crate::api::{MessageResponse, SuccessResponse};
use crate::domain::auth::{LoginInput, RefreshInput, RegisterInput};
use crate::domain::common::StringUuid;
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Register a new admin user, returning a token pair
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<impl IntoResponse> {
    let tokens = state.auth_service.register(input).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(tokens))))
}

/// Log in with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<impl IntoResponse> {
    let tokens = state.auth_service.login(input).await?;
    Ok(Json(SuccessResponse::new(tokens)))
}

/// Exchange a refresh token for a fresh pair (rotates the stored token)
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshInput>,
) -> Result<impl IntoResponse> {
    let tokens = state.auth_service.refresh(input).await?;
    Ok(Json(SuccessResponse::new(tokens)))
}

/// Invalidate the caller's refresh token
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse> {
    state
        .auth_service
        .logout(StringUuid::from(auth.user_id))
        .await?;
    Ok(Json(MessageResponse::new("Logged out successfully")))
}
