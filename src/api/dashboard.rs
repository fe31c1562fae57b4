//! Dashboard counts handler

use crate::api::SuccessResponse;
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{extract::State, response::IntoResponse, Json};

/// Entity totals for the admin dashboard
pub async fn dashboard_counts(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<impl IntoResponse> {
    let counts = state.dashboard_service.counts().await?;
    Ok(Json(SuccessResponse::new(counts)))
}
