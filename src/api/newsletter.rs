//! Newsletter subscription handlers
//!
//! Subscribing is public; listing and removal require authentication.

use crate::api::{MessageResponse, PaginatedResponse, PaginationQuery, SuccessResponse};
use crate::domain::newsletter::SubscribeInput;
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn subscribe(
    State(state): State<AppState>,
    Json(input): Json<SubscribeInput>,
) -> Result<impl IntoResponse> {
    let subscription = state.newsletter_service.subscribe(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(subscription)),
    ))
}

pub async fn list_subscriptions(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse> {
    let (subscriptions, total) = state
        .newsletter_service
        .list(pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        subscriptions,
        pagination.page,
        pagination.limit,
        total,
    )))
}

pub async fn get_subscription(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let subscription = state.newsletter_service.get(id).await?;
    Ok(Json(SuccessResponse::new(subscription)))
}

pub async fn delete_subscription(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.newsletter_service.delete(id).await?;
    Ok(Json(MessageResponse::new(
        "Subscription deleted successfully",
    )))
}
