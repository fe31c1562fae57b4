//! User management handlers (all protected)

use crate::api::{MessageResponse, PaginatedResponse, PaginationQuery, SuccessResponse};
use crate::domain::common::StringUuid;
use crate::domain::user::{CreateUserInput, UpdateUserInput};
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

pub async fn create_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateUserInput>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(user))))
}

pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse> {
    let (users, total) = state
        .user_service
        .list(pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        users,
        pagination.page,
        pagination.limit,
        total,
    )))
}

pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get(StringUuid::from(id)).await?;
    Ok(Json(SuccessResponse::new(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateUserInput>,
) -> Result<impl IntoResponse> {
    let user = state
        .user_service
        .update(StringUuid::from(id), input)
        .await?;
    Ok(Json(SuccessResponse::new(user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.user_service.delete(StringUuid::from(id)).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// Grant a role to a user. Idempotent when already assigned.
pub async fn assign_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((user_id, role_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse> {
    state
        .user_service
        .assign_role(StringUuid::from(user_id), StringUuid::from(role_id))
        .await?;
    Ok(Json(MessageResponse::new("Role assigned successfully")))
}

pub async fn remove_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((user_id, role_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse> {
    state
        .user_service
        .remove_role(StringUuid::from(user_id), StringUuid::from(role_id))
        .await?;
    Ok(Json(MessageResponse::new("Role removed successfully")))
}
