//! Role management handlers (all protected)

use crate::api::{MessageResponse, PaginatedResponse, PaginationQuery, SuccessResponse};
use crate::domain::common::StringUuid;
use crate::domain::role::{CreateRoleInput, UpdateRoleInput};
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

pub async fn create_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateRoleInput>,
) -> Result<impl IntoResponse> {
    let role = state.role_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(role))))
}

pub async fn list_roles(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse> {
    let (roles, total) = state
        .role_service
        .list(pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        roles,
        pagination.page,
        pagination.limit,
        total,
    )))
}

pub async fn get_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let role = state.role_service.get(StringUuid::from(id)).await?;
    Ok(Json(SuccessResponse::new(role)))
}

pub async fn update_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateRoleInput>,
) -> Result<impl IntoResponse> {
    let role = state
        .role_service
        .update(StringUuid::from(id), input)
        .await?;
    Ok(Json(SuccessResponse::new(role)))
}

pub async fn delete_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.role_service.delete(StringUuid::from(id)).await?;
    Ok(Json(MessageResponse::new("Role deleted successfully")))
}
