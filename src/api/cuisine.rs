//! Cuisine API handlers

use crate::api::{
    MessageResponse, MultipartForm, PaginatedResponse, PaginationQuery, SuccessResponse,
};
use crate::domain::cuisine::{CreateCuisineInput, UpdateCuisineInput};
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Create a cuisine from a multipart form (name, description, optional image)
pub async fn create_cuisine(
    State(state): State<AppState>,
    _auth: AuthUser,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = MultipartForm::read(multipart).await?;
    let input = CreateCuisineInput {
        name: form.required("name")?,
        description: form.required("description")?,
    };

    let cuisine = state.cuisine_service.create(input, form.image).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(cuisine))))
}

pub async fn list_cuisines(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse> {
    let (cuisines, total) = state
        .cuisine_service
        .list(pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        cuisines,
        pagination.page,
        pagination.limit,
        total,
    )))
}

pub async fn get_cuisine(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let cuisine = state.cuisine_service.get(id).await?;
    Ok(Json(SuccessResponse::new(cuisine)))
}

/// Partial update; a new image replaces the old file
pub async fn update_cuisine(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = MultipartForm::read(multipart).await?;
    let input = UpdateCuisineInput {
        name: form.optional("name"),
        description: form.optional("description"),
    };

    let cuisine = state.cuisine_service.update(id, input, form.image).await?;
    Ok(Json(SuccessResponse::new(cuisine)))
}

pub async fn delete_cuisine(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.cuisine_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Cuisine deleted successfully")))
}
