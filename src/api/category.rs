//! Category API handlers

use crate::api::{
    MessageResponse, MultipartForm, PaginatedResponse, PaginationQuery, SuccessResponse,
};
use crate::domain::category::{CreateCategoryInput, UpdateCategoryInput};
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Create a category from a multipart form (name, description, optional image)
pub async fn create_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = MultipartForm::read(multipart).await?;
    let input = CreateCategoryInput {
        name: form.required("name")?,
        description: form.required("description")?,
    };

    let category = state.category_service.create(input, form.image).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(category))))
}

pub async fn list_categories(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse> {
    let (categories, total) = state
        .category_service
        .list(pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        categories,
        pagination.page,
        pagination.limit,
        total,
    )))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let category = state.category_service.get(id).await?;
    Ok(Json(SuccessResponse::new(category)))
}

/// Partial update; a new image replaces the old file
pub async fn update_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = MultipartForm::read(multipart).await?;
    let input = UpdateCategoryInput {
        name: form.optional("name"),
        description: form.optional("description"),
    };

    let category = state.category_service.update(id, input, form.image).await?;
    Ok(Json(SuccessResponse::new(category)))
}

pub async fn delete_category(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.category_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Category deleted successfully")))
}
