//! Slider API handlers

use crate::api::{
    MessageResponse, MultipartForm, PaginatedResponse, PaginationQuery, SuccessResponse,
};
use crate::domain::slider::{CreateSliderInput, UpdateSliderInput};
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SliderListParams {
    pub keyword: Option<String>,
    pub page: Option<i64>,
    #[serde(alias = "per_page")]
    pub limit: Option<i64>,
}

/// Create a slider from a multipart form (title, description, optional image)
pub async fn create_slider(
    State(state): State<AppState>,
    _auth: AuthUser,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = MultipartForm::read(multipart).await?;
    let input = CreateSliderInput {
        title: form.required("title")?,
        description: form.required("description")?,
    };

    let slider = state.slider_service.create(input, form.image).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(slider))))
}

/// Paginated listing with optional title keyword filter
pub async fn list_sliders(
    State(state): State<AppState>,
    Query(params): Query<SliderListParams>,
) -> Result<impl IntoResponse> {
    let pagination = PaginationQuery::from_parts(params.page, params.limit)?;
    let (sliders, total) = state
        .slider_service
        .list(params.keyword, pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        sliders,
        pagination.page,
        pagination.limit,
        total,
    )))
}

pub async fn get_slider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let slider = state.slider_service.get(id).await?;
    Ok(Json(SuccessResponse::new(slider)))
}

/// Partial update; a new image replaces the old file
pub async fn update_slider(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = MultipartForm::read(multipart).await?;
    let input = UpdateSliderInput {
        title: form.optional("title"),
        description: form.optional("description"),
    };

    let slider = state.slider_service.update(id, input, form.image).await?;
    Ok(Json(SuccessResponse::new(slider)))
}

pub async fn delete_slider(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.slider_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Slider deleted successfully")))
}
