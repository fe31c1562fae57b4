//! Country API handlers

use crate::api::{
    MessageResponse, MultipartForm, PaginatedResponse, PaginationQuery, SuccessResponse,
};
use crate::domain::common::StringUuid;
use crate::domain::country::{CreateCountryInput, UpdateCountryInput};
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

/// Create a country from a multipart form (name, optional description and flag)
pub async fn create_country(
    State(state): State<AppState>,
    _auth: AuthUser,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = MultipartForm::read(multipart).await?;
    let input = CreateCountryInput {
        name: form.required("name")?,
        description: form.optional("description"),
    };

    let country = state.country_service.create(input, form.image).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(country))))
}

pub async fn list_countries(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse> {
    let (countries, total) = state
        .country_service
        .list(pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        countries,
        pagination.page,
        pagination.limit,
        total,
    )))
}

pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let country = state.country_service.get(StringUuid::from(id)).await?;
    Ok(Json(SuccessResponse::new(country)))
}

/// Partial update; a new flag replaces the old file
pub async fn update_country(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = MultipartForm::read(multipart).await?;
    let input = UpdateCountryInput {
        name: form.optional("name"),
        description: form.optional("description"),
    };

    let country = state
        .country_service
        .update(StringUuid::from(id), input, form.image)
        .await?;
    Ok(Json(SuccessResponse::new(country)))
}

pub async fn delete_country(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.country_service.delete(StringUuid::from(id)).await?;
    Ok(Json(MessageResponse::new("Country deleted successfully")))
}
