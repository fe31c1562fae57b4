//! Currency API handlers

use crate::api::{MessageResponse, PaginatedResponse, PaginationQuery, SuccessResponse};
use crate::domain::currency::{CreateCurrencyInput, UpdateCurrencyInput};
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CurrencyListParams {
    pub keyword: Option<String>,
    pub page: Option<i64>,
    #[serde(alias = "per_page")]
    pub limit: Option<i64>,
}

pub async fn create_currency(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateCurrencyInput>,
) -> Result<impl IntoResponse> {
    let currency = state.currency_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(currency))))
}

/// Paginated listing with optional code keyword filter
pub async fn list_currencies(
    State(state): State<AppState>,
    Query(params): Query<CurrencyListParams>,
) -> Result<impl IntoResponse> {
    let pagination = PaginationQuery::from_parts(params.page, params.limit)?;
    let (currencies, total) = state
        .currency_service
        .list(params.keyword, pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        currencies,
        pagination.page,
        pagination.limit,
        total,
    )))
}

pub async fn get_currency(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let currency = state.currency_service.get(id).await?;
    Ok(Json(SuccessResponse::new(currency)))
}

pub async fn update_currency(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    Json(input): Json<UpdateCurrencyInput>,
) -> Result<impl IntoResponse> {
    let currency = state.currency_service.update(id, input).await?;
    Ok(Json(SuccessResponse::new(currency)))
}

pub async fn delete_currency(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.currency_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Currency deleted successfully")))
}
