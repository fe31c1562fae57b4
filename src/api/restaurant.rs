//! Restaurant API handlers

use crate::api::{
    parse_i64_list, parse_uuid_list, MessageResponse, MultipartForm, PaginatedResponse,
    PaginationQuery, SuccessResponse,
};
use crate::domain::common::StringUuid;
use crate::domain::restaurant::{CreateRestaurantInput, RestaurantQuery, UpdateRestaurantInput};
use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

/// Raw filter query parameters; ID lists arrive comma-separated
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub category_ids: Option<String>,
    pub country_ids: Option<String>,
    pub cuisine_ids: Option<String>,
    pub keyword: Option<String>,
    pub page: Option<i64>,
    #[serde(alias = "per_page")]
    pub limit: Option<i64>,
}

impl SearchParams {
    fn into_query(self) -> Result<(RestaurantQuery, PaginationQuery)> {
        let query = RestaurantQuery {
            category_ids: parse_i64_list(self.category_ids.as_deref())?,
            country_ids: parse_uuid_list(self.country_ids.as_deref())?,
            cuisine_ids: parse_i64_list(self.cuisine_ids.as_deref())?,
            keyword: self.keyword,
        };
        Ok((query, PaginationQuery::from_parts(self.page, self.limit)?))
    }
}

fn parse_social_link(
    raw: Option<String>,
) -> Result<Option<std::collections::HashMap<String, String>>> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|_| AppError::BadRequest("Field 'social_link' must be a JSON object".to_string())),
        _ => Ok(None),
    }
}

/// Create a restaurant from a multipart form (fields + optional image)
pub async fn create_restaurant(
    State(state): State<AppState>,
    _auth: AuthUser,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = MultipartForm::read(multipart).await?;

    let input = CreateRestaurantInput {
        name: form.required("name")?,
        description: form.required("description")?,
        map_link: form.optional("map_link"),
        address: form.optional("address"),
        open_hour: form.optional("open_hour"),
        close_hour: form.optional("close_hour"),
        rank: form.optional_i32("rank")?,
        price_range: form.optional("price_range"),
        is_promotion: form.optional_bool("is_promotion")?,
        promo_rate: form.optional_i32("promo_rate")?,
        social_link: parse_social_link(form.optional("social_link"))?,
        category_ids: form.i64_list("category_ids")?,
        country_ids: form.uuid_list("country_ids")?,
        cuisine_ids: form.i64_list("cuisine_ids")?,
    };

    let restaurant = state.restaurant_service.create(input, form.image).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::new(restaurant))))
}

/// Paginated listing, newest first
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse> {
    let (restaurants, total) = state
        .restaurant_service
        .search(RestaurantQuery::default(), pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        restaurants,
        pagination.page,
        pagination.limit,
        total,
    )))
}

/// Filtered search across categories, countries, cuisines and keyword
pub async fn search_restaurants(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse> {
    let (query, pagination) = params.into_query()?;
    let (restaurants, total) = state
        .restaurant_service
        .search(query, pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        restaurants,
        pagination.page,
        pagination.limit,
        total,
    )))
}

#[derive(Debug, Deserialize)]
pub struct ByRelationParams {
    pub ids: Option<String>,
    pub page: Option<i64>,
    #[serde(alias = "per_page")]
    pub limit: Option<i64>,
}

/// Restaurants linked to any of the given category IDs
pub async fn restaurants_by_category(
    State(state): State<AppState>,
    Query(params): Query<ByRelationParams>,
) -> Result<impl IntoResponse> {
    let query = RestaurantQuery {
        category_ids: parse_i64_list(params.ids.as_deref())?,
        ..Default::default()
    };
    let pagination = PaginationQuery::from_parts(params.page, params.limit)?;
    let (restaurants, total) = state
        .restaurant_service
        .search(query, pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        restaurants,
        pagination.page,
        pagination.limit,
        total,
    )))
}

/// Restaurants linked to any of the given country IDs
pub async fn restaurants_by_country(
    State(state): State<AppState>,
    Query(params): Query<ByRelationParams>,
) -> Result<impl IntoResponse> {
    let query = RestaurantQuery {
        country_ids: parse_uuid_list(params.ids.as_deref())?,
        ..Default::default()
    };
    let pagination = PaginationQuery::from_parts(params.page, params.limit)?;
    let (restaurants, total) = state
        .restaurant_service
        .search(query, pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        restaurants,
        pagination.page,
        pagination.limit,
        total,
    )))
}

/// Restaurants linked to any of the given cuisine IDs
pub async fn restaurants_by_cuisine(
    State(state): State<AppState>,
    Query(params): Query<ByRelationParams>,
) -> Result<impl IntoResponse> {
    let query = RestaurantQuery {
        cuisine_ids: parse_i64_list(params.ids.as_deref())?,
        ..Default::default()
    };
    let pagination = PaginationQuery::from_parts(params.page, params.limit)?;
    let (restaurants, total) = state
        .restaurant_service
        .search(query, pagination.page, pagination.limit)
        .await?;
    Ok(Json(PaginatedResponse::new(
        restaurants,
        pagination.page,
        pagination.limit,
        total,
    )))
}

/// Get a restaurant with its relations
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let restaurant = state.restaurant_service.get(StringUuid::from(id)).await?;
    Ok(Json(SuccessResponse::new(restaurant)))
}

/// Partial update from a multipart form; a new image replaces the old file
pub async fn update_restaurant(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = MultipartForm::read(multipart).await?;

    let input = UpdateRestaurantInput {
        name: form.optional("name"),
        description: form.optional("description"),
        map_link: form.optional("map_link"),
        address: form.optional("address"),
        open_hour: form.optional("open_hour"),
        close_hour: form.optional("close_hour"),
        rank: form.optional_i32("rank")?,
        price_range: form.optional("price_range"),
        is_promotion: form.optional_bool("is_promotion")?,
        promo_rate: form.optional_i32("promo_rate")?,
        social_link: parse_social_link(form.optional("social_link"))?,
        category_ids: form
            .optional("category_ids")
            .map(|raw| parse_i64_list(Some(&raw)))
            .transpose()?,
        country_ids: form
            .optional("country_ids")
            .map(|raw| parse_uuid_list(Some(&raw)))
            .transpose()?,
        cuisine_ids: form
            .optional("cuisine_ids")
            .map(|raw| parse_i64_list(Some(&raw)))
            .transpose()?,
    };

    let restaurant = state
        .restaurant_service
        .update(StringUuid::from(id), input, form.image)
        .await?;
    Ok(Json(SuccessResponse::new(restaurant)))
}

/// Delete a restaurant and its image file
pub async fn delete_restaurant(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.restaurant_service.delete(StringUuid::from(id)).await?;
    Ok(Json(MessageResponse::new("Restaurant deleted successfully")))
}
