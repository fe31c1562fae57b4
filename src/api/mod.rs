//! REST API shared utilities (response types, pagination, ID-list parsing)

pub mod auth;
pub mod category;
pub mod country;
pub mod cuisine;
pub mod currency;
pub mod dashboard;
pub mod health;
pub mod newsletter;
pub mod restaurant;
pub mod role;
pub mod slider;
pub mod user;

use crate::domain::common::StringUuid;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Maximum allowed limit value for pagination
pub(crate) const MAX_LIMIT: i64 = 100;

/// Pagination query parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    pub page: i64,
    #[serde(
        default = "default_limit",
        deserialize_with = "deserialize_limit",
        alias = "per_page"
    )]
    pub limit: i64,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PaginationQuery {
    /// Build from optional raw values, applying the same bounds as the
    /// serde path. Used where page/limit share a query string with other
    /// parameters.
    pub(crate) fn from_parts(page: Option<i64>, limit: Option<i64>) -> Result<Self> {
        let page = page.unwrap_or_else(default_page);
        let limit = limit.unwrap_or_else(default_limit);
        if page < 1 {
            return Err(AppError::BadRequest(
                "page must be a positive integer (>= 1)".to_string(),
            ));
        }
        if limit < 1 {
            return Err(AppError::BadRequest(
                "limit must be a positive integer (>= 1)".to_string(),
            ));
        }
        Ok(Self {
            page,
            limit: limit.min(MAX_LIMIT),
        })
    }
}

pub(crate) fn default_page() -> i64 {
    1
}

pub(crate) fn default_limit() -> i64 {
    10
}

/// Reject page values less than 1
pub(crate) fn deserialize_page<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    if value < 1 {
        return Err(serde::de::Error::custom(
            "page must be a positive integer (>= 1)",
        ));
    }
    Ok(value)
}

/// Reject limit values less than 1, clamp to MAX_LIMIT
pub(crate) fn deserialize_limit<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    if value < 1 {
        return Err(serde::de::Error::custom(
            "limit must be a positive integer (>= 1)",
        ));
    }
    Ok(value.min(MAX_LIMIT))
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
}

impl<T: Serialize> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: i64, limit: i64, total: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta { page, limit, total },
        }
    }
}

/// Success response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Message response (for delete, logout, etc.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parse a comma-separated list of integer IDs ("1,2,3").
/// An absent or empty parameter means no filter.
pub(crate) fn parse_i64_list(raw: Option<&str>) -> Result<Vec<i64>> {
    let Some(raw) = raw else {
        return Ok(vec![]);
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("Invalid ID '{}' in list", s)))
        })
        .collect()
}

/// Parse a comma-separated list of UUIDs.
pub(crate) fn parse_uuid_list(raw: Option<&str>) -> Result<Vec<StringUuid>> {
    let Some(raw) = raw else {
        return Ok(vec![]);
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<StringUuid>()
                .map_err(|_| AppError::BadRequest(format!("Invalid ID '{}' in list", s)))
        })
        .collect()
}

/// Text fields and an optional image file parsed from a multipart form.
/// File parts named `image` or `flag` become the upload; everything else is
/// collected as text.
pub(crate) struct MultipartForm {
    pub fields: std::collections::HashMap<String, String>,
    pub image: Option<crate::service::ImageUpload>,
}

impl MultipartForm {
    pub(crate) async fn read(mut multipart: axum::extract::Multipart) -> Result<Self> {
        let mut fields = std::collections::HashMap::new();
        let mut image = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == "image" || name == "flag" {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid file upload: {}", e)))?;
                if !bytes.is_empty() {
                    image = Some((file_name, bytes.to_vec()));
                }
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid form field: {}", e)))?;
                fields.insert(name, text);
            }
        }

        Ok(Self { fields, image })
    }

    pub(crate) fn required(&self, name: &str) -> Result<String> {
        self.fields
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::BadRequest(format!("Missing field '{}'", name)))
    }

    pub(crate) fn optional(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    pub(crate) fn optional_i32(&self, name: &str) -> Result<Option<i32>> {
        match self.fields.get(name) {
            Some(raw) => raw
                .parse::<i32>()
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("Field '{}' must be an integer", name))),
            None => Ok(None),
        }
    }

    pub(crate) fn optional_bool(&self, name: &str) -> Result<Option<bool>> {
        match self.fields.get(name) {
            Some(raw) => match raw.as_str() {
                "true" | "1" => Ok(Some(true)),
                "false" | "0" => Ok(Some(false)),
                _ => Err(AppError::BadRequest(format!(
                    "Field '{}' must be a boolean",
                    name
                ))),
            },
            None => Ok(None),
        }
    }

    pub(crate) fn i64_list(&self, name: &str) -> Result<Vec<i64>> {
        parse_i64_list(self.fields.get(name).map(String::as_str))
    }

    pub(crate) fn uuid_list(&self, name: &str) -> Result<Vec<StringUuid>> {
        parse_uuid_list(self.fields.get(name).map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_query_defaults() {
        let query: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn test_pagination_query_custom_values() {
        let query: PaginationQuery = serde_json::from_str(r#"{"page": 5, "limit": 50}"#).unwrap();
        assert_eq!(query.page, 5);
        assert_eq!(query.limit, 50);
    }

    #[test]
    fn test_pagination_query_limit_clamped_to_max() {
        let query: PaginationQuery =
            serde_json::from_str(r#"{"page": 1, "limit": 1000000}"#).unwrap();
        assert_eq!(query.limit, MAX_LIMIT);
    }

    #[test]
    fn test_pagination_query_limit_zero_rejected() {
        let result = serde_json::from_str::<PaginationQuery>(r#"{"page": 1, "limit": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_pagination_query_page_zero_rejected() {
        let result = serde_json::from_str::<PaginationQuery>(r#"{"page": 0, "limit": 10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_pagination_query_per_page_alias() {
        let query: PaginationQuery = serde_json::from_str(r#"{"per_page": 25}"#).unwrap();
        assert_eq!(query.limit, 25);
    }

    #[test]
    fn test_parse_i64_list() {
        assert_eq!(parse_i64_list(Some("1,2,3")).unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_i64_list(Some(" 4 , 5 ")).unwrap(), vec![4, 5]);
        assert!(parse_i64_list(None).unwrap().is_empty());
        assert!(parse_i64_list(Some("")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_i64_list_invalid() {
        let result = parse_i64_list(Some("1,abc,3"));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_parse_uuid_list() {
        let id = "550e8400-e29b-41d4-a716-446655440000";
        let parsed = parse_uuid_list(Some(id)).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].to_string(), id);
    }

    #[test]
    fn test_parse_uuid_list_invalid() {
        let result = parse_uuid_list(Some("not-a-uuid"));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_paginated_response_serialization() {
        let response = PaginatedResponse::new(vec!["a"], 2, 25, 100);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"page\":2"));
        assert!(json.contains("\"limit\":25"));
        assert!(json.contains("\"total\":100"));
    }

    #[test]
    fn test_message_response() {
        let response = MessageResponse::new("Deleted");
        assert_eq!(response.message, "Deleted");
    }
}
