//! Restaurant domain model

use super::category::Category;
use super::common::StringUuid;
use super::country::Country;
use super::cuisine::Cuisine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Restaurant {
    pub id: StringUuid,
    pub name: String,
    pub description: String,
    /// Relative path under the upload root
    pub image: Option<String>,
    pub map_link: Option<String>,
    pub address: Option<String>,
    /// Opening hour as "HH:MM"
    pub open_hour: Option<String>,
    /// Closing hour as "HH:MM"
    pub close_hour: Option<String>,
    pub rank: i32,
    pub price_range: Option<String>,
    pub is_promotion: bool,
    pub promo_rate: Option<i32>,
    /// Social links keyed by platform name
    pub social_link: Option<sqlx::types::Json<std::collections::HashMap<String, String>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Restaurant {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: StringUuid::new_v4(),
            name: String::new(),
            description: String::new(),
            image: None,
            map_link: None,
            address: None,
            open_hour: None,
            close_hour: None,
            rank: 0,
            price_range: None,
            is_promotion: false,
            promo_rate: None,
            social_link: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Restaurant with its linked categories, countries and cuisines (for API responses)
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantWithRelations {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub categories: Vec<Category>,
    pub countries: Vec<Country>,
    pub cuisines: Vec<Cuisine>,
}

/// Input for creating a restaurant
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateRestaurantInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub map_link: Option<String>,
    pub address: Option<String>,
    pub open_hour: Option<String>,
    pub close_hour: Option<String>,
    pub rank: Option<i32>,
    pub price_range: Option<String>,
    pub is_promotion: Option<bool>,
    pub promo_rate: Option<i32>,
    pub social_link: Option<std::collections::HashMap<String, String>>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    #[serde(default)]
    pub country_ids: Vec<StringUuid>,
    #[serde(default)]
    pub cuisine_ids: Vec<i64>,
}

/// Input for updating a restaurant; `None` fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRestaurantInput {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub map_link: Option<String>,
    pub address: Option<String>,
    pub open_hour: Option<String>,
    pub close_hour: Option<String>,
    pub rank: Option<i32>,
    pub price_range: Option<String>,
    pub is_promotion: Option<bool>,
    pub promo_rate: Option<i32>,
    pub social_link: Option<std::collections::HashMap<String, String>>,
    pub category_ids: Option<Vec<i64>>,
    pub country_ids: Option<Vec<StringUuid>>,
    pub cuisine_ids: Option<Vec<i64>>,
}

/// Filter criteria for the restaurant listing.
/// Empty ID lists and an absent keyword mean "no filter".
#[derive(Debug, Clone, Default)]
pub struct RestaurantQuery {
    pub category_ids: Vec<i64>,
    pub country_ids: Vec<StringUuid>,
    pub cuisine_ids: Vec<i64>,
    pub keyword: Option<String>,
}

impl RestaurantQuery {
    pub fn is_empty(&self) -> bool {
        self.category_ids.is_empty()
            && self.country_ids.is_empty()
            && self.cuisine_ids.is_empty()
            && self.keyword.as_deref().map_or(true, |k| k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_default() {
        let restaurant = Restaurant::default();
        assert!(!restaurant.id.is_nil());
        assert_eq!(restaurant.rank, 0);
        assert!(!restaurant.is_promotion);
    }

    #[test]
    fn test_create_restaurant_input_validation() {
        let input = CreateRestaurantInput {
            name: String::new(),
            description: "A nice place".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let valid = CreateRestaurantInput {
            name: "Pho House".to_string(),
            description: "Vietnamese noodle soup".to_string(),
            ..Default::default()
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_restaurant_query_is_empty() {
        assert!(RestaurantQuery::default().is_empty());

        let query = RestaurantQuery {
            keyword: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(query.is_empty());

        let query = RestaurantQuery {
            category_ids: vec![1],
            ..Default::default()
        };
        assert!(!query.is_empty());
    }
}
