//! Restaurant repository

use crate::domain::category::Category;
use crate::domain::common::StringUuid;
use crate::domain::country::Country;
use crate::domain::cuisine::Cuisine;
use crate::domain::restaurant::{
    CreateRestaurantInput, Restaurant, RestaurantQuery, UpdateRestaurantInput,
};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

const RESTAURANT_COLUMNS: &str = "r.id, r.name, r.description, r.image, r.map_link, r.address, \
     r.open_hour, r.close_hour, r.rank, r.price_range, r.is_promotion, r.promo_rate, \
     r.social_link, r.created_at, r.updated_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn create(
        &self,
        input: &CreateRestaurantInput,
        image: Option<String>,
    ) -> Result<Restaurant>;
    async fn find_by_id(&self, id: StringUuid) -> Result<Option<Restaurant>>;
    async fn search(
        &self,
        query: &RestaurantQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Restaurant>>;
    async fn count_search(&self, query: &RestaurantQuery) -> Result<i64>;
    async fn update(
        &self,
        id: StringUuid,
        input: &UpdateRestaurantInput,
        image: Option<String>,
    ) -> Result<Restaurant>;
    async fn delete(&self, id: StringUuid) -> Result<()>;

    // Relation lookups for API responses
    async fn find_categories(&self, restaurant_id: StringUuid) -> Result<Vec<Category>>;
    async fn find_countries(&self, restaurant_id: StringUuid) -> Result<Vec<Country>>;
    async fn find_cuisines(&self, restaurant_id: StringUuid) -> Result<Vec<Cuisine>>;
}

pub struct RestaurantRepositoryImpl {
    pool: MySqlPool,
}

impl RestaurantRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(",")
}

/// Build the shared WHERE clause for search and count.
/// Filter sets become IN-subqueries against the join tables; the keyword is
/// OR-matched across restaurant name/description and joined category and
/// cuisine names via EXISTS, so both queries bind the same values in the
/// same order.
fn filter_sql(query: &RestaurantQuery) -> String {
    let mut sql = String::from(" WHERE 1=1");

    if !query.category_ids.is_empty() {
        sql.push_str(&format!(
            " AND r.id IN (SELECT restaurant_id FROM restaurant_categories WHERE category_id IN ({}))",
            placeholders(query.category_ids.len())
        ));
    }
    if !query.country_ids.is_empty() {
        sql.push_str(&format!(
            " AND r.id IN (SELECT restaurant_id FROM restaurant_countries WHERE country_id IN ({}))",
            placeholders(query.country_ids.len())
        ));
    }
    if !query.cuisine_ids.is_empty() {
        sql.push_str(&format!(
            " AND r.id IN (SELECT restaurant_id FROM restaurant_cuisines WHERE cuisine_id IN ({}))",
            placeholders(query.cuisine_ids.len())
        ));
    }
    if keyword_pattern(query).is_some() {
        sql.push_str(concat!(
            " AND (LOWER(r.name) LIKE ? OR LOWER(r.description) LIKE ?",
            " OR EXISTS (SELECT 1 FROM restaurant_categories rc",
            " JOIN categories c ON c.id = rc.category_id",
            " WHERE rc.restaurant_id = r.id AND LOWER(c.name) LIKE ?)",
            " OR EXISTS (SELECT 1 FROM restaurant_cuisines rcu",
            " JOIN cuisines cu ON cu.id = rcu.cuisine_id",
            " WHERE rcu.restaurant_id = r.id AND LOWER(cu.name) LIKE ?))",
        ));
    }

    sql
}

fn keyword_pattern(query: &RestaurantQuery) -> Option<String> {
    query
        .keyword
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(|k| format!("%{}%", k.to_lowercase()))
}

fn bind_filters<'q, O>(
    mut builder: sqlx::query::QueryAs<'q, sqlx::MySql, O, sqlx::mysql::MySqlArguments>,
    query: &'q RestaurantQuery,
    keyword: &'q Option<String>,
) -> sqlx::query::QueryAs<'q, sqlx::MySql, O, sqlx::mysql::MySqlArguments> {
    for id in &query.category_ids {
        builder = builder.bind(id);
    }
    for id in &query.country_ids {
        builder = builder.bind(*id);
    }
    for id in &query.cuisine_ids {
        builder = builder.bind(id);
    }
    if let Some(pattern) = keyword {
        // Same pattern bound once per LIKE in the keyword group
        builder = builder
            .bind(pattern)
            .bind(pattern)
            .bind(pattern)
            .bind(pattern);
    }
    builder
}

#[async_trait]
impl RestaurantRepository for RestaurantRepositoryImpl {
    async fn create(
        &self,
        input: &CreateRestaurantInput,
        image: Option<String>,
    ) -> Result<Restaurant> {
        let id = StringUuid::new_v4();
        let social_link = input.social_link.clone().map(sqlx::types::Json);
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO restaurants
                (id, name, description, image, map_link, address, open_hour, close_hour,
                 `rank`, price_range, is_promotion, promo_rate, social_link, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NOW(), NOW())
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&image)
        .bind(&input.map_link)
        .bind(&input.address)
        .bind(&input.open_hour)
        .bind(&input.close_hour)
        .bind(input.rank.unwrap_or(0))
        .bind(&input.price_range)
        .bind(input.is_promotion.unwrap_or(false))
        .bind(input.promo_rate)
        .bind(&social_link)
        .execute(&mut *tx)
        .await?;

        for category_id in &input.category_ids {
            sqlx::query(
                "INSERT INTO restaurant_categories (restaurant_id, category_id) VALUES (?, ?)",
            )
            .bind(id)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;
        }
        for country_id in &input.country_ids {
            sqlx::query(
                "INSERT INTO restaurant_countries (restaurant_id, country_id) VALUES (?, ?)",
            )
            .bind(id)
            .bind(*country_id)
            .execute(&mut *tx)
            .await?;
        }
        for cuisine_id in &input.cuisine_ids {
            sqlx::query("INSERT INTO restaurant_cuisines (restaurant_id, cuisine_id) VALUES (?, ?)")
                .bind(id)
                .bind(cuisine_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create restaurant")))
    }

    async fn find_by_id(&self, id: StringUuid) -> Result<Option<Restaurant>> {
        let sql = format!(
            "SELECT {} FROM restaurants r WHERE r.id = ?",
            RESTAURANT_COLUMNS
        );
        let restaurant = sqlx::query_as::<_, Restaurant>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(restaurant)
    }

    async fn search(
        &self,
        query: &RestaurantQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Restaurant>> {
        let mut sql = format!("SELECT {} FROM restaurants r", RESTAURANT_COLUMNS);
        sql.push_str(&filter_sql(query));
        sql.push_str(" ORDER BY r.created_at DESC LIMIT ? OFFSET ?");

        let keyword = keyword_pattern(query);
        let builder = sqlx::query_as::<_, Restaurant>(&sql);
        let builder = bind_filters(builder, query, &keyword).bind(limit).bind(offset);

        Ok(builder.fetch_all(&self.pool).await?)
    }

    async fn count_search(&self, query: &RestaurantQuery) -> Result<i64> {
        let mut sql = String::from("SELECT COUNT(*) FROM restaurants r");
        sql.push_str(&filter_sql(query));

        let keyword = keyword_pattern(query);
        let builder = sqlx::query_as::<_, (i64,)>(&sql);
        let row = bind_filters(builder, query, &keyword)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.0)
    }

    async fn update(
        &self,
        id: StringUuid,
        input: &UpdateRestaurantInput,
        image: Option<String>,
    ) -> Result<Restaurant> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", id)))?;

        let name = input.name.as_ref().unwrap_or(&existing.name);
        let description = input.description.as_ref().unwrap_or(&existing.description);
        let image = image.or(existing.image);
        let map_link = input.map_link.as_ref().or(existing.map_link.as_ref());
        let address = input.address.as_ref().or(existing.address.as_ref());
        let open_hour = input.open_hour.as_ref().or(existing.open_hour.as_ref());
        let close_hour = input.close_hour.as_ref().or(existing.close_hour.as_ref());
        let rank = input.rank.unwrap_or(existing.rank);
        let price_range = input.price_range.as_ref().or(existing.price_range.as_ref());
        let is_promotion = input.is_promotion.unwrap_or(existing.is_promotion);
        let promo_rate = input.promo_rate.or(existing.promo_rate);
        let social_link = input
            .social_link
            .clone()
            .map(sqlx::types::Json)
            .or(existing.social_link);

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE restaurants
            SET name = ?, description = ?, image = ?, map_link = ?, address = ?,
                open_hour = ?, close_hour = ?, `rank` = ?, price_range = ?,
                is_promotion = ?, promo_rate = ?, social_link = ?, updated_at = NOW()
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(&image)
        .bind(map_link)
        .bind(address)
        .bind(open_hour)
        .bind(close_hour)
        .bind(rank)
        .bind(price_range)
        .bind(is_promotion)
        .bind(promo_rate)
        .bind(&social_link)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        // Relation lists replace memberships only when provided
        if let Some(ref category_ids) = input.category_ids {
            sqlx::query("DELETE FROM restaurant_categories WHERE restaurant_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for category_id in category_ids {
                sqlx::query(
                    "INSERT INTO restaurant_categories (restaurant_id, category_id) VALUES (?, ?)",
                )
                .bind(id)
                .bind(category_id)
                .execute(&mut *tx)
                .await?;
            }
        }
        if let Some(ref country_ids) = input.country_ids {
            sqlx::query("DELETE FROM restaurant_countries WHERE restaurant_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for country_id in country_ids {
                sqlx::query(
                    "INSERT INTO restaurant_countries (restaurant_id, country_id) VALUES (?, ?)",
                )
                .bind(id)
                .bind(*country_id)
                .execute(&mut *tx)
                .await?;
            }
        }
        if let Some(ref cuisine_ids) = input.cuisine_ids {
            sqlx::query("DELETE FROM restaurant_cuisines WHERE restaurant_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for cuisine_id in cuisine_ids {
                sqlx::query(
                    "INSERT INTO restaurant_cuisines (restaurant_id, cuisine_id) VALUES (?, ?)",
                )
                .bind(id)
                .bind(cuisine_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", id)))
    }

    async fn delete(&self, id: StringUuid) -> Result<()> {
        // Join rows cascade via foreign keys
        let result = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Restaurant {} not found", id)));
        }
        Ok(())
    }

    async fn find_categories(&self, restaurant_id: StringUuid) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT c.id, c.name, c.description, c.image, c.created_at, c.updated_at
            FROM categories c
            JOIN restaurant_categories rc ON rc.category_id = c.id
            WHERE rc.restaurant_id = ?
            ORDER BY c.name
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn find_countries(&self, restaurant_id: StringUuid) -> Result<Vec<Country>> {
        let countries = sqlx::query_as::<_, Country>(
            r#"
            SELECT c.id, c.name, c.description, c.flag, c.created_at, c.updated_at
            FROM countries c
            JOIN restaurant_countries rc ON rc.country_id = c.id
            WHERE rc.restaurant_id = ?
            ORDER BY c.name
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(countries)
    }

    async fn find_cuisines(&self, restaurant_id: StringUuid) -> Result<Vec<Cuisine>> {
        let cuisines = sqlx::query_as::<_, Cuisine>(
            r#"
            SELECT c.id, c.name, c.description, c.image, c.created_at, c.updated_at
            FROM cuisines c
            JOIN restaurant_cuisines rc ON rc.cuisine_id = c.id
            WHERE rc.restaurant_id = ?
            ORDER BY c.name
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cuisines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_sql_empty_query() {
        let query = RestaurantQuery::default();
        assert_eq!(filter_sql(&query), " WHERE 1=1");
    }

    #[test]
    fn test_filter_sql_category_set() {
        let query = RestaurantQuery {
            category_ids: vec![1, 2, 3],
            ..Default::default()
        };
        let sql = filter_sql(&query);
        assert!(sql.contains("restaurant_categories"));
        assert!(sql.contains("category_id IN (?,?,?)"));
        assert!(!sql.contains("restaurant_countries"));
    }

    #[test]
    fn test_filter_sql_keyword() {
        let query = RestaurantQuery {
            keyword: Some("pho".to_string()),
            ..Default::default()
        };
        let sql = filter_sql(&query);
        assert!(sql.contains("LOWER(r.name) LIKE ?"));
        assert!(sql.contains("LOWER(c.name) LIKE ?"));
        assert!(sql.contains("LOWER(cu.name) LIKE ?"));
    }

    #[test]
    fn test_filter_sql_blank_keyword_ignored() {
        let query = RestaurantQuery {
            keyword: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_sql(&query), " WHERE 1=1");
    }

    #[test]
    fn test_keyword_pattern_lowercases_and_wraps() {
        let query = RestaurantQuery {
            keyword: Some(" Pho House ".to_string()),
            ..Default::default()
        };
        assert_eq!(keyword_pattern(&query), Some("%pho house%".to_string()));
    }
}
