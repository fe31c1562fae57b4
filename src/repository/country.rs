//! Country repository

use crate::domain::common::StringUuid;
use crate::domain::country::{Country, CreateCountryInput, UpdateCountryInput};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    async fn create(&self, input: &CreateCountryInput, flag: Option<String>) -> Result<Country>;
    async fn find_by_id(&self, id: StringUuid) -> Result<Option<Country>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>>;
    async fn find_by_ids(&self, ids: &[StringUuid]) -> Result<Vec<Country>>;
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Country>>;
    async fn count(&self) -> Result<i64>;
    async fn update(
        &self,
        id: StringUuid,
        input: &UpdateCountryInput,
        flag: Option<String>,
    ) -> Result<Country>;
    async fn delete(&self, id: StringUuid) -> Result<()>;
}

pub struct CountryRepositoryImpl {
    pool: MySqlPool,
}

impl CountryRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for CountryRepositoryImpl {
    async fn create(&self, input: &CreateCountryInput, flag: Option<String>) -> Result<Country> {
        let id = StringUuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO countries (id, name, description, flag, created_at, updated_at)
            VALUES (?, ?, ?, ?, NOW(), NOW())
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(&flag)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create country")))
    }

    async fn find_by_id(&self, id: StringUuid) -> Result<Option<Country>> {
        let country = sqlx::query_as::<_, Country>(
            r#"
            SELECT id, name, description, flag, created_at, updated_at
            FROM countries
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(country)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Country>> {
        let country = sqlx::query_as::<_, Country>(
            r#"
            SELECT id, name, description, flag, created_at, updated_at
            FROM countries
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(country)
    }

    async fn find_by_ids(&self, ids: &[StringUuid]) -> Result<Vec<Country>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let placeholders = vec!["?"; ids.len()].join(",");
        let sql = format!(
            "SELECT id, name, description, flag, created_at, updated_at FROM countries WHERE id IN ({})",
            placeholders
        );

        let mut query = sqlx::query_as::<_, Country>(&sql);
        for id in ids {
            query = query.bind(*id);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Country>> {
        let countries = sqlx::query_as::<_, Country>(
            r#"
            SELECT id, name, description, flag, created_at, updated_at
            FROM countries
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(countries)
    }

    async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM countries")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    async fn update(
        &self,
        id: StringUuid,
        input: &UpdateCountryInput,
        flag: Option<String>,
    ) -> Result<Country> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Country {} not found", id)))?;

        let name = input.name.as_ref().unwrap_or(&existing.name);
        let description = input.description.as_ref().or(existing.description.as_ref());
        let flag = flag.or(existing.flag);

        sqlx::query(
            r#"
            UPDATE countries
            SET name = ?, description = ?, flag = ?, updated_at = NOW()
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(&flag)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Country {} not found", id)))
    }

    async fn delete(&self, id: StringUuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM countries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Country {} not found", id)));
        }
        Ok(())
    }
}
