//! Category repository

use crate::domain::category::{Category, CreateCategoryInput, UpdateCategoryInput};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, input: &CreateCategoryInput, image: Option<String>) -> Result<Category>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>>;
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Category>>;
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Category>>;
    async fn count(&self) -> Result<i64>;
    async fn update(
        &self,
        id: i64,
        input: &UpdateCategoryInput,
        image: Option<String>,
    ) -> Result<Category>;
    async fn delete(&self, id: i64) -> Result<()>;
}

pub struct CategoryRepositoryImpl {
    pool: MySqlPool,
}

impl CategoryRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn create(&self, input: &CreateCategoryInput, image: Option<String>) -> Result<Category> {
        let result = sqlx::query(
            r#"
            INSERT INTO categories (name, description, image, created_at, updated_at)
            VALUES (?, ?, ?, NOW(), NOW())
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&image)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create category")))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, image, created_at, updated_at
            FROM categories
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Category>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let placeholders = vec!["?"; ids.len()].join(",");
        let sql = format!(
            "SELECT id, name, description, image, created_at, updated_at FROM categories WHERE id IN ({})",
            placeholders
        );

        let mut query = sqlx::query_as::<_, Category>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description, image, created_at, updated_at
            FROM categories
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    async fn update(
        &self,
        id: i64,
        input: &UpdateCategoryInput,
        image: Option<String>,
    ) -> Result<Category> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        let name = input.name.as_ref().unwrap_or(&existing.name);
        let description = input.description.as_ref().unwrap_or(&existing.description);
        let image = image.or(existing.image);

        sqlx::query(
            r#"
            UPDATE categories
            SET name = ?, description = ?, image = ?, updated_at = NOW()
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(&image)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        Ok(())
    }
}
