//! Slider repository

use crate::domain::slider::{CreateSliderInput, Slider, UpdateSliderInput};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SliderRepository: Send + Sync {
    async fn create(&self, input: &CreateSliderInput, image: Option<String>) -> Result<Slider>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Slider>>;
    async fn list(&self, keyword: Option<String>, offset: i64, limit: i64) -> Result<Vec<Slider>>;
    async fn count(&self, keyword: Option<String>) -> Result<i64>;
    async fn update(
        &self,
        id: i64,
        input: &UpdateSliderInput,
        image: Option<String>,
    ) -> Result<Slider>;
    async fn delete(&self, id: i64) -> Result<()>;
}

pub struct SliderRepositoryImpl {
    pool: MySqlPool,
}

impl SliderRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SliderRepository for SliderRepositoryImpl {
    async fn create(&self, input: &CreateSliderInput, image: Option<String>) -> Result<Slider> {
        let result = sqlx::query(
            r#"
            INSERT INTO sliders (title, description, image, created_at, updated_at)
            VALUES (?, ?, ?, NOW(), NOW())
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&image)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create slider")))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Slider>> {
        let slider = sqlx::query_as::<_, Slider>(
            r#"
            SELECT id, title, description, image, created_at, updated_at
            FROM sliders
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(slider)
    }

    async fn list(&self, keyword: Option<String>, offset: i64, limit: i64) -> Result<Vec<Slider>> {
        let mut sql = String::from(
            "SELECT id, title, description, image, created_at, updated_at FROM sliders WHERE 1=1",
        );
        if keyword.is_some() {
            sql.push_str(" AND LOWER(title) LIKE ?");
        }
        sql.push_str(" ORDER BY created_at DESC LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, Slider>(&sql);
        if let Some(ref keyword) = keyword {
            query = query.bind(format!("%{}%", keyword.to_lowercase()));
        }
        query = query.bind(limit).bind(offset);

        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn count(&self, keyword: Option<String>) -> Result<i64> {
        let mut sql = String::from("SELECT COUNT(*) FROM sliders WHERE 1=1");
        if keyword.is_some() {
            sql.push_str(" AND LOWER(title) LIKE ?");
        }

        let mut query = sqlx::query_as::<_, (i64,)>(&sql);
        if let Some(ref keyword) = keyword {
            query = query.bind(format!("%{}%", keyword.to_lowercase()));
        }

        let row = query.fetch_one(&self.pool).await?;
        Ok(row.0)
    }

    async fn update(
        &self,
        id: i64,
        input: &UpdateSliderInput,
        image: Option<String>,
    ) -> Result<Slider> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Slider {} not found", id)))?;

        let title = input.title.as_ref().unwrap_or(&existing.title);
        let description = input.description.as_ref().unwrap_or(&existing.description);
        let image = image.or(existing.image);

        sqlx::query(
            r#"
            UPDATE sliders
            SET title = ?, description = ?, image = ?, updated_at = NOW()
            WHERE id = ?
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(&image)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Slider {} not found", id)))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM sliders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Slider {} not found", id)));
        }
        Ok(())
    }
}
