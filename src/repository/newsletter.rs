//! Newsletter repository

use crate::domain::newsletter::Newsletter;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn create(&self, email: &str) -> Result<Newsletter>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Newsletter>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Newsletter>>;
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Newsletter>>;
    async fn count(&self) -> Result<i64>;
    async fn delete(&self, id: i64) -> Result<()>;
}

pub struct NewsletterRepositoryImpl {
    pool: MySqlPool,
}

impl NewsletterRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsletterRepository for NewsletterRepositoryImpl {
    async fn create(&self, email: &str) -> Result<Newsletter> {
        let result = sqlx::query(
            r#"
            INSERT INTO newsletters (email, created_at, updated_at)
            VALUES (?, NOW(), NOW())
            "#,
        )
        .bind(email)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create subscription")))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Newsletter>> {
        let subscription = sqlx::query_as::<_, Newsletter>(
            r#"
            SELECT id, email, created_at, updated_at
            FROM newsletters
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(subscription)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Newsletter>> {
        let subscription = sqlx::query_as::<_, Newsletter>(
            r#"
            SELECT id, email, created_at, updated_at
            FROM newsletters
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(subscription)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Newsletter>> {
        let subscriptions = sqlx::query_as::<_, Newsletter>(
            r#"
            SELECT id, email, created_at, updated_at
            FROM newsletters
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(subscriptions)
    }

    async fn count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM newsletters")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM newsletters WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Subscription {} not found", id)));
        }
        Ok(())
    }
}
