//! Currency repository

use crate::domain::currency::{CreateCurrencyInput, Currency, UpdateCurrencyInput};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrencyRepository: Send + Sync {
    async fn create(&self, input: &CreateCurrencyInput) -> Result<Currency>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Currency>>;
    async fn list(&self, keyword: Option<String>, offset: i64, limit: i64)
        -> Result<Vec<Currency>>;
    async fn count(&self, keyword: Option<String>) -> Result<i64>;
    async fn update(&self, id: i64, input: &UpdateCurrencyInput) -> Result<Currency>;
    async fn delete(&self, id: i64) -> Result<()>;
}

pub struct CurrencyRepositoryImpl {
    pool: MySqlPool,
}

impl CurrencyRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CurrencyRepository for CurrencyRepositoryImpl {
    async fn create(&self, input: &CreateCurrencyInput) -> Result<Currency> {
        let result = sqlx::query(
            r#"
            INSERT INTO currencies (code, buy_rate, sell_rate, buy_status, sell_status, image, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, NOW(), NOW())
            "#,
        )
        .bind(&input.code)
        .bind(input.buy_rate)
        .bind(input.sell_rate)
        .bind(input.buy_status.unwrap_or(true))
        .bind(input.sell_status.unwrap_or(true))
        .bind(&input.image)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_id() as i64;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to create currency")))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Currency>> {
        let currency = sqlx::query_as::<_, Currency>(
            r#"
            SELECT id, code, buy_rate, sell_rate, buy_status, sell_status, image, created_at, updated_at
            FROM currencies
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(currency)
    }

    async fn list(
        &self,
        keyword: Option<String>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Currency>> {
        let mut sql = String::from(
            "SELECT id, code, buy_rate, sell_rate, buy_status, sell_status, image, created_at, updated_at FROM currencies WHERE 1=1",
        );
        if keyword.is_some() {
            sql.push_str(" AND LOWER(code) LIKE ?");
        }
        sql.push_str(" ORDER BY id DESC LIMIT ? OFFSET ?");

        let mut query = sqlx::query_as::<_, Currency>(&sql);
        if let Some(ref keyword) = keyword {
            query = query.bind(format!("%{}%", keyword.to_lowercase()));
        }
        query = query.bind(limit).bind(offset);

        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn count(&self, keyword: Option<String>) -> Result<i64> {
        let mut sql = String::from("SELECT COUNT(*) FROM currencies WHERE 1=1");
        if keyword.is_some() {
            sql.push_str(" AND LOWER(code) LIKE ?");
        }

        let mut query = sqlx::query_as::<_, (i64,)>(&sql);
        if let Some(ref keyword) = keyword {
            query = query.bind(format!("%{}%", keyword.to_lowercase()));
        }

        let row = query.fetch_one(&self.pool).await?;
        Ok(row.0)
    }

    async fn update(&self, id: i64, input: &UpdateCurrencyInput) -> Result<Currency> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Currency {} not found", id)))?;

        let code = input.code.as_ref().unwrap_or(&existing.code);
        let buy_rate = input.buy_rate.unwrap_or(existing.buy_rate);
        let sell_rate = input.sell_rate.unwrap_or(existing.sell_rate);
        let buy_status = input.buy_status.unwrap_or(existing.buy_status);
        let sell_status = input.sell_status.unwrap_or(existing.sell_status);
        let image = input.image.as_ref().or(existing.image.as_ref());

        sqlx::query(
            r#"
            UPDATE currencies
            SET code = ?, buy_rate = ?, sell_rate = ?, buy_status = ?, sell_status = ?, image = ?, updated_at = NOW()
            WHERE id = ?
            "#,
        )
        .bind(code)
        .bind(buy_rate)
        .bind(sell_rate)
        .bind(buy_status)
        .bind(sell_status)
        .bind(image)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Currency {} not found", id)))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM currencies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Currency {} not found", id)));
        }
        Ok(())
    }
}
