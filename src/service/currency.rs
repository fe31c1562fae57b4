//! Currency business logic

use crate::domain::currency::{CreateCurrencyInput, Currency, UpdateCurrencyInput};
use crate::error::{AppError, Result};
use crate::repository::CurrencyRepository;
use std::sync::Arc;
use validator::Validate;

pub struct CurrencyService<R: CurrencyRepository> {
    repo: Arc<R>,
}

impl<R: CurrencyRepository> CurrencyService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: CreateCurrencyInput) -> Result<Currency> {
        input.validate()?;
        self.repo.create(&input).await
    }

    pub async fn get(&self, id: i64) -> Result<Currency> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Currency {} not found", id)))
    }

    pub async fn list(
        &self,
        keyword: Option<String>,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<Currency>, i64)> {
        let offset = (page - 1) * per_page;
        let currencies = self.repo.list(keyword.clone(), offset, per_page).await?;
        let total = self.repo.count(keyword).await?;
        Ok((currencies, total))
    }

    pub async fn update(&self, id: i64, input: UpdateCurrencyInput) -> Result<Currency> {
        input.validate()?;
        let _ = self.get(id).await?;
        self.repo.update(id, &input).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let _ = self.get(id).await?;
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::currency::MockCurrencyRepository;
    use chrono::Utc;
    use mockall::predicate::*;

    fn sample_currency(id: i64) -> Currency {
        let now = Utc::now();
        Currency {
            id,
            code: "USD".to_string(),
            buy_rate: 4050.0,
            sell_rate: 4100.0,
            buy_status: true,
            sell_status: true,
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_currency_invalid_rate() {
        let mock = MockCurrencyRepository::new();
        let service = CurrencyService::new(Arc::new(mock));

        let input = CreateCurrencyInput {
            code: "USD".to_string(),
            buy_rate: -5.0,
            sell_rate: 4100.0,
            buy_status: None,
            sell_status: None,
            image: None,
        };
        let result = service.create(input).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_currencies_with_keyword() {
        let mut mock = MockCurrencyRepository::new();
        mock.expect_list()
            .with(eq(Some("usd".to_string())), eq(0), eq(10))
            .returning(|_, _, _| Ok(vec![sample_currency(1)]));
        mock.expect_count()
            .with(eq(Some("usd".to_string())))
            .returning(|_| Ok(1));

        let service = CurrencyService::new(Arc::new(mock));

        let (currencies, total) = service
            .list(Some("usd".to_string()), 1, 10)
            .await
            .unwrap();
        assert_eq!(currencies.len(), 1);
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn test_update_currency_not_found() {
        let mut mock = MockCurrencyRepository::new();
        mock.expect_find_by_id().with(eq(5)).returning(|_| Ok(None));

        let service = CurrencyService::new(Arc::new(mock));

        let result = service.update(5, UpdateCurrencyInput::default()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
