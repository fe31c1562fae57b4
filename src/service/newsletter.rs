//! Newsletter business logic

use crate::domain::newsletter::{Newsletter, SubscribeInput};
use crate::error::{AppError, Result};
use crate::repository::NewsletterRepository;
use std::sync::Arc;
use validator::Validate;

pub struct NewsletterService<R: NewsletterRepository> {
    repo: Arc<R>,
}

impl<R: NewsletterRepository> NewsletterService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn subscribe(&self, input: SubscribeInput) -> Result<Newsletter> {
        input.validate()?;

        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Email '{}' is already subscribed",
                input.email
            )));
        }

        self.repo.create(&input.email).await
    }

    pub async fn get(&self, id: i64) -> Result<Newsletter> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Subscription {} not found", id)))
    }

    pub async fn list(&self, page: i64, per_page: i64) -> Result<(Vec<Newsletter>, i64)> {
        let offset = (page - 1) * per_page;
        let subscriptions = self.repo.list(offset, per_page).await?;
        let total = self.repo.count().await?;
        Ok((subscriptions, total))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let _ = self.get(id).await?;
        self.repo.delete(id).await
    }
}
