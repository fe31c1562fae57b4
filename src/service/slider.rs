//! Slider business logic

use super::ImageUpload;
use crate::domain::slider::{CreateSliderInput, Slider, UpdateSliderInput};
use crate::error::{AppError, Result};
use crate::repository::SliderRepository;
use crate::storage::ImageStore;
use std::sync::Arc;
use validator::Validate;

pub struct SliderService<R: SliderRepository> {
    repo: Arc<R>,
    images: ImageStore,
}

impl<R: SliderRepository> SliderService<R> {
    pub fn new(repo: Arc<R>, images: ImageStore) -> Self {
        Self { repo, images }
    }

    pub async fn create(
        &self,
        input: CreateSliderInput,
        image: Option<ImageUpload>,
    ) -> Result<Slider> {
        input.validate()?;

        let stored = match image {
            Some((name, bytes)) => Some(self.images.save("sliders", &name, &bytes).await?),
            None => None,
        };

        self.repo.create(&input, stored).await
    }

    pub async fn get(&self, id: i64) -> Result<Slider> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Slider {} not found", id)))
    }

    pub async fn list(
        &self,
        keyword: Option<String>,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<Slider>, i64)> {
        let offset = (page - 1) * per_page;
        let sliders = self.repo.list(keyword.clone(), offset, per_page).await?;
        let total = self.repo.count(keyword).await?;
        Ok((sliders, total))
    }

    pub async fn update(
        &self,
        id: i64,
        input: UpdateSliderInput,
        image: Option<ImageUpload>,
    ) -> Result<Slider> {
        input.validate()?;

        let existing = self.get(id).await?;

        let stored = match image {
            Some((name, bytes)) => Some(self.images.save("sliders", &name, &bytes).await?),
            None => None,
        };
        let replaced = stored.is_some();

        let slider = self.repo.update(id, &input, stored).await?;

        if replaced {
            if let Some(ref old) = existing.image {
                self.images.delete(old).await;
            }
        }

        Ok(slider)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let existing = self.get(id).await?;
        self.repo.delete(id).await?;

        if let Some(ref image) = existing.image {
            self.images.delete(image).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::slider::MockSliderRepository;
    use chrono::Utc;
    use mockall::predicate::*;

    fn sample_slider(id: i64) -> Slider {
        let now = Utc::now();
        Slider {
            id,
            title: "Grand Opening".to_string(),
            description: "50% off this week".to_string(),
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn test_service(
        repo: MockSliderRepository,
    ) -> (SliderService<MockSliderRepository>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let service = SliderService::new(Arc::new(repo), ImageStore::new(dir.path()));
        (service, dir)
    }

    #[tokio::test]
    async fn test_list_sliders_with_keyword() {
        let mut mock = MockSliderRepository::new();
        mock.expect_list()
            .with(eq(Some("opening".to_string())), eq(0), eq(10))
            .returning(|_, _, _| Ok(vec![sample_slider(1)]));
        mock.expect_count()
            .with(eq(Some("opening".to_string())))
            .returning(|_| Ok(1));

        let (service, _dir) = test_service(mock);

        let (sliders, total) = service
            .list(Some("opening".to_string()), 1, 10)
            .await
            .unwrap();
        assert_eq!(sliders.len(), 1);
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn test_create_slider_invalid_input() {
        let mock = MockSliderRepository::new();
        let (service, _dir) = test_service(mock);

        let input = CreateSliderInput {
            title: String::new(),
            description: "desc".to_string(),
        };
        let result = service.create(input, None).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
