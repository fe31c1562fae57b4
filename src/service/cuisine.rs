//! Cuisine business logic

use super::ImageUpload;
use crate::domain::cuisine::{CreateCuisineInput, Cuisine, UpdateCuisineInput};
use crate::error::{AppError, Result};
use crate::repository::CuisineRepository;
use crate::storage::ImageStore;
use std::sync::Arc;
use validator::Validate;

pub struct CuisineService<R: CuisineRepository> {
    repo: Arc<R>,
    images: ImageStore,
}

impl<R: CuisineRepository> CuisineService<R> {
    pub fn new(repo: Arc<R>, images: ImageStore) -> Self {
        Self { repo, images }
    }

    pub async fn create(
        &self,
        input: CreateCuisineInput,
        image: Option<ImageUpload>,
    ) -> Result<Cuisine> {
        input.validate()?;

        let stored = match image {
            Some((name, bytes)) => Some(self.images.save("cuisines", &name, &bytes).await?),
            None => None,
        };

        self.repo.create(&input, stored).await
    }

    pub async fn get(&self, id: i64) -> Result<Cuisine> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cuisine {} not found", id)))
    }

    pub async fn list(&self, page: i64, per_page: i64) -> Result<(Vec<Cuisine>, i64)> {
        let offset = (page - 1) * per_page;
        let cuisines = self.repo.list(offset, per_page).await?;
        let total = self.repo.count().await?;
        Ok((cuisines, total))
    }

    pub async fn update(
        &self,
        id: i64,
        input: UpdateCuisineInput,
        image: Option<ImageUpload>,
    ) -> Result<Cuisine> {
        input.validate()?;

        let existing = self.get(id).await?;

        let stored = match image {
            Some((name, bytes)) => Some(self.images.save("cuisines", &name, &bytes).await?),
            None => None,
        };
        let replaced = stored.is_some();

        let cuisine = self.repo.update(id, &input, stored).await?;

        if replaced {
            if let Some(ref old) = existing.image {
                self.images.delete(old).await;
            }
        }

        Ok(cuisine)
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
    use crate::repository::cuisine::MockCuisineRepository;
    use chrono::Utc;
    use mockall::predicate::*;

    fn sample_cuisine(id: i64) -> Cuisine {
        let now = Utc::now();
        Cuisine {
            id,
            name: "Vietnamese".to_string(),
            description: "Noodles and broth".to_string(),
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn test_service(
        repo: MockCuisineRepository,
    ) -> (CuisineService<MockCuisineRepository>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let service = CuisineService::new(Arc::new(repo), ImageStore::new(dir.path()));
        (service, dir)
    }

    #[tokio::test]
    async fn test_create_cuisine_with_image() {
        let mut mock = MockCuisineRepository::new();
        mock.expect_create().returning(|_, image| {
            let mut cuisine = sample_cuisine(1);
            cuisine.image = image;
            Ok(cuisine)
        });

        let (service, _dir) = test_service(mock);

        let input = CreateCuisineInput {
            name: "Vietnamese".to_string(),
            description: "Noodles and broth".to_string(),
        };
        let result = service
            .create(input, Some(("pho.png".to_string(), b"bytes".to_vec())))
            .await
            .unwrap();
        assert!(result.image.is_some());
        assert!(result.image.unwrap().starts_with("cuisines/"));
    }

    #[tokio::test]
    async fn test_update_cuisine_replaces_old_image() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());
        let old = images.save("cuisines", "old.png", b"old").await.unwrap();

        let mut mock = MockCuisineRepository::new();
        let old_clone = old.clone();
        mock.expect_find_by_id().with(eq(3)).returning(move |_| {
            let mut cuisine = sample_cuisine(3);
            cuisine.image = Some(old_clone.clone());
            Ok(Some(cuisine))
        });
        mock.expect_update().returning(|_, _, image| {
            let mut cuisine = sample_cuisine(3);
            cuisine.image = image;
            Ok(cuisine)
        });

        let service = CuisineService::new(Arc::new(mock), images.clone());

        let result = service
            .update(
                3,
                UpdateCuisineInput::default(),
                Some(("new.png".to_string(), b"new".to_vec())),
            )
            .await
            .unwrap();

        assert!(!images.full_path(&old).exists());
        assert!(images.full_path(&result.image.unwrap()).exists());
    }

    #[tokio::test]
    async fn test_delete_cuisine_not_found() {
        let mut mock = MockCuisineRepository::new();
        mock.expect_find_by_id().with(eq(9)).returning(|_| Ok(None));

        let (service, _dir) = test_service(mock);

        let result = service.delete(9).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
