//! Category business logic

use super::ImageUpload;
use crate::domain::category::{Category, CreateCategoryInput, UpdateCategoryInput};
use crate::error::{AppError, Result};
use crate::repository::CategoryRepository;
use crate::storage::ImageStore;
use std::sync::Arc;
use validator::Validate;

pub struct CategoryService<R: CategoryRepository> {
    repo: Arc<R>,
    images: ImageStore,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repo: Arc<R>, images: ImageStore) -> Self {
        Self { repo, images }
    }

    pub async fn create(
        &self,
        input: CreateCategoryInput,
        image: Option<ImageUpload>,
    ) -> Result<Category> {
        input.validate()?;

        let stored = match image {
            Some((name, bytes)) => Some(self.images.save("categories", &name, &bytes).await?),
            None => None,
        };

        self.repo.create(&input, stored).await
    }

    pub async fn get(&self, id: i64) -> Result<Category> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn list(&self, page: i64, per_page: i64) -> Result<(Vec<Category>, i64)> {
        let offset = (page - 1) * per_page;
        let categories = self.repo.list(offset, per_page).await?;
        let total = self.repo.count().await?;
        Ok((categories, total))
    }

    pub async fn update(
        &self,
        id: i64,
        input: UpdateCategoryInput,
        image: Option<ImageUpload>,
    ) -> Result<Category> {
        input.validate()?;

        let existing = self.get(id).await?;

        let stored = match image {
            Some((name, bytes)) => Some(self.images.save("categories", &name, &bytes).await?),
            None => None,
        };
        let replaced = stored.is_some();

        let category = self.repo.update(id, &input, stored).await?;

        if replaced {
            if let Some(ref old) = existing.image {
                self.images.delete(old).await;
            }
        }

        Ok(category)
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
    use crate::repository::category::MockCategoryRepository;
    use chrono::Utc;
    use mockall::predicate::*;

    fn sample_category(id: i64, image: Option<String>) -> Category {
        let now = Utc::now();
        Category {
            id,
            name: "Fine Dining".to_string(),
            description: "Upscale restaurants".to_string(),
            image,
            created_at: now,
            updated_at: now,
        }
    }

    fn test_service(repo: MockCategoryRepository) -> (CategoryService<MockCategoryRepository>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let service = CategoryService::new(Arc::new(repo), ImageStore::new(dir.path()));
        (service, dir)
    }

    #[tokio::test]
    async fn test_create_category_success() {
        let mut mock = MockCategoryRepository::new();
        mock.expect_create().returning(|input, image| {
            let mut category = sample_category(1, image);
            category.name = input.name.clone();
            Ok(category)
        });

        let (service, _dir) = test_service(mock);

        let input = CreateCategoryInput {
            name: "Fine Dining".to_string(),
            description: "Upscale restaurants".to_string(),
        };
        let result = service.create(input, None).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "Fine Dining");
    }

    #[tokio::test]
    async fn test_create_category_invalid_input() {
        let mock = MockCategoryRepository::new();
        let (service, _dir) = test_service(mock);

        let input = CreateCategoryInput {
            name: String::new(),
            description: "desc".to_string(),
        };
        let result = service.create(input, None).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_category_not_found() {
        let mut mock = MockCategoryRepository::new();
        mock.expect_find_by_id().with(eq(42)).returning(|_| Ok(None));

        let (service, _dir) = test_service(mock);

        let result = service.get(42).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_category_removes_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let images = ImageStore::new(dir.path());
        let stored = images
            .save("categories", "old.png", b"bytes")
            .await
            .unwrap();
        assert!(images.full_path(&stored).exists());

        let mut mock = MockCategoryRepository::new();
        let stored_clone = stored.clone();
        mock.expect_find_by_id()
            .with(eq(7))
            .returning(move |_| Ok(Some(sample_category(7, Some(stored_clone.clone())))));
        mock.expect_delete().with(eq(7)).returning(|_| Ok(()));

        let service = CategoryService::new(Arc::new(mock), images.clone());

        let result = service.delete(7).await;
        assert!(result.is_ok());
        assert!(!images.full_path(&stored).exists());
    }

    #[tokio::test]
    async fn test_list_categories() {
        let mut mock = MockCategoryRepository::new();
        mock.expect_list()
            .with(eq(0), eq(10))
            .returning(|_, _| Ok(vec![sample_category(1, None), sample_category(2, None)]));
        mock.expect_count().returning(|| Ok(2));

        let (service, _dir) = test_service(mock);

        let (categories, total) = service.list(1, 10).await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(total, 2);
    }
}
