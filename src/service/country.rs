//! Country business logic

use super::ImageUpload;
use crate::domain::common::StringUuid;
use crate::domain::country::{Country, CreateCountryInput, UpdateCountryInput};
use crate::error::{AppError, Result};
use crate::repository::CountryRepository;
use crate::storage::ImageStore;
use std::sync::Arc;
use validator::Validate;

pub struct CountryService<R: CountryRepository> {
    repo: Arc<R>,
    images: ImageStore,
}

impl<R: CountryRepository> CountryService<R> {
    pub fn new(repo: Arc<R>, images: ImageStore) -> Self {
        Self { repo, images }
    }

    pub async fn create(
        &self,
        input: CreateCountryInput,
        flag: Option<ImageUpload>,
    ) -> Result<Country> {
        input.validate()?;

        if self.repo.find_by_name(&input.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Country '{}' already exists",
                input.name
            )));
        }

        let stored = match flag {
            Some((name, bytes)) => Some(self.images.save("countries", &name, &bytes).await?),
            None => None,
        };

        self.repo.create(&input, stored).await
    }

    pub async fn get(&self, id: StringUuid) -> Result<Country> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Country {} not found", id)))
    }

    pub async fn list(&self, page: i64, per_page: i64) -> Result<(Vec<Country>, i64)> {
        let offset = (page - 1) * per_page;
        let countries = self.repo.list(offset, per_page).await?;
        let total = self.repo.count().await?;
        Ok((countries, total))
    }

    pub async fn update(
        &self,
        id: StringUuid,
        input: UpdateCountryInput,
        flag: Option<ImageUpload>,
    ) -> Result<Country> {
        input.validate()?;

        let existing = self.get(id).await?;

        // Renames re-checked against the unique name
        if let Some(ref name) = input.name {
            if name != &existing.name {
                if self.repo.find_by_name(name).await?.is_some() {
                    return Err(AppError::Conflict(format!(
                        "Country '{}' already exists",
                        name
                    )));
                }
            }
        }

        let stored = match flag {
            Some((name, bytes)) => Some(self.images.save("countries", &name, &bytes).await?),
            None => None,
        };
        let replaced = stored.is_some();

        let country = self.repo.update(id, &input, stored).await?;

        if replaced {
            if let Some(ref old) = existing.flag {
                self.images.delete(old).await;
            }
        }

        Ok(country)
    }

    pub async fn delete(&self, id: StringUuid) -> Result<()> {
        let existing = self.get(id).await?;
        self.repo.delete(id).await?;

        if let Some(ref flag) = existing.flag {
            self.images.delete(flag).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::country::MockCountryRepository;
    use mockall::predicate::*;

    fn test_service(
        repo: MockCountryRepository,
    ) -> (CountryService<MockCountryRepository>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let service = CountryService::new(Arc::new(repo), ImageStore::new(dir.path()));
        (service, dir)
    }

    #[tokio::test]
    async fn test_create_country_success() {
        let mut mock = MockCountryRepository::new();
        mock.expect_find_by_name()
            .with(eq("Cambodia"))
            .returning(|_| Ok(None));
        mock.expect_create().returning(|input, flag| {
            Ok(Country {
                name: input.name.clone(),
                flag,
                ..Default::default()
            })
        });

        let (service, _dir) = test_service(mock);

        let input = CreateCountryInput {
            name: "Cambodia".to_string(),
            description: None,
        };
        let result = service.create(input, None).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().name, "Cambodia");
    }

    #[tokio::test]
    async fn test_create_country_duplicate_name() {
        let mut mock = MockCountryRepository::new();
        mock.expect_find_by_name()
            .with(eq("Cambodia"))
            .returning(|_| Ok(Some(Country::default())));

        let (service, _dir) = test_service(mock);

        let input = CreateCountryInput {
            name: "Cambodia".to_string(),
            description: None,
        };
        let result = service.create(input, None).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_country_rename_conflict() {
        let mut mock = MockCountryRepository::new();
        let country = Country {
            name: "Cambodia".to_string(),
            ..Default::default()
        };
        let id = country.id;
        let country_clone = country.clone();

        mock.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(country_clone.clone())));
        mock.expect_find_by_name()
            .with(eq("Thailand"))
            .returning(|_| Ok(Some(Country::default())));

        let (service, _dir) = test_service(mock);

        let input = UpdateCountryInput {
            name: Some("Thailand".to_string()),
            description: None,
        };
        let result = service.update(id, input, None).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
