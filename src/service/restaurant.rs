//! Restaurant business logic

use super::ImageUpload;
use crate::domain::common::StringUuid;
use crate::domain::restaurant::{
    CreateRestaurantInput, Restaurant, RestaurantQuery, RestaurantWithRelations,
    UpdateRestaurantInput,
};
use crate::error::{AppError, Result};
use crate::repository::{
    CategoryRepository, CountryRepository, CuisineRepository, RestaurantRepository,
};
use crate::storage::ImageStore;
use std::sync::Arc;
use validator::Validate;

pub struct RestaurantService<
    R: RestaurantRepository,
    CaR: CategoryRepository,
    CoR: CountryRepository,
    CuR: CuisineRepository,
> {
    repo: Arc<R>,
    category_repo: Arc<CaR>,
    country_repo: Arc<CoR>,
    cuisine_repo: Arc<CuR>,
    images: ImageStore,
}

impl<
        R: RestaurantRepository,
        CaR: CategoryRepository,
        CoR: CountryRepository,
        CuR: CuisineRepository,
    > RestaurantService<R, CaR, CoR, CuR>
{
    pub fn new(
        repo: Arc<R>,
        category_repo: Arc<CaR>,
        country_repo: Arc<CoR>,
        cuisine_repo: Arc<CuR>,
        images: ImageStore,
    ) -> Self {
        Self {
            repo,
            category_repo,
            country_repo,
            cuisine_repo,
            images,
        }
    }

    /// Reject requests referencing relation IDs that do not exist
    async fn verify_relation_ids(
        &self,
        category_ids: &[i64],
        country_ids: &[StringUuid],
        cuisine_ids: &[i64],
    ) -> Result<()> {
        if !category_ids.is_empty() {
            let found = self.category_repo.find_by_ids(category_ids).await?;
            if found.len() != category_ids.len() {
                return Err(AppError::BadRequest(
                    "One or more category IDs do not exist".to_string(),
                ));
            }
        }
        if !country_ids.is_empty() {
            let found = self.country_repo.find_by_ids(country_ids).await?;
            if found.len() != country_ids.len() {
                return Err(AppError::BadRequest(
                    "One or more country IDs do not exist".to_string(),
                ));
            }
        }
        if !cuisine_ids.is_empty() {
            let found = self.cuisine_repo.find_by_ids(cuisine_ids).await?;
            if found.len() != cuisine_ids.len() {
                return Err(AppError::BadRequest(
                    "One or more cuisine IDs do not exist".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub async fn create(
        &self,
        input: CreateRestaurantInput,
        image: Option<ImageUpload>,
    ) -> Result<RestaurantWithRelations> {
        input.validate()?;
        self.verify_relation_ids(&input.category_ids, &input.country_ids, &input.cuisine_ids)
            .await?;

        let stored = match image {
            Some((name, bytes)) => Some(self.images.save("restaurants", &name, &bytes).await?),
            None => None,
        };

        let restaurant = self.repo.create(&input, stored).await?;
        self.with_relations(restaurant).await
    }

    pub async fn get(&self, id: StringUuid) -> Result<RestaurantWithRelations> {
        let restaurant = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", id)))?;
        self.with_relations(restaurant).await
    }

    /// Filtered, paginated listing. An empty query lists everything
    /// newest-first; filters with no matches return an empty page.
    pub async fn search(
        &self,
        query: RestaurantQuery,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<RestaurantWithRelations>, i64)> {
        let offset = (page - 1) * per_page;
        let restaurants = self.repo.search(&query, offset, per_page).await?;
        let total = self.repo.count_search(&query).await?;

        let mut result = Vec::with_capacity(restaurants.len());
        for restaurant in restaurants {
            result.push(self.with_relations(restaurant).await?);
        }
        Ok((result, total))
    }

    pub async fn update(
        &self,
        id: StringUuid,
        input: UpdateRestaurantInput,
        image: Option<ImageUpload>,
    ) -> Result<RestaurantWithRelations> {
        input.validate()?;

        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", id)))?;

        self.verify_relation_ids(
            input.category_ids.as_deref().unwrap_or(&[]),
            input.country_ids.as_deref().unwrap_or(&[]),
            input.cuisine_ids.as_deref().unwrap_or(&[]),
        )
        .await?;

        let stored = match image {
            Some((name, bytes)) => Some(self.images.save("restaurants", &name, &bytes).await?),
            None => None,
        };
        let replaced = stored.is_some();

        let restaurant = self.repo.update(id, &input, stored).await?;

        if replaced {
            if let Some(ref old) = existing.image {
                self.images.delete(old).await;
            }
        }

        self.with_relations(restaurant).await
    }

    pub async fn delete(&self, id: StringUuid) -> Result<()> {
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Restaurant {} not found", id)))?;

        self.repo.delete(id).await?;

        if let Some(ref image) = existing.image {
            self.images.delete(image).await;
        }
        Ok(())
    }

    async fn with_relations(&self, restaurant: Restaurant) -> Result<RestaurantWithRelations> {
        let categories = self.repo.find_categories(restaurant.id).await?;
        let countries = self.repo.find_countries(restaurant.id).await?;
        let cuisines = self.repo.find_cuisines(restaurant.id).await?;
        Ok(RestaurantWithRelations {
            restaurant,
            categories,
            countries,
            cuisines,
        })
    }
}
