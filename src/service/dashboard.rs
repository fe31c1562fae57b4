//! Dashboard row counts

use crate::domain::restaurant::RestaurantQuery;
use crate::error::Result;
use crate::repository::{
    CategoryRepository, CountryRepository, CuisineRepository, CurrencyRepository,
    NewsletterRepository, RestaurantRepository, SliderRepository, UserRepository,
};
use serde::Serialize;
use std::sync::Arc;

/// Per-entity row counts for the admin dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCounts {
    pub restaurants: i64,
    pub categories: i64,
    pub cuisines: i64,
    pub countries: i64,
    pub currencies: i64,
    pub sliders: i64,
    pub newsletters: i64,
    pub users: i64,
}

pub struct DashboardService<
    R: RestaurantRepository,
    CaR: CategoryRepository,
    CuR: CuisineRepository,
    CoR: CountryRepository,
    CyR: CurrencyRepository,
    SR: SliderRepository,
    NR: NewsletterRepository,
    UR: UserRepository,
> {
    restaurant_repo: Arc<R>,
    category_repo: Arc<CaR>,
    cuisine_repo: Arc<CuR>,
    country_repo: Arc<CoR>,
    currency_repo: Arc<CyR>,
    slider_repo: Arc<SR>,
    newsletter_repo: Arc<NR>,
    user_repo: Arc<UR>,
}

impl<
        R: RestaurantRepository,
        CaR: CategoryRepository,
        CuR: CuisineRepository,
        CoR: CountryRepository,
        CyR: CurrencyRepository,
        SR: SliderRepository,
        NR: NewsletterRepository,
        UR: UserRepository,
    > DashboardService<R, CaR, CuR, CoR, CyR, SR, NR, UR>
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        restaurant_repo: Arc<R>,
        category_repo: Arc<CaR>,
        cuisine_repo: Arc<CuR>,
        country_repo: Arc<CoR>,
        currency_repo: Arc<CyR>,
        slider_repo: Arc<SR>,
        newsletter_repo: Arc<NR>,
        user_repo: Arc<UR>,
    ) -> Self {
        Self {
            restaurant_repo,
            category_repo,
            cuisine_repo,
            country_repo,
            currency_repo,
            slider_repo,
            newsletter_repo,
            user_repo,
        }
    }

    pub async fn counts(&self) -> Result<DashboardCounts> {
        Ok(DashboardCounts {
            restaurants: self
                .restaurant_repo
                .count_search(&RestaurantQuery::default())
                .await?,
            categories: self.category_repo.count().await?,
            cuisines: self.cuisine_repo.count().await?,
            countries: self.country_repo.count().await?,
            currencies: self.currency_repo.count(None).await?,
            sliders: self.slider_repo.count(None).await?,
            newsletters: self.newsletter_repo.count().await?,
            users: self.user_repo.count().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::category::MockCategoryRepository;
    use crate::repository::country::MockCountryRepository;
    use crate::repository::cuisine::MockCuisineRepository;
    use crate::repository::currency::MockCurrencyRepository;
    use crate::repository::newsletter::MockNewsletterRepository;
    use crate::repository::restaurant::MockRestaurantRepository;
    use crate::repository::slider::MockSliderRepository;
    use crate::repository::user::MockUserRepository;

    #[tokio::test]
    async fn test_dashboard_counts() {
        let mut restaurant_repo = MockRestaurantRepository::new();
        restaurant_repo.expect_count_search().returning(|_| Ok(12));
        let mut category_repo = MockCategoryRepository::new();
        category_repo.expect_count().returning(|| Ok(4));
        let mut cuisine_repo = MockCuisineRepository::new();
        cuisine_repo.expect_count().returning(|| Ok(6));
        let mut country_repo = MockCountryRepository::new();
        country_repo.expect_count().returning(|| Ok(2));
        let mut currency_repo = MockCurrencyRepository::new();
        currency_repo.expect_count().returning(|_| Ok(3));
        let mut slider_repo = MockSliderRepository::new();
        slider_repo.expect_count().returning(|_| Ok(5));
        let mut newsletter_repo = MockNewsletterRepository::new();
        newsletter_repo.expect_count().returning(|| Ok(40));
        let mut user_repo = MockUserRepository::new();
        user_repo.expect_count().returning(|| Ok(7));

        let service = DashboardService::new(
            Arc::new(restaurant_repo),
            Arc::new(category_repo),
            Arc::new(cuisine_repo),
            Arc::new(country_repo),
            Arc::new(currency_repo),
            Arc::new(slider_repo),
            Arc::new(newsletter_repo),
            Arc::new(user_repo),
        );

        let counts = service.counts().await.unwrap();
        assert_eq!(counts.restaurants, 12);
        assert_eq!(counts.newsletters, 40);
        assert_eq!(counts.users, 7);
    }
}
