//! Data access layer

pub mod category;
pub mod country;
pub mod cuisine;
pub mod currency;
pub mod newsletter;
pub mod restaurant;
pub mod role;
pub mod slider;
pub mod user;

pub use category::{CategoryRepository, CategoryRepositoryImpl};
pub use country::{CountryRepository, CountryRepositoryImpl};
pub use cuisine::{CuisineRepository, CuisineRepositoryImpl};
pub use currency::{CurrencyRepository, CurrencyRepositoryImpl};
pub use newsletter::{NewsletterRepository, NewsletterRepositoryImpl};
pub use restaurant::{RestaurantRepository, RestaurantRepositoryImpl};
pub use role::{RoleRepository, RoleRepositoryImpl};
pub use slider::{SliderRepository, SliderRepositoryImpl};
pub use user::{UserRepository, UserRepositoryImpl};
