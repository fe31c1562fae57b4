//! Business logic layer

pub mod auth;
pub mod category;
pub mod country;
pub mod cuisine;
pub mod currency;
pub mod dashboard;
pub mod newsletter;
pub mod restaurant;
pub mod role;
pub mod slider;
pub mod user;

pub use auth::AuthService;
pub use category::CategoryService;
pub use country::CountryService;
pub use cuisine::CuisineService;
pub use currency::CurrencyService;
pub use dashboard::DashboardService;
pub use newsletter::NewsletterService;
pub use restaurant::RestaurantService;
pub use role::RoleService;
pub use slider::SliderService;
pub use user::UserService;

/// An uploaded image: original file name plus raw bytes
pub type ImageUpload = (String, Vec<u8>);
