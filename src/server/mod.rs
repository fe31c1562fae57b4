//! Server initialization and routing

use crate::api;
use crate::config::Config;
use crate::jwt::JwtManager;
use crate::migration;
use crate::repository::{
    CategoryRepositoryImpl, CountryRepositoryImpl, CuisineRepositoryImpl, CurrencyRepositoryImpl,
    NewsletterRepositoryImpl, RestaurantRepositoryImpl, RoleRepositoryImpl, SliderRepositoryImpl,
    UserRepositoryImpl,
};
use crate::service::{
    AuthService, CategoryService, CountryService, CuisineService, CurrencyService,
    DashboardService, NewsletterService, RestaurantService, RoleService, SliderService,
    UserService,
};
use crate::storage::ImageStore;
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::{mysql::MySqlPoolOptions, MySqlPool};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: MySqlPool,
    pub jwt: JwtManager,
    pub auth_service: Arc<AuthService<UserRepositoryImpl, RoleRepositoryImpl>>,
    pub restaurant_service: Arc<
        RestaurantService<
            RestaurantRepositoryImpl,
            CategoryRepositoryImpl,
            CountryRepositoryImpl,
            CuisineRepositoryImpl,
        >,
    >,
    pub category_service: Arc<CategoryService<CategoryRepositoryImpl>>,
    pub cuisine_service: Arc<CuisineService<CuisineRepositoryImpl>>,
    pub country_service: Arc<CountryService<CountryRepositoryImpl>>,
    pub currency_service: Arc<CurrencyService<CurrencyRepositoryImpl>>,
    pub slider_service: Arc<SliderService<SliderRepositoryImpl>>,
    pub newsletter_service: Arc<NewsletterService<NewsletterRepositoryImpl>>,
    pub user_service: Arc<UserService<UserRepositoryImpl, RoleRepositoryImpl>>,
    pub role_service: Arc<RoleService<RoleRepositoryImpl>>,
    pub dashboard_service: Arc<
        DashboardService<
            RestaurantRepositoryImpl,
            CategoryRepositoryImpl,
            CuisineRepositoryImpl,
            CountryRepositoryImpl,
            CurrencyRepositoryImpl,
            SliderRepositoryImpl,
            NewsletterRepositoryImpl,
            UserRepositoryImpl,
        >,
    >,
}

/// Run the server
pub async fn run(config: Config) -> Result<()> {
    migration::run_migrations(&config).await?;

    let db_pool = MySqlPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await?;

    info!("Connected to database");

    let restaurant_repo = Arc::new(RestaurantRepositoryImpl::new(db_pool.clone()));
    let category_repo = Arc::new(CategoryRepositoryImpl::new(db_pool.clone()));
    let cuisine_repo = Arc::new(CuisineRepositoryImpl::new(db_pool.clone()));
    let country_repo = Arc::new(CountryRepositoryImpl::new(db_pool.clone()));
    let currency_repo = Arc::new(CurrencyRepositoryImpl::new(db_pool.clone()));
    let slider_repo = Arc::new(SliderRepositoryImpl::new(db_pool.clone()));
    let newsletter_repo = Arc::new(NewsletterRepositoryImpl::new(db_pool.clone()));
    let user_repo = Arc::new(UserRepositoryImpl::new(db_pool.clone()));
    let role_repo = Arc::new(RoleRepositoryImpl::new(db_pool.clone()));

    let jwt = JwtManager::new(config.jwt.clone());
    let images = ImageStore::new(config.uploads.root_dir.clone());

    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        role_repo.clone(),
        jwt.clone(),
        config.jwt.access_token_ttl_secs,
    ));
    let restaurant_service = Arc::new(RestaurantService::new(
        restaurant_repo.clone(),
        category_repo.clone(),
        country_repo.clone(),
        cuisine_repo.clone(),
        images.clone(),
    ));
    let category_service = Arc::new(CategoryService::new(category_repo.clone(), images.clone()));
    let cuisine_service = Arc::new(CuisineService::new(cuisine_repo.clone(), images.clone()));
    let country_service = Arc::new(CountryService::new(country_repo.clone(), images.clone()));
    let currency_service = Arc::new(CurrencyService::new(currency_repo.clone()));
    let slider_service = Arc::new(SliderService::new(slider_repo.clone(), images.clone()));
    let newsletter_service = Arc::new(NewsletterService::new(newsletter_repo.clone()));
    let user_service = Arc::new(UserService::new(user_repo.clone(), role_repo.clone()));
    let role_service = Arc::new(RoleService::new(role_repo.clone()));
    let dashboard_service = Arc::new(DashboardService::new(
        restaurant_repo,
        category_repo,
        cuisine_repo,
        country_repo,
        currency_repo,
        slider_repo,
        newsletter_repo,
        user_repo,
    ));

    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool,
        jwt,
        auth_service,
        restaurant_service,
        category_service,
        cuisine_service,
        country_service,
        currency_service,
        slider_service,
        newsletter_service,
        user_service,
        role_service,
        dashboard_service,
    };

    let app = build_router(state);

    let http_addr = config.http_addr();
    let listener = TcpListener::bind(&http_addr).await?;
    info!("HTTP server started on {}", http_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the HTTP router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health::health_check))
        // Auth endpoints
        .route("/api/v1/auth/register", post(api::auth::register))
        .route("/api/v1/auth/login", post(api::auth::login))
        .route("/api/v1/auth/refresh", post(api::auth::refresh))
        .route("/api/v1/auth/logout", post(api::auth::logout))
        // Restaurant endpoints; fixed paths registered before /{id}
        .route(
            "/api/v1/restaurants",
            get(api::restaurant::list_restaurants).post(api::restaurant::create_restaurant),
        )
        .route(
            "/api/v1/restaurants/search",
            get(api::restaurant::search_restaurants),
        )
        .route(
            "/api/v1/restaurants/by-category",
            get(api::restaurant::restaurants_by_category),
        )
        .route(
            "/api/v1/restaurants/by-country",
            get(api::restaurant::restaurants_by_country),
        )
        .route(
            "/api/v1/restaurants/by-cuisine",
            get(api::restaurant::restaurants_by_cuisine),
        )
        .route(
            "/api/v1/restaurants/{id}",
            get(api::restaurant::get_restaurant)
                .patch(api::restaurant::update_restaurant)
                .delete(api::restaurant::delete_restaurant),
        )
        // Category endpoints
        .route(
            "/api/v1/categories",
            get(api::category::list_categories).post(api::category::create_category),
        )
        .route(
            "/api/v1/categories/{id}",
            get(api::category::get_category)
                .patch(api::category::update_category)
                .delete(api::category::delete_category),
        )
        // Cuisine endpoints
        .route(
            "/api/v1/cuisines",
            get(api::cuisine::list_cuisines).post(api::cuisine::create_cuisine),
        )
        .route(
            "/api/v1/cuisines/{id}",
            get(api::cuisine::get_cuisine)
                .patch(api::cuisine::update_cuisine)
                .delete(api::cuisine::delete_cuisine),
        )
        // Country endpoints
        .route(
            "/api/v1/countries",
            get(api::country::list_countries).post(api::country::create_country),
        )
        .route(
            "/api/v1/countries/{id}",
            get(api::country::get_country)
                .patch(api::country::update_country)
                .delete(api::country::delete_country),
        )
        // Currency endpoints
        .route(
            "/api/v1/currencies",
            get(api::currency::list_currencies).post(api::currency::create_currency),
        )
        .route(
            "/api/v1/currencies/{id}",
            get(api::currency::get_currency)
                .patch(api::currency::update_currency)
                .delete(api::currency::delete_currency),
        )
        // Slider endpoints
        .route(
            "/api/v1/sliders",
            get(api::slider::list_sliders).post(api::slider::create_slider),
        )
        .route(
            "/api/v1/sliders/{id}",
            get(api::slider::get_slider)
                .patch(api::slider::update_slider)
                .delete(api::slider::delete_slider),
        )
        // Newsletter endpoints
        .route(
            "/api/v1/newsletter",
            get(api::newsletter::list_subscriptions).post(api::newsletter::subscribe),
        )
        .route(
            "/api/v1/newsletter/{id}",
            get(api::newsletter::get_subscription).delete(api::newsletter::delete_subscription),
        )
        // User endpoints
        .route(
            "/api/v1/users",
            get(api::user::list_users).post(api::user::create_user),
        )
        .route(
            "/api/v1/users/{id}",
            get(api::user::get_user)
                .patch(api::user::update_user)
                .delete(api::user::delete_user),
        )
        .route(
            "/api/v1/users/{id}/roles/{role_id}",
            post(api::user::assign_role).delete(api::user::remove_role),
        )
        // Role endpoints
        .route(
            "/api/v1/roles",
            get(api::role::list_roles).post(api::role::create_role),
        )
        .route(
            "/api/v1/roles/{id}",
            get(api::role::get_role)
                .patch(api::role::update_role)
                .delete(api::role::delete_role),
        )
        // Dashboard
        .route("/api/v1/dashboard", get(api::dashboard::dashboard_counts))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .with_state(state)
}
