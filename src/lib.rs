//! DineMap Core Service
//!
//! Administrative backend for a restaurant directory. Provides REST CRUD
//! over restaurants and their related entities (categories, countries,
//! cuisines, currencies, sliders, newsletter subscriptions, users and
//! roles), JWT authentication with refresh token rotation, image uploads
//! and a filtered restaurant search.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod migration;
pub mod repository;
pub mod server;
pub mod service;
pub mod storage;

pub use config::Config;
pub use error::{AppError, Result};
