//! Domain models

pub mod auth;
pub mod category;
pub mod common;
pub mod country;
pub mod cuisine;
pub mod currency;
pub mod newsletter;
pub mod restaurant;
pub mod role;
pub mod slider;
pub mod user;

pub use common::StringUuid;
