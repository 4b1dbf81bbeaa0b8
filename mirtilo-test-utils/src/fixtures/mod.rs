//! Fixture helpers used while a test runs.
//!
//! - `auth` - signed access tokens and token endpoint mocks
//! - `condo` - common areas, reservations, assets and financial transactions
//! - `user` - `app_user` records

pub mod auth;
pub mod condo;
pub mod user;
