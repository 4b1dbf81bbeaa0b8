//! Server half of the Mirtilo application.
//!
//! An axum API over sea-orm, with the signed-in user kept in a tower-sessions session and
//! sign-in delegated to an external identity provider. Requests flow controller → service
//! → repository; the DTOs and validation rules they exchange live in the shared
//! [`crate::model`] module.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
