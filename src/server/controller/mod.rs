//! HTTP controller endpoints for the Mirtilo web API.
//!
//! Handlers read the signed-in user from the session, delegate to a service and map the
//! result to a status code. Every handler carries a `#[utoipa::path]` so the OpenAPI
//! document is generated from the same source as the routes.

pub mod asset;
pub mod auth;
pub mod common_area;
pub mod financial;
pub mod maintenance;
pub mod preventive;
pub mod reservation;
pub mod supplier;
pub mod util;
