//! Integration tests calling the axum handlers directly with extracted arguments.

mod asset;
mod auth;
mod common_area;
mod financial;
mod reservation;
