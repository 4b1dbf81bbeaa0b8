//! Service layer for business logic.
//!
//! Services validate input, enforce ownership through the user-scoped repositories, map
//! entity rows into the shared DTOs and, for reservations, detect double bookings.

pub mod asset;
pub mod auth;
pub mod common_area;
pub mod financial;
pub mod maintenance;
pub mod preventive;
pub mod reservation;
pub mod supplier;
pub mod user;
