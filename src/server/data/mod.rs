//! Repositories over the sea-orm entities.
//!
//! Every repository borrows a `ConnectionTrait` so it works on a plain connection or inside
//! a transaction. Repositories for user-owned tables scope every read and write by
//! `user_id`; a row belonging to someone else behaves exactly like a missing row.

pub mod asset;
pub mod common_area;
pub mod financial_transaction;
pub mod maintenance_request;
pub mod preventive_maintenance;
pub mod reservation;
pub mod supplier;
pub mod user;
