//! `SeaORM` Entity definitions for the Mirtilo database schema.

pub mod prelude;

pub mod app_user;
pub mod asset;
pub mod common_area;
pub mod financial_transaction;
pub mod maintenance_request;
pub mod preventive_maintenance;
pub mod reservation;
pub mod supplier;
