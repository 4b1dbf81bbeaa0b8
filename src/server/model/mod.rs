//! Server-side models: application state and session values.

pub mod app;
pub mod session;
