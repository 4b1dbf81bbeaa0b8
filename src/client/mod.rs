pub mod api;
pub mod app;
pub mod components;
pub mod hooks;
pub mod resource;
pub mod router;
pub mod routes;
pub mod store;

pub use app::App;
