pub mod auth;
pub mod form;
pub mod location;
pub mod navbar;
pub mod page;
pub mod toasts;

pub use navbar::Navbar;
pub use page::Page;
pub use toasts::Toasts;
