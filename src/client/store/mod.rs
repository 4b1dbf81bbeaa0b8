pub mod toast;
pub mod user;
