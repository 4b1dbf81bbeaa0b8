//! Authentication against the external identity provider.

pub mod login;
pub mod provider;
