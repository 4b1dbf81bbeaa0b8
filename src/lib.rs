//! Condominium management: assets, maintenance, suppliers, common-area reservations and
//! finances.

pub mod model;

#[cfg(feature = "server")]
pub mod server;
