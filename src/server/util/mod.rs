//! Helpers shared by services and controllers.

pub mod parse;
