//! Typed wrappers over values kept in the session store.

pub mod user;
