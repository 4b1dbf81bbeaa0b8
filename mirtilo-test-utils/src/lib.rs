//! Shared test harness for the Mirtilo workspace.
//!
//! Tests follow two phases: a [`TestBuilder`] declares tables, fixtures and mock endpoints,
//! then the resulting [`TestContext`] exposes the in-memory database, a session backed by
//! a memory store and fixture helpers used while the test runs.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*, fixtures::auth::factory, test_setup_with_tables, test_setup_with_user_tables,
        TestBuilder, TestContext, TestError,
    };
}

/// Builds a [`TestContext`] with the provided entity tables.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Builds a [`TestContext`] with every application table plus any extra entities provided.
#[macro_export]
macro_rules! test_setup_with_user_tables {
    () => {{
        $crate::TestBuilder::new().with_user_tables().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            .with_user_tables()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
