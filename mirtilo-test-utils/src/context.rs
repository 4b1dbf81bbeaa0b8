//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! The context owns an in-memory SQLite database, a mock HTTP server standing in for the
//! external auth provider and a session backed by a memory store.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_TOKEN_PATH, error::TestError};

/// Test environment built by [`TestBuilder`](crate::TestBuilder).
///
/// ```ignore
/// let mut test = TestBuilder::new().with_user_tables().build().await?;
///
/// let user = test.user().insert_user("subject", "email@example.com").await?;
/// let area = test.condo().insert_common_area(user.id, "Salão de Festas").await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by a memory store
    pub session: Session,

    /// Mock HTTP server standing in for the auth provider
    pub(crate) server: ServerGuard,
    /// Mocks created during setup, asserted by [`TestContext::assert_mocks`]
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base URL of the mock auth server
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Token endpoint URL on the mock auth server
    pub fn token_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_TOKEN_PATH)
    }

    /// Asserts every mock created during setup was called the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called as expected
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
