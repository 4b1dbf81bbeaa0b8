//! Declarative setup for tests.
//!
//! Every builder method is queued and executed during [`TestBuilder::build`], so tables are
//! always created before fixtures are inserted and fixtures before mock endpoints.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,

    // (auth_subject, email)
    users: Vec<(String, String)>,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    // (auth_subject, email, expected_requests)
    token_endpoints: Vec<(String, String, usize)>,
    invalid_credentials_endpoints: Vec<usize>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates an empty builder with no tables, fixtures or endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            users: Vec::new(),
            mock_builders: Vec::new(),
            token_endpoints: Vec::new(),
            invalid_credentials_endpoints: Vec::new(),
        }
    }

    /// Adds every application table to the test database.
    ///
    /// Tables are created parents first so foreign keys resolve: `app_user`, `common_area`,
    /// then the per-user resource tables.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Adds a single entity table to the test database.
    ///
    /// ```no_run
    /// use mirtilo_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), mirtilo_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(AppUser)
    ///     .with_table(Asset)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Inserts an `app_user` row during `build()`.
    pub fn with_user(mut self, auth_subject: impl Into<String>, email: impl Into<String>) -> Self {
        self.users.push((auth_subject.into(), email.into()));
        self
    }

    /// Mounts a password-grant token endpoint issuing a signed access token for the subject.
    pub fn with_token_endpoint(
        mut self,
        auth_subject: impl Into<String>,
        email: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.token_endpoints
            .push((auth_subject.into(), email.into(), expected_requests));
        self
    }

    /// Mounts a token endpoint rejecting every request with `invalid_grant`.
    pub fn with_invalid_credentials_endpoint(mut self, expected_requests: usize) -> Self {
        self.invalid_credentials_endpoints.push(expected_requests);
        self
    }

    /// Adds a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Creates configured tables, inserts fixtures, then mounts mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::JwtError)` - Signing a mock access token failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_user_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::AppUser),
                schema.create_table_from_entity(entity::prelude::CommonArea),
                schema.create_table_from_entity(entity::prelude::Asset),
                schema.create_table_from_entity(entity::prelude::MaintenanceRequest),
                schema.create_table_from_entity(entity::prelude::PreventiveMaintenance),
                schema.create_table_from_entity(entity::prelude::Supplier),
                schema.create_table_from_entity(entity::prelude::Reservation),
                schema.create_table_from_entity(entity::prelude::FinancialTransaction),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (auth_subject, email) in self.users {
            setup.user().insert_user(&auth_subject, &email).await?;
        }

        // Custom endpoints go first so tests can stack a failing mock ahead of a succeeding one
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (auth_subject, email, expected) in self.token_endpoints {
            mocks.push(
                setup
                    .auth()
                    .create_token_endpoint(&auth_subject, &email, expected)?,
            );
        }

        for expected in self.invalid_credentials_endpoints {
            mocks.push(setup.auth().create_invalid_credentials_endpoint(expected));
        }

        setup.mocks.extend(mocks);

        Ok(setup)
    }
}
