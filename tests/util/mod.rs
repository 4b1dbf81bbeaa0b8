//! Wiring between the shared test harness and the server's application state.

use axum::{body::to_bytes, response::Response};
use mirtilo::server::{
    model::{
        app::AppState,
        session::user::{SessionUserId, SESSION_USER_ID_KEY},
    },
    service::auth::provider::AuthProvider,
};
use mirtilo_test_utils::prelude::*;
use serde::de::DeserializeOwned;

pub trait TestContextExt {
    /// Application state over the test database, authenticating against the mock server
    fn to_app_state(&self) -> AppState;

    /// Inserts a user and stores its ID in the test session, returning the ID
    async fn sign_in(&mut self, auth_subject: &str, email: &str) -> Result<i32, TestError>;
}

impl TestContextExt for TestContext {
    fn to_app_state(&self) -> AppState {
        let auth = AuthProvider::new(
            &self.token_url(),
            TEST_AUTH_CLIENT_ID,
            None,
            TEST_JWT_SECRET,
            TEST_JWT_AUDIENCE,
        )
        .expect("Failed to build auth provider for mock server");

        AppState {
            db: self.db.clone(),
            auth,
        }
    }

    async fn sign_in(&mut self, auth_subject: &str, email: &str) -> Result<i32, TestError> {
        let user = self.user().insert_user(auth_subject, email).await?;

        self.session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user.id))
            .await?;

        Ok(user.id)
    }
}

/// Reads a JSON response body
pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to parse response body")
}
