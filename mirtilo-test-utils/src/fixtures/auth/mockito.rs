//! Mock token endpoints for the resource-owner password grant.

use mockito::Mock;
use serde_json::json;

use crate::{
    constant::TEST_TOKEN_PATH,
    error::TestError,
    fixtures::auth::{factory::mock_access_token, AuthFixtures},
};

impl<'a> AuthFixtures<'a> {
    /// Mounts `POST /token` answering with a bearer access token signed for `auth_subject`.
    pub fn create_token_endpoint(
        &mut self,
        auth_subject: &str,
        email: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let access_token = mock_access_token(auth_subject, email)?;

        self.create_token_endpoint_with_body(
            200,
            json!({
                "access_token": access_token,
                "token_type": "bearer",
                "expires_in": 3600,
                "refresh_token": "refresh_token",
            }),
            expected_requests,
        )
    }

    /// Mounts `POST /token` rejecting the grant the way providers report a bad password.
    pub fn create_invalid_credentials_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_TOKEN_PATH)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "error": "invalid_grant",
                    "error_description": "Invalid login credentials",
                })
                .to_string(),
            )
            .expect(expected_requests)
            .create()
    }

    /// Mounts `POST /token` answering with an arbitrary JSON body.
    pub fn create_token_endpoint_with_body(
        &mut self,
        status: usize,
        body: serde_json::Value,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        Ok(self
            .setup
            .server
            .mock("POST", TEST_TOKEN_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&body)?)
            .expect(expected_requests)
            .create())
    }
}
