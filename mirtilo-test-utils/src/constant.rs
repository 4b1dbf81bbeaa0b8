//! Placeholder credentials shared by every test that talks to the mock auth server.
//!
//! None of these values are real secrets.

/// OAuth2 client ID registered with the mock auth server.
pub static TEST_AUTH_CLIENT_ID: &str = "mirtilo_client_id";

/// Secret used to sign and verify access tokens minted during tests.
pub static TEST_JWT_SECRET: &str = "mirtilo-test-jwt-secret-with-enough-entropy";

/// Audience claim expected on access tokens.
pub static TEST_JWT_AUDIENCE: &str = "authenticated";

/// Path of the token endpoint on the mock auth server.
pub static TEST_TOKEN_PATH: &str = "/token";

/// Subject of the default test user.
pub static TEST_AUTH_SUBJECT: &str = "7f0c3a4e-2d1b-4c55-9a8e-1f2b3c4d5e6f";

/// Email of the default test user.
pub static TEST_EMAIL: &str = "sindico@example.com";

/// Password accepted by the mock token endpoint.
pub static TEST_PASSWORD: &str = "correct horse battery staple";
