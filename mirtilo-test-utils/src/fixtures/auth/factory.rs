//! Pure helpers for minting access tokens the way the auth provider does.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::{
    constant::{TEST_JWT_AUDIENCE, TEST_JWT_SECRET},
    error::TestError,
};

/// Claims carried by access tokens issued by the mock auth server.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MockClaims {
    pub sub: String,
    pub email: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
    pub role: String,
}

/// Claims for `auth_subject` valid for the next hour.
pub fn mock_claims(auth_subject: &str, email: &str) -> MockClaims {
    let now = Utc::now();

    MockClaims {
        sub: auth_subject.to_string(),
        email: email.to_string(),
        aud: TEST_JWT_AUDIENCE.to_string(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
        role: "authenticated".to_string(),
    }
}

/// Signs `claims` with HS256 and [`TEST_JWT_SECRET`].
pub fn sign_claims(claims: &MockClaims) -> Result<String, TestError> {
    Ok(encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )?)
}

/// Signed access token for `auth_subject` valid for the next hour.
pub fn mock_access_token(auth_subject: &str, email: &str) -> Result<String, TestError> {
    sign_claims(&mock_claims(auth_subject, email))
}

/// Signed access token that expired an hour ago.
pub fn mock_expired_access_token(auth_subject: &str, email: &str) -> Result<String, TestError> {
    let mut claims = mock_claims(auth_subject, email);
    let past = Utc::now() - Duration::hours(2);
    claims.iat = past.timestamp();
    claims.exp = (past + Duration::hours(1)).timestamp();

    sign_claims(&claims)
}
