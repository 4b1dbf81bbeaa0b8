//! Client for the external identity provider.
//!
//! Sign-in is an OAuth2 resource-owner password grant against the provider's token
//! endpoint. The access token it returns is an HS256 JWT signed with a secret shared with
//! this server, which is verified locally to learn the subject and email of the user.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use oauth2::{
    basic::BasicClient, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
    RequestTokenError, ResourceOwnerPassword, ResourceOwnerUsername, TokenResponse, TokenUrl,
};
use serde::Deserialize;

use crate::server::{
    config::Config,
    error::{auth::AuthError, Error},
};

type PasswordGrantClient =
    BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Claims read from a verified access token.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessClaims {
    /// Stable identifier of the user at the identity provider
    pub sub: String,
    pub email: Option<String>,
    pub exp: i64,
}

#[derive(Clone)]
pub struct AuthProvider {
    oauth_client: PasswordGrantClient,
    http_client: oauth2::reqwest::Client,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthProvider {
    /// Builds a provider client for the given token endpoint
    ///
    /// # Returns
    /// - `Ok(AuthProvider)` - Client ready to exchange credentials
    /// - `Err(Error::UrlParseError)` - `token_url` is not a valid URL
    /// - `Err(Error::HttpClientError)` - The HTTP client could not be built
    pub fn new(
        token_url: &str,
        client_id: &str,
        client_secret: Option<&str>,
        jwt_secret: &str,
        audience: &str,
    ) -> Result<Self, Error> {
        let mut oauth_client = BasicClient::new(ClientId::new(client_id.to_string()))
            .set_token_uri(TokenUrl::new(token_url.to_string())?);

        if let Some(secret) = client_secret {
            oauth_client = oauth_client.set_client_secret(ClientSecret::new(secret.to_string()));
        }

        // Following redirects on the token endpoint would allow SSRF
        let http_client = oauth2::reqwest::ClientBuilder::new()
            .redirect(oauth2::reqwest::redirect::Policy::none())
            .build()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);

        Ok(Self {
            oauth_client,
            http_client,
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            validation,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(
            &config.auth_token_url,
            &config.auth_client_id,
            config.auth_client_secret.as_deref(),
            &config.auth_jwt_secret,
            &config.auth_jwt_audience,
        )
    }

    /// Exchanges an email and password for an access token
    ///
    /// # Returns
    /// - `Ok(String)` - Access token issued by the provider
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Provider rejected the grant
    /// - `Err(Error::OAuthTokenError)` - Network failure or malformed provider response
    pub async fn exchange_password(&self, email: &str, password: &str) -> Result<String, Error> {
        let username = ResourceOwnerUsername::new(email.to_string());
        let password = ResourceOwnerPassword::new(password.to_string());

        let token = self
            .oauth_client
            .exchange_password(&username, &password)
            .request_async(&self.http_client)
            .await
            .map_err(|err| match err {
                RequestTokenError::ServerResponse(_) => {
                    Error::AuthError(AuthError::InvalidCredentials)
                }
                err => Error::OAuthTokenError(err),
            })?;

        Ok(token.access_token().secret().to_string())
    }

    /// Verifies signature, audience and expiry of an access token
    pub fn validate_token(&self, access_token: &str) -> Result<AccessClaims, Error> {
        let token = decode::<AccessClaims>(access_token, &self.decoding_key, &self.validation)
            .map_err(|err| AuthError::InvalidToken(err.to_string()))?;

        if token.claims.sub.trim().is_empty() {
            return Err(AuthError::MissingClaim("sub").into());
        }

        Ok(token.claims)
    }
}
