use sea_orm::DatabaseConnection;

use crate::{
    model::user::{LoginDto, UserDto},
    server::{
        error::Error,
        service::{auth::provider::AuthProvider, user::UserService},
    },
};

pub struct LoginService<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthProvider,
}

impl<'a> LoginService<'a> {
    /// Creates a new instance of [`LoginService`]
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthProvider) -> Self {
        Self { db, auth }
    }

    /// Signs a user in with the identity provider
    ///
    /// Exchanges the credentials for an access token, verifies it and maps its subject to
    /// a local user, creating one on first sign-in.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The signed-in user
    /// - `Err(Error::ValidationError)` - Blank email or password
    /// - `Err(Error::AuthError)` - Rejected credentials or an invalid access token
    pub async fn login(&self, credentials: &LoginDto) -> Result<UserDto, Error> {
        credentials.validate()?;

        let email = credentials.email.trim();
        let access_token = self
            .auth
            .exchange_password(email, &credentials.password)
            .await?;
        let claims = self.auth.validate_token(&access_token)?;

        let email = claims.email.as_deref().unwrap_or(email);

        UserService::new(self.db)
            .get_or_create_user(&claims.sub, email)
            .await
    }
}
