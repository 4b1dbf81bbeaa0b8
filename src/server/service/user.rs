use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error},
};

impl From<entity::app_user::Model> for UserDto {
    fn from(user: entity::app_user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            last_login_at: user.last_login_at,
        }
    }
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repository = UserRepository::new(self.db);

        Ok(user_repository.get(user_id).await?.map(UserDto::from))
    }

    /// Finds the user for an identity provider subject, creating it on first sign-in
    ///
    /// An existing user gets its login timestamp and email refreshed.
    pub async fn get_or_create_user(
        &self,
        auth_subject: &str,
        email: &str,
    ) -> Result<UserDto, Error> {
        let user_repository = UserRepository::new(self.db);

        if let Some(user) = user_repository.get_by_auth_subject(auth_subject).await? {
            if let Some(user) = user_repository.record_login(user.id, email).await? {
                return Ok(user.into());
            }
        }

        let user = user_repository.create(auth_subject, email).await?;

        Ok(user.into())
    }
}
