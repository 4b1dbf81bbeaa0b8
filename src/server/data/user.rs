use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a user for an identity provider subject
    pub async fn create(
        &self,
        auth_subject: &str,
        email: &str,
    ) -> Result<entity::app_user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::app_user::ActiveModel {
            auth_subject: ActiveValue::Set(auth_subject.to_string()),
            email: ActiveValue::Set(email.to_string()),
            created_at: ActiveValue::Set(now),
            last_login_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_auth_subject(
        &self,
        auth_subject: &str,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::AuthSubject.eq(auth_subject))
            .one(self.db)
            .await
    }

    /// Stamps a successful login and refreshes the email reported by the identity provider
    ///
    /// Returns `Ok(None)` if the user does not exist.
    pub async fn record_login(
        &self,
        user_id: i32,
        email: &str,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        let Some(user) = entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.email = ActiveValue::Set(email.to_string());
        user_am.last_login_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Deletes a user along with every row they own
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AppUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use mirtilo_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = test_setup_with_user_tables!()?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.create(TEST_AUTH_SUBJECT, TEST_EMAIL).await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert_eq!(user.auth_subject, TEST_AUTH_SUBJECT);
            assert_eq!(user.created_at, user.last_login_at);

            Ok(())
        }

        /// Expect Error when the subject already belongs to a user
        #[tokio::test]
        async fn fails_for_duplicate_subject() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_user_tables()
                .with_user(TEST_AUTH_SUBJECT, TEST_EMAIL)
                .build()
                .await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.create(TEST_AUTH_SUBJECT, "other@example.com").await;

            assert!(result.is_err());

            Ok(())
        }

        /// Expect Error when required tables don't exist
        #[tokio::test]
        async fn fails_without_tables() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.create(TEST_AUTH_SUBJECT, TEST_EMAIL).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get {
        use mirtilo_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Some when the user exists, both by ID and by subject
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

            let user_repository = UserRepository::new(&test.db);

            let by_id = user_repository.get(user.id).await?;
            assert_eq!(by_id, Some(user.clone()));

            let by_subject = user_repository.get_by_auth_subject(TEST_AUTH_SUBJECT).await?;
            assert_eq!(by_subject, Some(user));

            Ok(())
        }

        /// Expect None for an unknown user
        #[tokio::test]
        async fn returns_none_for_unknown_user() -> Result<(), TestError> {
            let test = test_setup_with_user_tables!()?;

            let user_repository = UserRepository::new(&test.db);

            assert!(user_repository.get(1).await?.is_none());
            assert!(user_repository.get_by_auth_subject("nobody").await?.is_none());

            Ok(())
        }
    }

    mod record_login {
        use mirtilo_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect the email to be refreshed on login
        #[tokio::test]
        async fn updates_email() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository
                .record_login(user.id, "novo@example.com")
                .await?;

            assert!(result.is_some());
            let updated = result.unwrap();
            assert_eq!(updated.email, "novo@example.com");
            assert!(updated.last_login_at >= user.last_login_at);

            Ok(())
        }

        /// Expect None when the user doesn't exist
        #[tokio::test]
        async fn returns_none_for_unknown_user() -> Result<(), TestError> {
            let test = test_setup_with_user_tables!()?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.record_login(1, TEST_EMAIL).await?;

            assert!(result.is_none());

            Ok(())
        }
    }

    mod delete {
        use mirtilo_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect one row affected when deleting an existing user
        #[tokio::test]
        async fn deletes_user() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.delete(user.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert!(user_repository.get(user.id).await?.is_none());

            Ok(())
        }

        /// Expect no rows affected when deleting a user that doesn't exist
        #[tokio::test]
        async fn no_rows_for_unknown_user() -> Result<(), TestError> {
            let test = test_setup_with_user_tables!()?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.delete(1).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }
}
