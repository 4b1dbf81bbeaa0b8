use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "mirtilo:user:id";

/// ID of the signed-in `app_user`
#[derive(Clone, Copy, Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// Returns `Ok(None)` for anonymous sessions
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| id);

        Ok(user_id)
    }

    pub async fn remove(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = session
            .remove::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id)| id);

        Ok(user_id)
    }
}

#[cfg(test)]
mod tests {
    mod insert {
        use mirtilo_test_utils::prelude::*;

        use crate::server::model::session::user::SessionUserId;

        /// Expect a stored user ID to be readable back
        #[tokio::test]
        async fn stores_user_id() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = SessionUserId::insert(&test.session, 7).await;
            assert!(result.is_ok());

            let stored = SessionUserId::get(&test.session).await;
            assert!(matches!(stored, Ok(Some(7))));

            Ok(())
        }

        /// Expect the latest insert to win
        #[tokio::test]
        async fn overwrites_previous_user_id() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            SessionUserId::insert(&test.session, 1).await.unwrap();
            SessionUserId::insert(&test.session, 2).await.unwrap();

            let stored = SessionUserId::get(&test.session).await;
            assert!(matches!(stored, Ok(Some(2))));

            Ok(())
        }
    }

    mod get {
        use mirtilo_test_utils::prelude::*;

        use crate::server::model::session::user::{SessionUserId, SESSION_USER_ID_KEY};

        /// Expect None for an anonymous session
        #[tokio::test]
        async fn returns_none_without_user() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = SessionUserId::get(&test.session).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect an error when the stored value is not a user ID
        #[tokio::test]
        async fn fails_for_malformed_value() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            test.session
                .insert(SESSION_USER_ID_KEY, "not-a-number")
                .await?;

            let result = SessionUserId::get(&test.session).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod remove {
        use mirtilo_test_utils::prelude::*;

        use crate::server::model::session::user::SessionUserId;

        /// Expect removal to return the previous user ID and leave the session anonymous
        #[tokio::test]
        async fn removes_user_id() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            SessionUserId::insert(&test.session, 3).await.unwrap();

            let removed = SessionUserId::remove(&test.session).await;
            assert!(matches!(removed, Ok(Some(3))));

            let stored = SessionUserId::get(&test.session).await;
            assert!(matches!(stored, Ok(None)));

            Ok(())
        }
    }
}
