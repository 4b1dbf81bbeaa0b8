use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::user::UserService,
    },
};

/// Retrieves the signed-in user from the session and then from the database
///
/// # Returns
/// - `Ok(UserDto)` - User found
/// - `Err(Error::AuthError(UserNotInSession))` - No user ID in session
/// - `Err(Error::AuthError(UserNotInDatabase))` - User ID in session but not in the database;
///   the session is cleared
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::warn!(
            user_id = %user_id,
            "Cleared session of a user missing from the database, they will need to sign in again"
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(user)
}

/// ID of the signed-in user, used by every resource endpoint to scope its queries
pub async fn require_user_id(state: &AppState, session: &Session) -> Result<i32, Error> {
    Ok(get_user_from_session(state, session).await?.id)
}

#[cfg(test)]
mod tests {

    mod get_user_from_session {
        use mirtilo_test_utils::prelude::*;

        use crate::server::{
            controller::util::get_user::get_user_from_session,
            error::{auth::AuthError, Error},
            model::session::user::SessionUserId,
            util::test::test_app_state,
        };

        /// Expect the user stored in session
        #[tokio::test]
        async fn returns_session_user() -> Result<(), TestError> {
            let mut test = test_setup_with_user_tables!()?;
            let user = test.user().insert_user(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;
            SessionUserId::insert(&test.session, user.id).await.unwrap();
            let state = test_app_state(&test);

            let result = get_user_from_session(&state, &test.session).await;

            assert_eq!(result.unwrap().id, user.id);

            Ok(())
        }

        /// Expect UserNotInSession for an empty session
        #[tokio::test]
        async fn fails_without_session_user() -> Result<(), TestError> {
            let test = test_setup_with_user_tables!()?;
            let state = test_app_state(&test);

            let result = get_user_from_session(&state, &test.session).await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::UserNotInSession))
            ));

            Ok(())
        }

        /// Expect UserNotInDatabase and a cleared session for a stale user ID
        #[tokio::test]
        async fn clears_stale_session() -> Result<(), TestError> {
            let test = test_setup_with_user_tables!()?;
            SessionUserId::insert(&test.session, 42).await.unwrap();
            let state = test_app_state(&test);

            let result = get_user_from_session(&state, &test.session).await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::UserNotInDatabase(42)))
            ));
            assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

            Ok(())
        }
    }
}
