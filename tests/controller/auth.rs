mod login {
    use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
    use mirtilo::{
        model::user::{LoginDto, UserDto},
        server::{controller::auth::login, model::session::user::SessionUserId},
    };
    use mirtilo_test_utils::prelude::*;

    use crate::util::{body_json, TestContextExt};

    fn credentials() -> LoginDto {
        LoginDto {
            email: TEST_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        }
    }

    /// Expect 200 with the user and the user ID stored in session
    #[tokio::test]
    async fn signs_in_and_stores_session() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_user_tables()
            .with_token_endpoint(TEST_AUTH_SUBJECT, TEST_EMAIL, 1)
            .build()
            .await?;

        let response = login(
            State(test.to_app_state()),
            test.session.clone(),
            Json(credentials()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let user: UserDto = body_json(response).await;
        assert_eq!(user.email, TEST_EMAIL);

        let session_user = SessionUserId::get(&test.session).await.ok().flatten();
        assert_eq!(session_user, Some(user.id));

        test.assert_mocks();

        Ok(())
    }

    /// Expect the same user row to be reused on a second sign-in
    #[tokio::test]
    async fn reuses_existing_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_user_tables()
            .with_user(TEST_AUTH_SUBJECT, TEST_EMAIL)
            .with_token_endpoint(TEST_AUTH_SUBJECT, TEST_EMAIL, 1)
            .build()
            .await?;

        let response = login(
            State(test.to_app_state()),
            test.session.clone(),
            Json(credentials()),
        )
        .await
        .into_response();

        let user: UserDto = body_json(response).await;
        assert_eq!(user.id, 1);

        Ok(())
    }

    /// Expect 401 when the identity provider rejects the password
    #[tokio::test]
    async fn rejects_invalid_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_user_tables()
            .with_invalid_credentials_endpoint(1)
            .build()
            .await?;

        let response = login(
            State(test.to_app_state()),
            test.session.clone(),
            Json(credentials()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(SessionUserId::get(&test.session).await.ok().flatten().is_none());

        test.assert_mocks();

        Ok(())
    }

    /// Expect 400 without contacting the provider when the password is blank
    #[tokio::test]
    async fn rejects_missing_password() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_user_tables()
            .with_token_endpoint(TEST_AUTH_SUBJECT, TEST_EMAIL, 0)
            .build()
            .await?;

        let mut dto = credentials();
        dto.password.clear();

        let response = login(State(test.to_app_state()), test.session.clone(), Json(dto))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        test.assert_mocks();

        Ok(())
    }
}

mod logout {
    use axum::{http::StatusCode, response::IntoResponse};
    use mirtilo::server::{controller::auth::logout, model::session::user::SessionUserId};
    use mirtilo_test_utils::prelude::*;

    use crate::util::TestContextExt;

    /// Expect 307 to the login page with the session cleared
    #[tokio::test]
    async fn clears_session_and_redirects() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let response = logout(test.session.clone()).await.into_response();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get("location").and_then(|v| v.to_str().ok()),
            Some("/login")
        );
        assert!(SessionUserId::get(&test.session).await.ok().flatten().is_none());

        Ok(())
    }

    /// Expect 307 even when the session never held a user
    #[tokio::test]
    async fn redirects_without_session() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let response = logout(test.session.clone()).await.into_response();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

        Ok(())
    }
}

mod get_user {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use mirtilo::{
        model::user::UserDto,
        server::{
            controller::auth::get_user,
            model::session::user::{SessionUserId, SESSION_USER_ID_KEY},
        },
    };
    use mirtilo_test_utils::prelude::*;

    use crate::util::{body_json, TestContextExt};

    /// Expect 200 with the signed-in user
    #[tokio::test]
    async fn returns_session_user() -> Result<(), TestError> {
        let mut test = test_setup_with_user_tables!()?;
        let user_id = test.sign_in(TEST_AUTH_SUBJECT, TEST_EMAIL).await?;

        let response = get_user(State(test.to_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let user: UserDto = body_json(response).await;
        assert_eq!(user.id, user_id);

        Ok(())
    }

    /// Expect 401 for an anonymous session
    #[tokio::test]
    async fn rejects_anonymous_session() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;

        let response = get_user(State(test.to_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    /// Expect 404 and a cleared session when the session user no longer exists
    #[tokio::test]
    async fn clears_session_for_missing_user() -> Result<(), TestError> {
        let test = test_setup_with_user_tables!()?;
        test.session
            .insert(SESSION_USER_ID_KEY, SessionUserId(42))
            .await?;

        let response = get_user(State(test.to_app_state()), test.session.clone())
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(SessionUserId::get(&test.session).await.ok().flatten().is_none());

        Ok(())
    }
}
