use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::auth::login::LoginService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Signs in with email and password at the identity provider
///
/// On success the user ID is stored in the session, replacing any previous sign-in.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Credentials rejected by the identity provider", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(credentials): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let login_service = LoginService::new(&state.db, &state.auth);

    let user = login_service.login(&credentials).await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Signs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Signed out, redirect to the login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing a session that was never stored fails in the store
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/login"))
}

/// Returns the signed-in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in user", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Session user no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(user)))
}
