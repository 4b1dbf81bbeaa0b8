use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Identity provider rejected the supplied credentials")]
    InvalidCredentials,
    #[error("Access token failed validation: {0}")]
    InvalidToken(String),
    #[error("Access token is missing the '{0}' claim")]
    MissingClaim(&'static str),
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::unauthorized("Not signed in")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                Self::unauthorized("Invalid email or password")
            }
            Self::InvalidToken(_) => {
                tracing::debug!("{}", self);

                Self::unauthorized("Invalid email or password")
            }
            Self::MissingClaim(_) => InternalServerError(self).into_response(),
        }
    }
}
