//! Error types for the Mirtilo server.
//!
//! Domain errors (authentication, configuration, validation, resource lookups) each carry
//! their own `IntoResponse` mapping. Library errors are folded into [`Error`] through
//! `#[from]` and surface as a logged 500 with a generic message.

pub mod auth;
pub mod config;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use oauth2::{basic::BasicErrorResponse, HttpClientError, RequestTokenError};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, validation::ValidationError},
    server::error::{auth::AuthError, config::ConfigError, resource::ResourceError},
};

/// Error type returned by handlers, services and startup code.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment variables.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Session and credential failures.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request body failed field validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Missing rows and reservation conflicts.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// A stored value could not be parsed into its domain type.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database query failures, connection issues, constraint violations.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session retrieval, storage or serialization.
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store connection or command failure.
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Token endpoint request failure other than rejected credentials.
    #[error(transparent)]
    OAuthTokenError(
        #[from]
        RequestTokenError<HttpClientError<oauth2::reqwest::Error>, BasicErrorResponse>,
    ),
    /// Malformed identity provider URL.
    #[error(transparent)]
    UrlParseError(#[from] oauth2::url::ParseError),
    /// HTTP client construction failure.
    #[error(transparent)]
    HttpClientError(#[from] oauth2::reqwest::Error),
}

/// Maps domain errors to their own responses and everything else to a 500.
///
/// # Returns
/// - 400 Bad Request - Validation failures
/// - 401 Unauthorized - No session user or rejected credentials
/// - 404 Not Found - Missing rows or a session user missing from the database
/// - 409 Conflict - Overlapping reservation
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wraps any displayable error into a logged 500 response with a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
