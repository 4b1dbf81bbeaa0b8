use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ResourceError {
    /// Row is missing or belongs to another user; both look the same to the caller
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: i32 },
    #[error("Common area {common_area_id} is already reserved between {start_at} and {end_at}")]
    ReservationConflict {
        common_area_id: i32,
        start_at: chrono::NaiveDateTime,
        end_at: chrono::NaiveDateTime,
    },
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { resource, .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("{} not found", resource),
                    }),
                )
                    .into_response()
            }
            Self::ReservationConflict { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "The common area is already reserved for this period".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
