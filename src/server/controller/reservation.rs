use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{ReservationDto, ReservationInput},
    },
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::reservation::ReservationService,
    },
};

pub static RESERVATION_TAG: &str = "reservation";

/// Lists the reservations of the signed-in user, newest first
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Reservations of the user", body = Vec<ReservationDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let reservations = ReservationService::new(&state.db).get_reservations(user_id).await?;

    Ok((StatusCode::OK, Json(reservations)))
}

/// Books a common area
///
/// The total cost is computed from the area's hourly rate.
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = ReservationInput,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Invalid location, interval or area rules violated", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Common area not found", body = ErrorDto),
        (status = 409, description = "Interval overlaps another reservation of the area", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<ReservationInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let reservation = ReservationService::new(&state.db).create_reservation(user_id, &input).await?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = ReservationInput,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Reservation or common area not found", body = ErrorDto),
        (status = 409, description = "Interval overlaps another reservation of the area", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(input): Json<ReservationInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let reservation = ReservationService::new(&state.db).update_reservation(user_id, id, &input).await?;

    Ok((StatusCode::OK, Json(reservation)))
}

#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    ReservationService::new(&state.db).delete_reservation(user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
