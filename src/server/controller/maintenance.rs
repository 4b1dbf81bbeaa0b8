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
        maintenance::{MaintenanceRequestDto, MaintenanceRequestInput},
    },
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::maintenance::MaintenanceService,
    },
};

pub static MAINTENANCE_TAG: &str = "maintenance";

/// Lists the maintenance tickets of the signed-in user, newest first
#[utoipa::path(
    get,
    path = "/api/maintenance-requests",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "Tickets of the user", body = Vec<MaintenanceRequestDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let requests = MaintenanceService::new(&state.db).get_requests(user_id).await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// Opens a maintenance ticket
#[utoipa::path(
    post,
    path = "/api/maintenance-requests",
    tag = MAINTENANCE_TAG,
    request_body = MaintenanceRequestInput,
    responses(
        (status = 201, description = "Ticket opened", body = MaintenanceRequestDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<MaintenanceRequestInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let request = MaintenanceService::new(&state.db).create_request(user_id, &input).await?;

    Ok((StatusCode::CREATED, Json(request)))
}

#[utoipa::path(
    put,
    path = "/api/maintenance-requests/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = MaintenanceRequestInput,
    responses(
        (status = 200, description = "Ticket updated", body = MaintenanceRequestDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(input): Json<MaintenanceRequestInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let request = MaintenanceService::new(&state.db).update_request(user_id, id, &input).await?;

    Ok((StatusCode::OK, Json(request)))
}

#[utoipa::path(
    delete,
    path = "/api/maintenance-requests/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    MaintenanceService::new(&state.db).delete_request(user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
