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
        preventive::{PreventiveMaintenanceDto, PreventiveMaintenanceInput},
    },
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::preventive::PreventiveService,
    },
};

pub static PREVENTIVE_TAG: &str = "preventive";

/// Lists the preventive maintenance schedule of the signed-in user
#[utoipa::path(
    get,
    path = "/api/preventive-maintenance",
    tag = PREVENTIVE_TAG,
    responses(
        (status = 200, description = "Schedule entries of the user", body = Vec<PreventiveMaintenanceDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let schedule = PreventiveService::new(&state.db).get_schedule(user_id).await?;

    Ok((StatusCode::OK, Json(schedule)))
}

/// Schedules a preventive maintenance
#[utoipa::path(
    post,
    path = "/api/preventive-maintenance",
    tag = PREVENTIVE_TAG,
    request_body = PreventiveMaintenanceInput,
    responses(
        (status = 201, description = "Entry scheduled", body = PreventiveMaintenanceDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_entry(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<PreventiveMaintenanceInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let entry = PreventiveService::new(&state.db).create_entry(user_id, &input).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    put,
    path = "/api/preventive-maintenance/{id}",
    tag = PREVENTIVE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    request_body = PreventiveMaintenanceInput,
    responses(
        (status = 200, description = "Entry updated", body = PreventiveMaintenanceDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Schedule entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_entry(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(input): Json<PreventiveMaintenanceInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let entry = PreventiveService::new(&state.db).update_entry(user_id, id, &input).await?;

    Ok((StatusCode::OK, Json(entry)))
}

#[utoipa::path(
    delete,
    path = "/api/preventive-maintenance/{id}",
    tag = PREVENTIVE_TAG,
    params(("id" = i32, Path, description = "Schedule entry ID")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Schedule entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    PreventiveService::new(&state.db).delete_entry(user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
