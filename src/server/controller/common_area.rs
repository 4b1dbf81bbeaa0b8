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
        common_area::{CommonAreaDto, CommonAreaInput},
    },
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::common_area::CommonAreaService,
    },
};

pub static COMMON_AREA_TAG: &str = "common_area";

/// Lists the active common areas shared by every user, plus the caller's own inactive ones
#[utoipa::path(
    get,
    path = "/api/common-areas",
    tag = COMMON_AREA_TAG,
    responses(
        (status = 200, description = "Visible common areas ordered by name", body = Vec<CommonAreaDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_common_areas(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let areas = CommonAreaService::new(&state.db).get_areas(user_id).await?;

    Ok((StatusCode::OK, Json(areas)))
}

#[utoipa::path(
    post,
    path = "/api/common-areas",
    tag = COMMON_AREA_TAG,
    request_body = CommonAreaInput,
    responses(
        (status = 201, description = "Common area created", body = CommonAreaDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_common_area(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<CommonAreaInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let area = CommonAreaService::new(&state.db)
        .create_area(user_id, &input)
        .await?;

    Ok((StatusCode::CREATED, Json(area)))
}

/// Updates a common area registered by the signed-in user
#[utoipa::path(
    put,
    path = "/api/common-areas/{id}",
    tag = COMMON_AREA_TAG,
    params(("id" = i32, Path, description = "Common area ID")),
    request_body = CommonAreaInput,
    responses(
        (status = 200, description = "Common area updated", body = CommonAreaDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Common area not found or registered by another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_common_area(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(input): Json<CommonAreaInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let area = CommonAreaService::new(&state.db)
        .update_area(user_id, id, &input)
        .await?;

    Ok((StatusCode::OK, Json(area)))
}
