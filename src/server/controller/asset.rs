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
        asset::{AssetDto, AssetInput},
    },
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::asset::AssetService,
    },
};

pub static ASSET_TAG: &str = "asset";

/// Lists the assets of the signed-in user, newest first
#[utoipa::path(
    get,
    path = "/api/assets",
    tag = ASSET_TAG,
    responses(
        (status = 200, description = "Assets of the user", body = Vec<AssetDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let assets = AssetService::new(&state.db).get_assets(user_id).await?;

    Ok((StatusCode::OK, Json(assets)))
}

/// Registers an asset
#[utoipa::path(
    post,
    path = "/api/assets",
    tag = ASSET_TAG,
    request_body = AssetInput,
    responses(
        (status = 201, description = "Asset created", body = AssetDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_asset(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<AssetInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let asset = AssetService::new(&state.db).create_asset(user_id, &input).await?;

    Ok((StatusCode::CREATED, Json(asset)))
}

#[utoipa::path(
    put,
    path = "/api/assets/{id}",
    tag = ASSET_TAG,
    params(("id" = i32, Path, description = "Asset ID")),
    request_body = AssetInput,
    responses(
        (status = 200, description = "Asset updated", body = AssetDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_asset(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(input): Json<AssetInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let asset = AssetService::new(&state.db).update_asset(user_id, id, &input).await?;

    Ok((StatusCode::OK, Json(asset)))
}

#[utoipa::path(
    delete,
    path = "/api/assets/{id}",
    tag = ASSET_TAG,
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 204, description = "Asset deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_asset(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    AssetService::new(&state.db).delete_asset(user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
