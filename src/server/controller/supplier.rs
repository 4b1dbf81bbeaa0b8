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
        supplier::{SupplierDto, SupplierInput},
    },
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::supplier::SupplierService,
    },
};

pub static SUPPLIER_TAG: &str = "supplier";

/// Lists the suppliers of the signed-in user, newest first
#[utoipa::path(
    get,
    path = "/api/suppliers",
    tag = SUPPLIER_TAG,
    responses(
        (status = 200, description = "Suppliers of the user", body = Vec<SupplierDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_suppliers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let suppliers = SupplierService::new(&state.db).get_suppliers(user_id).await?;

    Ok((StatusCode::OK, Json(suppliers)))
}

/// Registers a supplier
#[utoipa::path(
    post,
    path = "/api/suppliers",
    tag = SUPPLIER_TAG,
    request_body = SupplierInput,
    responses(
        (status = 201, description = "Supplier created", body = SupplierDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<SupplierInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let supplier = SupplierService::new(&state.db).create_supplier(user_id, &input).await?;

    Ok((StatusCode::CREATED, Json(supplier)))
}

#[utoipa::path(
    put,
    path = "/api/suppliers/{id}",
    tag = SUPPLIER_TAG,
    params(("id" = i32, Path, description = "Supplier ID")),
    request_body = SupplierInput,
    responses(
        (status = 200, description = "Supplier updated", body = SupplierDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Supplier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_supplier(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(input): Json<SupplierInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let supplier = SupplierService::new(&state.db).update_supplier(user_id, id, &input).await?;

    Ok((StatusCode::OK, Json(supplier)))
}

#[utoipa::path(
    delete,
    path = "/api/suppliers/{id}",
    tag = SUPPLIER_TAG,
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 204, description = "Supplier deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Supplier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_supplier(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    SupplierService::new(&state.db).delete_supplier(user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
