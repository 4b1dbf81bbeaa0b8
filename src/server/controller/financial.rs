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
        financial::{FinancialSummary, FinancialTransactionDto, FinancialTransactionInput},
    },
    server::{
        controller::util::get_user::require_user_id,
        error::Error,
        model::app::AppState,
        service::financial::FinancialService,
    },
};

pub static FINANCIAL_TAG: &str = "financial";

/// Lists the transactions of the signed-in user, newest transaction date first
#[utoipa::path(
    get,
    path = "/api/financial/transactions",
    tag = FINANCIAL_TAG,
    responses(
        (status = 200, description = "Transactions of the user", body = Vec<FinancialTransactionDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let transactions = FinancialService::new(&state.db).get_transactions(user_id).await?;

    Ok((StatusCode::OK, Json(transactions)))
}

/// Records an income or expense
#[utoipa::path(
    post,
    path = "/api/financial/transactions",
    tag = FINANCIAL_TAG,
    request_body = FinancialTransactionInput,
    responses(
        (status = 201, description = "Transaction recorded", body = FinancialTransactionDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<FinancialTransactionInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let transaction = FinancialService::new(&state.db).create_transaction(user_id, &input).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

#[utoipa::path(
    put,
    path = "/api/financial/transactions/{id}",
    tag = FINANCIAL_TAG,
    params(("id" = i32, Path, description = "Transaction ID")),
    request_body = FinancialTransactionInput,
    responses(
        (status = 200, description = "Transaction updated", body = FinancialTransactionDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_transaction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(input): Json<FinancialTransactionInput>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let transaction = FinancialService::new(&state.db).update_transaction(user_id, id, &input).await?;

    Ok((StatusCode::OK, Json(transaction)))
}

#[utoipa::path(
    delete,
    path = "/api/financial/transactions/{id}",
    tag = FINANCIAL_TAG,
    params(("id" = i32, Path, description = "Transaction ID")),
    responses(
        (status = 204, description = "Transaction deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_transaction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    FinancialService::new(&state.db).delete_transaction(user_id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Income, expense and balance over every transaction of the signed-in user
#[utoipa::path(
    get,
    path = "/api/financial/summary",
    tag = FINANCIAL_TAG,
    responses(
        (status = 200, description = "Financial summary", body = FinancialSummary),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_id = require_user_id(&state, &session).await?;

    let summary = FinancialService::new(&state.db).get_summary(user_id).await?;

    Ok((StatusCode::OK, Json(summary)))
}
