//! Transaction HTTP handlers
//!
//! All of these sit behind the authorization gate: the caller's identity
//! comes exclusively from the verified token claims.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::middleware::AuthenticatedUser;
use crate::models::{
    DashboardParams, DashboardPeriod, DashboardResponse, MessageResponse, PaginationParams,
    SummaryResponse, Transaction, TransactionRequest,
};
use crate::transactions::TransactionService;

/// GET /api/transaction/all - Every transaction of the caller
pub async fn all_transactions(
    State(service): State<Arc<TransactionService>>,
    user: AuthenticatedUser,
) -> ApiResult<Json<Vec<Transaction>>> {
    let transactions = service.list_all(user.user_id).await?;

    Ok(Json(transactions))
}

/// GET /api/transaction?page=1&limit=10 - Paginated transactions
pub async fn list_transactions(
    State(service): State<Arc<TransactionService>>,
    user: AuthenticatedUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<Vec<Transaction>>> {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(10);

    let transactions = service.list_page(user.user_id, page, limit).await?;

    Ok(Json(transactions))
}

/// GET /api/transaction/summary - Income/expense/savings totals
pub async fn summary(
    State(service): State<Arc<TransactionService>>,
    user: AuthenticatedUser,
) -> ApiResult<Json<SummaryResponse>> {
    let summary = service.summary(user.user_id).await?;

    Ok(Json(summary))
}

/// GET /api/transaction/dashboard?period=monthly - Category totals
pub async fn dashboard(
    State(service): State<Arc<TransactionService>>,
    user: AuthenticatedUser,
    Query(params): Query<DashboardParams>,
) -> ApiResult<Json<DashboardResponse>> {
    let period = DashboardPeriod::from_param(params.period.as_deref().unwrap_or("monthly"));

    let dashboard = service.dashboard(user.user_id, period).await?;

    Ok(Json(dashboard))
}

/// POST /api/transaction - Add a transaction
pub async fn create_transaction(
    State(service): State<Arc<TransactionService>>,
    user: AuthenticatedUser,
    Json(req): Json<TransactionRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let tx = req.validate().map_err(ApiError::BadRequest)?;

    service.create(user.user_id, tx).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Transaction added successfully")),
    ))
}

/// PUT /api/transaction/:id - Update a transaction owned by the caller
pub async fn update_transaction(
    State(service): State<Arc<TransactionService>>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(req): Json<TransactionRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let tx = req.validate().map_err(ApiError::BadRequest)?;

    let updated = service.update(user.user_id, id, tx).await?;
    if !updated {
        return Err(ApiError::NotFound("Transaction not found".to_string()));
    }

    Ok(Json(MessageResponse::new("Transaction updated successfully")))
}
