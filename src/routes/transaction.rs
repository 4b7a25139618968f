//! Transaction routes

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::transaction;
use crate::state::AppState;

/// Create transaction routes (all behind the authorization gate)
pub fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/transaction",
            get(transaction::list_transactions).post(transaction::create_transaction),
        )
        .route("/api/transaction/all", get(transaction::all_transactions))
        .route("/api/transaction/summary", get(transaction::summary))
        .route("/api/transaction/dashboard", get(transaction::dashboard))
        .route("/api/transaction/:id", put(transaction::update_transaction))
}
