//! Defines the endpoint for fetching a single transaction by its ID.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::AppState;

use super::core::get_transactions_by_id;
use super::get_all_transactions_endpoint::TransactionListResponse;

/// The state needed to fetch a transaction.
#[derive(Debug, Clone)]
pub struct GetTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for GetTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for fetching a transaction by its ID.
///
/// The ID is taken from the path verbatim, without numeric validation. The
/// result is always wrapped as a collection: an ID that matches nothing
/// produces an empty collection with the same success status as a match.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_transaction_endpoint(
    State(state): State<GetTransactionState>,
    Path(id): Path<String>,
) -> Response {
    let connection = state.db_connection.lock().unwrap();

    match get_transactions_by_id(&id, &connection) {
        Ok(transactions) => (
            StatusCode::CREATED,
            Json(TransactionListResponse {
                response: transactions,
            }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
