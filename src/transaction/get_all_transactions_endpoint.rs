//! Defines the endpoint for listing every stored transaction.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::AppState;

use super::core::{Transaction, get_all_transactions};

/// The state needed to list transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The wrapper object around the rows returned by the list and get-by-ID
/// endpoints.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    /// The matching transactions.
    pub response: Vec<Transaction>,
}

/// A route handler for listing every transaction in stored order.
///
/// The result is unbounded; there is no pagination or filtering.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_all_transactions_endpoint(State(state): State<ListTransactionsState>) -> Response {
    let connection = state.db_connection.lock().unwrap();

    match get_all_transactions(&connection) {
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
