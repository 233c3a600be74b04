//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Deserialize;

use crate::AppState;

use super::core::{NewTransaction, create_transaction};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The request body for creating a transaction.
///
/// Every field is optional at the deserialization layer so that a missing
/// field produces the documented 400 response instead of a deserializer
/// rejection.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// The raw transaction type, expected to be "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// The label grouping this transaction with similar ones.
    pub category: Option<String>,
    /// The value of the transaction in dollars.
    pub amount: Option<f64>,
    /// When the transaction occurred.
    pub date: Option<String>,
    /// Text detailing the transaction.
    pub description: Option<String>,
}

const MISSING_FIELDS_MESSAGE: &str =
    "All fields (type, category, amount, date, description) are required.";

/// A route handler for creating a new transaction.
///
/// Responds with 400 if any field is missing, empty, or (for the amount)
/// zero. The transaction type is deliberately not checked here: the
/// transactions table's CHECK constraint rejects unknown values with an SQL
/// error instead.
///
/// The created row and its assigned ID are not echoed back; the response is
/// a plain-text confirmation.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Response {
    let new_transaction = match validate(request) {
        Ok(new_transaction) => new_transaction,
        Err(response) => return response,
    };

    let connection = state.db_connection.lock().unwrap();

    match create_transaction(new_transaction, &connection) {
        Ok(()) => (StatusCode::CREATED, "Transaction added successfully").into_response(),
        Err(error) => error.into_response(),
    }
}

fn validate(request: CreateTransactionRequest) -> Result<NewTransaction, Response> {
    let missing_fields = || (StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE).into_response();

    let transaction_type = request
        .transaction_type
        .filter(|transaction_type| !transaction_type.is_empty())
        .ok_or_else(missing_fields)?;
    let category = request
        .category
        .filter(|category| !category.is_empty())
        .ok_or_else(missing_fields)?;
    // A zero amount is treated the same as a missing one.
    let amount = request
        .amount
        .filter(|&amount| amount != 0.0)
        .ok_or_else(missing_fields)?;
    let date = request
        .date
        .filter(|date| !date.is_empty())
        .ok_or_else(missing_fields)?;
    let description = request
        .description
        .filter(|description| !description.is_empty())
        .ok_or_else(missing_fields)?;

    Ok(NewTransaction {
        transaction_type,
        category,
        amount,
        date,
        description,
    })
}
