//! Defines the endpoint for the income and expense totals.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{AppState, Error};

use super::core::{TransactionType, sum_amount_by_type};

/// The state needed to compute the summary.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Aggregate totals over every stored transaction.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expenses: f64,
    /// Total income minus total expenses.
    pub balance: f64,
}

/// A route handler for the transaction summary.
///
/// Both totals default to zero when no matching transactions exist, so an
/// empty store yields an all-zero summary rather than an error.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_summary_endpoint(State(state): State<SummaryState>) -> Response {
    let connection = state.db_connection.lock().unwrap();

    match get_summary(&connection) {
        Ok(summary) => (StatusCode::CREATED, Json(summary)).into_response(),
        Err(error) => error.into_response(),
    }
}

fn get_summary(connection: &Connection) -> Result<Summary, Error> {
    let total_income = sum_amount_by_type(TransactionType::Income, connection)?;
    let total_expenses = sum_amount_by_type(TransactionType::Expense, connection)?;

    Ok(Summary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    })
}
