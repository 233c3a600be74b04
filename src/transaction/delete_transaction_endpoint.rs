//! Defines the endpoint for deleting a transaction by its ID.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::AppState;

use super::core::delete_transaction;

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for deleting a transaction by its ID.
///
/// The ID is taken from the path verbatim, without numeric validation, and
/// any request body is ignored. Deleting an ID that matches nothing still
/// responds with the success confirmation.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(id): Path<String>,
) -> Response {
    let connection = state.db_connection.lock().unwrap();

    match delete_transaction(&id, &connection) {
        Ok(_) => (StatusCode::CREATED, "Transaction deleted successfully").into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {id}: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;

    use crate::db::initialize;

    use super::super::core::{NewTransaction, create_transaction, get_all_transactions};
    use super::{DeleteTransactionState, delete_transaction_endpoint};

    fn get_test_state() -> DeleteTransactionState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        DeleteTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    #[tokio::test]
    async fn deletes_transaction() {
        let state = get_test_state();
        {
            let connection = state.db_connection.lock().unwrap();
            create_transaction(
                NewTransaction {
                    transaction_type: "expense".to_owned(),
                    category: "Transport".to_owned(),
                    amount: 3.5,
                    date: "2025-07-14".to_owned(),
                    description: "Bus fare".to_owned(),
                },
                &connection,
            )
            .unwrap();
        }

        let response =
            delete_transaction_endpoint(State(state.clone()), Path("1".to_owned())).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_all_transactions(&connection).unwrap(), []);
    }

    #[tokio::test]
    async fn deleting_unknown_id_still_succeeds() {
        let state = get_test_state();

        let response =
            delete_transaction_endpoint(State(state), Path("1337".to_owned())).await;

        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
