//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_all_transactions_endpoint,
        get_summary_endpoint, get_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::NEW_TRANSACTION, post(create_transaction_endpoint))
        .route(
            endpoints::GET_ALL_TRANSACTIONS,
            get(get_all_transactions_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .with_state(state)
}
