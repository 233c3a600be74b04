//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the SQL functions that store and query it
//! - The route handlers for the five transaction endpoints

mod core;
mod create_transaction_endpoint;
mod delete_transaction_endpoint;
mod get_all_transactions_endpoint;
mod get_transaction_endpoint;
mod summary_endpoint;

pub use self::core::{NewTransaction, Transaction, TransactionType, create_transaction_table};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use delete_transaction_endpoint::delete_transaction_endpoint;
pub use get_all_transactions_endpoint::{TransactionListResponse, get_all_transactions_endpoint};
pub use get_transaction_endpoint::get_transaction_endpoint;
pub use summary_endpoint::{Summary, get_summary_endpoint};
