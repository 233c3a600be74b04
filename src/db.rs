/*! This module implements the creation of the application's database schema. */

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, category::create_category_table, transaction::create_transaction_table};

/// Create the application's tables if they do not already exist.
///
/// The tables are created within a single exclusive transaction so that a
/// partially initialized schema is never left behind.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
