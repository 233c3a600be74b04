//! Defines the schema for transaction categories.
//!
//! The categories table is part of the database schema but no endpoint
//! manages it yet, so only the table definition lives here.

use rusqlite::Connection;

/// Create the categories table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                type TEXT CHECK(type IN ('income', 'expense')) NOT NULL
                )",
        (),
    )?;

    Ok(())
}
