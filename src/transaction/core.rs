//! Defines the core data model and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId};

// ============================================================================
// MODELS
// ============================================================================

/// Whether a transaction brings money in or takes money out.
///
/// The transactions table enforces the same two values with a CHECK
/// constraint, so every stored row maps onto this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. a salary payment.
    Income,
    /// Money going out, e.g. a grocery shop.
    Expense,
}

impl TransactionType {
    /// The value stored in the database for this transaction type.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: DatabaseId,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The label grouping this transaction with similar ones.
    pub category: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction happened, stored verbatim as supplied by the
    /// caller.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: String,
}

/// The data needed to insert a transaction.
///
/// The transaction type is carried as the raw request string: the
/// transactions table's CHECK constraint is the only enforcement of the
/// income/expense vocabulary, and a value outside it fails at insert time
/// with an SQL error.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The raw transaction type string, e.g. "income".
    pub transaction_type: String,
    /// The label grouping this transaction with similar ones.
    pub category: String,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// When the transaction happened, stored verbatim.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// The number of rows changed by a statement.
pub type RowsAffected = usize;

/// Create a new transaction in the database.
///
/// The assigned row ID is not reported; callers that need the stored row
/// should query for it.
///
/// # Errors
/// This function will return an [Error::SqlError] if the transaction type
/// violates the table's CHECK constraint or if there is some other SQL
/// error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO transactions (type, category, amount, date, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        (
            new_transaction.transaction_type,
            new_transaction.category,
            new_transaction.amount,
            new_transaction.date,
            new_transaction.description,
        ),
    )?;

    Ok(())
}

/// Retrieve every transaction in the database in stored order.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, type, category, amount, date, description FROM transactions")?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
        .collect()
}

/// Retrieve the transactions matching `id`.
///
/// `id` is bound as the raw string taken from the request path. SQLite's
/// integer affinity converts numeric strings for the comparison, so a
/// non-numeric `id` matches no rows rather than failing.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn get_transactions_by_id(
    id: &str,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, type, category, amount, date, description FROM transactions
             WHERE id = :id",
        )?
        .query_map(&[(":id", &id)], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
        .collect()
}

/// Delete the transactions matching `id`.
///
/// Returns the number of rows deleted. `id` is bound as a raw string, as in
/// [get_transactions_by_id], and an `id` that matches nothing deletes zero
/// rows without an error.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn delete_transaction(id: &str, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
        .map_err(|err| err.into())
}

/// Get the total amount over all transactions of the given type.
///
/// Returns 0 when no transactions of that type exist.
///
/// # Errors
/// This function will return an [Error::SqlError] if the SQL query
/// preparation or execution fails.
pub fn sum_amount_by_type(
    transaction_type: TransactionType,
    connection: &Connection,
) -> Result<f64, Error> {
    let mut stmt =
        connection.prepare("SELECT COALESCE(SUM(amount), 0) FROM transactions WHERE type = :type")?;

    let total: f64 = stmt.query_row(&[(":type", &transaction_type.as_str())], |row| row.get(0))?;

    Ok(total)
}

/// Create the transactions table in the database.
///
/// The income/expense vocabulary is enforced here with a CHECK constraint
/// rather than in the application layer.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT CHECK(type IN ('income', 'expense')) NOT NULL,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a [Transaction].
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_type: String = row.get(1)?;
    let transaction_type = match raw_type.as_str() {
        "income" => TransactionType::Income,
        "expense" => TransactionType::Expense,
        _ => {
            return Err(rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Text,
                format!("invalid transaction type {raw_type:?}").into(),
            ));
        }
    };
    let category = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;
    let description = row.get(5)?;

    Ok(Transaction {
        id,
        transaction_type,
        category,
        amount,
        date,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;

    use crate::{Error, db::initialize, transaction::TransactionType};

    use super::{
        NewTransaction, create_transaction, delete_transaction, get_all_transactions,
        get_transactions_by_id, sum_amount_by_type,
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn new_transaction(transaction_type: &str, amount: f64) -> NewTransaction {
        NewTransaction {
            transaction_type: transaction_type.to_owned(),
            category: "Groceries".to_owned(),
            amount,
            date: "2025-07-14".to_owned(),
            description: "Weekly shop".to_owned(),
        }
    }

    #[test]
    fn create_succeeds() {
        let conn = get_test_connection();

        create_transaction(new_transaction("expense", 42.50), &conn)
            .expect("Could not create transaction");

        let transactions = get_all_transactions(&conn).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].transaction_type, TransactionType::Expense);
        assert_eq!(transactions[0].category, "Groceries");
        assert_eq!(transactions[0].amount, 42.50);
        assert_eq!(transactions[0].date, "2025-07-14");
        assert_eq!(transactions[0].description, "Weekly shop");
    }

    #[test]
    fn create_fails_on_unknown_type() {
        let conn = get_test_connection();

        let result = create_transaction(new_transaction("transfer", 10.0), &conn);

        assert!(matches!(result, Err(Error::SqlError(_))));
    }

    #[test]
    fn create_allows_zero_and_negative_amounts() {
        // The storage layer has no sign or zero constraint.
        let conn = get_test_connection();

        create_transaction(new_transaction("expense", 0.0), &conn).unwrap();
        create_transaction(new_transaction("expense", -5.0), &conn).unwrap();

        assert_eq!(get_all_transactions(&conn).unwrap().len(), 2);
    }

    #[test]
    fn get_all_returns_rows_in_insertion_order() {
        let conn = get_test_connection();
        for amount in [1.0, 2.0, 3.0] {
            create_transaction(new_transaction("income", amount), &conn).unwrap();
        }

        let transactions = get_all_transactions(&conn).unwrap();

        let amounts: Vec<f64> = transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn get_by_id_returns_matching_row() {
        let conn = get_test_connection();
        create_transaction(new_transaction("income", 100.0), &conn).unwrap();
        create_transaction(new_transaction("expense", 40.0), &conn).unwrap();

        let transactions = get_transactions_by_id("2", &conn).unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, 2);
        assert_eq!(transactions[0].amount, 40.0);
    }

    #[test]
    fn get_by_id_with_unknown_id_returns_empty() {
        let conn = get_test_connection();
        create_transaction(new_transaction("income", 100.0), &conn).unwrap();

        let transactions = get_transactions_by_id("1337", &conn).unwrap();

        assert_eq!(transactions, []);
    }

    #[test]
    fn get_by_id_with_non_numeric_id_returns_empty() {
        let conn = get_test_connection();
        create_transaction(new_transaction("income", 100.0), &conn).unwrap();

        let transactions = get_transactions_by_id("not-a-number", &conn).unwrap();

        assert_eq!(transactions, []);
    }

    #[test]
    fn delete_removes_row() {
        let conn = get_test_connection();
        create_transaction(new_transaction("income", 100.0), &conn).unwrap();

        let rows_affected = delete_transaction("1", &conn).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(get_all_transactions(&conn).unwrap(), []);
    }

    #[test]
    fn delete_with_unknown_id_affects_no_rows() {
        let conn = get_test_connection();

        let rows_affected = delete_transaction("1337", &conn).unwrap();

        assert_eq!(rows_affected, 0);
    }

    #[test]
    fn sum_with_no_rows_is_zero() {
        let conn = get_test_connection();

        let total = sum_amount_by_type(TransactionType::Income, &conn).unwrap();

        assert_eq!(total, 0.0);
    }

    #[test]
    fn sum_only_counts_matching_type() {
        let conn = get_test_connection();
        create_transaction(new_transaction("income", 100.0), &conn).unwrap();
        create_transaction(new_transaction("expense", 40.0), &conn).unwrap();

        let income = sum_amount_by_type(TransactionType::Income, &conn).unwrap();
        let expenses = sum_amount_by_type(TransactionType::Expense, &conn).unwrap();

        assert_eq!(income, 100.0);
        assert_eq!(expenses, 40.0);
    }
}
