//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row, types::Type};
use time::Date;

use crate::{
    Error,
    database_id::TransactionId,
    pagination::Pagination,
    transaction::parse::{parse_amount, parse_date, parse_stored_date, validate_amount},
};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database and never reused.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// The amount of money spent (negative) or earned (positive).
    pub amount: f64,
    /// A free-text label used for grouping, e.g. "Groceries".
    pub category: String,
    /// A text description of what the transaction was for, may be empty.
    pub description: String,
}

/// The fields of a transaction that has not been saved yet, or the
/// replacement fields for an existing transaction.
///
/// Text fields are trimmed on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// When the transaction happened.
    pub date: Date,
    /// Positive for income, negative for expenses. Zero is allowed.
    pub amount: f64,
    /// The category label.
    pub category: String,
    /// An optional description, empty if not given.
    pub description: String,
}

impl NewTransaction {
    /// Create the fields for a transaction from already validated values.
    pub fn new(date: Date, amount: f64, category: &str, description: &str) -> Self {
        Self {
            date,
            amount,
            category: category.trim().to_owned(),
            description: description.trim().to_owned(),
        }
    }

    /// Validate a `YYYY-MM-DD` date string and a numeric amount.
    ///
    /// # Errors
    /// Returns [Error::InvalidDate] or [Error::InvalidAmount] if either field
    /// cannot be stored.
    pub fn validate(
        date: &str,
        amount: f64,
        category: &str,
        description: &str,
    ) -> Result<Self, Error> {
        let date = parse_date(date)?;
        let amount = validate_amount(amount)?;

        Ok(Self::new(date, amount, category, description))
    }

    /// Parse both the date and the amount from text, e.g. from a CSV row.
    ///
    /// # Errors
    /// Returns [Error::InvalidDate] or [Error::InvalidAmount] if either field
    /// cannot be parsed.
    pub fn parse(
        date: &str,
        amount: &str,
        category: &str,
        description: &str,
    ) -> Result<Self, Error> {
        let date = parse_date(date)?;
        let amount = parse_amount(amount)?;

        Ok(Self::new(date, amount, category, description))
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (t_date, amount, category, description)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, t_date, amount, category, description",
        )?
        .query_row(
            (
                new_transaction.date,
                new_transaction.amount,
                new_transaction.category,
                new_transaction.description,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Replace every field except the ID of the transaction `id`.
///
/// Returns the number of rows that were changed, which is zero when `id` does
/// not refer to a transaction. A missing transaction is not an error.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn update_transaction(
    id: TransactionId,
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<usize, Error> {
    let rows_changed = connection.execute(
        "UPDATE transactions
         SET t_date = ?1, amount = ?2, category = ?3, description = ?4
         WHERE id = ?5",
        (
            new_transaction.date,
            new_transaction.amount,
            new_transaction.category,
            new_transaction.description,
            id,
        ),
    )?;

    Ok(rows_changed)
}

/// Delete the transaction `id`.
///
/// Returns the number of rows that were deleted, which is zero when `id` does
/// not refer to a transaction.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<usize, Error> {
    let rows_deleted = connection.execute("DELETE FROM transactions WHERE id = ?1", (id,))?;

    Ok(rows_deleted)
}

/// Get a page of transactions, most recent first.
///
/// Transactions are ordered by date and then by ID, both descending, so
/// transactions on the same day are shown newest-inserted first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn list_transactions(
    pagination: Pagination,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let limit = i64::try_from(pagination.limit).unwrap_or(i64::MAX);
    let offset = i64::try_from(pagination.offset).unwrap_or(i64::MAX);

    let mut statement = connection.prepare(
        "SELECT id, t_date, amount, category, description
         FROM transactions
         ORDER BY t_date DESC, id DESC
         LIMIT ?1 OFFSET ?2",
    )?;

    let rows = statement.query_map((limit, offset), map_transaction_row)?;

    collect_readable_rows(rows)
}

/// Get every transaction, oldest first.
///
/// Transactions are ordered by date and then by ID, both ascending.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn list_transactions_chronologically(
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let mut statement = connection.prepare(
        "SELECT id, t_date, amount, category, description
         FROM transactions
         ORDER BY t_date ASC, id ASC",
    )?;

    let rows = statement.query_map([], map_transaction_row)?;

    collect_readable_rows(rows)
}

/// Collect transaction rows, skipping rows whose date cannot be read.
///
/// Any other SQL error fails the whole query.
fn collect_readable_rows(
    rows: impl Iterator<Item = Result<Transaction, rusqlite::Error>>,
) -> Result<Vec<Transaction>, Error> {
    let mut transactions = Vec::new();

    for row in rows {
        match row {
            Ok(transaction) => transactions.push(transaction),
            Err(rusqlite::Error::FromSqlConversionFailure(DATE_COLUMN, _, error)) => {
                tracing::warn!("Skipping transaction with an unreadable date: {error}");
            }
            Err(error) => return Err(error.into()),
        }
    }

    Ok(transactions)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM transactions;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the transaction table and its lookup indexes in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                t_date TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions (t_date);",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_category ON transactions (category);",
        (),
    )?;

    Ok(())
}

const DATE_COLUMN: usize = 1;

/// Map a database row to a Transaction.
///
/// A NULL description is read as an empty string. Dates without zero-padding,
/// e.g. `2024-1-5`, are accepted.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let date_text: String = row.get(DATE_COLUMN)?;
    let date = parse_stored_date(&date_text).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(DATE_COLUMN, Type::Text, Box::new(error))
    })?;
    let amount = row.get(2)?;
    let category = row.get(3)?;
    let description: Option<String> = row.get(4)?;

    Ok(Transaction {
        id,
        date,
        amount,
        category,
        description: description.unwrap_or_default(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
