//! Database query for retrieving the transactions that fall within a report period.
//!
//! Reports only need the category and amount of each transaction, so this
//! module uses a simplified view rather than the full transaction model.

use rusqlite::Connection;

use crate::{Error, period::Period};

/// A simplified transaction view for report aggregations.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Transaction {
    pub category: String,
    pub amount: f64,
}

/// Gets the category and amount of every transaction whose date falls within `period`.
///
/// # Errors
/// Returns [Error::SqlError] if the SQL query preparation or execution fails.
pub(super) fn get_transactions_in_period(
    period: Period,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let pattern = format!("{}%", period.date_prefix());

    let mut statement =
        connection.prepare("SELECT category, amount FROM transactions WHERE t_date LIKE ?1")?;

    statement
        .query_map((pattern,), |row| {
            Ok(Transaction {
                category: row.get(0)?,
                amount: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<Transaction>, rusqlite::Error>>()
        .map_err(|error| error.into())
}
