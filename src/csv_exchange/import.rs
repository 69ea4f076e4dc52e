//! Insert transactions from CSV rows, skipping rows that cannot be parsed.

use rusqlite::Connection;

use crate::{
    Error,
    csv_exchange::{CSV_HEADER, CsvRow},
    transaction::{NewTransaction, create_transaction},
};

/// Insert a transaction for every row that has a valid date and amount.
///
/// Each row is read as `t_date, amount, category, description`, where missing
/// trailing fields are treated as empty and extra fields are ignored. Empty
/// rows and header rows (first field starting with `t_date`, ignoring case) are
/// skipped, as are rows with an invalid date or amount. All inserted rows are
/// committed together.
///
/// Returns the number of transactions inserted.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error, in which case no rows
/// are inserted.
pub fn import_rows(rows: &[CsvRow], connection: &Connection) -> Result<usize, Error> {
    let transaction = connection.unchecked_transaction()?;
    let mut inserted_count = 0;

    for (row_number, row) in rows.iter().enumerate() {
        let Some(new_transaction) = parse_row(row_number, row) else {
            continue;
        };

        create_transaction(new_transaction, &transaction)?;
        inserted_count += 1;
    }

    transaction.commit()?;

    tracing::info!(
        "Imported {inserted_count} transactions from {} CSV rows",
        rows.len()
    );

    Ok(inserted_count)
}

fn parse_row(row_number: usize, row: &CsvRow) -> Option<NewTransaction> {
    let first_field = row.first()?;

    if is_header(first_field) {
        return None;
    }

    let field = |index: usize| row.get(index).map(String::as_str).unwrap_or("");

    match NewTransaction::parse(field(0), field(1), field(2), field(3)) {
        Ok(new_transaction) => Some(new_transaction),
        Err(error) => {
            tracing::debug!("Skipping CSV row {row_number}: {error}");
            None
        }
    }
}

fn is_header(first_field: &str) -> bool {
    first_field.to_lowercase().starts_with(CSV_HEADER[0])
}
