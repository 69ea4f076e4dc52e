//! Serialize the stored transactions as CSV rows.

use rusqlite::Connection;

use crate::{
    Error,
    csv_exchange::{CSV_HEADER, CsvRow},
    transaction::list_transactions_chronologically,
};

/// Get every transaction as a CSV row, preceded by the header row.
///
/// Rows are ordered oldest first (by date then ID), which is the opposite of
/// the order used when listing transactions. Amounts are written as the
/// shortest decimal string that reads back as the same number.
///
/// # Errors
/// Returns [Error::SqlError] if the transactions cannot be queried.
pub fn export_rows(connection: &Connection) -> Result<Vec<CsvRow>, Error> {
    let transactions = list_transactions_chronologically(connection)?;

    let mut rows = Vec::with_capacity(transactions.len() + 1);
    rows.push(CSV_HEADER.iter().map(|field| field.to_string()).collect());

    for transaction in transactions {
        rows.push(vec![
            transaction.date.to_string(),
            transaction.amount.to_string(),
            transaction.category,
            transaction.description,
        ]);
    }

    tracing::debug!("Exported {} transactions", rows.len() - 1);

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use super::export_rows;
    use crate::{
        db::initialize,
        transaction::{NewTransaction, create_transaction},
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn empty_database_exports_only_header() {
        let conn = get_test_connection();

        let rows = export_rows(&conn).unwrap();

        assert_eq!(rows, vec![vec!["t_date", "amount", "category", "description"]]);
    }

    #[test]
    fn exports_oldest_first() {
        let conn = get_test_connection();
        create_transaction(
            NewTransaction::new(date!(2024 - 01 - 10), -200.5, "Groceries", ""),
            &conn,
        )
        .unwrap();
        create_transaction(
            NewTransaction::new(date!(2024 - 01 - 05), 1000.0, "Income", "salary"),
            &conn,
        )
        .unwrap();
        create_transaction(
            NewTransaction::new(date!(2024 - 01 - 10), 2.25, "Groceries", "refund"),
            &conn,
        )
        .unwrap();

        let rows = export_rows(&conn).unwrap();

        assert_eq!(
            rows[1..],
            vec![
                vec!["2024-01-05", "1000", "Income", "salary"],
                vec!["2024-01-10", "-200.5", "Groceries", ""],
                vec!["2024-01-10", "2.25", "Groceries", "refund"],
            ]
        );
    }

    #[test]
    fn null_description_is_exported_as_empty_string() {
        let conn = get_test_connection();
        conn.execute(
            "INSERT INTO transactions (t_date, amount, category, description) VALUES ('2024-03-01', -1.5, 'Other', NULL)",
            (),
        )
        .unwrap();

        let rows = export_rows(&conn).unwrap();

        assert_eq!(rows[1], vec!["2024-03-01", "-1.5", "Other", ""]);
    }

    #[test]
    fn unpadded_stored_dates_are_exported_padded() {
        let conn = get_test_connection();
        create_transaction(
            NewTransaction::new(date!(2024 - 01 - 02), 1.0, "Income", ""),
            &conn,
        )
        .unwrap();
        conn.execute(
            "INSERT INTO transactions (t_date, amount, category, description) VALUES ('2024-1-5', -2.0, 'Dining', '')",
            (),
        )
        .unwrap();

        let rows = export_rows(&conn).unwrap();

        assert_eq!(
            rows[1..],
            vec![
                vec!["2024-01-02", "1", "Income", ""],
                vec!["2024-01-05", "-2", "Dining", ""],
            ]
        );
    }
}
