//! Finance Tracker is a single-user tracker for personal income and expenses.
//!
//! Transactions are dated, categorized amounts where positive amounts are
//! income and negative amounts are expenses. They are kept in a local SQLite
//! database and can be listed, summarized by category or by income and
//! expense for a year or a month, and exchanged with CSV files.
//!
//! Front ends should only use [RecordService], which validates input and
//! opens a new database connection for each operation.
//!
//! ```no_run
//! use finance_tracker::{Config, RecordService};
//!
//! # fn main() -> Result<(), finance_tracker::Error> {
//! let service = RecordService::from_config(&Config::default())?;
//! service.add_transaction("2024-01-05", 1000.0, "Income", "salary")?;
//! service.add_transaction("2024-01-10", -200.50, "Groceries", "")?;
//!
//! let totals = service.monthly_totals(2024, 1)?;
//! assert_eq!(totals["Groceries"], -200.50);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod category;
mod config;
mod csv_exchange;
mod database_id;
mod db;
mod display;
mod error;
mod logging;
mod pagination;
mod period;
mod report;
mod service;
mod transaction;

pub use category::{DEFAULT_CATEGORY, SUGGESTED_CATEGORIES, category_or_default};
pub use config::{Config, DEFAULT_DB_PATH, DEFAULT_PAGE_SIZE};
pub use csv_exchange::{CSV_HEADER, CsvRow, read_csv, write_csv};
pub use database_id::TransactionId;
pub use db::Database;
pub use display::{format_amount, format_currency};
pub use error::Error;
pub use logging::setup_logging;
pub use pagination::Pagination;
pub use period::{Period, today};
pub use report::{CategoryTotals, IncomeExpense, ReportChart, render_report_page, report_charts};
pub use service::RecordService;
pub use transaction::{Transaction, parse_amount, parse_date};
