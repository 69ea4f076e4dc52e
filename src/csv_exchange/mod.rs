//! Exchanging transactions with CSV files.
//!
//! The CSV format has the columns `t_date, amount, category, description` and
//! an optional header row. The same format is written on export and accepted
//! on import, so an exported file can be imported again without changes.

mod export;
mod file;
mod import;

pub use export::export_rows;
pub use file::{read_csv, write_csv};
pub use import::import_rows;

/// One row of CSV fields.
pub type CsvRow = Vec<String>;

/// The column names written as the first row of an export.
pub const CSV_HEADER: [&str; 4] = ["t_date", "amount", "category", "description"];
