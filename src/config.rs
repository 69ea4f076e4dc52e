//! Runtime configuration for the finance tracker.

use std::path::{Path, PathBuf};

/// The database file used when no path is configured.
pub const DEFAULT_DB_PATH: &str = "finance.db";

/// The number of transactions listed when no limit is given.
///
/// Large enough to show the whole dataset of a personal ledger on one page.
pub const DEFAULT_PAGE_SIZE: u64 = 2000;

/// Settings that are passed explicitly to the store and service layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// File path to the application SQLite database.
    pub db_path: PathBuf,
    /// The maximum transactions to list when not specified by the caller.
    pub page_size: u64,
}

impl Config {
    /// Create a config for the database at `db_path` with the default page size.
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the default page size.
    pub fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}
