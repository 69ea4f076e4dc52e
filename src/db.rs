//! Opening connections to the application's SQLite database and creating its schema.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, transaction::create_transaction_table};

/// Create all of the database tables and indexes for the application.
///
/// Safe to call on a database that has already been initialized, existing
/// rows are left untouched.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// The location of the SQLite database that holds the transaction records.
///
/// A new [Connection] is opened for every logical operation and closed when
/// it goes out of scope, so no lock is held between calls. Connections are
/// only handed out inside the crate, front ends go through
/// [RecordService](crate::RecordService).
///
/// ```compile_fail
/// let database = finance_tracker::Database::new("finance.db");
/// let connection = database.connect();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Create a handle to the database file at `path`.
    ///
    /// The file is not opened until the database is initialized or used.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file path of the database.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a new connection to the database, creating the file if needed.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the file cannot be opened.
    pub(crate) fn connect(&self) -> Result<Connection, Error> {
        let connection = Connection::open(&self.path)?;

        Ok(connection)
    }

    /// Ensure the schema exists in the database file.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the file cannot be opened or the schema
    /// cannot be created.
    pub fn initialize(&self) -> Result<(), Error> {
        let connection = self.connect()?;
        initialize(&connection)?;
        tracing::debug!("Initialized database at {:?}", self.path);

        Ok(())
    }
}
