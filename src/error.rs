//! Defines the crate level error type and its conversions from library errors.

/// The errors that may occur in the finance tracker.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A date string could not be parsed as a calendar date in the format
    /// `YYYY-MM-DD`.
    ///
    /// Holds the offending input so it can be shown back to the user.
    #[error("\"{0}\" is not a valid date, expected the format YYYY-MM-DD")]
    InvalidDate(String),

    /// An amount was not a number, or was not finite (NaN or infinity).
    #[error("\"{0}\" is not a valid amount, expected a number such as 12.50 or -3")]
    InvalidAmount(String),

    /// A month number outside of 1 to 12 was used to select a period.
    #[error("{0} is not a valid month, expected a number from 1 to 12")]
    InvalidMonth(u8),

    /// The CSV data could not be read or written.
    #[error("could not process the CSV data: {0}")]
    InvalidCSV(String),

    /// A file could not be opened, read or written.
    #[error("an I/O error occurred: {0}")]
    IoError(String),

    /// The global logger could not be installed.
    #[error("could not set up logging: {0}")]
    LoggingSetup(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::InvalidCSV(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::IoError(value.to_string())
    }
}
