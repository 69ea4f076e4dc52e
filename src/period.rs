//! Year and month selectors used to filter transactions for reports.

use std::fmt::Display;

use time::{Date, Month, OffsetDateTime};

use crate::Error;

/// A calendar year, or a month within a year.
///
/// Transactions are matched to a period by comparing the start of their
/// stored `YYYY-MM-DD` date with [Period::date_prefix]. There is no date range
/// arithmetic, so a period can never span a year boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Every day of a year.
    Year(i32),
    /// Every day of one month.
    Month {
        /// The year the month belongs to.
        year: i32,
        /// The month of the year.
        month: Month,
    },
}

impl Period {
    /// Select a whole year.
    pub fn year(year: i32) -> Self {
        Self::Year(year)
    }

    /// Select a month of `year`, where `month` is 1 for January through 12
    /// for December.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] if `month` is not in 1..=12.
    pub fn month(year: i32, month: u8) -> Result<Self, Error> {
        let month = Month::try_from(month).map_err(|_| Error::InvalidMonth(month))?;

        Ok(Self::Month { year, month })
    }

    /// The text that every stored date in this period starts with, e.g.
    /// `"2024-"` for a year or `"2024-01"` for a month.
    pub fn date_prefix(&self) -> String {
        match self {
            Period::Year(year) => format!("{year:04}-"),
            Period::Month { year, month } => format!("{year:04}-{:02}", *month as u8),
        }
    }
}

/// The current date in the local timezone.
///
/// Falls back to UTC when the local offset cannot be determined, e.g. when
/// other threads are running.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Year(year) => write!(f, "{year:04}"),
            Period::Month { year, month } => write!(f, "{year:04}-{:02}", *month as u8),
        }
    }
}
