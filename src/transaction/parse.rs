//! Parsing and validation of user supplied transaction fields.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The only accepted date format for input, e.g. `2024-01-05`.
///
/// Month and day must be zero-padded so that stored dates sort correctly as
/// text and can be matched by prefix.
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Dates such as `2024-1-5` found in databases written by older versions.
const UNPADDED_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month padding:none]-[day padding:none]");

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
/// Returns [Error::InvalidDate] if the text is not a valid calendar date in the
/// expected format.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    let trimmed = text.trim();

    Date::parse(trimmed, DATE_FORMAT).map_err(|error| {
        tracing::debug!("Could not parse \"{trimmed}\" as a date: {error}");
        Error::InvalidDate(trimmed.to_owned())
    })
}

/// Read a date stored in the `t_date` column.
///
/// Accepts `YYYY-MM-DD` and, for rows written without zero-padding, `YYYY-M-D`.
///
/// # Errors
/// Returns the parse error of the padded format if neither format matches.
pub fn parse_stored_date(text: &str) -> Result<Date, time::error::Parse> {
    let trimmed = text.trim();

    Date::parse(trimmed, DATE_FORMAT)
        .or_else(|error| Date::parse(trimmed, UNPADDED_DATE_FORMAT).map_err(|_| error))
}

/// Parse a signed decimal amount such as `-200.50`.
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
/// Returns [Error::InvalidAmount] if the text is empty, is not a number, or is
/// not a finite number.
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    let trimmed = text.trim();

    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::InvalidAmount(trimmed.to_owned())),
    }
}

/// Check that `amount` can be stored, i.e. it is neither NaN nor infinite.
///
/// # Errors
/// Returns [Error::InvalidAmount] for non-finite amounts.
pub fn validate_amount(amount: f64) -> Result<f64, Error> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(Error::InvalidAmount(amount.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{parse_amount, parse_date, parse_stored_date, validate_amount};
    use crate::Error;

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_date("2024-01-05"), Ok(date!(2024 - 01 - 05)));
    }

    #[test]
    fn parses_date_with_surrounding_whitespace() {
        assert_eq!(parse_date("  2024-02-29 "), Ok(date!(2024 - 02 - 29)));
    }

    #[test]
    fn rejects_impossible_date() {
        assert_eq!(
            parse_date("2023-02-29"),
            Err(Error::InvalidDate("2023-02-29".to_owned()))
        );
    }

    #[test]
    fn rejects_unpadded_date() {
        assert_eq!(
            parse_date("2024-1-5"),
            Err(Error::InvalidDate("2024-1-5".to_owned()))
        );
    }

    #[test]
    fn rejects_other_date_formats() {
        for text in ["bad-date", "05/01/2024", "2024/01/05", "", "2024-01-05T10:00"] {
            assert!(parse_date(text).is_err(), "want error for {text:?}");
        }
    }

    #[test]
    fn stored_dates_may_be_unpadded() {
        assert_eq!(parse_stored_date("2024-01-05"), Ok(date!(2024 - 01 - 05)));
        assert_eq!(parse_stored_date("2024-1-5"), Ok(date!(2024 - 01 - 05)));
        assert_eq!(parse_stored_date("2024-11-5"), Ok(date!(2024 - 11 - 05)));
    }

    #[test]
    fn stored_dates_must_still_be_dates() {
        for text in ["", "bad-date", "2023-2-29", "05/01/2024"] {
            assert!(parse_stored_date(text).is_err(), "want error for {text:?}");
        }
    }

    #[test]
    fn parses_signed_amounts() {
        assert_eq!(parse_amount("1000"), Ok(1000.0));
        assert_eq!(parse_amount("-200.50"), Ok(-200.5));
        assert_eq!(parse_amount(" 12.3 "), Ok(12.3));
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn rejects_non_numeric_amount() {
        assert_eq!(
            parse_amount("not-a-number"),
            Err(Error::InvalidAmount("not-a-number".to_owned()))
        );
        assert_eq!(parse_amount(""), Err(Error::InvalidAmount(String::new())));
    }

    #[test]
    fn rejects_non_finite_amounts() {
        for text in ["NaN", "inf", "-infinity"] {
            assert!(parse_amount(text).is_err(), "want error for {text:?}");
        }

        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::NEG_INFINITY).is_err());
        assert_eq!(validate_amount(-1.25), Ok(-1.25));
    }
}
