//! Reading and writing CSV text with the `csv` crate.

use std::io::{Read, Write};

use crate::{Error, csv_exchange::CsvRow};

/// Read every record of comma separated `reader` as a row of strings.
///
/// The first record is not treated specially and records may have different
/// numbers of fields, so the rows can be passed to
/// [import_rows](crate::csv_exchange::import_rows) as-is.
///
/// # Errors
/// Returns [Error::InvalidCSV] if the data cannot be read or is not valid UTF-8.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<CsvRow>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    reader
        .records()
        .map(|record| {
            record
                .map(|record| record.iter().map(str::to_owned).collect())
                .map_err(Error::from)
        })
        .collect()
}

/// Write `rows` to `writer` as comma separated values, quoting fields as needed.
///
/// # Errors
/// Returns [Error::InvalidCSV] or [Error::IoError] if the rows cannot be written.
pub fn write_csv<W: Write>(rows: &[CsvRow], writer: W) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    for row in rows {
        writer.write_record(row)?;
    }

    writer.flush()?;

    Ok(())
}
