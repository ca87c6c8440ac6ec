//! Line-oriented import of delimited report records.
//!
//! Each non-blank line holds `;`-separated values in the fixed order
//! `year;author;title` and becomes one report record. There is no header row
//! and no quoting - values are taken verbatim, so a `;` cannot appear inside
//! a value. Extra values after the title are ignored.

use std::io::BufRead;

use log::trace;

use crate::{
    ast::{Record, RecordKind},
    Error, ErrorKind,
};

/// Reads `;`-delimited `year;author;title` lines into report records.
///
/// Blank lines are skipped. The records are returned in line order and carry
/// no citation key.
///
/// # Errors
///
/// An `Err` is returned when reading from `reader` fails or when a non-blank
/// line has fewer than three values.
pub fn csv_records<R: BufRead>(reader: R) -> Result<Vec<Record>, Error> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::wrap(ErrorKind::IO, e))?;
        if line.trim().is_empty() {
            continue;
        }

        let record = csv_record(&line).ok_or_else(|| {
            Error::new(
                ErrorKind::Deserialize,
                format!("line {}: expected 'year;author;title'", index + 1),
            )
        })?;
        records.push(record);
    }

    trace!("Imported {} records", records.len());
    Ok(records)
}

fn csv_record(line: &str) -> Option<Record> {
    let mut values = line.split(';');

    let year = values.next()?;
    let author = values.next()?;
    let title = values.next()?;

    let mut record = Record::new(RecordKind::Report);
    record.set_field("year", year);
    record.set_field("author", author);
    record.set_field("title", title);
    Some(record)
}
