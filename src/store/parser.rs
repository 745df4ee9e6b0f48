//! CSV presence source parsing.
//!
//! Reads the flat presence file into a [`PresenceStore`]. Rows that do
//! not carry exactly four fields are treated as header/footer noise and
//! ignored; rows whose fields fail conversion are skipped with a
//! diagnostic. Only an unreadable source is fatal.

use super::types::{PresenceRecord, PresenceStore, UserId};
use crate::error::Result;
use chrono::{NaiveDate, NaiveTime};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Expected field count of a data row: `user_id,date,start,end`.
const DATA_FIELD_COUNT: usize = 4;

/// Date format of the second field.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format of the start/end fields.
const TIME_FORMAT: &str = "%H:%M:%S";

/// Parses the presence source at `path`.
///
/// A missing or unreadable file propagates as an error; there is no
/// retry or degraded mode.
pub fn parse_file(path: &Path) -> Result<PresenceStore> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Parses presence rows from any reader.
///
/// Later rows for the same `(user, date)` overwrite earlier ones.
/// Mid-stream I/O failures propagate; everything else is row-local.
pub fn parse_reader<R: Read>(reader: R) -> Result<PresenceStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut store = PresenceStore::new();
    let mut skipped = 0usize;

    for (index, row) in csv_reader.records().enumerate() {
        let line = index + 1;
        let record = match row {
            Ok(record) => record,
            Err(e) => {
                if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                    return Err(e.into());
                }
                tracing::debug!(line, error = %e, "skipping unreadable row");
                skipped += 1;
                continue;
            }
        };

        // Header and footer lines never have the data field count.
        if record.len() != DATA_FIELD_COUNT {
            continue;
        }

        match parse_row(&record) {
            Some((user_id, date, presence)) => store.insert(user_id, date, presence),
            None => {
                tracing::debug!(line, row = ?record, "skipping malformed row");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "dropped malformed rows");
    }

    Ok(store)
}

/// Converts one 4-field record, or `None` if any field fails.
fn parse_row(record: &csv::StringRecord) -> Option<(UserId, NaiveDate, PresenceRecord)> {
    let user_id = record[0].parse::<UserId>().ok()?;
    let date = NaiveDate::parse_from_str(&record[1], DATE_FORMAT).ok()?;
    let start = NaiveTime::parse_from_str(&record[2], TIME_FORMAT).ok()?;
    let end = NaiveTime::parse_from_str(&record[3], TIME_FORMAT).ok()?;

    Some((user_id, date, PresenceRecord::new(start, end)))
}
