//! Human-readable timestamps for document cards and verification results.
//!
//! Times render in UTC; the browser's zone database is not available to the
//! `time` crate under WASM.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

const DISPLAY: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year], [hour]:[minute] UTC");

const NAIVE: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");

/// Format a backend timestamp; unparseable input is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    let parsed = OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .or_else(|| PrimitiveDateTime::parse(raw, NAIVE).ok().map(PrimitiveDateTime::assume_utc));
    parsed
        .and_then(|dt| dt.to_offset(time::UtcOffset::UTC).format(DISPLAY).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Format a unix-seconds timestamp; out-of-range values render as the number.
pub fn format_unix(secs: i64) -> String {
    OffsetDateTime::from_unix_timestamp(secs)
        .ok()
        .and_then(|dt| dt.format(DISPLAY).ok())
        .unwrap_or_else(|| secs.to_string())
}
