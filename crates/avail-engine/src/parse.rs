//! Lenient date parsing for upstream record fields.
//!
//! Date strings arrive in mixed formats depending on which form or import
//! path produced the record. Formats are tried in a fixed order; anything
//! unparseable maps to `None` rather than an error, and the caller excludes
//! the record from computation.

use chrono::{DateTime, NaiveDate};

/// Accepted date formats, tried in order. ISO first, then the two
/// day-first variants produced by manual entry and spreadsheet imports.
const FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Parse a raw date string into a [`NaiveDate`].
///
/// Returns `None` for missing, empty, or unparseable input, never an error.
/// A trailing RFC 3339 fallback covers timestamp-shaped values
/// (e.g. `"2025-06-15T00:00:00Z"`) that some upstream endpoints emit.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    for fmt in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(date);
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
