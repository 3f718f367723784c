//! Row-to-entity parsing helpers.
//!
//! `libsql::Row` is column-indexed and loosely typed. These helpers turn the
//! stored TEXT/INTEGER columns back into the typed fields of `Robot`.

use taskbot_core::clock::ClockTime;

use crate::error::DatabaseError;

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Parse a TEXT column holding `"HH:MM"`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored value is not a valid time.
pub fn parse_clock(s: &str) -> Result<ClockTime, DatabaseError> {
    s.parse()
        .map_err(|e| DatabaseError::Query(format!("Failed to parse time '{s}': {e}")))
}

/// Read an INTEGER column as a day slot.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored value does not fit a day.
pub fn get_day(row: &libsql::Row, idx: i32) -> Result<u8, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u8::try_from(raw).map_err(|_| DatabaseError::Query(format!("Day out of range: {raw}")))
}

/// Read an INTEGER column as a boolean flag (`0` is false).
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_flag(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}
