//! Time-text parsing injected into generated accessors.
//!
//! The type→flag mapper treats timestamp arguments as string flags and emits
//! a call to [`parse_time`]; the parsing itself lives here.

use anyhow::bail;
use chrono::{DateTime, NaiveDate, Utc};

/// Parse a CLI-supplied time value.
///
/// Accepts RFC 3339 (`2024-05-01T10:30:00Z`) and plain dates (`2024-05-01`,
/// read as midnight UTC).
pub fn parse_time(text: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
        }
    }
    bail!("unrecognized time value: {text}")
}
