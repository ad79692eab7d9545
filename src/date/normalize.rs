//! Decoders for date-bearing response headers
//!
//! Both decoders drop the time of day: only the calendar date takes part in
//! correlation.

use chrono::{Local, NaiveDate, NaiveDateTime, TimeZone};

/// Number of trailing `ETag` characters holding the hex epoch
const ETAG_EPOCH_HEX_LEN: usize = 8;

/// Length of the zone suffix (` GMT`) dropped from `Last-Modified`
const LAST_MODIFIED_ZONE_SUFFIX_LEN: usize = 4;

/// `Last-Modified` layout once the zone suffix and weekday are removed
const LAST_MODIFIED_FORMAT: &str = "%d %b %Y %H:%M:%S";

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Error type for header date decoding
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The `ETag` suffix is not a hexadecimal number
    #[error("ETag {etag:?} does not end in a hex timestamp")]
    InvalidEtag { etag: String },

    /// The decoded timestamp cannot be represented as a date
    #[error("ETag {etag:?} decodes to out-of-range timestamp {timestamp}")]
    TimestampOutOfRange { etag: String, timestamp: i64 },

    /// `Last-Modified` does not follow `Day, DD Mon YYYY HH:MM:SS GMT`
    #[error("Last-Modified {value:?} is not an HTTP date: {reason}")]
    InvalidLastModified { value: String, reason: String },
}

/// Decode the hex Unix timestamp at the end of an `ETag` into a local date
///
/// PAN-OS builds `ETag`s like `5e5d-5e5d4e80`, where the last eight hex
/// digits are the file's modification time. Anything before those digits is
/// ignored. The date is taken in the timezone of the running process.
pub fn etag_to_date(etag: &str) -> Result<NaiveDate, FormatError> {
    etag_to_date_in(etag, &Local)
}

/// Same as [`etag_to_date`], with an explicit timezone
pub fn etag_to_date_in<Tz: TimeZone>(etag: &str, tz: &Tz) -> Result<NaiveDate, FormatError> {
    let epoch_hex = last_chars(etag, ETAG_EPOCH_HEX_LEN);
    if epoch_hex.is_empty() || !epoch_hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FormatError::InvalidEtag {
            etag: etag.to_string(),
        });
    }

    let timestamp = i64::from_str_radix(epoch_hex, 16).map_err(|_| FormatError::InvalidEtag {
        etag: etag.to_string(),
    })?;

    tz.timestamp_opt(timestamp, 0)
        .single()
        .map(|datetime| datetime.date_naive())
        .ok_or_else(|| FormatError::TimestampOutOfRange {
            etag: etag.to_string(),
            timestamp,
        })
}

/// Decode a `Last-Modified` value such as `Mon, 02 Mar 2020 18:20:48 GMT`
///
/// The weekday must be a day abbreviation but is not checked against the date.
pub fn last_modified_to_date(value: &str) -> Result<NaiveDate, FormatError> {
    let invalid = |reason: String| FormatError::InvalidLastModified {
        value: value.to_string(),
        reason,
    };

    let keep = value
        .chars()
        .count()
        .checked_sub(LAST_MODIFIED_ZONE_SUFFIX_LEN)
        .ok_or_else(|| invalid("too short".to_string()))?;
    let without_zone: String = value.chars().take(keep).collect();

    let (weekday, rest) = without_zone
        .split_once(", ")
        .ok_or_else(|| invalid("missing weekday".to_string()))?;
    if !WEEKDAY_ABBREVIATIONS
        .iter()
        .any(|day| day.eq_ignore_ascii_case(weekday))
    {
        return Err(invalid(format!("unknown weekday {weekday:?}")));
    }

    NaiveDateTime::parse_from_str(rest, LAST_MODIFIED_FORMAT)
        .map(|datetime| datetime.date())
        .map_err(|e| invalid(e.to_string()))
}

/// The final `n` characters of `s`, or all of it when shorter
fn last_chars(s: &str, n: usize) -> &str {
    let start = s
        .char_indices()
        .rev()
        .nth(n - 1)
        .map_or(0, |(index, _)| index);
    &s[start..]
}
