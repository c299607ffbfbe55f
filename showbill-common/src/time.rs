//! Start-time parsing and upcoming/past classification
//!
//! Show start times are stored as TEXT in `%Y-%m-%d %H:%M:%S` form and
//! compared against UTC wall-clock at request time. The text storage is
//! kept byte-compatible with data written by earlier deployments.

use chrono::{NaiveDateTime, Utc};

/// Stored start-time format
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current UTC wall-clock, naive (start times carry no timezone)
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Parse a stored start-time string. Returns None for malformed text.
pub fn parse_start_time(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, START_TIME_FORMAT).ok()
}

/// Format a timestamp into the stored start-time form
pub fn format_start_time(when: NaiveDateTime) -> String {
    when.format(START_TIME_FORMAT).to_string()
}

/// Classify a stored start time relative to `now`.
///
/// "Upcoming" is strictly later than the current instant; ties and
/// unparseable text classify as past.
pub fn is_upcoming(start_time: &str, now: NaiveDateTime) -> bool {
    match parse_start_time(start_time) {
        Some(when) => when > now,
        None => false,
    }
}
