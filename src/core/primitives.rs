use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{TimelineError, TimelineResult};

/// Absolute number of whole days between two instants.
///
/// Symmetric in its arguments and zero when both fall on the same instant.
#[must_use]
pub fn day_difference(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (b - a).num_days().abs()
}

/// Parses an event date supplied as `YYYY-MM-DD` or a full RFC 3339 timestamp.
///
/// Calendar dates resolve to midnight UTC. Anything else fails fast with the
/// offending value so callers never feed unparsed text into the spacing math.
pub fn parse_event_date(value: &str) -> TimelineResult<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| TimelineError::InvalidDate {
            value: value.to_owned(),
            reason: e.to_string(),
        })
}

/// Default event label: the name followed by the RFC 1123 UTC date string.
#[must_use]
pub fn default_event_label(name: &str, date: DateTime<Utc>) -> String {
    format!("{name}\n{}", date.format("%a, %d %b %Y %H:%M:%S GMT"))
}
