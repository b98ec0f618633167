//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable point in time, always UTC. Serialized as ISO-8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp from a datetime in any zone.
    pub fn from_zoned<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self(dt.with_timezone(&Utc))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Converts to the given zone.
    pub fn in_zone<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        self.0.with_timezone(tz)
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days. Results past the calendar saturate at
    /// its first or last instant.
    pub fn add_days(&self, days: i64) -> Self {
        let shifted = Duration::try_days(days).and_then(|d| self.0.checked_add_signed(d));
        match shifted {
            Some(dt) => Self(dt),
            None if days < 0 => Self(DateTime::<Utc>::MIN_UTC),
            None => Self(DateTime::<Utc>::MAX_UTC),
        }
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        match days.checked_neg() {
            Some(back) => self.add_days(back),
            None => Self(DateTime::<Utc>::MAX_UTC),
        }
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset};

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_deserializes_from_iso8601() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
        assert_eq!(ts.as_datetime().day(), 15);
    }

    #[test]
    fn timestamp_accepts_offset_input() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T09:00:00+09:00\"").unwrap();
        assert_eq!(ts.to_string(), "2024-01-15T00:00:00+00:00");
    }

    #[test]
    fn timestamp_converts_to_zone() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-14T20:00:00Z\"").unwrap();
        let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(ts.in_zone(&seoul).day(), 15);
    }

    #[test]
    fn timestamp_day_arithmetic() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap();
        assert_eq!(ts.add_days(2).as_datetime().day(), 17);
        assert_eq!(ts.minus_days(15).as_datetime().day(), 31);
        assert!(ts.minus_days(1).is_before(&ts));
        assert!(ts.add_days(1) > ts);
    }

    #[test]
    fn day_arithmetic_saturates_at_calendar_edge() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap();
        assert_eq!(ts.minus_days(i64::from(u32::MAX)), Timestamp(DateTime::<Utc>::MIN_UTC));
        assert_eq!(ts.add_days(i64::MAX), Timestamp(DateTime::<Utc>::MAX_UTC));
    }
}
