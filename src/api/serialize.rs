//! Wire representation of timestamps as used by the Ticketmatic API.
use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;

/// Format the API uses when sending timestamps.
const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Time is a timestamp as it travels over the wire.
///
/// The API sends and accepts `YYYY-MM-DD hh:mm:ss`. When decoding, a bare date
/// (`YYYY-MM-DD`, taken as midnight) and RFC 3339 are accepted as well.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct Time(pub DateTime<Utc>);

/// Returned when a string does not hold any of the timestamp layouts [`Time`] understands.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid timestamp: {0:?}")]
pub struct ParseTimeError(String);

impl Time {
    /// Current system time.
    pub fn now() -> Time {
        Time(Utc::now())
    }

    /// The wrapped timestamp.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(value: DateTime<Utc>) -> Self {
        Time(value)
    }
}

impl From<NaiveDate> for Time {
    fn from(value: NaiveDate) -> Self {
        Time(value.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl FromStr for Time {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

/// Parses a timestamp in any of the layouts the API uses.
pub fn parse_time(s: &str) -> Result<Time, ParseTimeError> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, WIRE_FORMAT) {
        return Ok(Time(dt.and_utc()));
    }
    // Some endpoints add fractional seconds.
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(Time(dt.and_utc()));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.into());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(Time(dt.with_timezone(&Utc)));
    }
    Err(ParseTimeError(s.to_string()))
}
