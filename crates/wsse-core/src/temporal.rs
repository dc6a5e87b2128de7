//! # Temporal Types — Offset-Carrying ISO-8601 Timestamps
//!
//! Defines `Timestamp`, the `Created` value of a WSSE token. It renders as
//! ISO-8601 with seconds precision and a numeric UTC offset:
//! `YYYY-MM-DDTHH:MM:SS±HH:MM`. UTC renders as `+00:00`, never `Z`, since
//! that is the form WSSE servers have always received from this tool.
//!
//! The instant is kept to millisecond precision because the nonce input
//! mixes in the epoch milliseconds of the same clock reading.
//!
//! Time is read through the [`Clock`] trait so token construction can be
//! pinned to a fixed instant in tests.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WsseError;

/// An instant with its local UTC offset, truncated to milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Read the system clock in the local timezone.
    pub fn now() -> Self {
        Self::from_datetime(Local::now())
    }

    /// Create a timestamp from any `chrono` datetime, keeping its offset.
    pub fn from_datetime<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Self(truncate_to_millis(dt.fixed_offset()))
    }

    /// Parse an RFC 3339 / ISO-8601 string with any offset.
    ///
    /// # Errors
    ///
    /// Returns `WsseError::Timestamp` if the string is not valid RFC 3339.
    pub fn parse(s: &str) -> Result<Self, WsseError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| WsseError::Timestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}")))?;
        Ok(Self(truncate_to_millis(dt)))
    }

    /// Create a timestamp from Unix epoch milliseconds, displayed at `offset`.
    ///
    /// # Errors
    ///
    /// Returns `WsseError::Timestamp` if the value is out of `chrono`'s range.
    pub fn from_epoch_millis(millis: i64, offset: FixedOffset) -> Result<Self, WsseError> {
        let dt = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| WsseError::Timestamp(format!("invalid Unix timestamp: {millis}ms")))?;
        Ok(Self(dt.with_timezone(&offset)))
    }

    /// Access the inner datetime.
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// The UTC offset this timestamp renders with.
    pub fn offset(&self) -> FixedOffset {
        *self.0.offset()
    }

    /// Unix epoch milliseconds.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS±HH:MM` (sub-seconds dropped).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn truncate_to_millis(dt: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let nanos = dt.nanosecond() / 1_000_000 * 1_000_000;
    dt.with_nanosecond(nanos).unwrap_or(dt)
}

/// Source of "now" for token construction.
pub trait Clock: Send + Sync {
    /// The current instant. Called once per token; never cached.
    fn now(&self) -> Timestamp;
}

/// The system wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
