//! Wall-clock time codec -- "HH:MM" strings to minute-of-day integers.
//!
//! The engine never works with raw time strings internally; everything is
//! parsed into a [`ClockTime`] at the boundary and rendered back only for
//! display and persistence.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};

/// Separator between the two halves of a period range string.
const RANGE_SEPARATOR: &str = " - ";

/// Minutes in a day; valid clock times are `0..MINUTES_PER_DAY`.
const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock instant within one calendar day, stored as minutes since
/// local midnight. Always in `[0, 1439]`.
///
/// Construction goes through [`ClockTime::parse`] or
/// [`ClockTime::from_minutes`], both of which validate the range, so any
/// `ClockTime` value in circulation is known-good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Parse an "HH:MM" string into a clock time.
    ///
    /// Requires exactly two integer parts split on ':', with
    /// `0 <= HH <= 23` and `0 <= MM <= 59`.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidTimeFormat` if the colon is missing,
    /// a part is non-numeric, or a value is out of range.
    pub fn parse(s: &str) -> Result<Self> {
        let bad = || ScheduleError::InvalidTimeFormat(s.to_string());

        let (hh, mm) = s.split_once(':').ok_or_else(bad)?;
        if mm.contains(':') {
            return Err(bad());
        }

        let hours: u16 = hh.parse().map_err(|_| bad())?;
        let minutes: u16 = mm.parse().map_err(|_| bad())?;
        if hours > 23 || minutes > 59 {
            return Err(bad());
        }

        Ok(Self(hours * 60 + minutes))
    }

    /// Parse an `"HH:MM - HH:MM"` range string into a (start, end) pair.
    ///
    /// The separator is the literal `" - "` -- a bare dash without spaces
    /// does not split the string and fails as a malformed range.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidRangeFormat` if the separator is
    /// absent or the string does not split into exactly two tokens;
    /// propagates `InvalidTimeFormat` from either side.
    pub fn parse_range(s: &str) -> Result<(Self, Self)> {
        let mut tokens = s.split(RANGE_SEPARATOR);
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(start), Some(end), None) => Ok((Self::parse(start)?, Self::parse(end)?)),
            _ => Err(ScheduleError::InvalidRangeFormat(s.to_string())),
        }
    }

    /// Construct from a raw minute-of-day count.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidTimeFormat` if `minutes > 1439`.
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidTimeFormat(format!(
                "{} minutes",
                minutes
            )));
        }
        Ok(Self(minutes))
    }

    /// Minutes since local midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// The hour component (0-23).
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// The minute component (0-59).
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Convert to a chrono [`NaiveTime`] for callers living in chrono types.
    pub fn to_naive_time(self) -> NaiveTime {
        // Both components are range-checked at construction.
        NaiveTime::from_hms_opt(self.hour() as u32, self.minute() as u32, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Build from a chrono [`NaiveTime`], truncating seconds.
    pub fn from_naive_time(t: NaiveTime) -> Self {
        Self((t.hour() * 60 + t.minute()) as u16)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

// Serialize through the "HH:MM" display form so persisted and exported JSON
// stays human-readable instead of leaking the minute-count representation.
impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::parse(&s).map_err(de::Error::custom)
    }
}
