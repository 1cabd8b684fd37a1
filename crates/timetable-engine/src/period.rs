//! The period record -- a named, time-bounded interval within one day.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;

/// A named, time-bounded interval (e.g., a class period).
///
/// `start < end` is deliberately not enforced: reversed or zero-length
/// ranges are accepted and simply fall through the same derived-data
/// arithmetic as any other period. Callers wanting stricter input validate
/// before constructing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub name: String,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl Period {
    /// Create a period from an already-validated name and parsed times.
    pub fn new(name: impl Into<String>, start: ClockTime, end: ClockTime) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Render the time range back to its `"HH:MM - HH:MM"` persisted form.
    pub fn range_string(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}
