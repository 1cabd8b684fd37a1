//! Error types for timetable-engine operations.

use thiserror::Error;

/// Validation failures surfaced by the scheduling engine.
///
/// All variants are deterministic input-validation errors: none are
/// retryable, and a failed operation always leaves the schedule unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The time string was not a valid "HH:MM" wall-clock time.
    #[error("Invalid time format: '{0}' (expected HH:MM)")]
    InvalidTimeFormat(String),

    /// The range string was not two times joined by " - ".
    #[error("Invalid range format: '{0}' (expected \"HH:MM - HH:MM\")")]
    InvalidRangeFormat(String),

    /// The period name was blank after trimming.
    #[error("Period name must not be empty")]
    EmptyName,

    /// Removal position outside the current sorted view.
    #[error("Index {index} out of range for schedule of {len} periods")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience alias used throughout timetable-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
