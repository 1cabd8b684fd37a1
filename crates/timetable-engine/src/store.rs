//! Period storage with the sort-by-start invariant.
//!
//! The store owns the day's periods and keeps them sorted ascending by start
//! time at all times, so every read and every index-based operation works
//! against the same sorted view a caller sees.

use crate::error::{Result, ScheduleError};
use crate::period::Period;

/// Holds a day's periods, sorted ascending by `start`.
///
/// Equal start times keep insertion order: the sort after each insert is
/// stable and the new period is appended before sorting, so a later insert
/// with the same start lands after the earlier one.
///
/// No uniqueness constraint exists -- duplicate names and wholly identical
/// periods are permitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodStore {
    periods: Vec<Period>,
}

impl PeriodStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an unordered collection, restoring the sort
    /// invariant. This is the load boundary: persisted lists arrive in
    /// whatever order they were saved.
    pub fn from_periods(mut periods: Vec<Period>) -> Self {
        periods.sort_by_key(|p| p.start);
        Self { periods }
    }

    /// Insert a period and re-sort the collection by start time.
    pub fn insert(&mut self, period: Period) {
        self.periods.push(period);
        // Stable sort: ties on `start` preserve insertion order.
        self.periods.sort_by_key(|p| p.start);
    }

    /// Remove and return the period at `index` in the sorted view.
    ///
    /// # Errors
    /// Returns `ScheduleError::IndexOutOfRange` when `index >= len`; the
    /// collection is untouched on failure.
    pub fn remove(&mut self, index: usize) -> Result<Period> {
        if index >= self.periods.len() {
            return Err(ScheduleError::IndexOutOfRange {
                index,
                len: self.periods.len(),
            });
        }
        Ok(self.periods.remove(index))
    }

    /// Read-only view of the periods, sorted ascending by start.
    pub fn all(&self) -> &[Period] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}
