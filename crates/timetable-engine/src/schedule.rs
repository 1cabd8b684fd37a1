//! The scheduling facade -- add/remove/query operations over one day.
//!
//! Composes the codec, store, conflict detector, and free-slot calculator
//! into the single surface callers use. Every mutation returns a fresh
//! [`ScheduleSnapshot`]; derived data (conflict flags, free slots) is
//! recomputed from the stored periods on every query and never cached, so
//! it cannot go stale relative to the store.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::conflict::conflict_flags;
use crate::error::{Result, ScheduleError};
use crate::freeslot::{find_free_slots, FreeSlot};
use crate::period::Period;
use crate::store::PeriodStore;

/// A period in the sorted view, annotated with its conflict flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedPeriod {
    #[serde(flatten)]
    pub period: Period,
    /// True when this period overlaps the one immediately before it in
    /// sort order. The first period is never flagged.
    pub conflict: bool,
}

/// The full derived view of a day: sorted annotated periods plus the free
/// slots between them. This is everything a presentation layer needs --
/// ready to render, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    pub periods: Vec<AnnotatedPeriod>,
    pub free_slots: Vec<FreeSlot>,
}

/// One day's schedule.
///
/// The engine holds no I/O and no cross-call state beyond this value:
/// callers load a period list into a `Schedule`, operate, and read
/// [`Schedule::periods`] back out to persist. Concurrent edits are the
/// caller's problem to serialize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    store: PeriodStore,
}

impl Schedule {
    /// An empty day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a previously persisted period list. The input may be in any
    /// order; the sort invariant is restored here.
    pub fn from_periods(periods: Vec<Period>) -> Self {
        Self {
            store: PeriodStore::from_periods(periods),
        }
    }

    /// Add a period from a caller submission.
    ///
    /// The name is trimmed; the range string goes through the clock codec.
    /// All validation happens before the store is touched, so a failed add
    /// leaves the prior snapshot fully intact.
    ///
    /// # Errors
    /// - `ScheduleError::EmptyName` if the name is blank after trimming.
    /// - `ScheduleError::InvalidRangeFormat` / `InvalidTimeFormat` from the
    ///   codec.
    pub fn add_period(&mut self, name: &str, range: &str) -> Result<ScheduleSnapshot> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScheduleError::EmptyName);
        }
        let (start, end) = ClockTime::parse_range(range)?;

        self.store.insert(Period::new(name, start, end));
        Ok(self.snapshot())
    }

    /// Remove the period at `index` in the current sorted view.
    ///
    /// # Errors
    /// `ScheduleError::IndexOutOfRange` when `index >= len`; the store is
    /// unchanged on failure.
    pub fn remove_period(&mut self, index: usize) -> Result<ScheduleSnapshot> {
        self.store.remove(index)?;
        Ok(self.snapshot())
    }

    /// Recompute the derived view from the stored periods.
    ///
    /// Calling this twice without a mutation in between yields identical
    /// results.
    pub fn snapshot(&self) -> ScheduleSnapshot {
        let sorted = self.store.all();
        let flags = conflict_flags(sorted);

        let periods = sorted
            .iter()
            .zip(flags)
            .map(|(period, conflict)| AnnotatedPeriod {
                period: period.clone(),
                conflict,
            })
            .collect();

        ScheduleSnapshot {
            periods,
            free_slots: find_free_slots(sorted),
        }
    }

    /// The sorted periods without derived annotations -- the save boundary.
    /// Persist these verbatim; conflict flags and free slots are recomputed
    /// on the next load.
    pub fn periods(&self) -> &[Period] {
        self.store.all()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
