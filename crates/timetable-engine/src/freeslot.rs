//! Compute free gaps between consecutive periods.
//!
//! Walks the sorted sequence pairwise and emits a slot for every strictly
//! positive gap between one period's end and the next period's start. The
//! open ends of the day are not modeled: nothing is emitted before the first
//! period or after the last.

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::period::Period;

/// A strictly positive idle interval between two consecutive periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl FreeSlot {
    /// Slot length in minutes. Always positive for emitted slots.
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

/// Find the free slots between consecutive periods of a start-sorted
/// sequence, in ascending time order.
///
/// For each adjacent pair a slot `{prev.end, next.start}` is emitted iff
/// `next.start > prev.end`; zero-length and overlapping gaps produce
/// nothing.
pub fn find_free_slots(sorted: &[Period]) -> Vec<FreeSlot> {
    sorted
        .windows(2)
        .filter_map(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            (next.start > prev.end).then(|| FreeSlot {
                start: prev.end,
                end: next.start,
            })
        })
        .collect()
}
