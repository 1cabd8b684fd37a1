//! Detect overlapping periods in a sorted day schedule.
//!
//! The check is adjacent-only: a period is compared against its immediate
//! predecessor in sort order and nothing else. A period engulfed by a
//! non-adjacent earlier period is NOT flagged. Downstream consumers may
//! rely on that, so the check stays predecessor-only rather than growing
//! into full pairwise detection.

use crate::period::Period;

/// Compute per-period conflict flags over a start-sorted sequence.
///
/// `flags[0]` is always `false`; for `i >= 1`,
/// `flags[i] == (sorted[i].start < sorted[i-1].end)`.
///
/// A period that starts exactly when its predecessor ends is not a conflict.
pub fn conflict_flags(sorted: &[Period]) -> Vec<bool> {
    sorted
        .iter()
        .enumerate()
        .map(|(i, period)| i > 0 && period.start < sorted[i - 1].end)
        .collect()
}
