//! # timetable-engine
//!
//! Day-timetable scheduling engine for a school-management application.
//!
//! Maintains a day's list of named, time-bounded periods, keeps them sorted
//! by start time, flags overlaps between adjacent periods, and derives the
//! free gaps between them. Storage- and transport-agnostic: callers load a
//! period list, operate through [`Schedule`], and persist the plain period
//! list back out.
//!
//! ## Modules
//!
//! - [`clock`] — "HH:MM" wall-clock codec and the [`ClockTime`] minute-of-day type
//! - [`period`] — the [`Period`] record
//! - [`store`] — sorted period storage
//! - [`conflict`] — adjacent-period overlap flags
//! - [`freeslot`] — free gaps between consecutive periods
//! - [`schedule`] — the [`Schedule`] facade and its snapshot types
//! - [`error`] — error types

pub mod clock;
pub mod conflict;
pub mod error;
pub mod freeslot;
pub mod period;
pub mod schedule;
pub mod store;

pub use clock::ClockTime;
pub use error::ScheduleError;
pub use freeslot::FreeSlot;
pub use period::Period;
pub use schedule::{AnnotatedPeriod, Schedule, ScheduleSnapshot};
pub use store::PeriodStore;
