//! WASM bindings for timetable-engine.
//!
//! Exposes the scheduling facade to the web/mobile frontend via
//! `wasm-bindgen`. All complex types cross the boundary as JSON strings:
//! the frontend passes the persisted record array (`[{name, range}, ...]`
//! with "HH:MM - HH:MM" ranges), and gets back either the updated record
//! array plus snapshot, or the snapshot alone.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timetable-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/src/wasm/ \
//!   target/wasm32-unknown-unknown/release/timetable_wasm.wasm
//! ```

use serde::{Deserialize, Serialize};
use timetable_engine::{ClockTime, Period, Schedule};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Persisted-record form of a period, as the frontend stores it.
#[derive(Serialize, Deserialize)]
struct PeriodRecord {
    name: String,
    range: String,
}

/// Result of a mutation: the records to persist plus the view to render.
#[derive(Serialize)]
struct MutationResult {
    records: Vec<PeriodRecord>,
    snapshot: timetable_engine::ScheduleSnapshot,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn err_to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Decode a JSON array of `{name, range}` records into a loaded schedule.
fn parse_schedule_json(json: &str) -> Result<Schedule, JsValue> {
    let records: Vec<PeriodRecord> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid schedule JSON: {}", e)))?;

    let periods = records
        .iter()
        .map(|r| {
            let (start, end) = ClockTime::parse_range(&r.range).map_err(err_to_js)?;
            Ok(Period::new(r.name.clone(), start, end))
        })
        .collect::<Result<Vec<Period>, JsValue>>()?;

    Ok(Schedule::from_periods(periods))
}

fn mutation_result_json(schedule: &Schedule) -> Result<String, JsValue> {
    let records = schedule
        .periods()
        .iter()
        .map(|p| PeriodRecord {
            name: p.name.clone(),
            range: p.range_string(),
        })
        .collect();

    serde_json::to_string(&MutationResult {
        records,
        snapshot: schedule.snapshot(),
    })
    .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Add a period to a schedule.
///
/// `schedule_json` is the persisted record array; `name` and `range`
/// ("HH:MM - HH:MM") are the caller submission. Returns a JSON object with
/// `records` (to persist) and `snapshot` (to render).
#[wasm_bindgen(js_name = "addPeriod")]
pub fn add_period(schedule_json: &str, name: &str, range: &str) -> Result<String, JsValue> {
    let mut schedule = parse_schedule_json(schedule_json)?;
    schedule.add_period(name, range).map_err(err_to_js)?;
    mutation_result_json(&schedule)
}

/// Remove the period at `index` in the sorted view.
///
/// Returns the same `{records, snapshot}` shape as `addPeriod`.
#[wasm_bindgen(js_name = "removePeriod")]
pub fn remove_period(schedule_json: &str, index: usize) -> Result<String, JsValue> {
    let mut schedule = parse_schedule_json(schedule_json)?;
    schedule.remove_period(index).map_err(err_to_js)?;
    mutation_result_json(&schedule)
}

/// Compute the derived view without mutating anything.
///
/// Returns the snapshot JSON: sorted periods with conflict flags, plus the
/// free slots between them.
#[wasm_bindgen(js_name = "computeSnapshot")]
pub fn compute_snapshot(schedule_json: &str) -> Result<String, JsValue> {
    let schedule = parse_schedule_json(schedule_json)?;
    serde_json::to_string(&schedule.snapshot())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
