//! `timetable` CLI — manage one school day's period schedule from the
//! command line.
//!
//! The schedule lives in a JSON file of `{name, range}` records, one file
//! per day. Every command loads the file, runs one engine operation, saves
//! the plain period list back, and prints the derived view. Conflict flags
//! and free slots are never persisted; they are recomputed on each load.
//!
//! ## Usage
//!
//! ```sh
//! # Add a period to today's schedule
//! timetable add Math "09:00 - 10:00"
//!
//! # Operate on a specific day
//! timetable --date 2026-09-01 add Physics "10:15 - 11:15"
//!
//! # Show the sorted periods with conflict markers and free slots
//! timetable show
//!
//! # Remove the period at position 1 in the sorted view
//! timetable remove 1
//!
//! # Dump the snapshot as JSON (the display contract)
//! timetable export
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use timetable_engine::{ClockTime, Period, Schedule, ScheduleSnapshot};

#[derive(Parser)]
#[command(name = "timetable", version, about = "School day-timetable manager")]
struct Cli {
    /// Schedule file to operate on (overrides --date)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Day to operate on, as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a period to the schedule
    Add {
        /// Period name (e.g., "Math")
        name: String,
        /// Time range as "HH:MM - HH:MM"
        range: String,
    },
    /// Remove the period at a position in the sorted view
    Remove {
        /// Zero-based position as printed by `show`
        index: usize,
    },
    /// Print the sorted periods with conflict markers and free slots
    Show,
    /// Print the full snapshot as pretty JSON
    Export,
}

/// Persisted form of one period: the name plus its "HH:MM - HH:MM" range.
/// Derived data never appears in the file.
#[derive(Serialize, Deserialize)]
struct PeriodRecord {
    name: String,
    range: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = schedule_path(&cli);

    let mut schedule = load_schedule(&path)?;

    match cli.command {
        Commands::Add { name, range } => {
            let snapshot = schedule
                .add_period(&name, &range)
                .with_context(|| format!("Failed to add period '{}'", name))?;
            save_schedule(&path, &schedule)?;
            print!("{}", render_snapshot(&snapshot));
        }
        Commands::Remove { index } => {
            let snapshot = schedule
                .remove_period(index)
                .context("Failed to remove period")?;
            save_schedule(&path, &schedule)?;
            print!("{}", render_snapshot(&snapshot));
        }
        Commands::Show => {
            print!("{}", render_snapshot(&schedule.snapshot()));
        }
        Commands::Export => {
            let pretty = serde_json::to_string_pretty(&schedule.snapshot())?;
            println!("{}", pretty);
        }
    }

    Ok(())
}

/// Resolve the schedule file: explicit --file wins, otherwise one file per
/// day named after --date (or today).
fn schedule_path(cli: &Cli) -> PathBuf {
    if let Some(file) = &cli.file {
        return file.clone();
    }
    let date = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    PathBuf::from(format!("timetable-{}.json", date.format("%Y-%m-%d")))
}

/// Load the persisted period list. A missing file is an empty schedule;
/// each record's range string goes back through the clock codec.
fn load_schedule(path: &Path) -> Result<Schedule> {
    if !path.exists() {
        return Ok(Schedule::new());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule file: {}", path.display()))?;
    let records: Vec<PeriodRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed schedule file: {}", path.display()))?;

    let periods = records
        .iter()
        .map(|r| {
            let (start, end) = ClockTime::parse_range(&r.range)
                .with_context(|| format!("Bad range for period '{}'", r.name))?;
            Ok(Period::new(r.name.clone(), start, end))
        })
        .collect::<Result<Vec<Period>>>()?;

    Ok(Schedule::from_periods(periods))
}

/// Save the sorted period list verbatim, without derived annotations.
fn save_schedule(path: &Path, schedule: &Schedule) -> Result<()> {
    let records: Vec<PeriodRecord> = schedule
        .periods()
        .iter()
        .map(|p| PeriodRecord {
            name: p.name.clone(),
            range: p.range_string(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&records)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write schedule file: {}", path.display()))?;
    Ok(())
}

/// Render the snapshot for the terminal: one line per period with its
/// position, range, and a conflict marker, then the free slots.
fn render_snapshot(snapshot: &ScheduleSnapshot) -> String {
    if snapshot.periods.is_empty() {
        return "No periods scheduled.\n".to_string();
    }

    let mut out = String::new();
    for (i, annotated) in snapshot.periods.iter().enumerate() {
        let marker = if annotated.conflict { "  !! conflict" } else { "" };
        out.push_str(&format!(
            "[{}] {}  {}{}\n",
            i,
            annotated.period.range_string(),
            annotated.period.name,
            marker
        ));
    }

    if snapshot.free_slots.is_empty() {
        out.push_str("No free slots.\n");
    } else {
        out.push_str("Free slots:\n");
        for slot in &snapshot.free_slots {
            out.push_str(&format!(
                "  {} - {}  ({} min)\n",
                slot.start,
                slot.end,
                slot.duration_minutes()
            ));
        }
    }

    out
}
