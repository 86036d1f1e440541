//! `avail` CLI — compute PIC availability windows from project record JSON.
//!
//! ## Usage
//!
//! ```sh
//! # All free windows per PIC, records piped via stdin
//! cat projects.json | avail windows --today 2025-06-14
//!
//! # Nearest free window per PIC, with a holiday list
//! avail nearest -i projects.json --holidays holidays.json
//!
//! # Windows as JSON for downstream export
//! avail windows -i projects.json --json
//!
//! # Bare workday count for a date range
//! avail workdays --start 2025-06-01 --end 2025-06-30
//! ```
//!
//! Records are a JSON array of objects with `picName`, `startDate`, and
//! `endDate` fields; date strings may be `YYYY-MM-DD`, `DD/MM/YYYY`, or
//! `DD-MM-YYYY`. A holiday file is a JSON array of ISO dates.

use anyhow::{Context, Result};
use avail_engine::{all_windows, nearest_windows, AvailabilityWindow, HolidayCalendar, ProjectRecord};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "avail", version, about = "PIC availability window calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every free window per PIC
    Windows(ViewArgs),
    /// Print the nearest free window per PIC
    Nearest(ViewArgs),
    /// Count the working days in an inclusive date range
    Workdays {
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        /// JSON file with an array of ISO holiday dates
        #[arg(long)]
        holidays: Option<String>,
    },
}

#[derive(Args)]
struct ViewArgs {
    /// Input records file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Reference date (YYYY-MM-DD); defaults to the local current date
    #[arg(long)]
    today: Option<NaiveDate>,
    /// JSON file with an array of ISO holiday dates
    #[arg(long)]
    holidays: Option<String>,
    /// Emit windows as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Windows(args) => {
            let windows = compute(&args, all_windows)?;
            print_windows(&windows, args.json)
        }
        Commands::Nearest(args) => {
            let windows = compute(&args, nearest_windows)?;
            print_windows(&windows, args.json)
        }
        Commands::Workdays {
            start,
            end,
            holidays,
        } => {
            let calendar = load_holidays(holidays.as_deref())?;
            println!("{}", calendar.count_workdays(start, end));
            Ok(())
        }
    }
}

/// Load records, holidays, and the reference date, then run the given view.
fn compute(
    args: &ViewArgs,
    view: fn(&[ProjectRecord], NaiveDate, &HolidayCalendar) -> Vec<AvailabilityWindow>,
) -> Result<Vec<AvailabilityWindow>> {
    let raw = read_input(args.input.as_deref())?;
    let records: Vec<ProjectRecord> =
        serde_json::from_str(&raw).context("Failed to parse records JSON")?;

    let calendar = load_holidays(args.holidays.as_deref())?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    Ok(view(&records, today, &calendar))
}

fn print_windows(windows: &[AvailabilityWindow], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(windows)?;
        println!("{}", out);
        return Ok(());
    }

    if windows.is_empty() {
        println!("No availability in the reference year.");
        return Ok(());
    }

    for w in windows {
        println!(
            "{:<24} {} \u{2192} {}  ({} wd)",
            w.owner,
            format_date(w.start),
            format_date(w.end),
            w.workdays
        );
    }
    Ok(())
}

/// Short en-GB display format, e.g. "15 Jun 25".
fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %y").to_string()
}

fn load_holidays(path: Option<&str>) -> Result<HolidayCalendar> {
    let Some(path) = path else {
        return Ok(HolidayCalendar::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read holiday file: {}", path))?;
    let dates: Vec<String> =
        serde_json::from_str(&raw).context("Failed to parse holiday JSON (expected an array of ISO dates)")?;
    HolidayCalendar::from_iso_dates(dates.iter().map(String::as_str))
        .context("Invalid holiday list")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
