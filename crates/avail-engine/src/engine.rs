//! Single-owner free-window computation.
//!
//! Subtracts one PIC's committed date ranges from the span running tomorrow
//! through December 31 of the reference year, using a single forward-moving
//! cursor. Commitments may overlap or arrive out of order; the cursor only
//! ever advances, so an earlier-ending overlapping commitment can never
//! shrink the busy period it sits inside.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::HolidayCalendar;

/// One booked date range for a PIC, inclusive on both ends.
///
/// Invariant: `start <= end`. Records violating it are dropped during
/// ingestion (see [`crate::record`]) and never reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub owner: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A maximal free date range for a PIC, inclusive on both ends,
/// annotated with its working-day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub owner: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub workdays: u32,
}

/// December 31 of the reference year.
///
/// The reference year is the year containing `tomorrow`: when `today` is
/// December 31, availability rolls into the next calendar year instead of
/// collapsing to an empty result.
fn horizon_for(tomorrow: NaiveDate) -> NaiveDate {
    // Dec 31 exists in every year, so the construction cannot fail; fall
    // back to `tomorrow` itself to keep the function total.
    NaiveDate::from_ymd_opt(tomorrow.year(), 12, 31).unwrap_or(tomorrow)
}

/// Compute one owner's free windows from tomorrow through the end of the
/// reference year.
///
/// `commitments` may be empty (the owner is fully available), unsorted, or
/// overlapping. Each emitted window carries the working-day count of its
/// range per the injected `calendar`. Windows are chronological,
/// non-overlapping, and never start before tomorrow or end after the
/// reference year's December 31.
pub fn free_windows(
    owner: &str,
    commitments: &[Commitment],
    today: NaiveDate,
    calendar: &HolidayCalendar,
) -> Vec<AvailabilityWindow> {
    let Some(tomorrow) = today.succ_opt() else {
        return Vec::new();
    };
    let horizon = horizon_for(tomorrow);

    let mut sorted: Vec<&Commitment> = commitments.iter().collect();
    sorted.sort_by_key(|c| (c.start, c.end));

    let mut windows = Vec::new();
    let mut cursor = tomorrow;

    for c in sorted {
        if c.start > cursor {
            if let Some(gap_end) = c.start.pred_opt() {
                let gap_end = gap_end.min(horizon);
                if cursor <= gap_end {
                    windows.push(AvailabilityWindow {
                        owner: owner.to_string(),
                        start: cursor,
                        end: gap_end,
                        workdays: calendar.count_workdays(cursor, gap_end),
                    });
                }
            }
        }

        // Advance past the commitment. The max() keeps an earlier-ending
        // overlapping commitment from pulling the cursor backward, and the
        // tomorrow clamp keeps fully-past commitments from mattering at all.
        let next = match c.end.succ_opt() {
            Some(d) => d,
            // The commitment runs to the end of representable time.
            None => return windows,
        };
        cursor = cursor.max(next).max(tomorrow);

        if cursor > horizon {
            // Everything further is outside the reference year.
            return windows;
        }
    }

    // Trailing window from the cursor to year end.
    if cursor <= horizon {
        windows.push(AvailabilityWindow {
            owner: owner.to_string(),
            start: cursor,
            end: horizon,
            workdays: calendar.count_workdays(cursor, horizon),
        });
    }

    windows
}
