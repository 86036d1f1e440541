//! Multi-owner orchestration over the single-owner engine.
//!
//! Partitions a flat record list by PIC, runs the free-window computation
//! once per PIC, and merges the results into one sequence: either every
//! window, or reduced to the single soonest-starting window per PIC.

use chrono::NaiveDate;

use crate::calendar::HolidayCalendar;
use crate::engine::{free_windows, AvailabilityWindow};
use crate::record::{group_by_pic, ProjectRecord};

/// Every PIC's free windows.
///
/// Output is grouped by owner in ascending case-sensitive lexical order;
/// each owner's windows are chronological.
pub fn all_windows(
    records: &[ProjectRecord],
    today: NaiveDate,
    calendar: &HolidayCalendar,
) -> Vec<AvailabilityWindow> {
    let mut windows = Vec::new();
    for (owner, commitments) in group_by_pic(records) {
        windows.extend(free_windows(&owner, &commitments, today, calendar));
    }
    windows
}

/// The single nearest (soonest-starting) free window per PIC.
///
/// Windows never start before tomorrow or overlap within an owner, so the
/// first window per owner is the nearest one. Output is sorted ascending by
/// start date, owner name as a deterministic tiebreak.
pub fn nearest_windows(
    records: &[ProjectRecord],
    today: NaiveDate,
    calendar: &HolidayCalendar,
) -> Vec<AvailabilityWindow> {
    let mut nearest: Vec<AvailabilityWindow> = Vec::new();
    let mut last_owner: Option<String> = None;

    // all_windows is grouped by owner with each group chronological, so the
    // first window of each group is that owner's nearest.
    for window in all_windows(records, today, calendar) {
        if last_owner.as_deref() != Some(window.owner.as_str()) {
            last_owner = Some(window.owner.clone());
            nearest.push(window);
        }
    }

    nearest.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.owner.cmp(&b.owner)));
    nearest
}
