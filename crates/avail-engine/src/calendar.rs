//! Workday counting against weekends plus a configurable holiday set.
//!
//! Saturdays and Sundays are always non-working; the holiday set adds
//! further non-working dates on top. The calendar is injected into every
//! computation rather than compiled in, so callers control which year's
//! holiday list applies.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{AvailError, Result};

/// A set of non-working calendar dates, on top of the implicit
/// Saturday/Sunday weekend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Build a calendar from concrete dates.
    pub fn new(holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Build a calendar from ISO `YYYY-MM-DD` strings.
    ///
    /// # Errors
    /// Returns [`AvailError::InvalidHoliday`] for any string that is not a
    /// valid ISO date. Holiday lists are configuration, so a typo there is
    /// an error rather than a silently dropped record.
    pub fn from_iso_dates<'a>(dates: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut holidays = BTreeSet::new();
        for raw in dates {
            let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| AvailError::InvalidHoliday(raw.to_string()))?;
            holidays.insert(date);
        }
        Ok(Self { holidays })
    }

    /// Whether the given date is a working day: not Saturday, not Sunday,
    /// and not in the holiday set.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.holidays.contains(&date)
    }

    /// Count the working days in the inclusive range `[start, end]`.
    ///
    /// Returns 0 when `start > end`. Day-by-day iteration; ranges are
    /// bounded by one calendar year in practice.
    pub fn count_workdays(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        if start > end {
            return 0;
        }

        let mut count = 0;
        let mut cur = start;
        loop {
            if self.is_working_day(cur) {
                count += 1;
            }
            if cur == end {
                break;
            }
            match cur.succ_opt() {
                Some(next) => cur = next,
                None => break,
            }
        }
        count
    }
}
