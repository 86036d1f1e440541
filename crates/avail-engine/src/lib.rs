//! # avail-engine
//!
//! Computes free (unassigned) date windows for project assignees.
//!
//! Given a flat list of project records, each naming a PIC (person in
//! charge) and a committed start/end date, the engine subtracts the
//! committed ranges from the span running tomorrow through the end of the
//! reference year, and annotates every remaining gap with its count of
//! working days (weekdays minus an injected holiday calendar).
//!
//! The computation is pure and total: malformed records degrade to "this
//! record contributes nothing" rather than errors, because the output is
//! advisory (showing free time), not transactional.
//!
//! ## Modules
//!
//! - [`parse`] — lenient multi-format date-string parsing
//! - [`calendar`] — workday counting against weekends + a holiday set
//! - [`engine`] — single-owner free-window computation (interval subtraction)
//! - [`record`] — raw upstream records, validation, grouping by PIC
//! - [`roster`] — multi-owner orchestration and the nearest-window reduction
//! - [`error`] — error types

pub mod calendar;
pub mod engine;
pub mod error;
pub mod parse;
pub mod record;
pub mod roster;

pub use calendar::HolidayCalendar;
pub use engine::{free_windows, AvailabilityWindow, Commitment};
pub use error::AvailError;
pub use parse::parse_date;
pub use record::{group_by_pic, ProjectRecord, NO_PIC};
pub use roster::{all_windows, nearest_windows};
