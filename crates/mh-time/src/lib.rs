//! # mh-time
//!
//! Date types and the date engine: months, weekdays, full dates, the
//! year-less `"Mon D"` dates used by holiday catalogs, day-count and range
//! formatting, and month-grid geometry.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Day counts, range formatting, today checks.
pub mod date_engine;

/// `Month`: month of the year.
pub mod month;

/// `MonthDay` and `HolidayDate`: catalog dates without a year.
pub mod month_day;

/// `MonthGrid`: Sunday-first month calendar layout.
pub mod month_grid;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use date_engine::{duration_label, format_date_range, is_today, month_to_index, DateEngine};
pub use month::Month;
pub use month_day::{HolidayDate, MonthDay, RANGE_SEPARATOR};
pub use month_grid::{GridCell, MonthGrid};
pub use weekday::Weekday;
