//! Date engine: day counts, range formatting and day comparisons over the
//! catalog date micro-format.
//!
//! Every `"Mon D"` string is interpreted in the engine's **reference year**,
//! never in the year of the machine clock.

use mh_core::errors::{Error, Result};
use mh_core::settings::{MAX_REFERENCE_YEAR, MIN_REFERENCE_YEAR};

use crate::date::Date;
use crate::month::Month;
use crate::month_day::{MonthDay, RANGE_SEPARATOR};

/// Day-count calculator bound to a reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateEngine {
    reference_year: u16,
}

impl DateEngine {
    /// Create an engine for `reference_year`.
    ///
    /// The following year must also be representable, since ranges may run
    /// over New Year.
    pub fn new(reference_year: u16) -> Result<Self> {
        if !(MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR).contains(&reference_year) {
            return Err(Error::Date(format!(
                "reference year {reference_year} out of range [{MIN_REFERENCE_YEAR}, {MAX_REFERENCE_YEAR}]"
            )));
        }
        Ok(Self { reference_year })
    }

    /// The reference year.
    pub fn reference_year(&self) -> u16 {
        self.reference_year
    }

    /// Number of days covered by a holiday, inclusive of both ends.
    ///
    /// * `end == None` → `1`.  The first argument is never split into a
    ///   range on its own: `calculate_days("Jan 29–Jan 30", None)` is `1`.
    /// * Otherwise the part of `start` before any en dash, and `end`, are
    ///   parsed as `"Mon D"` and the inclusive span is returned.
    ///
    /// # Errors
    /// [`Error::DateParse`] if either string is malformed.
    pub fn calculate_days(&self, start: &str, end: Option<&str>) -> Result<u32> {
        let Some(end) = end else {
            return Ok(1);
        };
        let start = range_start(start);
        let start = MonthDay::parse(start)?;
        let end = MonthDay::parse(end)?;
        self.span(start, end)
    }

    /// Inclusive day count from `start` to `end`.
    ///
    /// When `end` falls earlier in the year than `start` the range is taken
    /// to run over New Year, with `end` in the following year
    /// (`Dec 19 → Jan 10` is 23 days).
    pub fn span(&self, start: MonthDay, end: MonthDay) -> Result<u32> {
        let first = self.resolve(start)?;
        let last = if end < start {
            end.in_year(self.reference_year + 1)?
        } else {
            self.resolve(end)?
        };
        Ok((last - first).unsigned_abs() + 1)
    }

    /// Place a month-day in the reference year.
    pub fn resolve(&self, day: MonthDay) -> Result<Date> {
        day.in_year(self.reference_year)
    }
}

/// The part of a date string before the first en dash, trimmed.
pub fn range_start(s: &str) -> &str {
    s.split(RANGE_SEPARATOR).next().unwrap_or(s).trim()
}

/// Render a catalog date string for display.
///
/// A string without an en dash is returned unchanged; `"A–B"` becomes
/// `"A to B"` with both parts trimmed.  Applying it twice is the same as
/// applying it once.
pub fn format_date_range(date: &str) -> String {
    match date.split_once(RANGE_SEPARATOR) {
        None => date.to_string(),
        Some((start, rest)) => {
            let end = rest.split(RANGE_SEPARATOR).next().unwrap_or(rest);
            format!("{} to {}", start.trim(), end.trim())
        }
    }
}

/// 0-based index of a three-letter month abbreviation (`"Jan"` → 0).
pub fn month_to_index(abbrev: &str) -> Option<u8> {
    Month::from_short_name(abbrev).map(|m| m.index())
}

/// `true` if `(day, month, year)` is the calendar day `today`.
pub fn is_today(day: u8, month: Month, year: u16, today: Date) -> bool {
    today.day_of_month() == day && today.month() == month && today.year() == year
}

/// `"1 day"`, `"12 days"`.
pub fn duration_label(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}
