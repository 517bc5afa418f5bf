//! `MonthDay` and `HolidayDate`: the year-less dates of a holiday catalog.
//!
//! Catalog dates are written `"Mon D"` (`"Jan 1"`, `"Dec 25"`) and ranged
//! dates `"Mon D–Mon D"` with an en dash (U+2013).  They are parsed once,
//! when a catalog is built, into these value types; the string form is only
//! produced again for display.

use std::str::FromStr;

use mh_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::{days_in_month, Date};
use crate::month::Month;

/// Separator between the two ends of a ranged date string.
pub const RANGE_SEPARATOR: char = '\u{2013}';

/// A day of a month, without a year.
///
/// Ordering is `(month, day)` lexicographic, i.e. chronological within one
/// year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    /// Create a month-day.  `day` is checked against the longest possible
    /// month length (so `Feb 29` is accepted here and rejected by
    /// [`MonthDay::in_year`] for non-leap years).
    pub fn new(month: Month, day: u8) -> Result<Self> {
        let max = days_in_month(2000, month.number());
        if day == 0 || day > max {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {max}] for {}",
                month.short_name()
            )));
        }
        Ok(Self { month, day })
    }

    /// Parse `"<MonAbbrev> <Day>"`, e.g. `"Jan 1"`.
    ///
    /// Surrounding whitespace is ignored; the month abbreviation must match
    /// exactly (`"Jan"`, not `"jan"`), and the day must be a plain decimal
    /// number.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (month_str, day_str) = trimmed
            .split_once(' ')
            .ok_or_else(|| Error::date_parse(s, "expected '<MonAbbrev> <Day>'"))?;
        let month = Month::from_short_name(month_str)
            .ok_or_else(|| Error::date_parse(s, format!("unknown month '{month_str}'")))?;
        let day_str = day_str.trim();
        if day_str.is_empty() || !day_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::date_parse(s, format!("invalid day '{day_str}'")));
        }
        let day: u8 = day_str
            .parse()
            .map_err(|_| Error::date_parse(s, format!("invalid day '{day_str}'")))?;
        Self::new(month, day).map_err(|e| Error::date_parse(s, e.to_string()))
    }

    /// The month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Place this month-day in `year`.
    pub fn in_year(&self, year: u16) -> Result<Date> {
        Date::new(year, self.month, self.day)
    }

    /// The month-day of a full date.
    pub fn of(date: Date) -> Self {
        Self {
            month: date.month(),
            day: date.day_of_month(),
        }
    }
}

impl FromStr for MonthDay {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month.short_name(), self.day)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        MonthDay::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// The date of a national/state holiday: one day, or a same-table range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolidayDate {
    start: MonthDay,
    end: Option<MonthDay>,
}

impl HolidayDate {
    /// A single-day date.
    pub fn single(day: MonthDay) -> Self {
        Self {
            start: day,
            end: None,
        }
    }

    /// A ranged date.
    pub fn range(start: MonthDay, end: MonthDay) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Parse `"Mon D"` or `"Mon D–Mon D"`.
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once(RANGE_SEPARATOR) {
            None => Ok(Self::single(MonthDay::parse(s)?)),
            Some((start, end)) => Ok(Self::range(MonthDay::parse(start)?, MonthDay::parse(end)?)),
        }
    }

    /// First day.
    pub fn start(&self) -> MonthDay {
        self.start
    }

    /// Last day, if this is a range.
    pub fn end(&self) -> Option<MonthDay> {
        self.end
    }

    /// `true` for a ranged date.
    pub fn is_range(&self) -> bool {
        self.end.is_some()
    }
}

impl FromStr for HolidayDate {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for HolidayDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            None => write!(f, "{}", self.start),
            Some(end) => write!(f, "{}{RANGE_SEPARATOR}{end}", self.start),
        }
    }
}

impl From<MonthDay> for HolidayDate {
    fn from(day: MonthDay) -> Self {
        Self::single(day)
    }
}
