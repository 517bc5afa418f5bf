//! `MonthGrid`: geometry of a Sunday-first month calendar.
//!
//! A grid is a run of blank cells up to the weekday of the 1st, followed by
//! one cell per day of the month.  Navigation moves one month at a time and
//! crosses year boundaries.

use mh_core::errors::{Error, Result};

use crate::date::{days_in_month, Date};
use crate::month::Month;
use crate::weekday::Weekday;

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the 1st of the month.
    Blank,
    /// A day of the month (1-based).
    Day(u8),
}

/// A displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthGrid {
    first: Date,
}

impl MonthGrid {
    /// Grid for `month` of `year`.
    pub fn new(year: u16, month: Month) -> Result<Self> {
        Ok(Self {
            first: Date::new(year, month, 1)?,
        })
    }

    /// Grid for the month containing `date`.
    pub fn containing(date: Date) -> Self {
        Self {
            first: date.start_of_month(),
        }
    }

    /// Year shown.
    pub fn year(&self) -> u16 {
        self.first.year()
    }

    /// Month shown.
    pub fn month(&self) -> Month {
        self.first.month()
    }

    /// `"June 2025"`.
    pub fn title(&self) -> String {
        format!("{} {}", self.month().long_name(), self.year())
    }

    /// Column headers, Sunday first.
    pub fn header() -> [&'static str; 7] {
        Weekday::SUNDAY_FIRST.map(|wd| wd.short_name())
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month().number())
    }

    /// Weekday of the 1st.
    pub fn first_weekday(&self) -> Weekday {
        self.first.weekday()
    }

    /// Number of blank cells before the 1st.
    pub fn leading_blanks(&self) -> u8 {
        self.first_weekday().days_from_sunday()
    }

    /// All cells, blanks first.
    pub fn cells(&self) -> Vec<GridCell> {
        let blanks = self.leading_blanks() as usize;
        let days = self.days_in_month();
        let mut cells = Vec::with_capacity(blanks + days as usize);
        cells.extend(std::iter::repeat(GridCell::Blank).take(blanks));
        cells.extend((1..=days).map(GridCell::Day));
        cells
    }

    /// Cells grouped in rows of seven; the last row may be shorter.
    pub fn weeks(&self) -> Vec<Vec<GridCell>> {
        self.cells().chunks(7).map(<[GridCell]>::to_vec).collect()
    }

    /// The full date of `day` in this grid.
    pub fn date(&self, day: u8) -> Result<Date> {
        Date::new(self.year(), self.month(), day)
    }

    /// The month before.
    pub fn previous(&self) -> Result<Self> {
        match self.month() {
            Month::January => Self::new(self.year().checked_sub(1).ok_or_else(out_of_range)?, Month::December),
            m => Self::new(self.year(), m.pred()),
        }
    }

    /// The month after.
    pub fn next(&self) -> Result<Self> {
        match self.month() {
            Month::December => Self::new(self.year() + 1, Month::January),
            m => Self::new(self.year(), m.succ()),
        }
    }
}

fn out_of_range() -> Error {
    Error::Date("month navigation out of range".into())
}
