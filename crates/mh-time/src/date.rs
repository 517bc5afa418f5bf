//! `Date` type.
//!
//! A full calendar date, stored as a serial number of days so that day
//! spans are plain subtraction.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900.
//! * The valid date range is 1900-01-01 to 2199-12-31.

use mh_core::errors::{Error, Result};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from year, [`Month`], and day-of-month.
    pub fn new(year: u16, month: Month, day: u8) -> Result<Self> {
        Self::from_ymd(year, month.number(), day)
    }

    /// Today's date according to the local clock.
    pub fn today() -> Result<Self> {
        use chrono::Datelike;
        let now = chrono::Local::now().date_naive();
        let year = u16::try_from(now.year())
            .map_err(|_| Error::Date(format!("year {} out of range", now.year())))?;
        Self::from_ymd(year, now.month() as u8, now.day() as u8)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        Month::from_number(ymd_from_serial(self.0).1).expect("serial decodes to month 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Jan 1, 1900 is a Monday (ordinal 1).
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, 1))
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, _, d) = ymd_from_serial(self.0);
        write!(f, "{d} {} {y}", self.month())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number (1 = 1900-01-01).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let mut serial = (y - 1900) * 365;
    // Leap days in [1900, year); 1900 itself is not a leap year.
    serial += (y - 1901).div_euclid(4) - (y - 1901).div_euclid(100) + (y - 1601).div_euclid(400);
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
