//! Month view: a [`MonthGrid`] whose day cells carry that day's holidays.

use mh_core::errors::Result;
use mh_time::{is_today, Date, GridCell, MonthGrid};

use crate::catalog::Catalog;
use crate::holiday::Holiday;
use crate::query::holidays_for_day;

/// One cell of a month view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell<'a> {
    /// Padding before the 1st.
    Blank,
    /// A day of the month.
    Day {
        /// Day of the month.
        day: u8,
        /// Holidays on that day, in catalog order.
        holidays: Vec<&'a Holiday>,
        /// Whether this is the `today` passed to [`month_view`].
        is_today: bool,
    },
}

impl DayCell<'_> {
    /// `true` for a day with at least one holiday.
    pub fn has_holiday(&self) -> bool {
        matches!(self, DayCell::Day { holidays, .. } if !holidays.is_empty())
    }
}

/// A rendered month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView<'a> {
    /// The month shown.
    pub grid: MonthGrid,
    /// Cells, blanks first.
    pub cells: Vec<DayCell<'a>>,
}

impl<'a> MonthView<'a> {
    /// Holidays of the month, in day order.
    pub fn holidays(&self) -> impl Iterator<Item = &'a Holiday> + '_ {
        self.cells.iter().flat_map(|cell| match cell {
            DayCell::Day { holidays, .. } => holidays.clone(),
            DayCell::Blank => Vec::new(),
        })
    }
}

/// Build the view of `grid`, marking `today`.
///
/// Holidays are only placed when the grid shows the catalog's own year; a
/// catalog says nothing about other years.
pub fn month_view<'a>(catalog: &'a Catalog, grid: MonthGrid, today: Date) -> MonthView<'a> {
    let same_year = grid.year() == catalog.year();
    let cells = grid
        .cells()
        .into_iter()
        .map(|cell| match cell {
            GridCell::Blank => DayCell::Blank,
            GridCell::Day(day) => DayCell::Day {
                day,
                holidays: if same_year {
                    holidays_for_day(catalog, grid.month(), day)
                } else {
                    Vec::new()
                },
                is_today: is_today(day, grid.month(), grid.year(), today),
            },
        })
        .collect();
    MonthView { grid, cells }
}

/// The view of the month containing `today`.
pub fn current_month_view(catalog: &Catalog, today: Date) -> MonthView<'_> {
    month_view(catalog, MonthGrid::containing(today), today)
}

/// The view of the month before `view`.
pub fn previous_month<'a>(catalog: &'a Catalog, view: &MonthView<'_>, today: Date) -> Result<MonthView<'a>> {
    Ok(month_view(catalog, view.grid.previous()?, today))
}

/// The view of the month after `view`.
pub fn next_month<'a>(catalog: &'a Catalog, view: &MonthView<'_>, today: Date) -> Result<MonthView<'a>> {
    Ok(month_view(catalog, view.grid.next()?, today))
}
