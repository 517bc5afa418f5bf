//! # mh-catalog
//!
//! The holiday catalog and everything that reads it: the data model, JSON
//! loading, the built-in Malaysia 2025 tables, the query engine, month
//! views and event details.
//!
//! ```
//! use mh_catalog::{malaysia::malaysia_2025, query};
//! use mh_time::Date;
//!
//! let catalog = malaysia_2025().unwrap();
//! let today = Date::from_ymd(2025, 8, 20).unwrap();
//! let next = query::next_upcoming_holiday(&catalog, today).unwrap();
//! assert_eq!(next.name, "Ruler's Birthday");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Month views with holidays placed on day cells.
pub mod calendar_view;

/// `Catalog` and its JSON document form.
pub mod catalog;

/// Detail summaries for a selected event.
pub mod details;

/// Holiday records, school groups, display events.
pub mod holiday;

/// Built-in Malaysia 2025 catalog.
pub mod malaysia;

/// Lookups, filters, search, next-holiday.
pub mod query;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar_view::{month_view, DayCell, MonthView};
pub use catalog::{Catalog, CatalogDocument, Validation};
pub use details::EventDetails;
pub use holiday::{DisplayEvent, EventKind, Holiday, HolidayType, SchoolGroup, SchoolHoliday};
pub use query::{
    find_event, holidays_for_day, holidays_in_month, holidays_of_type, next_upcoming_holiday,
    search_holidays, slug, SEARCH_LIMIT,
};
