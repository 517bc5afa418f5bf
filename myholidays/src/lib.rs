//! # myholidays
//!
//! A data engine for a Malaysian holiday calendar: national, state and
//! school holidays for one reference year, with day counting, month views,
//! search and next-holiday lookup.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `mh-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use myholidays::catalog::{query, Catalog};
//! use myholidays::core::EngineSettings;
//! use myholidays::time::{Date, Month};
//!
//! let catalog = Catalog::from_settings(&EngineSettings::default()).unwrap();
//!
//! let june = query::holidays_in_month(&catalog, Month::June);
//! assert_eq!(june.len(), 11);
//!
//! let days = catalog.engine().calculate_days("Dec 19", Some("Jan 10")).unwrap();
//! assert_eq!(days, 23);
//!
//! let today = Date::from_ymd(2025, 12, 26).unwrap();
//! assert!(query::next_upcoming_holiday(&catalog, today).is_none());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, settings and logging setup.
pub use mh_core as core;

/// Months, dates, day counting and month grids.
pub use mh_time as time;

/// The holiday catalog, queries, month views and event details.
pub use mh_catalog as catalog;
