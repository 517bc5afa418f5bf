//! Detail summaries of a selected event.

use mh_core::errors::Result;
use mh_time::{duration_label, DateEngine};

use crate::holiday::{DisplayEvent, EventKind};
use crate::query::slug;

/// Notes shown for every national or state holiday.
pub const PUBLIC_HOLIDAY_NOTES: [&str; 4] = [
    "Government offices will be closed",
    "Banks will be closed",
    "Most businesses may have modified hours",
    "Public transportation may run on holiday schedules",
];

/// Everything a detail view shows about one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    /// Event name.
    pub title: String,
    /// Event kind.
    pub kind: EventKind,
    /// `"National Holiday"`, `"State Holiday"`, `"School Holiday"`.
    pub kind_label: &'static str,
    /// `"Jan 1"`, `"Jan 29 to Jan 30"`, `"May 29 to Jun 9"`.
    pub date_label: String,
    /// Inclusive number of days.
    pub days: u32,
    /// `"1 day"`, `"12 days"`.
    pub duration_label: String,
    /// Region text.
    pub regions: String,
    /// One-paragraph description.
    pub description: String,
    /// Practical notes; empty for school holidays.
    pub notes: Vec<&'static str>,
    /// `"/event/<kind>/<slug>"`.
    pub path: String,
}

impl EventDetails {
    /// Summarize `event`, counting days with `engine`.
    pub fn new(event: DisplayEvent<'_>, engine: &DateEngine) -> Result<Self> {
        let days = event.days(engine)?;
        let kind = event.kind();
        let (description, notes) = match event {
            DisplayEvent::Holiday(h) => (
                format!(
                    "This is a {} holiday celebrated in {}. Government offices, schools, \
                     and many businesses will be closed during this period.",
                    h.kind.as_str(),
                    h.states
                ),
                PUBLIC_HOLIDAY_NOTES.to_vec(),
            ),
            DisplayEvent::School { group, .. } => (
                format!(
                    "This is a scheduled school holiday period for {} states in Malaysia. \
                     During this time, all schools in the affected regions will be closed \
                     for student holidays.",
                    group.label()
                ),
                Vec::new(),
            ),
        };
        Ok(Self {
            title: event.name().to_string(),
            kind,
            kind_label: kind.label(),
            date_label: event.date_label(),
            days,
            duration_label: duration_label(days),
            regions: event.regions(),
            description,
            notes,
            path: format!("/event/{}/{}", kind.as_str(), slug(event.name())),
        })
    }
}
