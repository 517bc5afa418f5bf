//! Holiday records and the display-event union.

use mh_core::errors::Result;
use mh_time::{DateEngine, HolidayDate, MonthDay};
use serde::{Deserialize, Serialize};

/// Kind of a national/state holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayType {
    /// Observed nationally (possibly with listed exceptions).
    National,
    /// Observed in the listed states only.
    State,
}

impl HolidayType {
    /// `"national"` / `"state"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayType::National => "national",
            HolidayType::State => "state",
        }
    }
}

/// A national or state public holiday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    /// Date, single day or range.
    pub date: HolidayDate,
    /// Display name; not unique within a catalog.
    pub name: String,
    /// Free-text region list, e.g. `"National (except Kelantan)"`.
    pub states: String,
    /// National or state.
    pub kind: HolidayType,
    /// Whether the holiday has already passed.
    pub is_past: bool,
}

impl Holiday {
    /// Create a holiday that has not passed.
    pub fn new(date: HolidayDate, name: impl Into<String>, states: impl Into<String>, kind: HolidayType) -> Self {
        Self {
            date,
            name: name.into(),
            states: states.into(),
            kind,
            is_past: false,
        }
    }

    /// The day used for calendar placement and ordering.
    pub fn start(&self) -> MonthDay {
        self.date.start()
    }

    /// The display form of the date (`"Jan 1"`, `"Jan 29–Jan 30"`).
    pub fn date_string(&self) -> String {
        self.date.to_string()
    }
}

/// School cohorts.  Each state belongs to exactly one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchoolGroup {
    /// Johor, Kedah, Kelantan, Terengganu.
    A,
    /// All other states and federal territories.
    B,
}

impl SchoolGroup {
    /// Both groups, in display order.
    pub const ALL: [SchoolGroup; 2] = [SchoolGroup::A, SchoolGroup::B];

    /// `"Group A"` / `"Group B"`.
    pub fn label(&self) -> &'static str {
        match self {
            SchoolGroup::A => "Group A",
            SchoolGroup::B => "Group B",
        }
    }

    /// States covered by the group.
    pub fn states(&self) -> &'static [&'static str] {
        match self {
            SchoolGroup::A => &["Johor", "Kedah", "Kelantan", "Terengganu"],
            SchoolGroup::B => &[
                "Perlis",
                "Penang",
                "Perak",
                "Selangor",
                "Negeri Sembilan",
                "Melaka",
                "Pahang",
                "Sabah",
                "Sarawak",
                "Kuala Lumpur",
                "Putrajaya",
                "Labuan",
            ],
        }
    }

    /// The group a state belongs to, if it is a known state name.
    pub fn of_state(state: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.states().iter().any(|s| s.eq_ignore_ascii_case(state.trim())))
    }
}

/// A school holiday period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolHoliday {
    /// Display name, e.g. `"Mid-Year Break"`.
    pub name: String,
    /// First day off.
    pub start_date: MonthDay,
    /// Last day off; may fall in the following year.
    pub end_date: MonthDay,
    /// Whether the break has already passed.
    pub is_past: bool,
}

impl SchoolHoliday {
    /// Create a school holiday that has not passed.
    pub fn new(name: impl Into<String>, start_date: MonthDay, end_date: MonthDay) -> Self {
        Self {
            name: name.into(),
            start_date,
            end_date,
            is_past: false,
        }
    }

    /// `"May 29 to Jun 9"`.
    pub fn date_label(&self) -> String {
        format!("{} to {}", self.start_date, self.end_date)
    }

    /// Inclusive length of the break.
    pub fn days(&self, engine: &DateEngine) -> Result<u32> {
        engine.span(self.start_date, self.end_date)
    }
}

/// Discriminant of a [`DisplayEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// National holiday.
    National,
    /// State holiday.
    State,
    /// School holiday.
    School,
}

impl EventKind {
    /// `"national"`, `"state"`, `"school"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::National => "national",
            EventKind::State => "state",
            EventKind::School => "school",
        }
    }

    /// `"National Holiday"`, `"State Holiday"`, `"School Holiday"`.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::National => "National Holiday",
            EventKind::State => "State Holiday",
            EventKind::School => "School Holiday",
        }
    }

    /// Parse `"national"`, `"state"` or `"school"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "national" => Some(EventKind::National),
            "state" => Some(EventKind::State),
            "school" => Some(EventKind::School),
            _ => None,
        }
    }
}

impl From<HolidayType> for EventKind {
    fn from(t: HolidayType) -> Self {
        match t {
            HolidayType::National => EventKind::National,
            HolidayType::State => EventKind::State,
        }
    }
}

/// A selected catalog entry of either table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent<'a> {
    /// A national or state holiday.
    Holiday(&'a Holiday),
    /// A school holiday of one group.
    School {
        /// The cohort the break applies to.
        group: SchoolGroup,
        /// The break.
        holiday: &'a SchoolHoliday,
    },
}

impl<'a> DisplayEvent<'a> {
    /// The event's kind.
    pub fn kind(&self) -> EventKind {
        match self {
            DisplayEvent::Holiday(h) => h.kind.into(),
            DisplayEvent::School { .. } => EventKind::School,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'a str {
        match self {
            DisplayEvent::Holiday(h) => &h.name,
            DisplayEvent::School { holiday, .. } => &holiday.name,
        }
    }

    /// Whether the event has passed.
    pub fn is_past(&self) -> bool {
        match self {
            DisplayEvent::Holiday(h) => h.is_past,
            DisplayEvent::School { holiday, .. } => holiday.is_past,
        }
    }

    /// Number of days the event lasts.
    ///
    /// A national/state holiday counts as one day, including ranged dates;
    /// a school break counts every day from start to end.
    pub fn days(&self, engine: &DateEngine) -> Result<u32> {
        match self {
            DisplayEvent::Holiday(_) => Ok(1),
            DisplayEvent::School { holiday, .. } => holiday.days(engine),
        }
    }

    /// Date text for a detail view (`"Jan 29 to Jan 30"`, `"May 29 to Jun 9"`).
    pub fn date_label(&self) -> String {
        match self {
            DisplayEvent::Holiday(h) => mh_time::format_date_range(&h.date_string()),
            DisplayEvent::School { holiday, .. } => holiday.date_label(),
        }
    }

    /// Region text: the holiday's state list, or the school group's states.
    pub fn regions(&self) -> String {
        match self {
            DisplayEvent::Holiday(h) => h.states.clone(),
            DisplayEvent::School { group, .. } => group.states().join(", "),
        }
    }
}

impl<'a> From<&'a Holiday> for DisplayEvent<'a> {
    fn from(h: &'a Holiday) -> Self {
        DisplayEvent::Holiday(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(s: &str) -> MonthDay {
        MonthDay::parse(s).unwrap()
    }

    #[test]
    fn groups_are_disjoint() {
        for state in SchoolGroup::A.states() {
            assert!(!SchoolGroup::B.states().contains(state));
        }
        assert_eq!(SchoolGroup::of_state("kedah"), Some(SchoolGroup::A));
        assert_eq!(SchoolGroup::of_state("Labuan"), Some(SchoolGroup::B));
        assert_eq!(SchoolGroup::of_state("Atlantis"), None);
    }

    #[test]
    fn event_kinds() {
        let h = Holiday::new(HolidayDate::single(md("Aug 31")), "National Day", "National", HolidayType::National);
        let s = SchoolHoliday::new("Term 2 Break", md("Sep 12"), md("Sep 20"));
        assert_eq!(DisplayEvent::from(&h).kind(), EventKind::National);
        let school = DisplayEvent::School {
            group: SchoolGroup::A,
            holiday: &s,
        };
        assert_eq!(school.kind(), EventKind::School);
        assert_eq!(school.date_label(), "Sep 12 to Sep 20");
        assert_eq!(school.regions(), "Johor, Kedah, Kelantan, Terengganu");
        let engine = DateEngine::new(2025).unwrap();
        assert_eq!(school.days(&engine), Ok(9));
    }

    #[test]
    fn ranged_holiday_counts_one_day() {
        let h = Holiday::new(
            HolidayDate::range(md("Jan 29"), md("Jan 30")),
            "Chinese New Year",
            "National",
            HolidayType::National,
        );
        let e = DisplayEvent::from(&h);
        assert_eq!(e.days(&DateEngine::new(2025).unwrap()), Ok(1));
        assert_eq!(e.date_label(), "Jan 29 to Jan 30");
    }

    #[test]
    fn kind_strings() {
        for k in [EventKind::National, EventKind::State, EventKind::School] {
            assert_eq!(EventKind::parse(k.as_str()), Some(k));
        }
        assert_eq!(EventKind::parse("National"), None);
    }
}
