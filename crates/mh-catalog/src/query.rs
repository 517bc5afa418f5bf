//! Query engine: lookups, filters and search over a [`Catalog`].
//!
//! All functions are pure; results borrow from the catalog and keep catalog
//! order unless stated otherwise.  An empty result is a normal outcome.

use mh_time::{Date, Month, MonthDay};

use crate::catalog::Catalog;
use crate::holiday::{DisplayEvent, EventKind, Holiday, HolidayType};

/// Maximum number of search results.
pub const SEARCH_LIMIT: usize = 5;

/// Holidays whose (first) day is `day` of `month`.
pub fn holidays_for_day(catalog: &Catalog, month: Month, day: u8) -> Vec<&Holiday> {
    catalog
        .holidays()
        .iter()
        .filter(|h| h.start().month() == month && h.start().day() == day)
        .collect()
}

/// Holidays starting in `month`.
pub fn holidays_in_month(catalog: &Catalog, month: Month) -> Vec<&Holiday> {
    catalog
        .holidays()
        .iter()
        .filter(|h| h.start().month() == month)
        .collect()
}

/// Holidays of one kind.
pub fn holidays_of_type(catalog: &Catalog, kind: HolidayType) -> Vec<&Holiday> {
    catalog.holidays().iter().filter(|h| h.kind == kind).collect()
}

/// Case-insensitive substring search.
///
/// Holidays match on name, date and states; school holidays on name, start
/// date and end date.  Holidays come first, then Group A, then Group B, and
/// only the first [`SEARCH_LIMIT`] hits are returned.  A blank query returns
/// nothing.
///
/// Dates are matched in their normalized display form (`"Jan 1"`), not as
/// written in the source document, so `"jan 01"` does not match `"Jan 01"`.
pub fn search_holidays<'a>(catalog: &'a Catalog, query: &str) -> Vec<DisplayEvent<'a>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let hit = |field: &str| field.to_lowercase().contains(&needle);
    catalog
        .events()
        .filter(|event| match event {
            DisplayEvent::Holiday(h) => hit(&h.name) || hit(&h.date_string()) || hit(&h.states),
            DisplayEvent::School { holiday, .. } => {
                hit(&holiday.name)
                    || hit(&holiday.start_date.to_string())
                    || hit(&holiday.end_date.to_string())
            }
        })
        .take(SEARCH_LIMIT)
        .collect()
}

/// The next holiday on or after `today`'s month and day.
///
/// The year of `today` is ignored and there is no wrap-around: past the
/// last holiday of the catalog the result is `None`.  Among qualifying
/// holidays the earliest `(month, day)` wins, ties going to the one listed
/// first.
pub fn next_upcoming_holiday(catalog: &Catalog, today: Date) -> Option<&Holiday> {
    let today = MonthDay::of(today);
    catalog
        .holidays()
        .iter()
        .filter(|h| h.start() >= today)
        .min_by_key(|h| h.start())
}

/// URL-style identifier of a holiday name: lowercase, with every run of
/// characters outside `[a-z0-9]` replaced by a single `-`.
///
/// `"Sultan's Birthday"` → `"sultan-s-birthday"`.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash {
                out.push('-');
                pending_dash = false;
            }
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    if pending_dash {
        out.push('-');
    }
    out
}

/// Find the first event of `kind` whose name has slug `id`.
pub fn find_event<'a>(catalog: &'a Catalog, kind: EventKind, id: &str) -> Option<DisplayEvent<'a>> {
    catalog
        .events()
        .find(|event| event.kind() == kind && slug(event.name()) == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::SchoolGroup;
    use crate::malaysia::malaysia_2025;

    fn date(m: u8, d: u8) -> Date {
        Date::from_ymd(2025, m, d).unwrap()
    }

    #[test]
    fn two_holidays_on_jun_2() {
        let c = malaysia_2025().unwrap();
        let hits = holidays_for_day(&c, Month::June, 2);
        let names: Vec<_> = hits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Birthday of SPB Yang di-Pertuan Agong", "State Public Holiday"]);
        assert!(holidays_for_day(&c, Month::June, 4).is_empty());
    }

    #[test]
    fn month_filter() {
        let c = malaysia_2025().unwrap();
        assert_eq!(holidays_in_month(&c, Month::June).len(), 11);
        assert_eq!(holidays_in_month(&c, Month::November).len(), 1);
    }

    #[test]
    fn search_basics() {
        let c = malaysia_2025().unwrap();
        assert!(search_holidays(&c, "").is_empty());
        assert!(search_holidays(&c, "   ").is_empty());
        let hits = search_holidays(&c, "DEEPAVALI");
        let kinds: Vec<_> = hits.iter().map(DisplayEvent::kind).collect();
        assert_eq!(kinds, [EventKind::National, EventKind::School, EventKind::School]);
        assert!(matches!(hits[1], DisplayEvent::School { group: SchoolGroup::A, .. }));
        assert!(matches!(hits[2], DisplayEvent::School { group: SchoolGroup::B, .. }));
    }

    #[test]
    fn search_is_capped() {
        let c = malaysia_2025().unwrap();
        assert_eq!(search_holidays(&c, "birthday").len(), SEARCH_LIMIT);
    }

    #[test]
    fn search_matches_dates_and_states() {
        let c = malaysia_2025().unwrap();
        let by_date = search_holidays(&c, "dec 2");
        assert_eq!(by_date[0].name(), "Christmas Eve");
        let by_state = search_holidays(&c, "melaka");
        assert_eq!(by_state[0].name(), "Independence Proclamation Day");
        let by_end = search_holidays(&c, "jan 10");
        assert_eq!(by_end.len(), 1);
        assert_eq!(by_end[0].kind(), EventKind::School);
    }

    #[test]
    fn upcoming_is_inclusive() {
        let c = malaysia_2025().unwrap();
        let next = next_upcoming_holiday(&c, date(6, 2)).unwrap();
        assert_eq!(next.name, "Birthday of SPB Yang di-Pertuan Agong");
        let next = next_upcoming_holiday(&c, date(6, 4)).unwrap();
        assert_eq!(next.name, "Hari Arafah");
    }

    #[test]
    fn upcoming_after_last_is_none() {
        let c = malaysia_2025().unwrap();
        assert!(next_upcoming_holiday(&c, date(12, 26)).is_none());
        assert_eq!(next_upcoming_holiday(&c, date(12, 25)).unwrap().name, "Christmas Day");
    }

    #[test]
    fn slugs() {
        assert_eq!(slug("Sultan's Birthday"), "sultan-s-birthday");
        assert_eq!(slug("Hari Raya Qurban, Day 2"), "hari-raya-qurban-day-2");
        assert_eq!(slug("Mid-Year Break"), "mid-year-break");
        assert_eq!(slug("Sultan's Birthday (day in lieu)"), "sultan-s-birthday-day-in-lieu-");
        assert_eq!(slug("  New Year "), "-new-year-");
    }

    #[test]
    fn find_by_slug() {
        let c = malaysia_2025().unwrap();
        let e = find_event(&c, EventKind::School, "year-end-break").unwrap();
        assert!(matches!(e, DisplayEvent::School { group: SchoolGroup::A, .. }));
        let e = find_event(&c, EventKind::National, "malaysia-day").unwrap();
        assert_eq!(e.name(), "Malaysia Day");
        assert!(find_event(&c, EventKind::State, "malaysia-day").is_none());
    }
}
