//! Query engine behaviour over the built-in 2025 catalog.

use mh_catalog::malaysia::malaysia_2025;
use mh_catalog::{
    find_event, holidays_for_day, holidays_in_month, holidays_of_type, next_upcoming_holiday, search_holidays,
    slug, Catalog, DisplayEvent, EventDetails, EventKind, HolidayType, Validation, SEARCH_LIMIT,
};
use mh_time::{Date, Month, MonthDay};
use proptest::prelude::*;

fn catalog() -> Catalog {
    malaysia_2025().unwrap()
}

// ─── Fixed cases ──────────────────────────────────────────────────────────────

#[test]
fn national_holidays_in_order() {
    let c = catalog();
    let names: Vec<_> = holidays_of_type(&c, HolidayType::National)
        .iter()
        .take(4)
        .map(|h| h.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["New Year Holiday", "Chinese New Year", "Chinese New Year, Day 2", "Hari Raya Puasa"]
    );
}

#[test]
fn every_month_has_a_holiday() {
    let c = catalog();
    for month in Month::ALL {
        assert!(!holidays_in_month(&c, month).is_empty(), "{month}");
    }
}

#[test]
fn upcoming_from_new_year() {
    let c = catalog();
    let next = next_upcoming_holiday(&c, Date::from_ymd(2025, 1, 2).unwrap()).unwrap();
    assert_eq!((next.name.as_str(), next.states.as_str()), ("Sultan's Birthday", "Johor"));
}

#[test]
fn upcoming_ignores_year() {
    let c = catalog();
    let a = next_upcoming_holiday(&c, Date::from_ymd(2025, 9, 2).unwrap());
    let b = next_upcoming_holiday(&c, Date::from_ymd(2031, 9, 2).unwrap());
    assert_eq!(a, b);
    assert_eq!(a.unwrap().name, "Maulidur Rasul");
}

#[test]
fn every_event_has_details() {
    let c = catalog();
    for event in c.events() {
        let details = EventDetails::new(event, c.engine()).unwrap();
        assert!(details.days >= 1);
        assert!(details.path.starts_with("/event/"));
        assert_eq!(find_event(&c, event.kind(), &slug(event.name())).map(|e| e.kind()), Some(event.kind()));
    }
}

#[test]
fn upcoming_on_unsorted_document() {
    let doc = r#"{"year": 2025, "holidays": [
        {"date": "Dec 25", "name": "Late", "states": "National", "type": "national"},
        {"date": "Jun 6", "name": "Mid", "states": "Kelantan", "type": "state"},
        {"date": "Jun 2", "name": "Early", "states": "National", "type": "national"},
        {"date": "Jan 1", "name": "Passed", "states": "National", "type": "national"}
    ]}"#;
    let c = Catalog::from_json_str(doc, 2025, Validation::Strict).unwrap();
    let on = |m, d| next_upcoming_holiday(&c, Date::from_ymd(2025, m, d).unwrap()).map(|h| h.name.as_str());
    assert_eq!(on(6, 1), Some("Early"));
    assert_eq!(on(6, 3), Some("Mid"));
    assert_eq!(on(6, 7), Some("Late"));
    assert_eq!(on(12, 26), None);
}

#[test]
fn upcoming_tie_goes_to_catalog_order() {
    let doc = r#"{"year": 2025, "holidays": [
        {"date": "Sep 16", "name": "Later", "states": "National", "type": "national"},
        {"date": "Aug 31", "name": "First Listed", "states": "Sabah", "type": "state"},
        {"date": "Aug 31", "name": "Second Listed", "states": "National", "type": "national"}
    ]}"#;
    let c = Catalog::from_json_str(doc, 2025, Validation::Strict).unwrap();
    let next = next_upcoming_holiday(&c, Date::from_ymd(2025, 8, 1).unwrap()).unwrap();
    assert_eq!(next.name, "First Listed");
}

#[test]
fn search_matches_normalized_dates() {
    let doc = r#"{"holidays": [
        {"date": "Jan 01", "name": "New Year", "states": "National", "type": "national"}
    ]}"#;
    let c = Catalog::from_json_str(doc, 2025, Validation::Strict).unwrap();
    assert_eq!(search_holidays(&c, "jan 1").len(), 1);
    assert!(search_holidays(&c, "jan 01").is_empty());
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn day_of_2025() -> impl Strategy<Value = Date> {
    (0i32..365).prop_map(|n| Date::from_ymd(2025, 1, 1).unwrap().add_days(n).unwrap())
}

proptest! {
    #[test]
    fn search_never_exceeds_limit(q in any::<String>()) {
        let c = catalog();
        prop_assert!(search_holidays(&c, &q).len() <= SEARCH_LIMIT);
    }

    #[test]
    fn search_hits_contain_the_query(q in "[a-z]{1,4}") {
        let c = catalog();
        for event in search_holidays(&c, &q) {
            let text = match event {
                DisplayEvent::Holiday(h) => format!("{} {} {}", h.name, h.date_string(), h.states),
                DisplayEvent::School { holiday, .. } => {
                    format!("{} {} {}", holiday.name, holiday.start_date, holiday.end_date)
                }
            };
            prop_assert!(text.to_lowercase().contains(&q), "{} in {}", q, text);
        }
    }

    #[test]
    fn upcoming_is_the_earliest_remaining(today in day_of_2025()) {
        let c = catalog();
        let md = MonthDay::of(today);
        match next_upcoming_holiday(&c, today) {
            Some(next) => {
                prop_assert!(next.start() >= md);
                prop_assert!(c.holidays().iter().all(|h| h.start() < md || h.start() >= next.start()));
            }
            None => prop_assert!(c.holidays().iter().all(|h| h.start() < md)),
        }
    }

    #[test]
    fn day_lookup_agrees_with_month_lookup(today in day_of_2025()) {
        let c = catalog();
        let on_day = holidays_for_day(&c, today.month(), today.day_of_month());
        let in_month = holidays_in_month(&c, today.month());
        for h in on_day {
            prop_assert!(in_month.contains(&h));
            prop_assert_eq!(h.start().day(), today.day_of_month());
        }
    }
}

#[test]
fn types_partition_the_table() {
    let c = catalog();
    let national = holidays_of_type(&c, HolidayType::National);
    let state = holidays_of_type(&c, HolidayType::State);
    assert_eq!(national.len() + state.len(), c.holidays().len());
    assert!(national.iter().all(|h| h.kind == HolidayType::National));
    assert!(state.iter().all(|h| h.kind == HolidayType::State));
    assert!(find_event(&c, EventKind::School, "no-such-break").is_none());
}

#[test]
fn day_lookups_cover_every_holiday() {
    let c = catalog();
    let total: usize = Month::ALL
        .iter()
        .map(|&m| (1..=31u8).map(|d| holidays_for_day(&c, m, d).len()).sum::<usize>())
        .sum();
    assert_eq!(total, c.holidays().len());
}
