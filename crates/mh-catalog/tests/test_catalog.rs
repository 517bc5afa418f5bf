//! Loading catalogs from documents and settings.

use std::path::PathBuf;

use mh_catalog::{month_view, Catalog, DayCell, SchoolGroup, Validation};
use mh_core::{EngineSettings, Error};
use mh_time::{Date, Month, MonthGrid};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_2024.json")
}

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn fixture_loads_strictly() {
    let c = Catalog::from_path(fixture(), 2025, Validation::Strict).unwrap();
    assert_eq!(c.year(), 2024);
    assert_eq!(c.holidays().len(), 7);
    assert_eq!(c.len(), 11);
    assert!(c.holidays()[1].date.is_range());
}

#[test]
fn year_end_break_spans_new_year() {
    let c = Catalog::from_path(fixture(), 2025, Validation::Strict).unwrap();
    let engine = c.engine();
    let a = &c.school_holidays(SchoolGroup::A)[1];
    assert_eq!(a.days(engine), Ok(24));
    let b = &c.school_holidays(SchoolGroup::B)[0];
    assert_eq!(b.days(engine), Ok(9));
}

#[test]
fn settings_select_fixture() {
    let settings = EngineSettings::new(2024).unwrap().with_catalog_path(fixture());
    let c = Catalog::from_settings(&settings).unwrap();
    assert_eq!(c.year(), 2024);
}

#[test]
fn missing_file_is_io_error() {
    let settings = EngineSettings::new(2024)
        .unwrap()
        .with_catalog_path("/nonexistent/holidays.json");
    assert!(matches!(Catalog::from_settings(&settings), Err(Error::Io(_))));
}

#[test]
fn leap_day_in_february_view() {
    let c = Catalog::from_path(fixture(), 2025, Validation::Strict).unwrap();
    let view = month_view(&c, MonthGrid::new(2024, Month::February).unwrap(), date(2024, 2, 29));
    assert_eq!(view.grid.leading_blanks(), 4);
    assert_eq!(view.cells.len(), 4 + 29);
    let marked: Vec<u8> = view
        .cells
        .iter()
        .filter_map(|cell| match cell {
            DayCell::Day { day, holidays, .. } if !holidays.is_empty() => Some(*day),
            _ => None,
        })
        .collect();
    assert_eq!(marked, [10, 29]);
    assert!(matches!(view.cells.last(), Some(DayCell::Day { day: 29, is_today: true, .. })));
}

#[test]
fn past_flags_follow_today() {
    let c = Catalog::from_path(fixture(), 2025, Validation::Strict)
        .unwrap()
        .with_past_marked(date(2024, 9, 1))
        .unwrap();
    let past: Vec<_> = c.holidays().iter().filter(|h| h.is_past).map(|h| h.name.as_str()).collect();
    assert_eq!(
        past,
        ["New Year Holiday", "Chinese New Year", "Leap Day Observance", "Labour Day", "National Day"]
    );
    for group in SchoolGroup::ALL {
        let flags: Vec<_> = c.school_holidays(group).iter().map(|s| s.is_past).collect();
        assert_eq!(flags, [true, false]);
    }
}

#[test]
fn builtin_round_trips_through_json() {
    let c = mh_catalog::malaysia::malaysia_2025().unwrap();
    let json = c.to_json_string().unwrap();
    assert!(json.contains("\"Jan 1\""));
    let again = Catalog::from_json_str(&json, 2000, Validation::Strict).unwrap();
    assert_eq!(again, c);
}

#[test]
fn lenient_load_logs_and_skips() {
    mh_core::logging::init();
    let doc = r#"{"holidays": [
        {"date": "Jan 1", "name": "New Year Holiday", "states": "National", "type": "national"},
        {"date": "Jan 1-Jan 2", "name": "Hyphenated", "states": "National", "type": "national"}
    ]}"#;
    let c = Catalog::from_json_str(doc, 2025, Validation::Lenient).unwrap();
    assert_eq!(c.holidays().len(), 1);
    assert!(matches!(
        Catalog::from_json_str(doc, 2025, Validation::Strict),
        Err(Error::Catalog(_))
    ));
}
