//! The holiday catalog: an immutable value holding one year's national/state
//! holidays and the Group A / Group B school holidays.
//!
//! A catalog is built once, either from Rust tables (see
//! [`malaysia`](crate::malaysia)) or from a JSON document, and is then only
//! read.  Date strings are parsed at construction; a record whose date does
//! not parse is either skipped with a warning ([`Validation::Lenient`]) or
//! rejects the whole document ([`Validation::Strict`]).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use mh_core::errors::{Error, Result};
use mh_core::settings::EngineSettings;
use mh_time::{Date, DateEngine, HolidayDate, MonthDay};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::holiday::{DisplayEvent, Holiday, HolidayType, SchoolGroup, SchoolHoliday};

// ── JSON document ────────────────────────────────────────────────────────────

/// A national/state holiday as written in a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    /// `"Mon D"` or `"Mon D–Mon D"`.
    pub date: String,
    /// Display name.
    pub name: String,
    /// Region list.
    pub states: String,
    /// `"national"` or `"state"`.
    #[serde(rename = "type")]
    pub kind: HolidayType,
    /// Optional past marker.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_past: bool,
}

/// A school holiday as written in a catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolHolidayRecord {
    /// Display name.
    pub name: String,
    /// `"Mon D"`.
    pub start_date: String,
    /// `"Mon D"`.
    pub end_date: String,
    /// Optional past marker.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_past: bool,
}

/// School holiday tables keyed by group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolHolidayTables {
    /// Group A breaks.
    #[serde(rename = "A", default)]
    pub group_a: Vec<SchoolHolidayRecord>,
    /// Group B breaks.
    #[serde(rename = "B", default)]
    pub group_b: Vec<SchoolHolidayRecord>,
}

/// A whole catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    /// Year the dates belong to; falls back to the settings' reference year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// National and state holidays, in chronological order.
    #[serde(default)]
    pub holidays: Vec<HolidayRecord>,
    /// School holidays.
    #[serde(default, rename = "school_holidays", alias = "schoolHolidays")]
    pub school_holidays: SchoolHolidayTables,
}

/// What to do with a record whose date cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Reject the whole document.
    Strict,
    /// Log a warning and leave the record out.
    #[default]
    Lenient,
}

// ── Catalog ──────────────────────────────────────────────────────────────────

/// One year of holidays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    engine: DateEngine,
    holidays: Vec<Holiday>,
    group_a: Vec<SchoolHoliday>,
    group_b: Vec<SchoolHoliday>,
}

impl Catalog {
    /// Build a catalog from parsed records.
    ///
    /// # Errors
    /// Fails if `year` is unsupported or a date does not exist in `year`
    /// (e.g. `Feb 29` in a non-leap year).
    pub fn new(
        year: u16,
        holidays: Vec<Holiday>,
        group_a: Vec<SchoolHoliday>,
        group_b: Vec<SchoolHoliday>,
    ) -> Result<Self> {
        let engine = DateEngine::new(year)?;
        for h in &holidays {
            check_holiday_date(&engine, &h.date).map_err(|e| Error::Catalog(format!("'{}': {e}", h.name)))?;
        }
        for s in group_a.iter().chain(group_b.iter()) {
            engine
                .span(s.start_date, s.end_date)
                .map_err(|e| Error::Catalog(format!("'{}': {e}", s.name)))?;
        }
        Ok(Self {
            engine,
            holidays,
            group_a,
            group_b,
        })
    }

    /// Build a catalog from a document.  `default_year` is used when the
    /// document has no `year`.
    pub fn from_document(doc: CatalogDocument, default_year: u16, validation: Validation) -> Result<Self> {
        let year = doc.year.unwrap_or(default_year);
        let engine = DateEngine::new(year)?;

        let mut holidays = Vec::with_capacity(doc.holidays.len());
        for (index, record) in doc.holidays.into_iter().enumerate() {
            match holiday_from_record(&engine, &record) {
                Ok(h) => holidays.push(h),
                Err(e) => reject(validation, "holidays", index, &record.name, e)?,
            }
        }
        let group_a = school_from_records(&engine, doc.school_holidays.group_a, "school_holidays.A", validation)?;
        let group_b = school_from_records(&engine, doc.school_holidays.group_b, "school_holidays.B", validation)?;

        debug!(
            year,
            holidays = holidays.len(),
            group_a = group_a.len(),
            group_b = group_b.len(),
            "built holiday catalog"
        );
        Ok(Self {
            engine,
            holidays,
            group_a,
            group_b,
        })
    }

    /// Parse a JSON catalog document.
    pub fn from_json_str(json: &str, default_year: u16, validation: Validation) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(doc, default_year, validation)
    }

    /// Read a JSON catalog document from `path`.
    pub fn from_path(path: impl AsRef<Path>, default_year: u16, validation: Validation) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))?;
        let doc: CatalogDocument = serde_json::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), "read catalog document");
        Self::from_document(doc, default_year, validation)
    }

    /// Load the catalog selected by `settings`: the JSON file at
    /// `catalog_path`, or the built-in Malaysia table.
    pub fn from_settings(settings: &EngineSettings) -> Result<Self> {
        settings.validate()?;
        match &settings.catalog_path {
            Some(path) => Self::from_path(path, settings.reference_year, Validation::Lenient),
            None => {
                let catalog = crate::malaysia::malaysia_2025()?;
                if catalog.year() != settings.reference_year {
                    return Err(Error::InvalidArgument(format!(
                        "built-in catalog covers {}, not {}; set a catalog path",
                        catalog.year(),
                        settings.reference_year
                    )));
                }
                Ok(catalog)
            }
        }
    }

    /// Convert back to a document.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            year: Some(self.year()),
            holidays: self
                .holidays
                .iter()
                .map(|h| HolidayRecord {
                    date: h.date_string(),
                    name: h.name.clone(),
                    states: h.states.clone(),
                    kind: h.kind,
                    is_past: h.is_past,
                })
                .collect(),
            school_holidays: SchoolHolidayTables {
                group_a: self.group_a.iter().map(school_record).collect(),
                group_b: self.group_b.iter().map(school_record).collect(),
            },
        }
    }

    /// Serialize as a pretty-printed JSON document.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    /// Return a copy with `is_past` set on every entry that ended before
    /// `today`.
    pub fn with_past_marked(mut self, today: Date) -> Result<Self> {
        let engine = self.engine;
        for h in &mut self.holidays {
            let last = h.date.end().unwrap_or(h.date.start());
            h.is_past = end_date(&engine, h.date.start(), last)? < today;
        }
        for s in self.group_a.iter_mut().chain(self.group_b.iter_mut()) {
            s.is_past = end_date(&engine, s.start_date, s.end_date)? < today;
        }
        Ok(self)
    }

    /// [`with_past_marked`](Self::with_past_marked) against the local clock.
    pub fn with_past_marked_today(self) -> Result<Self> {
        self.with_past_marked(Date::today()?)
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// The reference year.
    pub fn year(&self) -> u16 {
        self.engine.reference_year()
    }

    /// Date engine bound to the reference year.
    pub fn engine(&self) -> &DateEngine {
        &self.engine
    }

    /// National and state holidays, in catalog order.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// School holidays of one group.
    pub fn school_holidays(&self, group: SchoolGroup) -> &[SchoolHoliday] {
        match group {
            SchoolGroup::A => &self.group_a,
            SchoolGroup::B => &self.group_b,
        }
    }

    /// Every school holiday, Group A first, tagged as display events.
    pub fn school_events(&self) -> impl Iterator<Item = DisplayEvent<'_>> + '_ {
        SchoolGroup::ALL.into_iter().flat_map(move |group| {
            self.school_holidays(group)
                .iter()
                .map(move |holiday| DisplayEvent::School { group, holiday })
        })
    }

    /// Every entry as a display event: holidays, then Group A, then Group B.
    pub fn events(&self) -> impl Iterator<Item = DisplayEvent<'_>> + '_ {
        self.holidays.iter().map(DisplayEvent::Holiday).chain(self.school_events())
    }

    /// Total number of entries across all tables.
    pub fn len(&self) -> usize {
        self.holidays.len() + self.group_a.len() + self.group_b.len()
    }

    /// `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn check_holiday_date(engine: &DateEngine, date: &HolidayDate) -> Result<()> {
    engine.resolve(date.start())?;
    if let Some(end) = date.end() {
        engine.span(date.start(), end)?;
    }
    Ok(())
}

fn end_date(engine: &DateEngine, start: MonthDay, end: MonthDay) -> Result<Date> {
    let first = engine.resolve(start)?;
    let days = engine.span(start, end)?;
    first.add_days(days as i32 - 1)
}

fn holiday_from_record(engine: &DateEngine, record: &HolidayRecord) -> Result<Holiday> {
    let date = HolidayDate::parse(&record.date)?;
    check_holiday_date(engine, &date)?;
    Ok(Holiday {
        date,
        name: record.name.clone(),
        states: record.states.clone(),
        kind: record.kind,
        is_past: record.is_past,
    })
}

fn school_from_records(
    engine: &DateEngine,
    records: Vec<SchoolHolidayRecord>,
    table: &str,
    validation: Validation,
) -> Result<Vec<SchoolHoliday>> {
    let mut out = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let parsed = MonthDay::parse(&record.start_date).and_then(|start| {
            let end = MonthDay::parse(&record.end_date)?;
            engine.span(start, end)?;
            Ok((start, end))
        });
        match parsed {
            Ok((start_date, end_date)) => out.push(SchoolHoliday {
                name: record.name,
                start_date,
                end_date,
                is_past: record.is_past,
            }),
            Err(e) => reject(validation, table, index, &record.name, e)?,
        }
    }
    Ok(out)
}

fn reject(validation: Validation, table: &str, index: usize, name: &str, error: Error) -> Result<()> {
    match validation {
        Validation::Strict => Err(Error::Catalog(format!("{table}[{index}] '{name}': {error}"))),
        Validation::Lenient => {
            warn!(table, index, name, %error, "skipping malformed catalog record");
            Ok(())
        }
    }
}

fn school_record(s: &SchoolHoliday) -> SchoolHolidayRecord {
    SchoolHolidayRecord {
        name: s.name.clone(),
        start_date: s.start_date.to_string(),
        end_date: s.end_date.to_string(),
        is_past: s.is_past,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "year": 2025,
        "holidays": [
            {"date": "Jan 1", "name": "New Year Holiday", "states": "National", "type": "national"},
            {"date": "Jan 29–Jan 30", "name": "Chinese New Year", "states": "National", "type": "national"},
            {"date": "Feb 30", "name": "Impossible Day", "states": "Nowhere", "type": "state"},
            {"date": "Feb 1", "name": "Federal Territory Day", "states": "Kuala Lumpur", "type": "state", "isPast": true}
        ],
        "school_holidays": {
            "A": [{"name": "Year-End Break", "startDate": "Dec 19", "endDate": "Jan 10"}],
            "B": [{"name": "Broken", "startDate": "Dec 20", "endDate": "Janurary 11"}]
        }
    }"#;

    #[test]
    fn lenient_skips_bad_records() {
        let c = Catalog::from_json_str(DOC, 2024, Validation::Lenient).unwrap();
        assert_eq!(c.year(), 2025);
        let names: Vec<_> = c.holidays().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["New Year Holiday", "Chinese New Year", "Federal Territory Day"]);
        assert!(c.holidays()[2].is_past);
        assert_eq!(c.school_holidays(SchoolGroup::A).len(), 1);
        assert!(c.school_holidays(SchoolGroup::B).is_empty());
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn strict_rejects_bad_records() {
        let err = Catalog::from_json_str(DOC, 2025, Validation::Strict).unwrap_err();
        match err {
            Error::Catalog(msg) => assert!(msg.contains("holidays[2]"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn year_defaults_from_caller() {
        let c = Catalog::from_json_str(r#"{"holidays": []}"#, 2030, Validation::Strict).unwrap();
        assert_eq!(c.year(), 2030);
        assert!(c.is_empty());
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(
            Catalog::from_json_str("[1, 2]", 2025, Validation::Lenient),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn leap_day_checked_against_year() {
        let doc = r#"{"holidays": [{"date": "Feb 29", "name": "Leap", "states": "X", "type": "state"}]}"#;
        assert!(Catalog::from_json_str(doc, 2024, Validation::Strict).is_ok());
        assert!(Catalog::from_json_str(doc, 2025, Validation::Strict).is_err());
    }

    #[test]
    fn past_marking_uses_end_dates() {
        let c = Catalog::from_json_str(DOC, 2025, Validation::Lenient).unwrap();
        let today = Date::from_ymd(2025, 1, 30).unwrap();
        let c = c.with_past_marked(today).unwrap();
        let past: Vec<_> = c.holidays().iter().map(|h| h.is_past).collect();
        // Chinese New Year ends on Jan 30: not yet past.
        assert_eq!(past, [true, false, false]);
        assert!(!c.school_holidays(SchoolGroup::A)[0].is_past);

        let later = Date::from_ymd(2026, 1, 11).unwrap();
        let c = c.with_past_marked(later).unwrap();
        assert!(c.school_holidays(SchoolGroup::A)[0].is_past);
    }

    #[test]
    fn export_uses_snake_case_school_key() {
        let c = Catalog::from_json_str(DOC, 2025, Validation::Lenient).unwrap();
        let json = c.to_json_string().unwrap();
        assert!(json.contains("\"school_holidays\""), "{json}");
        assert!(!json.contains("schoolHolidays"));
        let camel = r#"{"schoolHolidays": {"A": [{"name": "Break", "startDate": "Sep 12", "endDate": "Sep 20"}]}}"#;
        let c = Catalog::from_json_str(camel, 2025, Validation::Strict).unwrap();
        assert_eq!(c.school_holidays(SchoolGroup::A).len(), 1);
    }

    #[test]
    fn past_marking_against_clock() {
        let today = Date::today().unwrap();
        let c = Catalog::from_json_str(DOC, 2025, Validation::Lenient)
            .unwrap()
            .with_past_marked_today()
            .unwrap();
        let expected = c.clone().with_past_marked(today).unwrap();
        assert_eq!(c, expected);
    }

    #[test]
    fn document_export_reloads() {
        let c = Catalog::from_json_str(DOC, 2025, Validation::Lenient).unwrap();
        let json = c.to_json_string().unwrap();
        let again = Catalog::from_json_str(&json, 1999, Validation::Strict).unwrap();
        assert_eq!(again, c);
    }

    #[test]
    fn settings_select_builtin() {
        let c = Catalog::from_settings(&EngineSettings::default()).unwrap();
        assert_eq!(c.year(), 2025);
        assert!(!c.holidays().is_empty());
        let other = EngineSettings::new(2026).unwrap();
        assert!(matches!(Catalog::from_settings(&other), Err(Error::InvalidArgument(_))));
    }
}
