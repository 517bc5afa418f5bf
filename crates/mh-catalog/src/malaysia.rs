//! Built-in catalog: Malaysian public, state and school holidays for 2025.

use mh_core::errors::Result;
use mh_time::{HolidayDate, MonthDay};

use crate::catalog::Catalog;
use crate::holiday::{Holiday, HolidayType, SchoolHoliday};

use crate::holiday::HolidayType::{National, State};

/// Year covered by the built-in tables.
pub const MALAYSIA_YEAR: u16 = 2025;

/// `(date, name, states, kind)`, in chronological order.
const PUBLIC_HOLIDAYS: &[(&str, &str, &str, HolidayType)] = &[
    ("Jan 1", "New Year Holiday", "National (except JHR KDH KTN TRG)", National),
    ("Jan 6", "Sultan's Birthday", "Johor", State),
    ("Jan 14", "Sultan's Birthday", "Negeri Sembilan", State),
    ("Jan 27", "Israk dan Mikraj", "Kedah, Negeri Sembilan, Perlis, Terengganu", State),
    ("Jan 29", "Chinese New Year", "National", National),
    ("Jan 30", "Chinese New Year, Day 2", "National (except Kelantan)", National),
    ("Feb 1", "Federal Territory Day", "Kuala Lumpur, Labuan, Putrajaya", State),
    ("Feb 11", "Thaipusam", "Johor, Kedah, Kuala Lumpur, Negeri Sembilan, Putrajaya, Penang, Perak, Selangor", State),
    ("Feb 20", "Independence Proclamation Day", "Melaka", State),
    ("Mar 2", "Awal Ramadan", "Johor, Kedah", State),
    ("Mar 3", "Awal Ramadan Holiday", "Johor", State),
    ("Mar 4", "Sultan's Coronation Anniversary", "Terengganu", State),
    ("Mar 18", "Nuzul Quran", "Kelantan, Kuala Lumpur, Labuan, Pahang, Putrajaya, Perlis, Penang, Perak, Selangor, Terengganu", State),
    ("Mar 23", "Sultan's Birthday", "Johor", State),
    ("Mar 24", "Sultan's Birthday (day in lieu)", "Johor", State),
    ("Mar 31", "Hari Raya Puasa", "National", National),
    ("Apr 1", "Hari Raya Puasa Holiday", "National", National),
    ("Apr 2", "Hari Raya Aidilfitri Holiday Third Day", "Melaka", State),
    ("Apr 18", "Good Friday", "Sabah, Sarawak", State),
    ("Apr 26", "Sultan's Birthday", "Terengganu", State),
    ("Apr 27", "State Public Holiday", "Terengganu", State),
    ("May 1", "Labour Day", "National", National),
    ("May 12", "Wesak Day", "National", National),
    ("May 17", "Raja's Birthday", "Perlis", State),
    ("May 22", "Hari Hol Pahang", "Pahang", State),
    ("May 30", "Harvest Festival", "Labuan, Sabah", State),
    ("May 31", "State Public Holiday", "Labuan, Sabah", State),
    ("Jun 1", "Hari Gawai Dayak", "Sarawak", State),
    ("Jun 2", "Birthday of SPB Yang di-Pertuan Agong", "National", National),
    ("Jun 2", "State Public Holiday", "Sarawak", State),
    ("Jun 3", "State Public Holiday", "Sarawak", State),
    ("Jun 6", "Hari Arafah", "Kelantan, Terengganu", State),
    ("Jun 7", "Hari Raya Qurban", "National", National),
    ("Jun 8", "Hari Raya Qurban, Day 2", "Kedah, Kelantan, Perlis, Terengganu", State),
    ("Jun 9", "Hari Raya Qurban Holiday", "Kelantan, Terengganu", State),
    ("Jun 22", "Sultan's Birthday", "Kedah", State),
    ("Jun 27", "Awal Muharram", "National", National),
    ("Jun 29", "Awal Muharram Holiday", "Kedah", State),
    ("Jul 7", "George Town UNESCO Heritage Day", "Penang", State),
    ("Jul 12", "Ruler's Birthday", "Penang", State),
    ("Jul 22", "Sarawak Day", "Sarawak", State),
    ("Jul 30", "Sultan's Birthday", "Pahang", State),
    ("Jul 31", "Hari Hol Almarhum Sultan Iskandar", "Johor", State),
    ("Aug 24", "Ruler's Birthday", "Melaka", State),
    ("Aug 25", "State Public Holiday", "Melaka", State),
    ("Aug 31", "National Day", "National", National),
    ("Sep 1", "National Day Holiday", "National (except Kedah, Kelantan, Terengganu)", National),
    ("Sep 5", "Maulidur Rasul", "National", National),
    ("Sep 7", "Maulidur Rasul Holiday", "Kedah", State),
    ("Sep 16", "Malaysia Day", "National", National),
    ("Sep 29", "Sultan's Birthday", "Kelantan", State),
    ("Sep 30", "State Public Holiday", "Kelantan", State),
    ("Oct 4", "Ruler's Birthday", "Sabah", State),
    ("Oct 11", "Ruler's Birthday", "Sarawak", State),
    ("Oct 20", "Deepavali", "National (except Sarawak)", National),
    ("Nov 7", "Sultan's Birthday", "Perak", State),
    ("Dec 11", "Sultan's Birthday", "Selangor", State),
    ("Dec 24", "Christmas Eve", "Sabah", State),
    ("Dec 25", "Christmas Day", "National", National),
];

/// `(name, start, end)` for Johor, Kedah, Kelantan, Terengganu.
const GROUP_A: &[(&str, &str, &str)] = &[
    ("Mid-Year Break", "May 29", "Jun 9"),
    ("Term 2 Break", "Sep 12", "Sep 20"),
    ("Deepavali Break", "Oct 19", "Oct 21"),
    ("Year-End Break", "Dec 19", "Jan 10"),
];

/// `(name, start, end)` for the remaining states and federal territories.
const GROUP_B: &[(&str, &str, &str)] = &[
    ("Mid-Year Break", "May 23", "Jun 7"),
    ("Term 2 Break", "Sep 13", "Sep 21"),
    ("Deepavali Break", "Oct 20", "Oct 22"),
    ("Year-End Break", "Dec 20", "Jan 11"),
];

/// Build the 2025 Malaysia catalog.
pub fn malaysia_2025() -> Result<Catalog> {
    let holidays = PUBLIC_HOLIDAYS
        .iter()
        .map(|&(date, name, states, kind)| -> Result<Holiday> {
            Ok(Holiday::new(HolidayDate::parse(date)?, name, states, kind))
        })
        .collect::<Result<Vec<_>>>()?;
    Catalog::new(MALAYSIA_YEAR, holidays, school(GROUP_A)?, school(GROUP_B)?)
}

fn school(table: &[(&str, &str, &str)]) -> Result<Vec<SchoolHoliday>> {
    table
        .iter()
        .map(|&(name, start, end)| -> Result<SchoolHoliday> {
            Ok(SchoolHoliday::new(name, MonthDay::parse(start)?, MonthDay::parse(end)?))
        })
        .collect()
}
