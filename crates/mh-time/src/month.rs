//! `Month`: month-of-year enum.

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).  The 0-based
/// [`index`](Month::index) is what calendar grids and `(month, day)`
/// comparisons use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=12).contains(&n) {
            Some(Self::ALL[n as usize - 1])
        } else {
            None
        }
    }

    /// Construct from a 0-based index (0 = January … 11 = December).
    pub fn from_index(i: u8) -> Option<Self> {
        Self::ALL.get(i as usize).copied()
    }

    /// Look up a three-letter abbreviation (`"Jan"` … `"Dec"`).
    ///
    /// The match is exact and case-sensitive: `"jan"` and `"JAN"` are
    /// rejected.
    pub fn from_short_name(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.short_name() == s)
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the 0-based month index.
    pub fn index(&self) -> u8 {
        self.number() - 1
    }

    /// The following month, wrapping December to January.
    pub fn succ(&self) -> Self {
        Self::ALL[(self.index() as usize + 1) % 12]
    }

    /// The preceding month, wrapping January to December.
    pub fn pred(&self) -> Self {
        Self::ALL[(self.index() as usize + 11) % 12]
    }

    /// Return the three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(&self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }

    /// Return the full name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}
