//! Day of the week.

use std::fmt;

/// A day of the week, numbered from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

const ALL: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// The weekday of a Julian Day Number.
    pub fn from_julian_day(jd: i32) -> Self {
        // JD 0 fell on a Monday.
        ALL[(jd as i64 + 1).rem_euclid(7) as usize]
    }

    /// Zero-based index with Sunday = 0.
    pub fn index_from_sunday(&self) -> usize {
        *self as usize
    }

    /// One-based number with Sunday = 1.
    pub fn number_from_sunday(&self) -> u32 {
        *self as u32 + 1
    }

    /// The following day.
    pub fn succ(&self) -> Self {
        ALL[(self.index_from_sunday() + 1) % 7]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "chrono")]
impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sunday => chrono::Weekday::Sun,
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
        }
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        ALL[weekday.num_days_from_sunday() as usize]
    }
}
