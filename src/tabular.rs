//! Tabular Islamic calendar.
//!
//! The arithmetic calendar used outside the Umm al-Qura table range: a
//! 30-year cycle of 10631 days in which 11 years are leap years, months
//! alternating 30 and 29 days, and the twelfth month gaining a day in leap
//! years. Dates are counted from the civil epoch, 1 Muharram 1 AH =
//! Friday 16 July 622 (Julian), JD 1948440.
//!
//! There is no year zero: year -1 immediately precedes year 1.

/// Julian Day Number of 1 Muharram 1 AH.
pub const ISLAMIC_EPOCH_JD: i32 = 1_948_440;

/// Days in a 30-year cycle.
const CYCLE_DAYS: i64 = 10_631;

/// Maps a signed Hijri year onto a continuous count (…, -1, 0, 1, …).
fn continuous_year(year: i32) -> i64 {
    if year < 0 {
        year as i64 + 1
    } else {
        year as i64
    }
}

/// JD of the given day, counting years continuously.
fn continuous_to_julian_day(year: i64, month: i64, day: i64) -> i64 {
    day + (59 * (month - 1) + 1).div_euclid(2)
        + (year - 1) * 354
        + (3 + 11 * year).div_euclid(30)
        + ISLAMIC_EPOCH_JD as i64
        - 1
}

/// Returns true if the Hijri year has 355 days.
pub fn is_leap_year(year: i32) -> bool {
    (14 + 11 * continuous_year(year)).rem_euclid(30) < 11
}

/// Returns the number of days in a Hijri month, or 0 for an invalid month
///
/// # Arguments
/// * `year` - Hijri year
/// * `month` - Hijri month (1-12)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        12 if is_leap_year(year) => 30,
        1..=12 if month % 2 == 1 => 30,
        1..=12 => 29,
        _ => 0,
    }
}

/// Convert a Hijri date to a Julian Day Number.
///
/// Inputs are not validated; out-of-range days simply count past the month.
pub fn to_julian_day(year: i32, month: u32, day: u32) -> i32 {
    continuous_to_julian_day(continuous_year(year), month as i64, day as i64) as i32
}

/// Convert a Julian Day Number to a Hijri date.
///
/// # Returns
/// A tuple of (hijri_year, hijri_month, hijri_day)
pub fn from_julian_day(jd: i32) -> (i32, u32, u32) {
    let jd = jd as i64;
    let year = (30 * (jd - ISLAMIC_EPOCH_JD as i64) + 10_646).div_euclid(CYCLE_DAYS);

    let days_into_year = jd - continuous_to_julian_day(year, 1, 1);
    debug_assert!((0..355).contains(&days_into_year), "{days_into_year}");
    // Day 355 of a leap year (30 Dhu al-Hijjah) estimates month 13.
    let month = ((2 * days_into_year).div_euclid(59) + 1).min(12);
    let day = jd - continuous_to_julian_day(year, month, 1) + 1;

    let year = if year > 0 { year } else { year - 1 };
    (year as i32, month as u32, day as u32)
}
