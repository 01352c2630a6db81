//! Julian Day Number conversion.
//!
//! All conversions in this crate pivot through the Julian Day Number (JD), a
//! continuous count of days. The Umm al-Qura table stores Modified Julian Day
//! values, defined here as `JD - 2_400_000`.
//!
//! Gregorian to JD is proleptic. JD to Gregorian follows the historical
//! cutover: day numbers before [`GREGORIAN_CUTOVER_JD`] come back as Julian
//! calendar dates, so round trips are exact from 1582-10-15 onwards.

/// Offset between a Julian Day Number and the table's Modified Julian Day.
pub const MJD_OFFSET: i32 = 2_400_000;

/// JD of 1582-10-15, the first day of the Gregorian calendar.
pub const GREGORIAN_CUTOVER_JD: i32 = 2_299_161;

/// Convert a Gregorian date to a Julian Day Number.
///
/// # Arguments
/// * `year` - Gregorian year
/// * `month` - Gregorian month (1-12)
/// * `day` - Gregorian day (1-31)
///
/// # Returns
/// The Julian Day Number of the date. Inputs are not validated.
pub fn gregorian_to_julian_day(year: i32, month: u32, day: u32) -> i32 {
    let mut y = year;
    let mut m = month as i32;

    if m <= 2 {
        y -= 1;
        m += 12;
    }

    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    ((365.25 * (y + 4716) as f64).floor() as i32)
        + ((30.6001 * (m + 1) as f64).floor() as i32)
        + day as i32
        + b
        - 1524
}

/// Convert a Julian Day Number to a calendar date.
///
/// # Returns
/// A tuple of (year, month, day). Day numbers before the 1582 cutover yield
/// Julian calendar dates.
pub fn julian_day_to_gregorian(jd: i32) -> (i32, u32, u32) {
    let z = jd as i64;
    let a = if z < GREGORIAN_CUTOVER_JD as i64 {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        z + 1 + alpha - alpha.div_euclid(4)
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = b - d - (30.6001 * e as f64).floor() as i64;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    (year as i32, month as u32, day as u32)
}

/// Modified Julian Day of a Julian Day Number.
#[inline]
pub fn julian_day_to_mjd(jd: i32) -> i32 {
    jd - MJD_OFFSET
}

/// Julian Day Number of a Modified Julian Day.
#[inline]
pub fn mjd_to_julian_day(mjd: i32) -> i32 {
    mjd + MJD_OFFSET
}
