use hijri_calendar::julian_day::{
    gregorian_to_julian_day, julian_day_to_gregorian, julian_day_to_mjd, mjd_to_julian_day,
    MJD_OFFSET,
};
use hijri_calendar::tabular;
use hijri_calendar::{GregorianDate, Weekday};

#[test]
fn test_reference_days() {
    assert_eq!(gregorian_to_julian_day(2000, 1, 1), 2_451_545);
    assert_eq!(gregorian_to_julian_day(2025, 3, 1), 2_460_736);
    assert_eq!(julian_day_to_gregorian(2_460_736), (2025, 3, 1));
    assert_eq!(julian_day_to_mjd(2_460_736), 60_736);
    assert_eq!(mjd_to_julian_day(60_736), 2_460_736);
    assert_eq!(MJD_OFFSET, 2_400_000);
}

#[test]
fn test_leap_days() {
    assert_eq!(julian_day_to_gregorian(gregorian_to_julian_day(2024, 2, 29)), (2024, 2, 29));
    assert_eq!(
        gregorian_to_julian_day(2024, 3, 1) - gregorian_to_julian_day(2024, 2, 28),
        2
    );
    assert_eq!(
        gregorian_to_julian_day(1900, 3, 1) - gregorian_to_julian_day(1900, 2, 28),
        1
    );
}

#[test]
fn test_gregorian_date_round_trip() {
    let mut date = GregorianDate::new(1582, 10, 15).unwrap();
    let end = GregorianDate::new(1700, 1, 1).unwrap();
    while date < end {
        let jd = date.julian_day();
        assert_eq!(GregorianDate::from_julian_day(jd), date);
        date = date.add_days(1);
    }
}

#[test]
fn test_weekdays_cycle() {
    let start = GregorianDate::new(2025, 3, 2).unwrap();
    assert_eq!(start.weekday(), Weekday::Sunday);
    let mut weekday = start.weekday();
    for offset in 1..=14 {
        weekday = weekday.succ();
        assert_eq!(start.add_days(offset).weekday(), weekday);
    }
}

#[test]
fn test_tabular_epoch_is_a_friday() {
    assert_eq!(
        Weekday::from_julian_day(tabular::ISLAMIC_EPOCH_JD),
        Weekday::Friday
    );
}
