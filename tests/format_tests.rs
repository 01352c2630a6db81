use std::sync::Arc;

use hijri_calendar::{
    format, parse, CalendarError, GregorianDate, HijriCalendar, HijriCalendarAdjustment,
    HijriDate, HijriFormatter, Locale, LocaleNames, LocaleRegistry, ParseError, PatternError,
    Weekday,
};

#[test]
fn test_format_convenience() {
    let calendar = HijriCalendar::default();
    let date = HijriDate::new(1446, 9, 1);
    assert_eq!(format(&date, "yyyy-MM-dd", &calendar).unwrap(), "1446-09-01");
    assert_eq!(
        format(&date, "EEEE, d MMMM y 'AH'", &calendar).unwrap(),
        "Saturday, 1 Ramadan 1446 AH"
    );
    assert_eq!(format(&date, "d MMM yy", &calendar).unwrap(), "1 Ram. 46");
}

#[test]
fn test_format_invalid_pattern() {
    let calendar = HijriCalendar::default();
    let date = HijriDate::new(1446, 9, 1);
    assert!(matches!(
        format(&date, "yyyy Q", &calendar),
        Err(PatternError::UnsupportedField { letter: 'Q', .. })
    ));
    assert_eq!(format(&date, "", &calendar), Err(PatternError::EmptyPattern));
}

#[test]
fn test_weekday_follows_adjustments() {
    let mut engine = HijriCalendarAdjustment::new();
    let date = HijriDate::new(1446, 9, 1);
    let formatter = HijriFormatter::new("EEEE").unwrap();
    assert_eq!(formatter.format(&date, engine.calendar()), "Saturday");

    let sighted = GregorianDate::new(2025, 3, 2).unwrap();
    engine.add_adjustment(1446, 9, sighted).unwrap();
    assert_eq!(formatter.format(&date, engine.calendar()), "Sunday");
}

#[test]
fn test_arabic_and_turkish() {
    let calendar = HijriCalendar::default();
    let registry = LocaleRegistry::default();
    let date = HijriDate::new(1446, 10, 1);

    let arabic = HijriFormatter::for_locale_tag("EEEE d MMMM y", &registry, "ar-SA").unwrap();
    assert_eq!(arabic.format(&date, &calendar), "الأحد 1 شوال 1446");
    assert_eq!(arabic.parse("الأحد 1 شوال 1446", &calendar).unwrap(), date);

    let turkish = HijriFormatter::for_locale_tag("d MMMM y EEEE", &registry, "tr-TR").unwrap();
    assert_eq!(turkish.format(&date, &calendar), "1 Şevval 1446 Pazar");
    assert_eq!(turkish.locale().locale_identifier(), "tr");
}

#[test]
fn test_parse_round_trip_over_a_year() {
    let calendar = HijriCalendar::default();
    let formatter = HijriFormatter::new("EEE, dd MMM yyyy").unwrap();
    let mut date = HijriDate::new(1446, 1, 1);
    while date.year == 1446 {
        let text = formatter.format(&date, &calendar);
        assert_eq!(formatter.parse(&text, &calendar).unwrap(), date, "{text}");
        date = calendar.add_days(&date, 1);
    }
}

#[test]
fn test_parse_errors() {
    let calendar = HijriCalendar::default();
    assert!(matches!(
        parse("1446/09", "yyyy-MM", &calendar),
        Err(ParseError::Mismatch { position: 4, .. })
    ));
    assert!(matches!(
        parse("30 Ramadan 1446", "d MMMM y", &calendar),
        Err(ParseError::Calendar(CalendarError::InvalidDateComponents { .. }))
    ));
    assert!(matches!(
        parse("1 Ramadan 1200", "d MMMM y", &calendar),
        Err(ParseError::Calendar(CalendarError::DateOutOfRange { .. }))
    ));
    assert!(matches!(
        parse("1 Ramadan", "d MMMM 'y'", &calendar),
        Err(ParseError::Pattern(PatternError::MissingField { letter: 'y' }))
    ));
}

#[test]
fn test_parse_defaults_missing_day() {
    let calendar = HijriCalendar::default();
    assert_eq!(
        parse("Shawwal 1446", "MMMM y", &calendar).unwrap(),
        HijriDate::new(1446, 10, 1)
    );
}

#[derive(Debug)]
struct Malay;

impl LocaleNames for Malay {
    fn locale_identifier(&self) -> &str {
        "ms"
    }

    fn short_month_name(&self, month: u32) -> &str {
        self.full_month_name(month)
    }

    fn full_month_name(&self, month: u32) -> &str {
        match month {
            9 => "Ramadan",
            10 => "Syawal",
            _ => "",
        }
    }

    fn short_weekday_name(&self, weekday: Weekday) -> &str {
        self.full_weekday_name(weekday)
    }

    fn full_weekday_name(&self, weekday: Weekday) -> &str {
        match weekday {
            Weekday::Sunday => "Ahad",
            _ => "",
        }
    }
}

#[test]
fn test_custom_locale() {
    let calendar = HijriCalendar::default();
    let mut registry = LocaleRegistry::default();
    registry.register(Arc::new(Malay));
    assert!(registry.identifiers().any(|id| id == "ms"));

    let formatter = HijriFormatter::for_locale_tag("EEEE, d MMMM y", &registry, "ms_MY").unwrap();
    assert_eq!(
        formatter.format(&HijriDate::new(1446, 10, 1), &calendar),
        "Ahad, 1 Syawal 1446"
    );
}

#[test]
fn test_registry_fallback() {
    let registry = LocaleRegistry::with_fallback(Arc::new(Locale::ar()));
    assert_eq!(registry.lookup("de").locale_identifier(), "ar");
    assert_eq!(registry.fallback().locale_identifier(), "ar");
}
