use hijri_calendar::{CalendarError, GregorianDate, HijriCalendarAdjustment, ParseError, PatternError};

#[test]
fn test_calendar_error_display() {
    let err = CalendarError::AdjustmentNotFound {
        reason: "1446-09 (offset 1544) has no override".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "adjustment not found: 1446-09 (offset 1544) has no override"
    );
}

#[test]
fn test_adjustment_error_names_the_month() {
    let mut engine = HijriCalendarAdjustment::new();
    let start = GregorianDate::new(2025, 3, 3).unwrap();
    let err = engine.add_adjustment(1446, 9, start).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("invalid adjustment:"), "{message}");
    assert!(message.contains("1446-09"), "{message}");
    assert!(message.contains("31 days"), "{message}");
}

#[test]
fn test_json_error_from_serde() {
    let err = HijriCalendarAdjustment::from_json("{oops").unwrap_err();
    assert!(matches!(err, CalendarError::JsonProcessing { .. }));
    assert!(err.to_string().starts_with("JSON processing failed:"));
}

#[test]
fn test_pattern_error_display() {
    assert_eq!(PatternError::EmptyPattern.to_string(), "empty date pattern");
    assert_eq!(
        PatternError::UnterminatedQuote { position: 3 }.to_string(),
        "unterminated quote at position 3"
    );
}

#[test]
fn test_parse_error_wraps_sources() {
    let err: ParseError = PatternError::EmptyPattern.into();
    assert_eq!(err.to_string(), "empty date pattern");

    let err: ParseError = CalendarError::DateOutOfRange {
        reason: "year 1200".to_string(),
    }
    .into();
    assert_eq!(err.to_string(), "date out of range: year 1200");
}

#[test]
fn test_errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<CalendarError>();
    assert_error::<PatternError>();
    assert_error::<ParseError>();
}
