use hijri_calendar::{CalendarError, GregorianDate, HijriCalendarAdjustment, HijriDate};

fn greg(year: i32, month: u32, day: u32) -> GregorianDate {
    GregorianDate::new(year, month, day).unwrap()
}

#[test]
fn test_json_round_trip() {
    let mut engine = HijriCalendarAdjustment::new();
    engine.add_adjustment(1446, 9, greg(2025, 3, 2)).unwrap();
    let json = engine.adjustment_data_as_json().unwrap();
    assert_eq!(json, r#"{"1544":60737,"1545":60766}"#);

    let restored = HijriCalendarAdjustment::from_json(&json).unwrap();
    assert_eq!(restored.adjustment_data(), engine.adjustment_data());
    assert_eq!(restored.table(), engine.table());
    assert_eq!(
        restored.hijri_date(greg(2025, 3, 2)),
        HijriDate::new(1446, 9, 1)
    );
}

#[test]
fn test_empty_engine_serializes_to_empty_object() {
    let engine = HijriCalendarAdjustment::new();
    assert_eq!(engine.adjustment_data_as_json().unwrap(), "{}");
}

#[test]
fn test_load_replaces_existing_overrides() {
    let mut engine = HijriCalendarAdjustment::new();
    engine.add_adjustment(1446, 9, greg(2025, 3, 2)).unwrap();
    engine.set_adjustment_data_from_json("{}").unwrap();
    assert!(engine.adjustments().is_empty());
    assert_eq!(engine.table(), engine.base_table());
}

#[test]
fn test_load_skips_unusable_keys() {
    let json = r#"{"1544": 60737, "1545": 60766, "shawwal": 3, "0": 15100, "99999": 1}"#;
    let engine = HijriCalendarAdjustment::from_json(json).unwrap();
    let offsets: Vec<usize> = engine.adjustments().keys().copied().collect();
    assert_eq!(offsets, vec![1544, 1545]);
}

#[test]
fn test_load_prunes_values_equal_to_base() {
    let engine = HijriCalendarAdjustment::from_json(r#"{"1544": 60736}"#).unwrap();
    assert!(engine.adjustments().is_empty());
}

#[test]
fn test_remove_after_load_matches_original_engine() {
    let mut engine = HijriCalendarAdjustment::new();
    engine.add_adjustment(1420, 11, greg(2000, 2, 6)).unwrap();
    engine.add_adjustment(1446, 9, greg(2025, 3, 2)).unwrap();
    let json = engine.adjustment_data_as_json().unwrap();
    assert_eq!(json, r#"{"1234":51581,"1544":60737,"1545":60766}"#);

    let mut loaded = HijriCalendarAdjustment::from_json(&json).unwrap();
    let expected = engine.remove_adjustment(1446, 9).unwrap();
    assert_eq!(expected, vec![1544, 1545]);
    assert_eq!(loaded.remove_adjustment(1446, 9).unwrap(), expected);
    assert_eq!(loaded.adjustment_data(), engine.adjustment_data());
    assert_eq!(loaded.adjustments().len(), 1);
    assert!(loaded.is_adjusted(1420, 11));
}

#[test]
fn test_malformed_json() {
    let mut engine = HijriCalendarAdjustment::new();
    for json in ["", "[]", "42", r#"{"1544": "x"}"#, r#"{"1544": 1.5}"#, "{"] {
        assert!(
            matches!(
                engine.set_adjustment_data_from_json(json),
                Err(CalendarError::JsonProcessing { .. })
            ),
            "{json}"
        );
    }
    assert!(engine.adjustments().is_empty());
}

#[test]
fn test_inconsistent_json_is_rejected() {
    let mut engine = HijriCalendarAdjustment::new();
    assert!(matches!(
        engine.set_adjustment_data_from_json(r#"{"1544": 60737}"#),
        Err(CalendarError::InvalidAdjustment { .. })
    ));
    assert!(engine.adjustments().is_empty());
}

#[test]
fn test_hijri_date_serde() {
    let date = HijriDate::new(1446, 9, 1);
    let json = serde_json::to_string(&date).unwrap();
    assert_eq!(json, r#"{"year":1446,"month":9,"day":1}"#);
    assert_eq!(serde_json::from_str::<HijriDate>(&json).unwrap(), date);
}
