use hijri_calendar::ummalqura::{self, TABLE_LEN};
use hijri_calendar::{is_valid_month_length, GregorianDate, HijriCalendar, HijriCalendarAdjustment};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    /// Start the month at `offset` this many days after its predecessor.
    Add { offset: usize, days: i32 },
    Remove { offset: usize },
}

fn op() -> impl Strategy<Value = Op> {
    // A narrow window keeps adds and removes landing on the same months.
    let offset = 1500usize..1530;
    prop_oneof![
        (offset.clone(), 29i32..=30).prop_map(|(offset, days)| Op::Add { offset, days }),
        offset.prop_map(|offset| Op::Remove { offset }),
    ]
}

fn apply(engine: &mut HijriCalendarAdjustment, op: &Op) {
    match *op {
        Op::Add { offset, days } => {
            let (year, month) = ummalqura::year_month(offset);
            let start = GregorianDate::from_mjd(engine.table()[offset - 1] + days);
            engine.add_adjustment(year, month, start).unwrap();
        }
        Op::Remove { offset } => {
            let (year, month) = ummalqura::year_month(offset);
            let _ = engine.remove_adjustment(year, month);
        }
    }
}

fn assert_consistent(engine: &HijriCalendarAdjustment) {
    let table = engine.table();
    let base = engine.base_table();
    for pair in table.windows(2) {
        assert!(is_valid_month_length(pair[1] - pair[0]), "{pair:?}");
    }
    for offset in 0..TABLE_LEN {
        match engine.adjustments().get(&offset) {
            Some(&start) => {
                assert_ne!(start, base[offset]);
                assert_eq!(table[offset], start);
            }
            None => assert_eq!(table[offset], base[offset]),
        }
    }
}

proptest! {
    /// Every month stays 29-30 days through any sequence of adds and removes.
    #[test]
    fn month_lengths_stay_valid(ops in prop::collection::vec(op(), 1..40)) {
        let mut engine = HijriCalendarAdjustment::new();
        for op in &ops {
            apply(&mut engine, op);
            assert_consistent(&engine);
        }
    }

    /// Removing a lone adjustment restores the published table.
    #[test]
    fn add_then_remove_restores_base(offset in 1usize..TABLE_LEN, days in 29i32..=30) {
        let mut engine = HijriCalendarAdjustment::new();
        apply(&mut engine, &Op::Add { offset, days });
        let (year, month) = ummalqura::year_month(offset);
        if engine.is_adjusted(year, month) {
            engine.remove_adjustment(year, month).unwrap();
        }
        prop_assert!(engine.adjustments().is_empty());
        prop_assert_eq!(engine.table(), engine.base_table());
    }

    /// JSON output reloads into an identical table.
    #[test]
    fn json_reload_preserves_table(ops in prop::collection::vec(op(), 1..20)) {
        let mut engine = HijriCalendarAdjustment::new();
        for op in &ops {
            apply(&mut engine, op);
        }
        let json = engine.adjustment_data_as_json().unwrap();
        let restored = HijriCalendarAdjustment::from_json(&json).unwrap();
        prop_assert_eq!(restored.table(), engine.table());
    }

    /// An engine reloaded from JSON removes exactly what the original removes.
    #[test]
    fn json_reload_preserves_removals(
        ops in prop::collection::vec(op(), 1..20),
        offset in 1500usize..1530,
    ) {
        let mut engine = HijriCalendarAdjustment::new();
        for op in &ops {
            apply(&mut engine, op);
        }
        let json = engine.adjustment_data_as_json().unwrap();
        let mut restored = HijriCalendarAdjustment::from_json(&json).unwrap();

        let (year, month) = ummalqura::year_month(offset);
        prop_assert_eq!(
            restored.remove_adjustment(year, month),
            engine.remove_adjustment(year, month)
        );
        prop_assert_eq!(restored.adjustment_data(), engine.adjustment_data());
    }

    /// Gregorian -> Hijri -> Gregorian is the identity across the table.
    #[test]
    fn table_round_trip(days in 0i32..64_800) {
        let calendar = HijriCalendar::default();
        let date = GregorianDate::from_mjd(ummalqura::base_table()[0] + days);
        let hijri = calendar.hijri_date(date);
        prop_assert!(calendar.is_valid_hijri_date(hijri.year, hijri.month, hijri.day));
        prop_assert_eq!(calendar.gregorian_date(&hijri), date);
    }

    /// The tabular calendar round-trips from the Gregorian reform onwards.
    #[test]
    fn tabular_round_trip(days in 0i32..400_000) {
        let calendar = HijriCalendar::tabular();
        let date = GregorianDate::from_julian_day(2_299_161 + days);
        let hijri = calendar.hijri_date(date);
        prop_assert!(calendar.is_valid_hijri_date(hijri.year, hijri.month, hijri.day));
        prop_assert_eq!(calendar.gregorian_date(&hijri), date);
    }
}
