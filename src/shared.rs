//! Shared access to an adjustment engine.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::adjustment::{AutoAdjustment, HijriCalendarAdjustment, PossibleStart};
use crate::calendar::HijriCalendar;
use crate::date::HijriDate;
use crate::error::CalendarError;
use crate::gregorian::GregorianDate;

/// A cloneable handle to one engine guarded by a single lock.
///
/// Conversions and mutations are serialized, so a reader never sees a
/// half-applied adjustment. Use [`SharedCalendar::calendar`] to take a
/// snapshot for lock-free conversions.
#[derive(Debug, Clone, Default)]
pub struct SharedCalendar {
    inner: Arc<Mutex<HijriCalendarAdjustment>>,
}

impl SharedCalendar {
    pub fn new(engine: HijriCalendarAdjustment) -> Self {
        SharedCalendar {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HijriCalendarAdjustment> {
        // Engine state is only replaced after validation; a poisoned lock
        // still guards a consistent engine.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with shared access to the engine.
    pub fn read<R>(&self, f: impl FnOnce(&HijriCalendarAdjustment) -> R) -> R {
        f(&self.lock())
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn write<R>(&self, f: impl FnOnce(&mut HijriCalendarAdjustment) -> R) -> R {
        f(&mut self.lock())
    }

    /// A snapshot of the calendar with the current overrides.
    pub fn calendar(&self) -> HijriCalendar {
        self.lock().calendar().clone()
    }

    pub fn hijri_date(&self, date: GregorianDate) -> HijriDate {
        self.lock().hijri_date(date)
    }

    pub fn gregorian_date(&self, date: &HijriDate) -> GregorianDate {
        self.lock().gregorian_date(date)
    }

    pub fn add_adjustment(
        &self,
        year: i32,
        month: u32,
        start: GregorianDate,
    ) -> Result<Vec<AutoAdjustment>, CalendarError> {
        self.lock().add_adjustment(year, month, start)
    }

    pub fn remove_adjustment(&self, year: i32, month: u32) -> Result<Vec<usize>, CalendarError> {
        self.lock().remove_adjustment(year, month)
    }

    pub fn possible_starts(&self, year: i32, month: u32) -> Result<Vec<PossibleStart>, CalendarError> {
        self.lock().possible_starts(year, month)
    }

    pub fn adjustment_data_as_json(&self) -> Result<String, CalendarError> {
        self.lock().adjustment_data_as_json()
    }

    pub fn set_adjustment_data_from_json(&self, json: &str) -> Result<(), CalendarError> {
        self.lock().set_adjustment_data_from_json(json)
    }
}

impl From<HijriCalendarAdjustment> for SharedCalendar {
    fn from(engine: HijriCalendarAdjustment) -> Self {
        Self::new(engine)
    }
}
