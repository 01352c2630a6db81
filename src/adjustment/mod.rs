//! Umm al-Qura month-start adjustments.
//!
//! Published Umm al-Qura starts sometimes disagree with the moon sighting
//! that actually opens a month. [`HijriCalendarAdjustment`] lets a caller
//! move a month's first day and keeps the table consistent: every month is
//! always 29 or 30 days long.
//!
//! Moving a month start can shorten or lengthen the following month past
//! those bounds, so later months are shifted along (auto-adjustments) until
//! a month's length is valid again. Removing an override undoes the shifts it
//! caused and reverts neighbours that would otherwise become invalid.
//!
//! Every operation validates first and commits in a single step, so a failed
//! call leaves the engine exactly as it was.

mod cascade;
mod wire;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::calendar::HijriCalendar;
use crate::date::HijriDate;
use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::options::CalendarOptions;
use crate::ummalqura::{self, TABLE_LEN};
use crate::weekday::Weekday;

pub use cascade::is_valid_month_length;

/// Overrides keyed by table offset, valued by month-start MJD.
pub type AdjustmentData = BTreeMap<usize, i32>;

/// A month start moved as a consequence of another adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdjustment {
    /// Table offset of the moved month.
    pub offset: usize,
    /// New month-start MJD.
    pub start_mjd: i32,
}

impl AutoAdjustment {
    /// The (year, month) that moved.
    pub fn year_month(&self) -> (i32, u32) {
        ummalqura::year_month(self.offset)
    }

    pub fn start_date(&self) -> GregorianDate {
        GregorianDate::from_mjd(self.start_mjd)
    }
}

impl From<(usize, i32)> for AutoAdjustment {
    fn from((offset, start_mjd): (usize, i32)) -> Self {
        AutoAdjustment { offset, start_mjd }
    }
}

/// A candidate first day for a month, as offered by
/// [`HijriCalendarAdjustment::possible_starts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PossibleStart {
    pub date: GregorianDate,
    /// Length the preceding month would have.
    pub preceding_month_days: i32,
    /// Whether the month currently starts on this day.
    pub is_current_start: bool,
    /// Later month starts that would move if this candidate were chosen.
    pub auto_adjustments: Vec<AutoAdjustment>,
}

impl PossibleStart {
    pub fn mjd(&self) -> i32 {
        self.date.mjd()
    }

    /// Whether [`HijriCalendarAdjustment::add_adjustment`] would accept it.
    pub fn is_acceptable(&self) -> bool {
        is_valid_month_length(self.preceding_month_days)
    }
}

/// An Umm al-Qura calendar with caller-supplied month-start overrides.
#[derive(Debug, Clone)]
pub struct HijriCalendarAdjustment {
    calendar: HijriCalendar,
    overrides: AdjustmentData,
}

impl Default for HijriCalendarAdjustment {
    fn default() -> Self {
        Self::new()
    }
}

impl HijriCalendarAdjustment {
    /// Creates an engine with no overrides.
    pub fn new() -> Self {
        Self::with_options(CalendarOptions::default())
    }

    pub fn with_options(options: CalendarOptions) -> Self {
        HijriCalendarAdjustment {
            calendar: HijriCalendar::new(options),
            overrides: AdjustmentData::new(),
        }
    }

    /// Creates an engine preloaded with overrides.
    ///
    /// # Errors
    /// [`CalendarError::InvalidAdjustment`] if the overrides leave a month
    /// with a length other than 29 or 30 days.
    pub fn with_adjustments(
        options: CalendarOptions,
        data: AdjustmentData,
    ) -> Result<Self, CalendarError> {
        let mut engine = Self::with_options(options);
        engine.set_adjustment_data(data)?;
        Ok(engine)
    }

    /// Creates an engine from JSON adjustment data.
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        let mut engine = Self::new();
        engine.set_adjustment_data_from_json(json)?;
        Ok(engine)
    }

    /// The calendar with the current overrides applied.
    pub fn calendar(&self) -> &HijriCalendar {
        &self.calendar
    }

    /// The live month-start table.
    pub fn table(&self) -> &[i32] {
        self.calendar.month_starts()
    }

    /// The published month-start table.
    pub fn base_table(&self) -> &'static [i32] {
        &ummalqura::base_table()[..]
    }

    /// Current overrides.
    pub fn adjustments(&self) -> &AdjustmentData {
        &self.overrides
    }

    /// A copy of the current overrides.
    pub fn adjustment_data(&self) -> AdjustmentData {
        self.overrides.clone()
    }

    /// Returns true if the month's start is overridden.
    pub fn is_adjusted(&self, year: i32, month: u32) -> bool {
        ummalqura::offset(year, month).is_some_and(|offset| self.overrides.contains_key(&offset))
    }

    pub fn hijri_date(&self, date: GregorianDate) -> HijriDate {
        self.calendar.hijri_date(date)
    }

    pub fn gregorian_date(&self, date: &HijriDate) -> GregorianDate {
        self.calendar.gregorian_date(date)
    }

    pub fn weekday(&self, date: &HijriDate) -> Weekday {
        self.calendar.weekday(date)
    }

    /// Sets the first day of a Hijri month.
    ///
    /// Later months whose length would leave 29-30 days are shifted along;
    /// the shifts are returned.
    ///
    /// # Errors
    /// * [`CalendarError::InvalidDateComponents`] for a month outside 1-12
    /// * [`CalendarError::DateOutOfRange`] for a month outside the table, or
    ///   the very first tabulated month
    /// * [`CalendarError::InvalidAdjustment`] if the preceding month would not
    ///   be 29 or 30 days long
    pub fn add_adjustment(
        &mut self,
        year: i32,
        month: u32,
        start: GregorianDate,
    ) -> Result<Vec<AutoAdjustment>, CalendarError> {
        let offset = adjustable_offset(year, month)?;
        let start_mjd = start.mjd();
        let starts = self.calendar.month_starts();

        let preceding_days = start_mjd - starts[offset - 1];
        if !is_valid_month_length(preceding_days) {
            return Err(CalendarError::invalid_adjustment(format!(
                "starting {year}-{month:02} on {start} would make the previous month {preceding_days} days long"
            )));
        }

        let moved = cascade::forward_cascade(starts, offset, start_mjd);

        let mut overrides = self.overrides.clone();
        set_override(&mut overrides, offset, start_mjd);
        for &(index, value) in &moved {
            set_override(&mut overrides, index, value);
        }

        self.commit(overrides)?;
        Ok(moved.into_iter().map(AutoAdjustment::from).collect())
    }

    /// Removes the override for a Hijri month.
    ///
    /// Later overrides holding the start this one forces on the published
    /// table, and neighbours that would no longer give a valid month length,
    /// are removed with it. The outcome depends only on the current overrides,
    /// so an engine reloaded from JSON behaves the same. Returns every offset
    /// that was reverted, in ascending order.
    ///
    /// # Errors
    /// * [`CalendarError::InvalidDateComponents`] / [`CalendarError::DateOutOfRange`]
    ///   as for [`add_adjustment`](Self::add_adjustment)
    /// * [`CalendarError::AdjustmentNotFound`] if the month is not overridden
    pub fn remove_adjustment(&mut self, year: i32, month: u32) -> Result<Vec<usize>, CalendarError> {
        let offset = adjustable_offset(year, month)?;
        if !self.overrides.contains_key(&offset) {
            return Err(CalendarError::AdjustmentNotFound {
                reason: format!("{year}-{month:02} (offset {offset}) has no override"),
            });
        }

        let reverted = cascade::removal_plan(
            self.base_table(),
            self.calendar.month_starts(),
            &self.overrides,
            offset,
        );

        let mut overrides = self.overrides.clone();
        for index in &reverted {
            overrides.remove(index);
        }

        self.commit(overrides)?;
        Ok(reverted)
    }

    /// Drops every override.
    pub fn clear_adjustments(&mut self) {
        self.calendar = HijriCalendar::new(self.calendar.options());
        self.overrides.clear();
    }

    /// Candidate first days for a month: the days 28 to 31 days after the
    /// preceding month's start, in ascending order.
    ///
    /// Only candidates with [`PossibleStart::is_acceptable`] can be passed to
    /// [`add_adjustment`](Self::add_adjustment). Nothing is modified.
    pub fn possible_starts(&self, year: i32, month: u32) -> Result<Vec<PossibleStart>, CalendarError> {
        let offset = adjustable_offset(year, month)?;
        let starts = self.calendar.month_starts();
        let previous = starts[offset - 1];

        Ok((previous + 28..=previous + 31)
            .map(|start_mjd| PossibleStart {
                date: GregorianDate::from_mjd(start_mjd),
                preceding_month_days: start_mjd - previous,
                is_current_start: start_mjd == starts[offset],
                auto_adjustments: cascade::forward_cascade(starts, offset, start_mjd)
                    .into_iter()
                    .map(AutoAdjustment::from)
                    .collect(),
            })
            .collect())
    }

    /// Replaces all overrides.
    ///
    /// Offsets outside the adjustable range are ignored and values equal to
    /// the published start are dropped.
    ///
    /// # Errors
    /// [`CalendarError::InvalidAdjustment`] if the result would leave a month
    /// with a length other than 29 or 30 days. The engine is unchanged.
    pub fn set_adjustment_data(&mut self, data: AdjustmentData) -> Result<(), CalendarError> {
        let mut overrides = AdjustmentData::new();
        for (offset, start) in data {
            if (1..TABLE_LEN).contains(&offset) {
                set_override(&mut overrides, offset, start);
            }
        }
        self.commit(overrides)
    }

    /// Replaces all overrides with those read from JSON.
    ///
    /// # Errors
    /// * [`CalendarError::JsonProcessing`] for malformed JSON
    /// * [`CalendarError::InvalidAdjustment`] as for
    ///   [`set_adjustment_data`](Self::set_adjustment_data)
    pub fn set_adjustment_data_from_json(&mut self, json: &str) -> Result<(), CalendarError> {
        let data = wire::from_json(json)?;
        self.set_adjustment_data(data)
    }

    /// The current overrides as a JSON object.
    pub fn adjustment_data_as_json(&self) -> Result<String, CalendarError> {
        wire::to_json(&self.overrides)
    }

    /// Rebuilds the live table and swaps in the new state if it is consistent.
    fn commit(&mut self, overrides: AdjustmentData) -> Result<(), CalendarError> {
        let starts = cascade::apply(self.base_table(), &overrides);
        if let Some((offset, days)) = cascade::first_invalid_month(&starts) {
            let (year, month) = ummalqura::year_month(offset);
            return Err(CalendarError::invalid_adjustment(format!(
                "{year}-{month:02} (offset {offset}) would be {days} days long"
            )));
        }

        self.calendar = HijriCalendar::with_month_starts(self.calendar.options(), Arc::from(starts));
        self.overrides = overrides;
        Ok(())
    }
}

/// Stores an override, or drops it if it matches the published start.
fn set_override(overrides: &mut AdjustmentData, offset: usize, start: i32) {
    if ummalqura::base_table()[offset] == start {
        overrides.remove(&offset);
    } else {
        overrides.insert(offset, start);
    }
}

/// Table offset of a month whose start may be moved.
fn adjustable_offset(year: i32, month: u32) -> Result<usize, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::invalid_components(format!(
            "Hijri month {month} is not between 1 and 12"
        )));
    }
    let offset = ummalqura::offset(year, month).ok_or_else(|| {
        CalendarError::out_of_range(format!(
            "year {year} is outside the Umm al-Qura range {}-{}",
            ummalqura::START_YEAR,
            ummalqura::END_YEAR
        ))
    })?;
    if offset == 0 {
        return Err(CalendarError::out_of_range(format!(
            "{year}-{month:02} is the first tabulated month and has no predecessor"
        )));
    }
    Ok(offset)
}
