//! Calendar configuration.

/// How a [`HijriCalendar`](crate::HijriCalendar) converts dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConversionMethod {
    /// Umm al-Qura table inside its range, tabular algorithm outside it.
    #[default]
    UmmAlQura,
    /// Arithmetic 30-year cycle for every date.
    Tabular,
}

impl ConversionMethod {
    /// Returns true if conversions consult the Umm al-Qura table.
    pub fn uses_table(&self) -> bool {
        matches!(self, ConversionMethod::UmmAlQura)
    }
}

/// Options for constructing a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarOptions {
    /// The conversion method.
    pub method: ConversionMethod,
}

impl CalendarOptions {
    /// Options for the Umm al-Qura calendar (the default).
    pub fn umm_al_qura() -> Self {
        CalendarOptions {
            method: ConversionMethod::UmmAlQura,
        }
    }

    /// Options for the purely arithmetic calendar.
    pub fn tabular() -> Self {
        CalendarOptions {
            method: ConversionMethod::Tabular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_method_is_table() {
        assert_eq!(CalendarOptions::default().method, ConversionMethod::UmmAlQura);
        assert!(ConversionMethod::default().uses_table());
        assert!(!CalendarOptions::tabular().method.uses_table());
    }
}
