//! Built-in locale data.

use super::LocaleNames;
use crate::weekday::Weekday;

/// Hijri month and weekday names for one language.
#[derive(Debug, Clone)]
pub struct Locale {
    pub identifier: &'static str,
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}

impl Locale {
    /// English transliterations.
    pub fn en() -> Self {
        Locale {
            identifier: "en",
            month_names_short: [
                "Muh.", "Saf.", "Rab. I", "Rab. II", "Jum. I", "Jum. II", "Raj.", "Sha.", "Ram.",
                "Shaw.", "Dhuʻl-Q.", "Dhuʻl-H.",
            ],
            month_names_full: [
                "Muharram",
                "Safar",
                "Rabiʻ al-Awwal",
                "Rabiʻ al-Thani",
                "Jumada al-Ula",
                "Jumada al-Akhirah",
                "Rajab",
                "Shaʻban",
                "Ramadan",
                "Shawwal",
                "Dhuʻl-Qiʻdah",
                "Dhuʻl-Hijjah",
            ],
            day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            day_names_full: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
        }
    }

    /// Arabic.
    pub fn ar() -> Self {
        const MONTHS: [&str; 12] = [
            "محرم",
            "صفر",
            "ربيع الأول",
            "ربيع الآخر",
            "جمادى الأولى",
            "جمادى الآخرة",
            "رجب",
            "شعبان",
            "رمضان",
            "شوال",
            "ذو القعدة",
            "ذو الحجة",
        ];
        const DAYS: [&str; 7] = [
            "الأحد",
            "الاثنين",
            "الثلاثاء",
            "الأربعاء",
            "الخميس",
            "الجمعة",
            "السبت",
        ];
        Locale {
            identifier: "ar",
            month_names_short: MONTHS,
            month_names_full: MONTHS,
            day_names_short: DAYS,
            day_names_full: DAYS,
        }
    }

    /// Turkish.
    pub fn tr() -> Self {
        Locale {
            identifier: "tr",
            month_names_short: [
                "Muhar.", "Safer", "R.evvel", "R.ahir", "C.evvel", "C.ahir", "Recep", "Şaban",
                "Ram.", "Şevval", "Zilkade", "Zilhicce",
            ],
            month_names_full: [
                "Muharrem",
                "Safer",
                "Rebiülevvel",
                "Rebiülahir",
                "Cemaziyelevvel",
                "Cemaziyelahir",
                "Recep",
                "Şaban",
                "Ramazan",
                "Şevval",
                "Zilkade",
                "Zilhicce",
            ],
            day_names_short: ["Paz", "Pzt", "Sal", "Çar", "Per", "Cum", "Cmt"],
            day_names_full: [
                "Pazar",
                "Pazartesi",
                "Salı",
                "Çarşamba",
                "Perşembe",
                "Cuma",
                "Cumartesi",
            ],
        }
    }
}

/// Name at a one-based month, or "" outside 1-12.
fn month_name(names: &[&'static str; 12], month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| names.get(index as usize))
        .copied()
        .unwrap_or("")
}

impl LocaleNames for Locale {
    fn locale_identifier(&self) -> &str {
        self.identifier
    }

    fn short_month_name(&self, month: u32) -> &str {
        month_name(&self.month_names_short, month)
    }

    fn full_month_name(&self, month: u32) -> &str {
        month_name(&self.month_names_full, month)
    }

    fn short_weekday_name(&self, weekday: Weekday) -> &str {
        self.day_names_short[weekday.index_from_sunday()]
    }

    fn full_weekday_name(&self, weekday: Weekday) -> &str {
        self.day_names_full[weekday.index_from_sunday()]
    }
}
