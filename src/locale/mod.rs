//! Localized month and weekday names.
//!
//! Formatting asks a [`LocaleNames`] implementation for names; the crate
//! ships [`Locale`] tables for English, Arabic and Turkish. A
//! [`LocaleRegistry`] picks one by language tag.

mod builtin;

use std::fmt;
use std::sync::Arc;

pub use builtin::Locale;

use crate::weekday::Weekday;

/// Supplies the names used when formatting and parsing dates.
///
/// Months are numbered 1-12; implementations return "" for other numbers.
pub trait LocaleNames: fmt::Debug + Send + Sync {
    /// Language tag this locale serves, e.g. `"ar"` or `"en-GB"`.
    fn locale_identifier(&self) -> &str;

    fn short_month_name(&self, month: u32) -> &str;

    fn full_month_name(&self, month: u32) -> &str;

    fn short_weekday_name(&self, weekday: Weekday) -> &str;

    fn full_weekday_name(&self, weekday: Weekday) -> &str;
}

/// Locales selectable by language tag.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<Arc<dyn LocaleNames>>,
    fallback: Arc<dyn LocaleNames>,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        let english: Arc<dyn LocaleNames> = Arc::new(Locale::en());
        LocaleRegistry {
            locales: vec![
                english.clone(),
                Arc::new(Locale::ar()),
                Arc::new(Locale::tr()),
            ],
            fallback: english,
        }
    }
}

impl LocaleRegistry {
    /// A registry that only knows `fallback`.
    pub fn with_fallback(fallback: Arc<dyn LocaleNames>) -> Self {
        LocaleRegistry {
            locales: vec![fallback.clone()],
            fallback,
        }
    }

    /// Adds a locale. A later registration wins over an earlier one with the
    /// same identifier.
    pub fn register(&mut self, locale: Arc<dyn LocaleNames>) {
        self.locales.push(locale);
    }

    /// Identifiers of every registered locale.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|locale| locale.locale_identifier())
    }

    pub fn fallback(&self) -> Arc<dyn LocaleNames> {
        self.fallback.clone()
    }

    /// The locale for a language tag.
    ///
    /// Picks the longest registered identifier that equals the tag or is a
    /// prefix of it ending at a subtag boundary, so `"ar-SA"` finds `"ar"`.
    /// Matching ignores case and treats `_` like `-`. Unknown tags get the
    /// fallback locale.
    pub fn lookup(&self, tag: &str) -> Arc<dyn LocaleNames> {
        let tag = normalize_tag(tag);
        let mut best: Option<(usize, &Arc<dyn LocaleNames>)> = None;
        for locale in self.locales.iter().rev() {
            let identifier = normalize_tag(locale.locale_identifier());
            if identifier.is_empty() || !is_tag_prefix(&identifier, &tag) {
                continue;
            }
            let longer = best.map_or(true, |(length, _)| identifier.len() > length);
            if longer {
                best = Some((identifier.len(), locale));
            }
        }
        best.map_or_else(|| self.fallback.clone(), |(_, locale)| locale.clone())
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

fn is_tag_prefix(identifier: &str, tag: &str) -> bool {
    tag.strip_prefix(identifier)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('-'))
}
