//! Date pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use crate::error::PatternError;
use crate::pattern::DatePattern;

/// Global cache for compiled date patterns.
static CACHE: Mutex<Option<LruCache<String, DatePattern>>> = Mutex::new(None);

const CACHE_SIZE: usize = 64;

/// Get or compile a date pattern, using the cache.
pub fn get_or_parse(pattern: &str) -> Result<DatePattern, PatternError> {
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| {
        LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap_or(NonZeroUsize::MIN))
    });

    if let Some(compiled) = cache.get(pattern) {
        return Ok(compiled.clone());
    }

    let compiled = DatePattern::parse(pattern)?;
    cache.put(pattern.to_string(), compiled.clone());
    Ok(compiled)
}
