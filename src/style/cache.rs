use crate::core::MapOptions;
use crate::style::named::Style;
use crate::style::resolver::StyleConfig;
use crate::Result;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cache key; the scale is keyed by its exact bit pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleKey {
    scale_bits: u64,
    options: MapOptions,
    style: Style,
}

impl StyleKey {
    /// Key for one resolution tuple.
    pub fn new(scale: f64, options: MapOptions, style: Style) -> Self {
        Self {
            scale_bits: scale.to_bits(),
            options,
            style,
        }
    }

    /// Scale the key was built from.
    pub fn scale(&self) -> f64 {
        f64::from_bits(self.scale_bits)
    }
}

/// Sizing for a [`StyleCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleCacheConfig {
    pub capacity: usize,
}

impl Default for StyleCacheConfig {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

/// In-memory cache of resolved configurations using LRU eviction.
///
/// Resolution is pure, so a cached entry is always identical to a fresh one.
/// Clones share the same underlying cache.
#[derive(Debug)]
pub struct StyleCache {
    cache: Arc<Mutex<LruCache<StyleKey, Arc<StyleConfig>>>>,
}

impl StyleCache {
    /// Create an empty cache; a zero capacity is raised to one.
    pub fn new(config: StyleCacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    fn lock(&self) -> Option<MutexGuard<'_, LruCache<StyleKey, Arc<StyleConfig>>>> {
        match self.cache.lock() {
            Ok(guard) => Some(guard),
            Err(_) => {
                log::warn!("style cache lock poisoned, bypassing cache");
                None
            }
        }
    }

    /// Cached configuration for `key`, marking it most recently used.
    pub fn get(&self, key: &StyleKey) -> Option<Arc<StyleConfig>> {
        self.lock()?.get(key).cloned()
    }

    /// Cached configuration for the tuple, resolving and storing it on a miss.
    ///
    /// Failed resolutions are not cached.
    pub fn get_or_resolve(
        &self,
        scale: f64,
        options: MapOptions,
        style: Style,
    ) -> Result<Arc<StyleConfig>> {
        let key = StyleKey::new(scale, options, style);
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }

        log::trace!("style cache miss for {:?}", key);
        let resolved = Arc::new(StyleConfig::resolve(scale, options, style)?);
        if let Some(mut cache) = self.lock() {
            cache.put(key, Arc::clone(&resolved));
        }
        Ok(resolved)
    }

    /// Whether `key` is cached, without touching its recency.
    pub fn contains(&self, key: &StyleKey) -> bool {
        self.lock().map(|cache| cache.contains(key)).unwrap_or(false)
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        if let Some(mut cache) = self.lock() {
            cache.clear();
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries kept before eviction.
    pub fn capacity(&self) -> usize {
        self.lock().map(|cache| cache.cap().get()).unwrap_or(0)
    }
}

impl Clone for StyleCache {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl Default for StyleCache {
    fn default() -> Self {
        Self::new(StyleCacheConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_style_cache_hits_share_allocation() {
        let cache = StyleCache::default();
        assert!(cache.is_empty());

        let first = cache
            .get_or_resolve(32.0, MapOptions::DEFAULT_VIEW, Style::Poster)
            .unwrap();
        let second = cache
            .get_or_resolve(32.0, MapOptions::DEFAULT_VIEW, Style::Poster)
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        let fresh = StyleConfig::resolve(32.0, MapOptions::DEFAULT_VIEW, Style::Poster).unwrap();
        assert_eq!(*first, fresh);
    }

    #[test]
    fn test_style_cache_lru_eviction() {
        let cache = StyleCache::new(StyleCacheConfig { capacity: 2 });
        for scale in [1.0, 2.0, 4.0] {
            cache
                .get_or_resolve(scale, MapOptions::empty(), Style::Atlas)
                .unwrap();
        }
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&StyleKey::new(1.0, MapOptions::empty(), Style::Atlas)));
        assert!(cache.contains(&StyleKey::new(4.0, MapOptions::empty(), Style::Atlas)));
    }

    #[test]
    fn test_style_cache_skips_failures() {
        let cache = StyleCache::default();
        let err = cache
            .get_or_resolve(-2.0, MapOptions::empty(), Style::Poster)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidScale(_)));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_falls_back_to_one() {
        let cache = StyleCache::new(StyleCacheConfig { capacity: 0 });
        assert_eq!(cache.capacity(), 1);
    }

    #[test]
    fn test_poisoned_lock_still_resolves() {
        let cache = StyleCache::default();
        let shared = cache.clone();
        let result = std::thread::spawn(move || {
            let _guard = shared.cache.lock().unwrap();
            panic!("poison the style cache");
        })
        .join();
        assert!(result.is_err());
        assert!(cache.cache.is_poisoned());

        let config = cache
            .get_or_resolve(16.0, MapOptions::DEFAULT_VIEW, Style::Poster)
            .unwrap();
        assert_eq!(config.scale, 16.0);
        assert_eq!(cache.len(), 0);
        assert!(!cache.contains(&StyleKey::new(16.0, MapOptions::DEFAULT_VIEW, Style::Poster)));
    }
}
