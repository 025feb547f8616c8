//! In-memory response cache shared by both screens
//!
//! Entries are keyed by endpoint (plus launch id) and expire after a TTL.
//! The cache lives inside [`AppState`](crate::state::AppState), so it is only
//! touched from the update loop and needs no locking.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use lpview_core::{Launch, LaunchId, Launchpad};

use crate::config::CacheSettings;

/// What a cached entry answers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// `GET /v4/launchpads`
    Launchpads,
    /// `GET /v4/launches/{id}`
    Launch(LaunchId),
}

/// A fresh cached response and when it was fetched from the network
#[derive(Debug, Clone)]
pub struct CacheHit<T> {
    pub value: T,
    pub fetched_at: DateTime<Local>,
}

#[derive(Debug, Clone)]
enum CachedValue {
    Launchpads(Arc<Vec<Launchpad>>),
    Launch(Arc<Launch>),
}

#[derive(Debug, Clone)]
struct CacheEntry {
    value: CachedValue,
    /// Wall-clock fetch time, shown in the status bar
    fetched_at: DateTime<Local>,
    /// Monotonic store time, for expiry
    stored_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ResponseCache {
    enabled: bool,
    ttl: Duration,
    entries: HashMap<CacheKey, CacheEntry>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::from_settings(&CacheSettings::default())
    }
}

impl ResponseCache {
    pub fn new(enabled: bool, ttl: Duration) -> Self {
        Self {
            enabled,
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn from_settings(settings: &CacheSettings) -> Self {
        Self::new(settings.enabled, settings.ttl())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached launchpad list, if present and fresh
    pub fn launchpads(&mut self) -> Option<CacheHit<Arc<Vec<Launchpad>>>> {
        let entry = self.fresh(&CacheKey::Launchpads)?;
        match &entry.value {
            CachedValue::Launchpads(pads) => Some(CacheHit {
                value: Arc::clone(pads),
                fetched_at: entry.fetched_at,
            }),
            CachedValue::Launch(_) => None,
        }
    }

    /// Cached launch, if present and fresh
    pub fn launch(&mut self, id: &LaunchId) -> Option<CacheHit<Arc<Launch>>> {
        let entry = self.fresh(&CacheKey::Launch(id.clone()))?;
        match &entry.value {
            CachedValue::Launch(launch) => Some(CacheHit {
                value: Arc::clone(launch),
                fetched_at: entry.fetched_at,
            }),
            CachedValue::Launchpads(_) => None,
        }
    }

    pub fn store_launchpads(&mut self, pads: Arc<Vec<Launchpad>>, fetched_at: DateTime<Local>) {
        self.store(
            CacheKey::Launchpads,
            CachedValue::Launchpads(pads),
            fetched_at,
        );
    }

    pub fn store_launch(&mut self, launch: Arc<Launch>, fetched_at: DateTime<Local>) {
        self.store(
            CacheKey::Launch(launch.id.clone()),
            CachedValue::Launch(launch),
            fetched_at,
        );
    }

    /// Drop one entry; returns whether it was present
    pub fn invalidate(&mut self, key: &CacheKey) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key`, evicting it if it has expired
    fn fresh(&mut self, key: &CacheKey) -> Option<&CacheEntry> {
        if !self.enabled {
            return None;
        }
        if self.entries.get(key)?.stored_at.elapsed() >= self.ttl {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key)
    }

    /// Insert an entry, pruning everything that has expired
    fn store(&mut self, key: CacheKey, value: CachedValue, fetched_at: DateTime<Local>) {
        if !self.enabled {
            return;
        }
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
        self.entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at,
                stored_at: Instant::now(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpview_api::test_utils::{test_launch, test_launchpad};

    fn id(s: &str) -> LaunchId {
        LaunchId::parse(s).unwrap()
    }

    #[test]
    fn test_miss_then_hit() {
        let mut cache = ResponseCache::new(true, Duration::from_secs(60));
        assert!(cache.launchpads().is_none());

        cache.store_launchpads(Arc::new(vec![test_launchpad("Pad", &[])]), Local::now());
        assert_eq!(cache.launchpads().unwrap().value.len(), 1);
    }

    #[test]
    fn test_hit_carries_original_fetch_time() {
        let mut cache = ResponseCache::new(true, Duration::from_secs(60));
        let fetched_at = Local::now() - chrono::Duration::minutes(2);
        cache.store_launch(Arc::new(test_launch("a", "Alpha", &[None])), fetched_at);

        let hit = cache.launch(&id("a")).unwrap();
        assert_eq!(hit.fetched_at, fetched_at);
    }

    #[test]
    fn test_launches_are_keyed_by_id() {
        let mut cache = ResponseCache::new(true, Duration::from_secs(60));
        cache.store_launch(
            Arc::new(test_launch("a", "Alpha", &[Some(true)])),
            Local::now(),
        );

        assert_eq!(cache.launch(&id("a")).unwrap().value.name, "Alpha");
        assert!(cache.launch(&id("b")).is_none());
    }

    #[test]
    fn test_expired_lookup_evicts_entry() {
        let mut cache = ResponseCache::new(true, Duration::ZERO);
        cache.store_launchpads(Arc::new(Vec::new()), Local::now());
        assert_eq!(cache.len(), 1);

        assert!(cache.launchpads().is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_store_prunes_expired_entries() {
        let mut cache = ResponseCache::new(true, Duration::ZERO);
        for launch in ["a", "b", "c"] {
            cache.store_launch(Arc::new(test_launch(launch, launch, &[None])), Local::now());
        }
        // Only the entry just stored survives
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate_single_key() {
        let mut cache = ResponseCache::new(true, Duration::from_secs(60));
        cache.store_launchpads(Arc::new(Vec::new()), Local::now());
        cache.store_launch(Arc::new(test_launch("a", "Alpha", &[None])), Local::now());

        assert!(cache.invalidate(&CacheKey::Launchpads));
        assert!(!cache.invalidate(&CacheKey::Launchpads));
        assert!(cache.launchpads().is_none());
        assert!(cache.launch(&id("a")).is_some());

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_disabled_cache_never_stores() {
        let mut cache = ResponseCache::new(false, Duration::from_secs(60));
        cache.store_launchpads(Arc::new(Vec::new()), Local::now());
        assert!(cache.is_empty());
        assert!(cache.launchpads().is_none());
    }
}
