use crate::config::CacheConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

// Custom error types for cache operations
#[derive(Debug)]
pub enum CacheError {
    LockError(String),
    InvalidKey(String),
}

impl std::fmt::Display for CacheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheError::LockError(msg) => write!(f, "Cache lock error: {}", msg),
            CacheError::InvalidKey(key) => write!(f, "Invalid cache key: {}", key),
        }
    }
}

impl std::error::Error for CacheError {}

// Cache entry with expiration support
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    created_at: Instant,
    access_count: u64,
}

impl<T: Clone> CacheEntry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            created_at: Instant::now(),
            access_count: 1,
        }
    }

    fn is_expired(&self, expiration_duration: Duration) -> bool {
        self.created_at.elapsed() > expiration_duration
    }

    fn access(&mut self) -> T {
        self.access_count += 1;
        self.value.clone()
    }
}

// Statistics for cache monitoring
#[derive(Debug, Default, Clone)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub removes: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

// In-memory cache with lazy expiration: stale entries are dropped on
// the read path, so no background sweeper is needed.
pub struct InmemoryCache<T>
where
    T: Clone + Send + Sync,
{
    store: Arc<Mutex<HashMap<String, CacheEntry<T>>>>,
    config: CacheConfig,
    stats: Arc<Mutex<CacheStats>>,
}

impl<T> InmemoryCache<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(config: CacheConfig) -> Self {
        tracing::info!(
            "Initializing in-memory cache with max_size: {}, expiration: {}s",
            config.max_size,
            config.expiration
        );

        Self {
            store: Arc::new(Mutex::new(HashMap::new())),
            config,
            stats: Arc::new(Mutex::new(CacheStats::default())),
        }
    }

    // Create with default configuration
    pub fn with_defaults() -> Self {
        let default_config = CacheConfig {
            max_size: 1000,
            expiration: 3600, // 1 hour
        };
        Self::new(default_config)
    }

    pub fn get(&self, key: &str) -> Option<T> {
        if key.is_empty() {
            tracing::warn!("Attempted to get cache entry with empty key");
            return None;
        }

        let expiration_duration = Duration::from_secs(self.config.expiration as u64);

        match self.store.lock() {
            Ok(mut store) => {
                if let Some(entry) = store.get_mut(key) {
                    if entry.is_expired(expiration_duration) {
                        tracing::debug!("Cache entry expired for key: {}", key);
                        store.remove(key);

                        if let Ok(mut stats) = self.stats.lock() {
                            stats.misses += 1;
                            stats.removes += 1;
                        }

                        None
                    } else {
                        tracing::debug!("Cache hit for key: {}", key);

                        if let Ok(mut stats) = self.stats.lock() {
                            stats.hits += 1;
                        }

                        Some(entry.access())
                    }
                } else {
                    tracing::debug!("Cache miss for key: {}", key);

                    if let Ok(mut stats) = self.stats.lock() {
                        stats.misses += 1;
                    }

                    None
                }
            }
            Err(e) => {
                tracing::error!("Failed to acquire cache read lock for key {}: {}", key, e);
                None
            }
        }
    }

    pub fn insert(&self, key: String, value: T) -> Result<(), CacheError> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey("Key cannot be empty".to_string()));
        }

        match self.store.lock() {
            Ok(mut store) => {
                // Check if we need to evict entries before inserting
                if store.len() >= self.config.max_size as usize && !store.contains_key(&key) {
                    self.evict_lru(&mut store);
                }

                let was_present = store.insert(key.clone(), CacheEntry::new(value)).is_some();

                if was_present {
                    tracing::debug!("Updated existing cache entry: {}", key);
                } else {
                    tracing::debug!("Inserted new cache entry: {}", key);
                }

                if let Ok(mut stats) = self.stats.lock() {
                    stats.inserts += 1;
                }

                Ok(())
            }
            Err(e) => {
                let error_msg = format!("Failed to acquire cache write lock: {}", e);
                tracing::error!("{}", error_msg);
                Err(CacheError::LockError(error_msg))
            }
        }
    }

    pub fn clear(&self) {
        match self.store.lock() {
            Ok(mut store) => {
                let size = store.len();
                store.clear();
                tracing::info!("Cleared cache ({} entries)", size);

                if let Ok(mut stats) = self.stats.lock() {
                    *stats = CacheStats::default();
                }
            }
            Err(e) => {
                tracing::error!("Failed to acquire cache write lock for clearing: {}", e);
            }
        }
    }

    pub fn len(&self) -> usize {
        match self.store.lock() {
            Ok(store) => store.len(),
            Err(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hit_rate(&self) -> f64 {
        match self.stats.lock() {
            Ok(stats) => stats.hit_rate(),
            Err(_) => 0.0,
        }
    }

    pub fn stats(&self) -> Option<CacheStats> {
        self.stats.lock().ok().map(|stats| stats.clone())
    }

    // Evict the entry with the oldest creation time and lowest access
    // count when the cache is full
    fn evict_lru(&self, store: &mut HashMap<String, CacheEntry<T>>) {
        if store.len() < self.config.max_size as usize {
            return;
        }

        let lru_key = store
            .iter()
            .min_by(|a, b| {
                a.1.created_at
                    .cmp(&b.1.created_at)
                    .then_with(|| a.1.access_count.cmp(&b.1.access_count))
            })
            .map(|(key, _)| key.clone());

        if let Some(key) = lru_key {
            store.remove(&key);
            tracing::debug!("Evicted LRU cache entry: {}", key);

            if let Ok(mut stats) = self.stats.lock() {
                stats.removes += 1;
            }
        }
    }
}

impl<T> Default for InmemoryCache<T>
where
    T: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::with_defaults()
    }
}
