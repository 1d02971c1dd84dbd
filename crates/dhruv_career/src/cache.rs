//! Explicit cache client for charts, predictions and validations.
//!
//! Values are stored as JSON so any backend that can hold text can serve
//! the trait. [`MemoryCache`] is the in-process implementation; each
//! instance keeps its own hit/miss counters.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use dhruv_vedic_base::{Chart, ChartKind};
use serde::Serialize;
use serde_json::Value;

use crate::config::CacheConfig;
use crate::error::CareerError;

/// Minimal key/value store with per-entry expiry.
pub trait CacheClient: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value, ttl: Duration);
    /// Remove one key. Returns whether it existed.
    fn delete(&self, key: &str) -> bool;
    /// Remove every key starting with `prefix`. Returns the count removed.
    fn delete_prefix(&self, prefix: &str) -> usize;
}

/// Hit/miss counters of one cache instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Debug)]
struct Entry {
    value: Value,
    expires_at: Instant,
}

/// In-memory [`CacheClient`].
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.lock().len();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
        }
    }

    /// Drop expired entries. Returns the count removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut map = self.lock();
        let before = map.len();
        map.retain(|_, e| e.expires_at > now);
        before - map.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry>> {
        // A panic while holding the lock leaves the map itself intact.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CacheClient for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let now = Instant::now();
        let mut map = self.lock();
        let live = match map.get(key) {
            Some(e) if e.expires_at > now => Some(e.value.clone()),
            Some(_) => {
                map.remove(key);
                None
            }
            None => None,
        };
        match live {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        live
    }

    fn set(&self, key: &str, value: Value, ttl: Duration) {
        let expires_at = Instant::now() + ttl;
        self.lock()
            .insert(key.to_string(), Entry { value, expires_at });
    }

    fn delete(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    fn delete_prefix(&self, prefix: &str) -> usize {
        let mut map = self.lock();
        let before = map.len();
        map.retain(|k, _| !k.starts_with(prefix));
        before - map.len()
    }
}

pub fn chart_key(native_id: &str, kind: ChartKind) -> String {
    format!("chart:{native_id}:{}", kind.label())
}

pub fn prediction_key(native_id: &str) -> String {
    format!("prediction:{native_id}")
}

pub fn validation_key(native_id: &str) -> String {
    format!("validation:{native_id}")
}

/// Typed facade over a [`CacheClient`] with configured TTLs.
#[derive(Debug)]
pub struct CareerCache<C> {
    client: C,
    config: CacheConfig,
}

impl<C: CacheClient> CareerCache<C> {
    pub fn new(client: C, config: CacheConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Cached chart, or `None` on a miss or an undecodable entry.
    pub fn chart(&self, native_id: &str, kind: ChartKind) -> Option<Chart> {
        if !self.config.enabled {
            return None;
        }
        let key = chart_key(native_id, kind);
        let value = self.client.get(&key)?;
        match serde_json::from_value(value) {
            Ok(chart) => Some(chart),
            Err(e) => {
                log::warn!("dropping undecodable cache entry {key}: {e}");
                self.client.delete(&key);
                None
            }
        }
    }

    pub fn store_chart(&self, native_id: &str, chart: &Chart) -> Result<(), CareerError> {
        let key = chart_key(native_id, chart.kind());
        self.store(&key, chart, self.config.chart_ttl())
    }

    pub fn prediction(&self, native_id: &str) -> Option<Value> {
        self.lookup(&prediction_key(native_id))
    }

    pub fn store_prediction<T: Serialize>(
        &self,
        native_id: &str,
        value: &T,
    ) -> Result<(), CareerError> {
        self.store(
            &prediction_key(native_id),
            value,
            self.config.prediction_ttl(),
        )
    }

    pub fn validation(&self, native_id: &str) -> Option<Value> {
        self.lookup(&validation_key(native_id))
    }

    pub fn store_validation<T: Serialize>(
        &self,
        native_id: &str,
        value: &T,
    ) -> Result<(), CareerError> {
        self.store(
            &validation_key(native_id),
            value,
            self.config.validation_ttl(),
        )
    }

    /// Forget everything cached for one native. Returns the count removed.
    pub fn invalidate_native(&self, native_id: &str) -> usize {
        let mut removed = self.client.delete_prefix(&format!("chart:{native_id}:"));
        for key in [prediction_key(native_id), validation_key(native_id)] {
            if self.client.delete(&key) {
                removed += 1;
            }
        }
        log::debug!("invalidated {removed} cache entries for {native_id}");
        removed
    }

    fn lookup(&self, key: &str) -> Option<Value> {
        if !self.config.enabled {
            return None;
        }
        self.client.get(key)
    }

    fn store<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> Result<(), CareerError> {
        if !self.config.enabled {
            return Ok(());
        }
        let value = serde_json::to_value(value)?;
        self.client.set(key, value, ttl);
        Ok(())
    }
}
