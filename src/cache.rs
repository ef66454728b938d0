//! TTL cache backing the optional HTTP facade.
//!
//! The core never consumes this; it's documented so a facade
//! implementation can plug in a conforming cache. Grounded on the
//! original `linkschkr` source's `CacheStore`/`CacheServer` pair
//! (`cache.go`), generalized from a `String -> String` lookup to a
//! generic TTL store and given an actual expiry, since the original
//! interface had no `store`/expiry of its own.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// A key -> value store where entries expire after a fixed TTL. An
/// expired entry behaves as absent on `get`.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, Entry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: std::hash::Hash + Eq,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns `(value, true)` if `key` is present and not expired, or
    /// `(_, false)` otherwise -- a lazily-expiring entry is removed on
    /// the read that finds it stale.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn store(&self, key: K, value: V) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.insert(
            key,
            Entry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn stores_and_retrieves() {
        let cache: TtlCache<String, u32> = TtlCache::new(Duration::from_secs(60));
        cache.store("a".to_string(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(1));
    }

    #[test]
    fn missing_key_is_absent() {
        let cache: TtlCache<String, u32> = TtlCache::new(Duration::from_secs(60));
        assert_eq!(cache.get(&"missing".to_string()), None);
    }

    #[test]
    fn expired_entry_behaves_as_absent() {
        let cache: TtlCache<String, u32> = TtlCache::new(Duration::from_millis(10));
        cache.store("a".to_string(), 1);
        sleep(Duration::from_millis(30));
        assert_eq!(cache.get(&"a".to_string()), None);
    }
}
