//! Thread-safe membership test with atomic test-and-insert. Splitting
//! this into a separate `contains` then `insert` would admit the same
//! URL twice under contention -- the whole point is that `admit` is one
//! atomic operation.

use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self {
            seen: Mutex::new(HashSet::new()),
        }
    }

    /// Atomically inserts `url`. Returns `true` if this call admitted it
    /// (first time seen), `false` if another caller already has.
    pub fn admit(&self, url: &str) -> bool {
        let mut seen = self.seen.lock().expect("visited set mutex poisoned");
        seen.insert(url.to_string())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.seen.lock().expect("visited set mutex poisoned").len()
    }
}
