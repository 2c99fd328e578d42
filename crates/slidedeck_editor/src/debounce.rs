//! Per-key debounce table.
//!
//! One pending entry per key: scheduling a key that already has an entry
//! replaces the value and resets the deadline (last-write-wins within the
//! window). Distinct keys run independently. Entries only leave the table by
//! becoming due or by being drained for capture-before-flush.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct PendingEntry<V> {
    value: V,
    deadline: Instant,
}

/// Scheduled-task table coalescing high-frequency events per key.
#[derive(Debug)]
pub struct DebounceTable<K, V = String> {
    delay: Duration,
    pending: HashMap<K, PendingEntry<V>>,
}

impl<K: Eq + Hash + Clone, V> DebounceTable<K, V> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: HashMap::new(),
        }
    }

    /// Schedule `value` for `key`, cancelling any pending entry for the same
    /// key and restarting its window.
    pub fn schedule(&mut self, key: K, value: V, now: Instant) {
        self.pending.insert(
            key,
            PendingEntry {
                value,
                deadline: now + self.delay,
            },
        );
    }

    /// Remove and return every entry whose window has elapsed.
    pub fn drain_due(&mut self, now: Instant) -> Vec<(K, V)> {
        let due: Vec<K> = self
            .pending
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .map(|(key, _)| key.clone())
            .collect();
        due.into_iter()
            .filter_map(|key| self.pending.remove(&key).map(|entry| (key, entry.value)))
            .collect()
    }

    /// Remove and return every entry regardless of deadline. Used by
    /// capture-before-flush so a synchronous operation never races a timer.
    pub fn drain_all(&mut self) -> Vec<(K, V)> {
        self.pending
            .drain()
            .map(|(key, entry)| (key, entry.value))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
