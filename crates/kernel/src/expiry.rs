use std::collections::BTreeMap;

/// Delayed-removal scheduler keyed by id.
///
/// Each key holds at most one deadline; scheduling an existing key replaces
/// its deadline. Keys come back from [`ExpiryQueue::pop_due`] ordered by
/// deadline, then key, so expiry order is deterministic.
#[derive(Debug, Clone)]
pub struct ExpiryQueue<K> {
    deadlines: BTreeMap<K, u64>,
}

impl<K: Ord + Copy> Default for ExpiryQueue<K> {
    fn default() -> Self {
        Self {
            deadlines: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> ExpiryQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to expire at `deadline`. Returns the replaced deadline.
    pub fn schedule(&mut self, key: K, deadline: u64) -> Option<u64> {
        self.deadlines.insert(key, deadline)
    }

    /// Drop a pending expiry. Absent keys are ignored.
    pub fn cancel(&mut self, key: K) -> bool {
        self.deadlines.remove(&key).is_some()
    }

    pub fn deadline(&self, key: K) -> Option<u64> {
        self.deadlines.get(&key).copied()
    }

    /// Remove and return every key whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Vec<K> {
        let mut due: Vec<(u64, K)> = self
            .deadlines
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(key, at)| (*at, *key))
            .collect();
        due.sort();
        for (_, key) in &due {
            self.deadlines.remove(key);
        }
        due.into_iter().map(|(_, key)| key).collect()
    }

    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}
