//! Bounded in-process cache with time-based staleness.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Key/value cache that expires entries after `ttl` and evicts the
/// oldest-inserted entry once `capacity` is reached.
///
/// Staleness is only checked on read; a stale entry is dropped and reported
/// as a miss.
pub struct TtlCache<K, V> {
    ttl: Duration,
    capacity: usize,
    inner: Mutex<Entries<K, V>>,
}

struct Entries<K, V> {
    values: HashMap<K, (Instant, V)>,
    order: VecDeque<K>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    #[must_use]
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity,
            inner: Mutex::new(Entries {
                values: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// A clone of the fresh value for `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.inner.lock();
        let stale = match entries.values.get(key) {
            Some((inserted, value)) if inserted.elapsed() < self.ttl => {
                return Some(value.clone());
            }
            Some(_) => true,
            None => false,
        };
        if stale {
            entries.values.remove(key);
            entries.order.retain(|k| k != key);
        }
        None
    }

    /// Store `value`, replacing any previous entry for `key`.
    pub fn insert(&self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.inner.lock();
        if entries.values.contains_key(&key) {
            entries.order.retain(|k| k != &key);
        } else {
            while entries.values.len() >= self.capacity {
                let Some(oldest) = entries.order.pop_front() else {
                    break;
                };
                entries.values.remove(&oldest);
            }
        }
        entries.order.push_back(key.clone());
        entries.values.insert(key, (Instant::now(), value));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
