use core::fmt::{self, Debug, Display};
use core::mem;

use crate::opt::branch_prediction::unlikely;
use crate::prime::next_prime;

/// First multiplier of the polynomial string hash, used for the probe origin.
const HASH_PRIME_A: u128 = 49943;

/// Second multiplier of the polynomial string hash, used for the probe stride.
const HASH_PRIME_B: u128 = 1327;

/// Load percentage above which an insert doubles the capacity.
const GROW_AT_PERCENT: usize = 70;

/// Load percentage below which a remove halves the capacity.
const SHRINK_AT_PERCENT: usize = 10;

/// Polynomial hash of `key` over its bytes, reduced modulo `buckets`.
///
/// Computes `Σ prime^(L-1-i) * byte[i] mod buckets` by Horner evaluation,
/// reducing at every accumulation step so the accumulator never overflows.
/// The result is order-sensitive and depends on `buckets`, so hashes from one
/// capacity are invalid at any other.
fn polynomial_hash(key: &str, prime: u128, buckets: usize) -> usize {
    let modulus = buckets as u128;
    let mut hash: u128 = 0;
    for &byte in key.as_bytes() {
        hash = (hash * prime + byte as u128) % modulus;
    }
    hash as usize
}

struct FindResult {
    slot: usize,
    exists: bool,
}

impl FindResult {
    #[inline(always)]
    const fn just_slot(slot: usize) -> Self {
        Self {
            slot,
            exists: false,
        }
    }
}

/// An owned key-value pair of strings.
#[derive(Clone)]
struct Entry {
    key: String,
    value: String,
}

impl Entry {
    #[inline(always)]
    const fn new(key: String, value: String) -> Self {
        Self { key, value }
    }
}

/// The state of one bucket in the table.
///
/// `Tombstone` marks a slot whose entry was removed. Probe sequences must
/// treat it as "keep searching" so chains of keys that hashed past the slot
/// remain unbroken.
#[derive(Clone)]
enum Slot {
    Empty,
    Occupied(Entry),
    Tombstone,
}

/// A string-keyed map built on open addressing with double hashing,
/// prime-sized bucket arrays, and tombstone-based deletion.
///
/// The capacity is always the smallest prime at or above the requested size,
/// never below [`PrimeMap::MIN_CAPACITY`]. Inserting past 70% load doubles
/// the capacity; removing below 10% load halves it, except when the halved
/// size would fall below the floor, where the table is left unchanged.
///
/// The map is not safe for concurrent mutation; callers must serialize
/// access externally.
#[derive(Clone)]
pub struct PrimeMap {
    slots: Vec<Slot>,
    len: usize,
}

impl PrimeMap {
    /// The minimum (and default) capacity of the bucket array.
    pub const MIN_CAPACITY: usize = 31;

    /// Returns a new `PrimeMap` with the minimum capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use primemap::PrimeMap;
    ///
    /// let map = PrimeMap::new();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.capacity(), PrimeMap::MIN_CAPACITY);
    /// ```
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::with_buckets(Self::MIN_CAPACITY)
    }

    /// Creates a new `PrimeMap` with at least the specified `capacity`.
    ///
    /// The allocated capacity is the smallest prime greater than or equal to
    /// the request, floored at [`PrimeMap::MIN_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use primemap::PrimeMap;
    ///
    /// let map = PrimeMap::with_capacity(50);
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.capacity(), 53);
    ///
    /// let map = PrimeMap::with_capacity(0);
    ///
    /// assert_eq!(map.capacity(), 31);
    /// ```
    #[must_use]
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity < Self::MIN_CAPACITY {
            return Self::new();
        }
        Self::with_buckets(next_prime(capacity))
    }

    /// Creates an all-empty table with exactly `buckets` slots.
    ///
    /// `buckets` must already be a prime at or above the floor.
    fn with_buckets(buckets: usize) -> Self {
        PrimeMap {
            slots: vec![Slot::Empty; buckets],
            len: 0,
        }
    }

    /// Returns the length of the bucket array.
    ///
    /// The capacity is always prime and at least [`PrimeMap::MIN_CAPACITY`].
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live entries in the `PrimeMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use primemap::PrimeMap;
    ///
    /// let mut map = PrimeMap::new();
    ///
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert("1".to_string(), "a".to_string());
    /// map.insert("2".to_string(), "b".to_string());
    ///
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `PrimeMap` is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current load factor.
    ///
    /// The capacity is never zero, so the result is always finite.
    #[inline(always)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Finds the slot of the key in the bucket array.
    ///
    /// Probes with double hashing: attempt `i` visits
    /// `(h1 + i * (h2 + 1)) mod capacity`. Tombstones are stepped over, so a
    /// removed slot never hides keys that probed past it.
    ///
    /// If the key exists, the returned `slot` is the index of its occupied
    /// slot and `exists` is true. Otherwise `slot` is the first empty slot of
    /// the probe sequence, which is the one an insert would fill.
    ///
    /// # Panics
    ///
    /// Panics after a full cycle of fruitless attempts. That state is only
    /// reachable when the load-factor invariant has been violated and no
    /// empty slot remains, which is a logic error rather than a recoverable
    /// condition.
    fn find(&self, key: &str) -> FindResult {
        let buckets = self.capacity();
        let origin = polynomial_hash(key, HASH_PRIME_A, buckets);
        let stride = (polynomial_hash(key, HASH_PRIME_B, buckets) + 1) % buckets;

        let mut slot = origin;
        let mut attempt = 0;
        loop {
            match &self.slots[slot] {
                Slot::Empty => return FindResult::just_slot(slot),
                Slot::Occupied(entry) if entry.key == key => {
                    return FindResult { slot, exists: true };
                }
                _ => {}
            }

            attempt += 1;
            if attempt == buckets {
                panic!("Logic error: probe sequence exhausted without finding an empty slot");
            }
            slot = (slot + stride) % buckets;
        }
    }

    /// Inserts a key-value pair into the map.
    /// If the map did not have this key present, `None` is returned.
    /// If the map did have this key present, the value is updated, and the
    /// old value is returned.
    ///
    /// When the live count exceeds 70% of the capacity, the table grows to
    /// the next prime at or above double the capacity before probing.
    ///
    /// # Time Complexity
    ///
    /// _O_(1) amortized; _O_(capacity) when a resize triggers.
    ///
    /// # Examples
    ///
    /// ```
    /// use primemap::PrimeMap;
    ///
    /// let mut map = PrimeMap::new();
    ///
    /// // When inserting a new key-value pair, None is returned.
    /// assert_eq!(map.insert("1".to_string(), "a".to_string()), None);
    ///
    /// // Update the value for an existing key.
    /// let old_value = map.insert("1".to_string(), "b".to_string());
    ///
    /// assert_eq!(old_value, Some("a".to_string()));
    /// assert_eq!(map.get("1"), Some("b"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        if unlikely(self.len * 100 / self.capacity() > GROW_AT_PERCENT) {
            self.grow();
        }

        let result = self.find(&key);

        if result.exists {
            return match &mut self.slots[result.slot] {
                Slot::Occupied(entry) => Some(mem::replace(&mut entry.value, value)),
                _ => unreachable!("Logic error: find reported a match on a non-occupied slot"),
            };
        }

        debug_assert!(
            matches!(self.slots[result.slot], Slot::Empty),
            "Logic error: attempt to overwrite a non-empty slot while inserting"
        );

        self.slots[result.slot] = Slot::Occupied(Entry::new(key, value));
        self.len += 1;

        // Key was new and inserted.
        None
    }

    /// Retrieves a value by its `key`.
    ///
    /// # Returns
    ///
    /// - `Some(&value)`: if the key is found.
    ///
    /// - `None`: if the key does not exist.
    ///
    /// # Time Complexity
    ///
    /// _O_(1) on average.
    ///
    /// # Examples
    ///
    /// ```
    /// use primemap::PrimeMap;
    ///
    /// let mut map = PrimeMap::new();
    ///
    /// map.insert("1".to_string(), "a".to_string());
    ///
    /// assert_eq!(map.get("1"), Some("a"));
    ///
    /// // Key does not exist.
    /// assert_eq!(map.get("2"), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        if self.is_empty() {
            return None;
        }

        let result = self.find(key);

        if result.exists {
            return match &self.slots[result.slot] {
                Slot::Occupied(entry) => Some(entry.value.as_str()),
                _ => unreachable!("Logic error: find reported a match on a non-occupied slot"),
            };
        }

        None
    }

    /// Retrieves a mutable reference to a value by its `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use primemap::PrimeMap;
    ///
    /// let mut map = PrimeMap::new();
    ///
    /// map.insert("1".to_string(), "a".to_string());
    ///
    /// if let Some(value) = map.get_mut("1") {
    ///     *value = "b".to_string();
    /// }
    ///
    /// assert_eq!(map.get("1"), Some("b"));
    /// ```
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        if self.is_empty() {
            return None;
        }

        let result = self.find(key);

        if result.exists {
            return match &mut self.slots[result.slot] {
                Slot::Occupied(entry) => Some(&mut entry.value),
                _ => unreachable!("Logic error: find reported a match on a non-occupied slot"),
            };
        }

        None
    }

    /// Returns `true` if the map contains a value for the specified `key`.
    #[must_use]
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes an entry by its `key` and returns its value, leaving a
    /// tombstone in its slot.
    ///
    /// When the live count is below 10% of the capacity, the table shrinks
    /// to the next prime at or above half the capacity before probing. The
    /// load check runs before the halved size is known to clear the floor;
    /// a shrink request below [`PrimeMap::MIN_CAPACITY`] is a silent no-op,
    /// so a small table can sit under 10% load indefinitely.
    ///
    /// # Returns
    ///
    /// - `Some(value)`: if key's entry is found and removed.
    ///
    /// - `None`: if the key does not have an entry.
    ///
    /// # Time Complexity
    ///
    /// _O_(1) on average; _O_(capacity) when a resize triggers.
    ///
    /// # Examples
    ///
    /// ```
    /// use primemap::PrimeMap;
    ///
    /// let mut map = PrimeMap::new();
    ///
    /// map.insert("1".to_string(), "a".to_string());
    ///
    /// assert_eq!(map.remove("1"), Some("a".to_string()));
    /// assert_eq!(map.get("1"), None);
    ///
    /// // Removing an absent key has no effect.
    /// assert_eq!(map.remove("1"), None);
    /// assert_eq!(map.len(), 0);
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<String> {
        if unlikely(self.len * 100 / self.capacity() < SHRINK_AT_PERCENT) {
            self.shrink();
        }

        let result = self.find(key);

        if result.exists {
            self.len -= 1;
            return match mem::replace(&mut self.slots[result.slot], Slot::Tombstone) {
                Slot::Occupied(entry) => Some(entry.value),
                _ => unreachable!("Logic error: find reported a match on a non-occupied slot"),
            };
        }

        None
    }

    /// Clears the map, removing all entries.
    /// The capacity of the map remains unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use primemap::PrimeMap;
    ///
    /// let mut map = PrimeMap::new();
    /// map.insert("1".to_string(), "a".to_string());
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.get("1"), None);
    /// assert_eq!(map.capacity(), PrimeMap::MIN_CAPACITY);
    /// ```
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.len = 0;
    }

    /// Doubles the capacity, rounded up to the next prime.
    #[inline]
    fn grow(&mut self) {
        self.resize(self.capacity() * 2);
    }

    /// Halves the capacity, rounded up to the next prime.
    #[inline]
    fn shrink(&mut self) {
        self.resize(self.capacity() / 2);
    }

    /// Rebuilds the table with a bucket array of `next_prime(requested)`
    /// slots, or does nothing if `requested` is below the floor.
    ///
    /// Every occupied slot of the old array is re-inserted in index order,
    /// which re-derives its probe position at the new capacity. Tombstones
    /// are not carried over; dropping them here is what reclaims their
    /// space.
    fn resize(&mut self, requested: usize) {
        if requested < Self::MIN_CAPACITY {
            return;
        }

        let mut next = Self::with_buckets(next_prime(requested));

        for slot in mem::take(&mut self.slots) {
            if let Slot::Occupied(entry) = slot {
                next.insert(entry.key, entry.value);
            }
        }

        *self = next;
    }

    /// Returns an iterator over the live entries in slot order.
    ///
    /// Internal only: slot order is a function of the hash scheme and the
    /// resize history, not something callers may rely on.
    fn iter_entries(&self) -> impl Iterator<Item = &Entry> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        })
    }
}

impl Default for PrimeMap {
    /// Creates a new `PrimeMap` with the minimum capacity.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PrimeMap {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.iter_entries()
            .all(|entry| other.get(&entry.key).is_some_and(|v| v == entry.value))
    }
}

impl Debug for PrimeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter_entries().map(|entry| (&entry.key, &entry.value)))
            .finish()
    }
}

impl Display for PrimeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for entry in self.iter_entries() {
            writeln!(f, "    {}: {}", entry.key, entry.value)?;
        }
        write!(f, "}}")
    }
}

/// Development and testing methods that are not available in release builds.
#[cfg(test)]
impl PrimeMap {
    /// Returns the number of tombstone slots in the bucket array.
    ///
    /// This method is used for testing purposes only and not available in
    /// release builds.
    pub(crate) fn debug_tombstones(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Tombstone))
            .count()
    }

    /// Returns the number of occupied slots in the bucket array.
    ///
    /// This method is used for testing purposes only and not available in
    /// release builds.
    pub(crate) fn debug_occupied(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(_)))
            .count()
    }
}
