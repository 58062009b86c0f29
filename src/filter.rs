//! Existence Filter Module
//!
//! Probabilistic set membership used to short-circuit lookups for keys that
//! were never loaded (penetration protection). No false negatives: once a
//! key is added, every future check answers "maybe present". False
//! positives are possible and harmless; they only cost one loader call.
//!
//! The filter is append-only for the process lifetime. Removing entries
//! safely would require a counting variant, which this design deliberately
//! does not implement; deletions are handled upstream by negative caching.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// == Existence Filter ==
/// Fixed-size bit array with k derived bit positions per key.
#[derive(Debug)]
pub struct ExistenceFilter {
    /// Bit array packed into 64-bit blocks
    bits: Vec<u64>,
    /// Number of addressable bits
    num_bits: usize,
    /// Bit positions derived per key (k)
    num_hashes: u32,
    /// Number of keys added so far
    items: u64,
}

impl ExistenceFilter {
    // == Constructor ==
    /// Creates a filter with `num_bits` bits and `num_hashes` positions per key.
    ///
    /// `num_hashes` is clamped to at least 3 so a single weak hash cannot
    /// dominate the false-positive rate.
    pub fn new(num_bits: usize, num_hashes: u32) -> Self {
        let num_bits = num_bits.max(64);
        Self {
            bits: vec![0u64; (num_bits + 63) / 64],
            num_bits,
            num_hashes: num_hashes.max(3),
            items: 0,
        }
    }

    // == Add ==
    /// Records a key. Irreversible for the lifetime of the filter.
    pub fn add(&mut self, key: &str) {
        for pos in self.positions(key) {
            self.bits[pos / 64] |= 1u64 << (pos % 64);
        }
        self.items += 1;
    }

    // == Might Contain ==
    /// Returns true if the key may have been added, false if it definitely
    /// was not.
    ///
    /// A cold filter (nothing ever added) answers true unconditionally:
    /// penetration protection only engages after the first successful load,
    /// so a freshly started process never wrongly rejects real keys.
    pub fn might_contain(&self, key: &str) -> bool {
        if self.items == 0 {
            return true;
        }
        self.positions(key)
            .into_iter()
            .all(|pos| self.bits[pos / 64] & (1u64 << (pos % 64)) != 0)
    }

    // == Warmup ==
    /// Adds a batch of keys, typically the full live key set at startup.
    pub fn warmup<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for key in keys {
            self.add(key.as_ref());
        }
    }

    // == Length ==
    /// Returns the number of keys added (not the number of distinct keys).
    pub fn len(&self) -> u64 {
        self.items
    }

    /// Returns true if nothing was ever added.
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    // == Clear ==
    /// Resets the filter to its cold (fail-open) state.
    pub fn clear(&mut self) {
        self.bits.iter_mut().for_each(|block| *block = 0);
        self.items = 0;
    }

    // == Hashing ==
    /// Derives k bit positions via double hashing over two independently
    /// salted hash passes: pos_i = h1 + i * h2 (mod num_bits).
    fn positions(&self, key: &str) -> Vec<usize> {
        let h1 = hash_with_salt(key, 0x51_7c_c1_b7);
        // Force h2 odd so successive positions cycle through the bit space
        let h2 = hash_with_salt(key, 0x27_22_0a_95) | 1;

        (0..self.num_hashes as u64)
            .map(|i| (h1.wrapping_add(i.wrapping_mul(h2)) % self.num_bits as u64) as usize)
            .collect()
    }
}

fn hash_with_salt(key: &str, salt: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    salt.hash(&mut hasher);
    key.hash(&mut hasher);
    hasher.finish()
}
