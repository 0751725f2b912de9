//! Memoization of normalization results keyed by a hash of the exact input.
//!
//! Normalization is pure, so a cached value is always identical to a fresh
//! run. Entries are never evicted.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use cid_model::{NormalizeOptions, Normalized, RawInput};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::normalize::normalize_with;

/// Hex SHA-256 of the options tag and the exact input.
///
/// Column cells are length-prefixed and missing cells get their own marker,
/// so `["1", "2"]`, `["12"]` and `["1", None, "2"]` hash differently.
pub fn input_key(raw: &RawInput, options: &NormalizeOptions) -> String {
    let mut hasher = Sha256::new();
    hasher.update(options.tag().as_bytes());
    match raw {
        RawInput::Text(text) => {
            hasher.update(b"\0text\0");
            hasher.update(text.as_bytes());
        }
        RawInput::Column(cells) => {
            hasher.update(b"\0column\0");
            for cell in cells {
                match cell {
                    Some(value) => {
                        hasher.update([1u8]);
                        hasher.update((value.len() as u64).to_le_bytes());
                        hasher.update(value.as_bytes());
                    }
                    None => hasher.update([0u8]),
                }
            }
        }
    }
    hex::encode(hasher.finalize())
}

/// Cache of [`Normalized`] results.
#[derive(Debug, Default)]
pub struct NormalizeCache {
    entries: HashMap<String, Normalized>,
    hits: usize,
    misses: usize,
}

impl NormalizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result for `raw`, normalizing it on first sight.
    pub fn get_or_normalize(&mut self, raw: &RawInput, options: &NormalizeOptions) -> &Normalized {
        let key = input_key(raw, options);
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                debug!(key = %entry.key(), "normalize cache hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                debug!(key = %entry.key(), "normalize cache miss");
                entry.insert(normalize_with(raw, options))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
