// src/catalog/index.rs

use std::collections::HashMap;

/// Maps every non-empty prefix of a key to the records sharing it.
///
/// Each key of length k contributes k entries, which is fine for a few
/// hundred short names. A trie would be the structure to reach for if the
/// corpus ever grew.
#[derive(Debug, Default, Clone)]
pub struct PrefixIndex {
    map: HashMap<String, Vec<usize>>,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `idx` under every prefix of `key` (char boundaries).
    /// Callers insert in canonical order, so lists stay sorted.
    pub fn insert(&mut self, key: &str, idx: usize) {
        for (end, ch) in key.char_indices() {
            let prefix = &key[..end + ch.len_utf8()];
            self.map.entry(prefix.to_string()).or_default().push(idx);
        }
    }

    pub fn get(&self, prefix: &str) -> Option<&[usize]> {
        self.map.get(prefix).map(|v| v.as_slice())
    }

    /// Number of distinct prefixes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Exact key → list, preserving insertion order.
#[derive(Debug, Default, Clone)]
pub struct MultiIndex {
    map: HashMap<String, Vec<usize>>,
}

impl MultiIndex {
    pub fn insert(&mut self, key: &str, idx: usize) {
        self.map.entry(key.to_string()).or_default().push(idx);
    }

    pub fn get(&self, key: &str) -> Option<&[usize]> {
        self.map.get(key).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
