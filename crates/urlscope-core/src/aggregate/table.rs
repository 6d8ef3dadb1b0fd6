//! Insertion-ordered frequency counter.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of values and remembers the order in which each value
/// was first seen. Ranking ties are broken by that order, so output is
/// deterministic regardless of hashing.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, value: K) {
        self.add(value, 1);
    }

    /// Adds `n` to the count of `value`, appending it if unseen.
    pub fn add(&mut self, value: K, n: usize) {
        match self.index.get(&value) {
            Some(&i) => self.entries[i].1 += n,
            None => {
                self.index.insert(value.clone(), self.entries.len());
                self.entries.push((value, n));
            }
        }
    }

    pub fn get(&self, value: &K) -> usize {
        self.index.get(value).map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    /// Highest count; the earliest-inserted value wins a tie.
    pub fn most_common(&self) -> Option<(&K, usize)> {
        self.most_common_by(|_| true)
    }

    /// Like [`most_common`](Self::most_common) but only among values accepted by `keep`.
    pub fn most_common_by(&self, mut keep: impl FnMut(&K) -> bool) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (k, c) in &self.entries {
            if !keep(k) {
                continue;
            }
            // Strict comparison keeps the first-seen entry on ties.
            if best.map_or(true, |(_, b)| *c > b) {
                best = Some((k, *c));
            }
        }
        best
    }

    /// All entries, count descending, ties in first-seen order.
    pub fn ranked(&self) -> Vec<(&K, usize)> {
        let mut out: Vec<(&K, usize)> = self.iter().collect();
        // sort_by is stable, so equal counts keep insertion order.
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    pub fn top(&self, n: usize) -> Vec<(&K, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// Folds `other` into `self`. Values new to `self` are appended in
    /// `other`'s first-seen order, so merging chunk tables in input order
    /// reproduces a single-pass fold exactly.
    pub fn merge(&mut self, other: FrequencyTable<K>) {
        for (k, c) in other.entries {
            self.add(k, c);
        }
    }

    /// Keeps only entries accepted by `keep`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&K, usize) -> bool) {
        self.entries.retain(|(k, c)| keep(k, *c));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (k, _))| (k.clone(), i))
            .collect();
    }
}

impl<K: Eq + Hash + Clone> PartialEq for FrequencyTable<K> {
    /// Equal when counts and first-seen order both match.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash + Clone> Eq for FrequencyTable<K> {}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.increment(value);
        }
        table
    }
}

#[derive(Serialize)]
struct Entry<'a, K> {
    value: &'a K,
    count: usize,
}

impl<K: Serialize> Serialize for FrequencyTable<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (value, count) in &self.entries {
            seq.serialize_element(&Entry {
                value,
                count: *count,
            })?;
        }
        seq.end()
    }
}
