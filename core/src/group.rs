//! Stem grouping: aggregation in document order, then rank filtering.
//!
//! Both the stem map and each group's surface-form map remember insertion
//! order explicitly. That order is the tie-break when ranking and the key
//! order when serializing.

use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// A string-keyed map that iterates in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Ordered<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Ordered<V> {
    fn get_or_insert_with(&mut self, key: &str, init: impl FnOnce() -> V) -> &mut V {
        let slot = match self.index.get(key).copied() {
            Some(i) => i,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), init()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot].1
    }

    fn get(&self, key: &str) -> Option<&V> { self.index.get(key).map(|&i| &self.entries[i].1) }
}

/// Surface form -> occurrence count, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceForms(Ordered<u64>);

impl SurfaceForms {
    pub fn get(&self, word: &str) -> Option<u64> { self.0.get(word).copied() }

    pub fn len(&self) -> usize { self.0.entries.len() }

    pub fn is_empty(&self) -> bool { self.0.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    pub fn total(&self) -> u64 { self.0.entries.iter().map(|(_, c)| c).sum() }
}

impl Serialize for SurfaceForms {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Every surface form that reduced to one stem.
///
/// `count` always equals the sum of the counts in `words`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StemGroup {
    pub count: u64,
    pub words: SurfaceForms,
}

impl StemGroup {
    fn record(&mut self, surface: &str) {
        self.count += 1;
        *self.words.0.get_or_insert_with(surface, || 0) += 1;
    }
}

/// Stem -> group, in first-seen order, before any filtering.
#[derive(Debug, Clone, Default)]
pub struct StemGroups(Ordered<StemGroup>);

impl StemGroups {
    pub fn get(&self, stem: &str) -> Option<&StemGroup> { self.0.get(stem) }

    pub fn len(&self) -> usize { self.0.entries.len() }

    pub fn is_empty(&self) -> bool { self.0.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StemGroup)> {
        self.0.entries.iter().map(|(s, g)| (s.as_str(), g))
    }
}

#[derive(Debug, Default)]
pub struct Aggregator {
    groups: StemGroups,
    total: u64,
}

impl Aggregator {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, surface: &str, stem: &str) {
        self.groups.0.get_or_insert_with(stem, StemGroup::default).record(surface);
        self.total += 1;
    }

    /// Number of tokens pushed so far.
    pub fn total(&self) -> u64 { self.total }

    pub fn into_groups(self) -> StemGroups { self.groups }
}

/// Keeps groups seen at least `min_count` times and orders them by count, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankFilter {
    pub min_count: u64,
}

impl Default for RankFilter {
    fn default() -> Self { Self { min_count: 2 } }
}

impl RankFilter {
    pub fn new(min_count: u64) -> Self { Self { min_count } }

    pub fn apply(&self, groups: StemGroups) -> GroupingResult {
        let mut entries: Vec<(String, StemGroup)> = groups
            .0
            .entries
            .into_iter()
            .filter(|(_, g)| g.count >= self.min_count)
            .collect();
        // stable: equal counts keep first-seen order
        entries.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        GroupingResult { entries }
    }
}

/// Ranked groups, serialized as a JSON object whose keys follow rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingResult {
    entries: Vec<(String, StemGroup)>,
}

impl GroupingResult {
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StemGroup)> {
        self.entries.iter().map(|(s, g)| (s.as_str(), g))
    }

    pub fn get(&self, stem: &str) -> Option<&StemGroup> {
        self.entries.iter().find(|(s, _)| s == stem).map(|(_, g)| g)
    }

    pub fn stems(&self) -> Vec<&str> { self.entries.iter().map(|(s, _)| s.as_str()).collect() }
}

impl Serialize for GroupingResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
