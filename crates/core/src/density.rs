//! Phrase counting and density calculation.
//!
//! Ranking is deterministic: phrases are ordered by count, highest first, and
//! phrases with equal counts keep the order in which they were first seen.

use std::collections::HashMap;

use serde::Serialize;

/// Default number of entries kept per table.
pub const DEFAULT_MAX_ENTRIES: usize = 5;

/// One ranked phrase and its share of a region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityEntry {
    pub phrase: String,
    pub count: usize,
    /// Percentage of the region total, `0.0` when the total is zero.
    pub density: f64,
}

/// Counts phrase occurrences while remembering first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct PhraseCounter {
    index: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl PhraseCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `phrase`.
    pub fn add(&mut self, phrase: String) {
        match self.index.get(&phrase) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(phrase.clone(), self.counts.len());
                self.counts.push((phrase, 1));
            }
        }
    }

    /// Number of distinct phrases seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Occurrences of `phrase`, zero if never seen.
    pub fn count(&self, phrase: &str) -> usize {
        self.index.get(phrase).map_or(0, |&slot| self.counts[slot].1)
    }

    /// The `limit` most frequent phrases, ties broken by first occurrence.
    pub fn most_common(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.counts.iter().map(|(p, c)| (p.as_str(), *c)).collect();
        // stable: equal counts stay in insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

impl FromIterator<String> for PhraseCounter {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut counter = Self::new();
        iter.into_iter().for_each(|phrase| counter.add(phrase));
        counter
    }
}

/// Percentage of `count` over `total`, `0.0` for an empty total.
pub fn density(count: usize, total: usize) -> f64 {
    if total > 0 { count as f64 / total as f64 * 100.0 } else { 0.0 }
}

/// Ranks `phrases` and converts the top `limit` into density entries
/// relative to `total`.
///
/// `total` is supplied by the caller rather than derived from `phrases`,
/// because the region decides what a percentage is measured against.
///
/// ```rust
/// use densito_core::density::calculate_density;
///
/// let phrases = ["cat", "dog", "cat"].map(String::from);
/// let entries = calculate_density(phrases, 3, 5);
/// assert_eq!(entries[0].phrase, "cat");
/// assert_eq!(entries[0].count, 2);
/// ```
pub fn calculate_density(phrases: impl IntoIterator<Item = String>, total: usize, limit: usize) -> Vec<DensityEntry> {
    let counter: PhraseCounter = phrases.into_iter().collect();

    counter
        .most_common(limit)
        .into_iter()
        .map(|(phrase, count)| DensityEntry { phrase: phrase.to_string(), count, density: density(count, total) })
        .collect()
}
