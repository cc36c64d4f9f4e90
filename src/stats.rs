//! # Generation Statistics
//!
//! One [`StatsRecord`] is computed per generation from the ranked population and
//! appended to a [`StatsCache`] under the label `gen_<n>`. The cache keeps
//! insertion order, so iterating it replays the run generation by generation.
//!
//! ## Example
//!
//! ```rust
//! use chromevo::chromosome::Chromosome;
//! use chromevo::stats::{generation_key, StatsCache, StatsRecord};
//!
//! let ranked = vec![Chromosome::new(vec![2]), Chromosome::new(vec![1])];
//! let record = StatsRecord::from_ranked(&ranked).unwrap();
//!
//! let cache = StatsCache::new().insert(generation_key(0), record);
//! assert_eq!(cache.len(), 1);
//! assert!(cache.generation(0).is_some());
//! ```

use std::collections::HashMap;

use crate::chromosome::{Chromosome, Gene};
use crate::error::{GeneticError, OptionExt, Result};

/// Returns the cache label for a generation index.
pub fn generation_key(generation: usize) -> String {
    format!("gen_{}", generation)
}

/// Summary of one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct StatsRecord<T> {
    pub best: Chromosome<T>,
    pub worst: Chromosome<T>,
    /// Arithmetic mean fitness over the whole population.
    pub average: f64,
}

impl<T: Gene> StatsRecord<T> {
    /// Builds a record from a population sorted by descending fitness.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if `ranked` is empty.
    pub fn from_ranked(ranked: &[Chromosome<T>]) -> Result<Self> {
        let best = ranked
            .first()
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let worst = ranked
            .last()
            .cloned()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let total: f64 = ranked.iter().map(Chromosome::fitness).sum();

        Ok(Self {
            best,
            worst,
            average: total / ranked.len() as f64,
        })
    }
}

/// Append-only, insertion-ordered mapping from generation label to [`StatsRecord`].
///
/// Records live in insertion order; a label index makes `insert` and `get`
/// constant time.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "StatsEntries<T>"))]
#[derive(Debug, Clone, PartialEq)]
pub struct StatsCache<T> {
    entries: Vec<(String, StatsRecord<T>)>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<String, usize>,
}

/// Serialized form of a [`StatsCache`]; the index is rebuilt on load.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StatsEntries<T> {
    entries: Vec<(String, StatsRecord<T>)>,
}

#[cfg(feature = "serde")]
impl<T> From<StatsEntries<T>> for StatsCache<T> {
    fn from(serialized: StatsEntries<T>) -> Self {
        let mut cache = Self {
            entries: Vec::with_capacity(serialized.entries.len()),
            index: HashMap::with_capacity(serialized.entries.len()),
        };
        for (key, record) in serialized.entries {
            cache.put(key, record);
        }
        cache
    }
}

impl<T> StatsCache<T> {
    fn put(&mut self, key: String, record: StatsRecord<T>) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 = record,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, record));
            }
        }
    }
}

impl<T: Gene> StatsCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Consumes the cache and returns it with `record` stored under `key`.
    ///
    /// A new key is appended at the end. Re-inserting an existing key replaces its
    /// record without moving it.
    pub fn insert(mut self, key: impl Into<String>, record: StatsRecord<T>) -> Self {
        self.put(key.into(), record);
        self
    }

    pub fn get(&self, key: &str) -> Option<&StatsRecord<T>> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Looks up the record of a generation by index.
    pub fn generation(&self, generation: usize) -> Option<&StatsRecord<T>> {
        self.get(&generation_key(generation))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently inserted record.
    pub fn last(&self) -> Option<&StatsRecord<T>> {
        self.entries.last().map(|(_, record)| record)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatsRecord<T>)> {
        self.entries.iter().map(|(k, record)| (k.as_str(), record))
    }
}

impl<T: Gene> Default for StatsCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
