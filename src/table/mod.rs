use crate::error::Result;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

mod chained;
mod std_table;

pub use chained::{hash, FrequencyMap, FrequencyMapConfig, HASH_MULTIPLIER};
pub use std_table::StdCountTable;

/// Counts storage used by [`MarkovModel`](crate::MarkovModel).
///
/// Absent keys are not an error, `get` returns the table's default value.
pub trait CountTable {
    fn get(&self, key: &str) -> usize;

    /// Inserts or overwrites the value of `key`
    fn set(&mut self, key: &str, value: usize);

    /// Returns the removed value, or [`Error::NotFound`](crate::Error::NotFound)
    fn remove(&mut self, key: &str) -> Result<usize>;

    /// Number of distinct keys
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn increment(&mut self, key: &str) {
        let value = self.get(key);
        self.set(key, value + 1);
    }
}

/// Selects the [`CountTable`] implementation backing a model.
/// Doesn't change the results, only the performance.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
)]
pub enum TableBackend {
    /// [`FrequencyMap`]
    #[default]
    #[strum(to_string = "hashtable")]
    HashTable,
    /// [`StdCountTable`]
    #[strum(to_string = "dict")]
    Dict,
}
