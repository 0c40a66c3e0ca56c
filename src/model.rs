use crate::{
    error::{Error, Result},
    kgrams::KgramPair,
    table::{CountTable, FrequencyMap},
};
use rustc_hash::FxHashSet;

/// Character-level Markov model of order `k`.
///
/// Counts of k-strings and k+1-strings share one table.
#[derive(Clone, Debug)]
pub struct MarkovModel<T: CountTable = FrequencyMap> {
    order: usize,
    alphabet_size: usize,
    table: T,
}

impl<T: CountTable + Default> MarkovModel<T> {
    #[inline]
    pub fn train(order: usize, text: &str) -> Result<Self> {
        Self::train_with(order, text, T::default())
    }
}

impl<T: CountTable> MarkovModel<T> {
    /// Builds the model from `text`, writing the counts into `table`
    pub fn train_with(order: usize, text: &str, mut table: T) -> Result<Self> {
        if order < 1 {
            return Err(Error::InvalidArgument("order must be >= 1"));
        }
        if text.is_empty() {
            return Err(Error::InvalidArgument("training text must not be empty"));
        }

        let chars: Vec<char> = text.chars().collect();
        let alphabet_size = chars.iter().collect::<FxHashSet<_>>().len();

        let mut kgrams = KgramPair::default();
        for offset in 0..chars.len() {
            kgrams.fill(&chars, offset, order);
            table.increment(&kgrams.k);
            table.increment(&kgrams.k_plus_one);
        }

        tracing::debug!(
            order,
            text_len = chars.len(),
            alphabet_size,
            table_len = table.len(),
            "markov model built"
        );

        Ok(Self {
            order,
            alphabet_size,
            table,
        })
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Count of distinct chars in the training text
    #[inline]
    pub fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    #[inline]
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Sum over the offsets of `text` of `ln((c(k+1) + 1) / (c(k) + alphabet_size))`.
    ///
    /// Not normalized by the length of `text`. Empty `text` gives 0.0.
    pub fn log_probability(&self, text: &str) -> f64 {
        let chars: Vec<char> = text.chars().collect();
        let alphabet_size = self.alphabet_size as f64;

        let mut kgrams = KgramPair::default();
        let mut sum = 0.0;
        for offset in 0..chars.len() {
            kgrams.fill(&chars, offset, self.order);
            let k_plus_one_count = self.table.get(&kgrams.k_plus_one) as f64;
            let k_count = self.table.get(&kgrams.k) as f64;
            sum += ((k_plus_one_count + 1.0) / (k_count + alphabet_size)).ln();
        }

        sum
    }
}
