use super::CountTable;
use crate::error::{Error, Result};
use compact_str::CompactString;

/// Max number of buckets a `Vec` of heads can hold
const MAX_CAPACITY: usize = isize::MAX as usize / ::core::mem::size_of::<Option<usize>>();

/// Polynomial constant of [`hash`]
pub const HASH_MULTIPLIER: u64 = 37;

/// Horner's rule polynomial over the chars of `key`, wrapping on overflow.
///
/// Must stay unchanged: bucket placement depends on it.
#[inline]
pub fn hash(key: &str) -> u64 {
    key.chars().fold(0u64, |h, c| {
        h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(c as u64)
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyMapConfig {
    capacity: usize,
    load_factor: f64,
    growth_factor: usize,
    default_value: usize,
}

impl Default for FrequencyMapConfig {
    #[inline]
    fn default() -> Self {
        Self {
            capacity: 57,
            load_factor: 0.5,
            growth_factor: 2,
            default_value: 0,
        }
    }
}

impl FrequencyMapConfig {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial number of buckets, must be >= 1
    #[inline]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Max `len / capacity` ratio before growing, must be in `(0, 1]`
    #[inline]
    pub fn load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Capacity multiplier on growth, must be >= 2
    #[inline]
    pub fn growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Value returned by `get` for absent keys
    #[inline]
    pub fn default_value(mut self, default_value: usize) -> Self {
        self.default_value = default_value;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.capacity < 1 {
            return Err(Error::InvalidArgument("capacity must be >= 1"));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(Error::InvalidArgument("capacity is too big"));
        }
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(Error::InvalidArgument("load factor must be in (0, 1]"));
        }
        if self.growth_factor < 2 {
            return Err(Error::InvalidArgument("growth factor must be >= 2"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
struct Entry {
    key: CompactString,
    value: usize,
    next: Option<usize>,
}

/// Separate chaining hash map from strings to counts.
///
/// Chains are linked by indexes into a single `entries` arena,
/// slots released by `remove` are reused.
#[derive(Clone, Debug)]
pub struct FrequencyMap {
    config: FrequencyMapConfig,
    capacity: usize,
    heads: Vec<Option<usize>>,
    entries: Vec<Entry>,
    free: Vec<usize>,
    size: usize,
}

impl Default for FrequencyMap {
    #[inline]
    fn default() -> Self {
        Self::from_valid_config(FrequencyMapConfig::default())
    }
}

impl FrequencyMap {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_config(config: FrequencyMapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: FrequencyMapConfig) -> Self {
        Self {
            config,
            capacity: config.capacity,
            heads: vec![None; config.capacity],
            entries: Vec::new(),
            free: Vec::new(),
            size: 0,
        }
    }

    /// Current number of buckets
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn config(&self) -> &FrequencyMapConfig {
        &self.config
    }

    #[inline(always)]
    fn bucket(key: &str, capacity: usize) -> usize {
        (hash(key) % capacity as u64) as usize
    }

    #[inline]
    fn chain(&self, bucket: usize) -> ChainIter<'_> {
        ChainIter {
            entries: &self.entries,
            cursor: self.heads[bucket],
        }
    }

    fn find(&self, key: &str) -> Option<usize> {
        self.chain(Self::bucket(key, self.capacity))
            .find(|&idx| self.entries[idx].key == key)
    }

    fn alloc(&mut self, key: &str, value: usize) -> usize {
        let entry = Entry {
            key: CompactString::from(key),
            value,
            next: None,
        };
        match self.free.pop() {
            Some(idx) => {
                self.entries[idx] = entry;
                idx
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        }
    }

    /// Appends the entry `idx` to the tail of `bucket`'s chain
    fn link_tail(&mut self, bucket: usize, idx: usize) {
        let tail = self.chain(bucket).last();
        match tail {
            Some(tail) => self.entries[tail].next = Some(idx),
            None => self.heads[bucket] = Some(idx),
        }
    }

    #[inline]
    fn is_overloaded(&self) -> bool {
        self.size as f64 / self.capacity as f64 > self.config.load_factor
    }

    /// Relinks every entry into `capacity * growth_factor` buckets.
    /// Keeps the current buckets if that count is not representable.
    fn resize(&mut self) {
        let Some(new_capacity) = self
            .capacity
            .checked_mul(self.config.growth_factor)
            .filter(|&c| c <= MAX_CAPACITY)
        else {
            tracing::warn!(
                capacity = self.capacity,
                growth_factor = self.config.growth_factor,
                "frequency map can't grow"
            );
            return;
        };
        let mut heads = vec![None; new_capacity];
        let mut tails: Vec<Option<usize>> = vec![None; new_capacity];

        let old_heads = ::core::mem::take(&mut self.heads);
        for head in old_heads {
            let mut cursor = head;
            while let Some(idx) = cursor {
                cursor = self.entries[idx].next.take();
                let bucket = Self::bucket(&self.entries[idx].key, new_capacity);
                match tails[bucket] {
                    Some(tail) => self.entries[tail].next = Some(idx),
                    None => heads[bucket] = Some(idx),
                }
                tails[bucket] = Some(idx);
            }
        }

        tracing::trace!(
            old_capacity = self.capacity,
            new_capacity,
            size = self.size,
            "frequency map resized"
        );
        self.heads = heads;
        self.capacity = new_capacity;
    }
}

impl CountTable for FrequencyMap {
    #[inline]
    fn get(&self, key: &str) -> usize {
        self.find(key)
            .map_or(self.config.default_value, |idx| self.entries[idx].value)
    }

    fn set(&mut self, key: &str, value: usize) {
        if let Some(idx) = self.find(key) {
            self.entries[idx].value = value;
            return;
        }

        let bucket = Self::bucket(key, self.capacity);
        let idx = self.alloc(key, value);
        self.link_tail(bucket, idx);
        self.size += 1;

        if self.is_overloaded() {
            self.resize();
        }
    }

    fn remove(&mut self, key: &str) -> Result<usize> {
        let bucket = Self::bucket(key, self.capacity);
        let mut prev: Option<usize> = None;
        let mut cursor = self.heads[bucket];
        while let Some(idx) = cursor {
            if self.entries[idx].key == key {
                let next = self.entries[idx].next.take();
                match prev {
                    Some(p) => self.entries[p].next = next,
                    None => self.heads[bucket] = next,
                }
                self.free.push(idx);
                self.size -= 1;
                return Ok(::core::mem::take(&mut self.entries[idx].value));
            }
            prev = cursor;
            cursor = self.entries[idx].next;
        }

        Err(Error::NotFound(CompactString::from(key)))
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.size
    }
}

struct ChainIter<'a> {
    entries: &'a [Entry],
    cursor: Option<usize>,
}

impl Iterator for ChainIter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        self.cursor = self.entries[idx].next;
        Some(idx)
    }
}
