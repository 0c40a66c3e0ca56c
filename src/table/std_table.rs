use super::CountTable;
use crate::error::{Error, Result};
use ahash::AHashMap;
use compact_str::CompactString;

/// [`CountTable`] over [`AHashMap`]
#[derive(Clone, Debug, Default)]
pub struct StdCountTable {
    map: AHashMap<CompactString, usize>,
    default_value: usize,
}

impl StdCountTable {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_default_value(default_value: usize) -> Self {
        Self {
            map: AHashMap::new(),
            default_value,
        }
    }
}

impl CountTable for StdCountTable {
    #[inline]
    fn get(&self, key: &str) -> usize {
        self.map.get(key).copied().unwrap_or(self.default_value)
    }

    #[inline]
    fn set(&mut self, key: &str, value: usize) {
        match self.map.get_mut(key) {
            Some(v) => *v = value,
            None => {
                self.map.insert(CompactString::from(key), value);
            }
        }
    }

    #[inline]
    fn remove(&mut self, key: &str) -> Result<usize> {
        self.map
            .remove(key)
            .ok_or_else(|| Error::NotFound(CompactString::from(key)))
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    fn increment(&mut self, key: &str) {
        match self.map.get_mut(key) {
            Some(v) => *v += 1,
            None => {
                self.map
                    .insert(CompactString::from(key), self.default_value + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value() {
        let mut table = StdCountTable::with_default_value(3);
        assert_eq!(table.get("a"), 3);
        table.increment("a");
        assert_eq!(table.get("a"), 4);
        assert_eq!(table.len(), 1);
    }
}
