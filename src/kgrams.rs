/// Writes into `out` the `len` chars of `chars` starting at `offset`.
///
/// If the slice runs past the end, the missing part is filled once from
/// the start of `chars`, so for `chars.len() < len` the result is shorter.
#[inline]
pub(crate) fn wrapped_substring(out: &mut String, chars: &[char], offset: usize, len: usize) {
    debug_assert!(offset < chars.len(), "offset {offset} out of range");

    out.clear();
    let end = offset.saturating_add(len).min(chars.len());
    out.extend(&chars[offset..end]);
    let missing = len - (end - offset);
    out.extend(&chars[..missing.min(chars.len())]);
}

/// Reusable buffers for the k-string and the k+1-string of each offset
#[derive(Debug, Default)]
pub(crate) struct KgramPair {
    pub(crate) k: String,
    pub(crate) k_plus_one: String,
}

impl KgramPair {
    #[inline]
    pub(crate) fn fill(&mut self, chars: &[char], offset: usize, order: usize) {
        wrapped_substring(&mut self.k, chars, offset, order);
        wrapped_substring(&mut self.k_plus_one, chars, offset, order.saturating_add(1));
    }
}
