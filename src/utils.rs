//! Assorted utilities and helpers.

use crate::corpus::TestCase;

/// Longest string across a corpus.
///
/// A tight-band table of this capacity serves every case in the corpus, so
/// the runner builds one and reuses it for the whole batch.
pub fn max_sequence_len(cases: &[TestCase]) -> usize {
    cases
        .iter()
        .map(|tc| tc.a.len().max(tc.b.len()))
        .max()
        .unwrap_or(0)
}

/// Last row on diagonal `k` when comparing strings of length `m` and `n`.
#[inline]
pub(crate) fn diagonal_end(m: isize, n: isize, k: isize) -> isize {
    m.min(n - k)
}
