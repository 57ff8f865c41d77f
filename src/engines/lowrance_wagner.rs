//! Full-matrix Damerau-Levenshtein distance (Lowrance & Wagner, 1975).
//!
//! "Algorithm S" from *An Extension of the String-to-String Correction
//! Problem* (JACM 22:2). H[i][j] is the distance between the first `i`
//! symbols of `a` and the first `j` symbols of `b`. Besides the usual
//! substitution, insertion and deletion predecessors, each cell considers the
//! cheapest transposition ending there, located through two last-occurrence
//! indices:
//!
//! - `last_row[c]`: the last row (1-based) whose symbol in `a` is `c`,
//!   covering rows strictly above the one being filled;
//! - `last_col`: the last column (1-based) in the current row where `b`
//!   matched `a[i - 1]`, covering columns strictly left of the current one.
//!
//! Symbols between the transposed pair are paid for as deletions and
//! insertions, so this computes the *unrestricted* distance. O(m·n) time and
//! space; no early exit. This is the baseline the banded engines are checked
//! against.

use crate::error::DlError;
use crate::traits::DistanceEngine;

/// Stateless full-matrix engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowranceWagner;

impl DistanceEngine for LowranceWagner {
    fn name(&self) -> &'static str {
        "lw"
    }

    fn distance(&mut self, a: &[u8], b: &[u8], verbose: bool) -> Result<usize, DlError> {
        let h = fill_matrix(a, b);
        if verbose {
            tracing::debug!(
                m = a.len(),
                n = b.len(),
                "distance matrix:\n{}",
                render(&h)
            );
        }
        Ok(h[a.len()][b.len()])
    }
}

/// Damerau-Levenshtein distance between `a` and `b` by the full matrix.
///
/// ```
/// use dl_engines::lowrance_wagner;
///
/// assert_eq!(lowrance_wagner(b"kitten", b"sitting"), 3);
/// assert_eq!(lowrance_wagner(b"ab", b"ba"), 1);
/// ```
pub fn lowrance_wagner(a: &[u8], b: &[u8]) -> usize {
    fill_matrix(a, b)[a.len()][b.len()]
}

fn fill_matrix(a: &[u8], b: &[u8]) -> Vec<Vec<usize>> {
    let m = a.len();
    let n = b.len();
    let inf = m + n + 1;

    let mut last_row = [0usize; 256];
    let mut h = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in h.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        h[0][j] = j;
    }

    for i in 1..=m {
        let mut last_col = 0usize;
        for j in 1..=n {
            let i1 = last_row[b[j - 1] as usize];
            let j1 = last_col;
            let cost = if a[i - 1] == b[j - 1] {
                last_col = j;
                0
            } else {
                1
            };

            let substitute = h[i - 1][j - 1] + cost;
            let insert = h[i][j - 1] + 1;
            let delete = h[i - 1][j] + 1;
            let transpose = if i1 > 0 && j1 > 0 {
                h[i1 - 1][j1 - 1] + (i - i1 - 1) + 1 + (j - j1 - 1)
            } else {
                inf
            };

            h[i][j] = substitute.min(insert).min(delete).min(transpose);
        }
        last_row[a[i - 1] as usize] = i;
    }
    h
}

fn render(h: &[Vec<usize>]) -> String {
    let mut out = String::new();
    for row in h {
        out.push('|');
        for v in row {
            out.push_str(&format!(" {v} |"));
        }
        out.push('\n');
    }
    out
}
