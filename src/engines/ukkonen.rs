//! Expanding-band Damerau-Levenshtein distance (Ukkonen, 1985).
//!
//! Algorithm (11) of *Algorithms for Approximate String Matching*
//! (Information & Control 64), with the transposition extension of its
//! section 4. Instead of filling the m×n matrix, the engine computes the
//! diagonal function f(k, p) for p = 0, 1, 2, ... and stops at the first `p`
//! where diagonal n - m reaches row m. That `p` is the distance.
//!
//! Round `p` probes diagonals `k` with |k| ≤ p, clipped to [-m, n]. Once
//! r = p - min(m, n) turns positive, every diagonal with |k| < r has already
//! run to its last row and is never read again, so the interior of the band
//! is skipped. The target diagonal is never skipped because the distance is
//! at most max(m, n), which keeps r ≤ |n - m| in every round that runs.
//!
//! The transposition step only pairs symbols that are adjacent in both
//! strings, so the result is the restricted distance. It can exceed
//! [`lowrance_wagner`](fn@super::lowrance_wagner) when an optimal script edits
//! between transposed symbols.
//!
//! Time O(s·min(m, n)) expected. The table is allocated per call.

use crate::error::DlError;
use crate::table::{DiagonalTable, UNREACHED};
use crate::traits::DistanceEngine;
use crate::utils::diagonal_end;

/// Stateless expanding-band engine; allocates a fresh table per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ukkonen;

impl DistanceEngine for Ukkonen {
    fn name(&self) -> &'static str {
        "uk"
    }

    fn distance(&mut self, a: &[u8], b: &[u8], verbose: bool) -> Result<usize, DlError> {
        let (d, table) = fill(a, b);
        if verbose {
            tracing::debug!(
                m = a.len(),
                n = b.len(),
                distance = d,
                "f(k,p):\n{table}"
            );
        }
        Ok(d)
    }
}

/// Damerau-Levenshtein distance between `a` and `b` by the expanding band.
///
/// ```
/// use dl_engines::ukkonen;
///
/// assert_eq!(ukkonen(b"kitten", b"sitting"), 3);
/// assert_eq!(ukkonen(b"", b"abc"), 3);
/// ```
pub fn ukkonen(a: &[u8], b: &[u8]) -> usize {
    fill(a, b).0
}

pub(crate) fn fill(a: &[u8], b: &[u8]) -> (usize, DiagonalTable) {
    let m = a.len() as isize;
    let n = b.len() as isize;
    let target = n - m;
    let mut table = DiagonalTable::new(a.len().max(b.len()));

    let mut p: isize = -1;
    let mut r = p - m.min(n);
    while table.get(target, p) != m {
        p += 1;
        r += 1;
        let lo = (-m).max(-p);
        let hi = n.min(p);
        if r <= 0 {
            for k in lo..=hi {
                let t = probe(a, b, &table, k, p);
                table.set(k, p, t);
            }
        } else {
            for k in lo..=-r {
                let t = probe(a, b, &table, k, p);
                table.set(k, p, t);
            }
            for k in r..=hi {
                let t = probe(a, b, &table, k, p);
                table.set(k, p, t);
            }
        }
    }
    (p as usize, table)
}

/// f(k, p) from round p - 1.
fn probe(a: &[u8], b: &[u8], table: &DiagonalTable, k: isize, p: isize) -> isize {
    let m = a.len() as isize;
    let n = b.len() as isize;
    let neighbour = |k: isize| {
        if k < -m || k > n {
            UNREACHED
        } else {
            table.get(k, p - 1)
        }
    };

    let mut t = table.get(k, p - 1) + 1;
    let mut swapped = t;
    if t > 0 && t < m && k + t - 1 >= 0 && k + t < n {
        let (ut, uk) = (t as usize, (k + t) as usize);
        if a[ut - 1] == b[uk] && a[ut] == b[uk - 1] {
            swapped = t + 1;
        }
    }
    let end = diagonal_end(m, n, k);
    t = t
        .max(neighbour(k - 1))
        .max(neighbour(k + 1) + 1)
        .max(swapped)
        .min(end);

    debug_assert!(t >= 0 && t + k >= 0, "probe left the band at f({k}, {p})");
    while t < end && a[t as usize] == b[(t + k) as usize] {
        t += 1;
    }
    t
}
