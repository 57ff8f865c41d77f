//! Diagonal function table f(k, p) for the banded engines.
//!
//! Diagonal `k` is the set of cells (i, j) with j - i = k, and `p` counts the
//! differences spent so far. f(k, p) is the furthest row reached on diagonal
//! `k` with exactly `p` differences. Both coordinates run over negative values
//! (k ∈ [-L, L], p ∈ [-1, L] for strings no longer than L), so storage is a
//! dense row-major buffer addressed through a fixed zero offset.
//!
//! A freshly built table is *seeded*: each diagonal's starting point
//! f(k, |k| - 1) holds the virtual row just before the diagonal's first cell
//! (`|k| - 1` below the main diagonal, `-1` on and above it). Every other cell
//! holds [`UNREACHED`].

use std::fmt;

/// Sentinel for "this (k, p) combination has not been reached".
///
/// Smaller than any reachable row, with enough headroom that `UNREACHED + 1`
/// cannot overflow and still loses every maximisation.
pub const UNREACHED: isize = isize::MIN / 4;

/// Offset-indexed f(k, p) storage, reusable across comparisons.
///
/// ```
/// use dl_engines::table::{DiagonalTable, UNREACHED};
///
/// let table = DiagonalTable::new(3);
/// assert_eq!(table.get(0, -1), -1);
/// assert_eq!(table.get(-2, 1), 1);
/// assert_eq!(table.get(2, 2), UNREACHED);
/// // Reads outside the declared extent are unreached, never a panic.
/// assert_eq!(table.get(9, 0), UNREACHED);
/// ```
#[derive(Clone, Debug)]
pub struct DiagonalTable {
    capacity: usize,
    zero_k: isize,
    width: usize,
    cells: Vec<isize>,
}

impl DiagonalTable {
    /// Build a seeded table able to hold any pair whose longer string has at
    /// most `capacity` symbols.
    pub fn new(capacity: usize) -> Self {
        let rows = 2 * capacity + 1;
        let width = capacity + 2;
        let mut table = Self {
            capacity,
            zero_k: capacity as isize,
            width,
            cells: vec![UNREACHED; rows * width],
        };
        table.seed();
        table
    }

    /// Longest string length this table supports.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Restore the freshly seeded state, discarding every computed value.
    pub fn reset(&mut self) {
        self.cells.fill(UNREACHED);
        self.seed();
    }

    /// Read f(k, p); any coordinate outside the table is [`UNREACHED`].
    #[inline]
    pub fn get(&self, k: isize, p: isize) -> isize {
        match self.index(k, p) {
            Some(idx) => self.cells[idx],
            None => UNREACHED,
        }
    }

    /// Write f(k, p).
    ///
    /// # Panics
    /// Panics if (k, p) lies outside the table. The engines check capacity
    /// up front, so this only fires on a banding bug.
    #[inline]
    pub fn set(&mut self, k: isize, p: isize, value: isize) {
        let idx = self.index(k, p).unwrap_or_else(|| {
            panic!(
                "f({k}, {p}) outside diagonal table of capacity {}",
                self.capacity
            )
        });
        self.cells[idx] = value;
    }

    fn index(&self, k: isize, p: isize) -> Option<usize> {
        let row = k + self.zero_k;
        let col = p + 1;
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row > 2 * self.capacity || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    fn seed(&mut self) {
        let cap = self.capacity as isize;
        for k in -cap..=cap {
            let abs_k = k.abs();
            let start = if k < 0 { abs_k - 1 } else { -1 };
            // |k| - 1 <= capacity - 1, always inside the p extent.
            self.set(k, abs_k - 1, start);
        }
    }
}

impl fmt::Display for DiagonalTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cap = self.capacity as isize;
        for k in -cap..=cap {
            write!(f, "k={k:>4} |")?;
            for p in -1..=cap {
                match self.get(k, p) {
                    UNREACHED => write!(f, "    .")?,
                    v => write!(f, " {v:>4}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
