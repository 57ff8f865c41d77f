//! Test cases and the corpus files they are read from.
//!
//! A corpus is plain text with one case per line: three tab-separated fields
//! `A`, `B` and their known distance in base 10. Empty lines and lines
//! starting with `#` are ignored:
//!
//! ```text
//! # Test file:
//! a	b	1
//! kitten	sitting	3
//! ```
//!
//! Fields are raw bytes. Only `\t`, `\n` and a trailing `\r` are structural.

use std::fs;
use std::path::Path;

use crate::error::DlError;

/// A pair of sequences with their known distance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub a: Vec<u8>,
    pub b: Vec<u8>,
    pub expected: usize,
}

impl TestCase {
    pub fn new(a: &[u8], b: &[u8], expected: usize) -> Self {
        Self {
            a: a.to_vec(),
            b: b.to_vec(),
            expected,
        }
    }

    /// The same case with the shorter sequence first.
    pub fn canonical(self) -> Self {
        if self.a.len() > self.b.len() {
            Self {
                a: self.b,
                b: self.a,
                expected: self.expected,
            }
        } else {
            self
        }
    }
}

/// Parse corpus text; `origin` labels parse errors.
///
/// Every returned case has `a.len() <= b.len()`.
///
/// ```
/// use dl_engines::corpus::parse_corpus;
///
/// let cases = parse_corpus(b"# demo\nsitting\tkitten\t3\n\n", "demo").unwrap();
/// assert_eq!(cases.len(), 1);
/// assert_eq!(cases[0].a, b"kitten");
/// assert_eq!(cases[0].expected, 3);
/// ```
pub fn parse_corpus(text: &[u8], origin: &str) -> Result<Vec<TestCase>, DlError> {
    let mut cases = Vec::new();
    for (idx, raw) in text.split(|&c| c == b'\n').enumerate() {
        let line = raw.strip_suffix(b"\r").unwrap_or(raw);
        if line.is_empty() || line[0] == b'#' {
            continue;
        }
        cases.push(parse_line(line, origin, idx + 1)?.canonical());
    }
    Ok(cases)
}

/// Read and parse a corpus file.
pub fn read_corpus(path: impl AsRef<Path>) -> Result<Vec<TestCase>, DlError> {
    let path = path.as_ref();
    let text = fs::read(path).map_err(|source| DlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = parse_corpus(&text, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), cases = cases.len(), "read corpus");
    Ok(cases)
}

fn parse_line(line: &[u8], origin: &str, lineno: usize) -> Result<TestCase, DlError> {
    let mut fields = line.splitn(3, |&c| c == b'\t');
    let a = fields.next().unwrap_or_default();
    let b = fields
        .next()
        .ok_or_else(|| DlError::parse(origin, lineno, "expected a tab after the first string"))?;
    let d = fields
        .next()
        .ok_or_else(|| DlError::parse(origin, lineno, "expected a tab after the second string"))?;

    let digits = std::str::from_utf8(d.trim_ascii())
        .map_err(|_| DlError::parse(origin, lineno, "distance is not ASCII"))?;
    let expected = digits.parse::<usize>().map_err(|_| {
        DlError::parse(
            origin,
            lineno,
            format!("`{digits}' is not a non-negative base-10 integer"),
        )
    })?;
    Ok(TestCase::new(a, b, expected))
}
