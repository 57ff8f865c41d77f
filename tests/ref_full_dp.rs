use std::collections::{HashSet, VecDeque};

use dl_engines::{berghel_roach, lowrance_wagner, ukkonen};
use proptest::prelude::*;

/// Full-table restricted distance: transpositions only of symbols adjacent in
/// both strings, no edits between them.
fn full_restricted(s: &[u8], t: &[u8]) -> usize {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=m {
        dp[0][j] = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = if s[i - 1] == t[j - 1] { 0 } else { 1 };
            let mut best = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && s[i - 1] == t[j - 2] && s[i - 2] == t[j - 1] {
                best = best.min(dp[i - 2][j - 2] + 1);
            }
            dp[i][j] = best;
        }
    }
    dp[n][m]
}

/// Unrestricted distance by breadth-first search over single edits; only
/// practical for very short strings.
fn bfs_unrestricted(s: &[u8], t: &[u8]) -> usize {
    let mut alphabet: Vec<u8> = s.iter().chain(t.iter()).copied().collect();
    alphabet.sort_unstable();
    alphabet.dedup();
    let max_len = s.len().max(t.len()) + 2;

    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(s.to_vec());
    queue.push_back((s.to_vec(), 0usize));
    while let Some((cur, d)) = queue.pop_front() {
        if cur == t {
            return d;
        }
        let mut next = Vec::new();
        for i in 0..cur.len() {
            let mut del = cur.clone();
            del.remove(i);
            next.push(del);
            for &c in &alphabet {
                if c != cur[i] {
                    let mut sub = cur.clone();
                    sub[i] = c;
                    next.push(sub);
                }
            }
            if i + 1 < cur.len() {
                let mut swp = cur.clone();
                swp.swap(i, i + 1);
                next.push(swp);
            }
        }
        if cur.len() < max_len {
            for i in 0..=cur.len() {
                for &c in &alphabet {
                    let mut ins = cur.clone();
                    ins.insert(i, c);
                    next.push(ins);
                }
            }
        }
        for cand in next {
            if seen.insert(cand.clone()) {
                queue.push_back((cand, d + 1));
            }
        }
    }
    unreachable!("target is always reachable")
}

#[test]
fn references_agree_on_textbook_cases() {
    assert_eq!(full_restricted(b"ca", b"abc"), 3);
    assert_eq!(bfs_unrestricted(b"ca", b"abc"), 2);
    assert_eq!(bfs_unrestricted(b"ab", b"ba"), 1);
    assert_eq!(full_restricted(b"ab", b"ba"), 1);
}

proptest! {
    #[test]
    fn banded_engines_match_full_restricted(a in "[abc]{0,10}", b in "[abc]{0,10}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        let expected = full_restricted(s, t);
        prop_assert_eq!(ukkonen(s, t), expected);
        prop_assert_eq!(berghel_roach(s, t), expected);
    }

    #[test]
    fn banded_engines_match_on_wider_alphabet(a in "[ACGT]{0,24}", b in "[ACGT]{0,24}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        prop_assert_eq!(berghel_roach(s, t), ukkonen(s, t));
        prop_assert_eq!(ukkonen(s, t), full_restricted(s, t));
    }

    #[test]
    fn matrix_matches_exhaustive_search(a in "[abc]{0,4}", b in "[abc]{0,4}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        prop_assert_eq!(lowrance_wagner(s, t), bfs_unrestricted(s, t));
    }

    #[test]
    fn matrix_never_exceeds_banded(a in "[abc]{0,10}", b in "[abc]{0,10}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        prop_assert!(lowrance_wagner(s, t) <= berghel_roach(s, t));
    }
}
