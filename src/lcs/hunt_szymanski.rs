//! Hunt-Szymanski threshold algorithm.
//!
//! J. W. Hunt and T. G. Szymanski, "A Fast Algorithm for Computing Longest
//! Common Subsequences", Communications of the ACM 20(5), 1977. Runs in
//! `O((r + n) log n)` where `r` is the number of matching pairs, which
//! beats the quadratic methods whenever matches are sparse.

use crate::lcs::chain::ChainArena;
use crate::lcs::matchlist::{MatchLists, MatchOrder};
use crate::lcs::MatchPair;

/// Longest common subsequence by the threshold method.
pub fn lcs<T: Ord>(a: &[T], b: &[T]) -> Vec<MatchPair> {
    let m = a.len();
    let n = b.len();
    let lists = MatchLists::build(a, b, MatchOrder::Descending);

    // thresh[k]: lowest b position closing a common subsequence of length
    // k over the rows seen so far; n + 1 marks lengths not reached yet.
    // The filled prefix is strictly increasing, so every match belongs to
    // exactly one slot.
    let mut thresh = vec![n + 1; m + 1];
    thresh[0] = 0;
    let mut link: Vec<Option<usize>> = vec![None; m + 1];
    let mut arena = ChainArena::new();

    for i in 1..=m {
        // Descending match order: a row's own writes land at or above the
        // slot of every candidate still to come, so link[k - 1] always
        // predates row i.
        for &j in lists.for_line(i) {
            let k = thresh.partition_point(|&t| t < j);
            debug_assert!(thresh[k - 1] < j && j <= thresh[k]);
            if j < thresh[k] {
                thresh[k] = j;
                link[k] = Some(arena.push(i, j, link[k - 1]));
            }
        }
    }

    let mut k = 0;
    while k < m && thresh[k + 1] != n + 1 {
        k += 1;
    }
    arena.backtrack(link[k])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn classic_example() {
        let a = chars("XMJYAUZ");
        let b = chars("MZJAWXU");
        let pairs = lcs(&a, &b);
        assert_eq!(pairs.len(), 4);
        for pair in &pairs {
            assert_eq!(a[pair.a - 1], b[pair.b - 1]);
        }
    }

    #[test]
    fn subsequence_of_the_other() {
        let a = chars("abcdef");
        let b = chars("bdf");
        let pairs = lcs(&a, &b);
        let picked: Vec<(usize, usize)> = pairs.iter().map(|p| (p.a, p.b)).collect();
        assert_eq!(picked, vec![(2, 1), (4, 2), (6, 3)]);
    }

    #[test]
    fn duplicate_heavy_inputs() {
        let a = chars("aabbaabb");
        let b = chars("ababab");
        let pairs = lcs(&a, &b);
        assert_eq!(pairs.len(), 5);
        for w in pairs.windows(2) {
            assert!(w[0].a < w[1].a && w[0].b < w[1].b);
        }
    }
}
