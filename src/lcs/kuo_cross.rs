//! Kuo-Cross threshold algorithm.
//!
//! S. Kuo and G. R. Cross, "An Improved Algorithm to Find the Length of
//! the Longest Common Subsequence of Two Strings", ACM SIGIR Forum
//! 23(3-4), 1989. A reworking of Hunt-Szymanski: match lists run
//! ascending, so one pointer sweeps the threshold array across each row
//! instead of binary-searching the whole array per candidate. The
//! modified variant bisects the unswept tail instead, which pays off when
//! rows are long but their matches are few.

use crate::lcs::chain::ChainArena;
use crate::lcs::matchlist::{MatchLists, MatchOrder};
use crate::lcs::MatchPair;

/// How a row sweep locates the slot for the next candidate.
#[derive(Clone, Copy)]
enum Advance {
    Linear,
    Bisect,
}

/// Longest common subsequence by the published linear-sweep form.
pub fn lcs<T: Ord>(a: &[T], b: &[T]) -> Vec<MatchPair> {
    threshold_lcs(a, b, Advance::Linear)
}

/// Longest common subsequence with a bisecting sweep.
///
/// Pair for pair the output is identical to [`lcs`]: both sweeps land on
/// the one slot `k` with `thresh[k - 1] < j <= thresh[k]` and apply the
/// same update there.
pub fn lcs_modified<T: Ord>(a: &[T], b: &[T]) -> Vec<MatchPair> {
    threshold_lcs(a, b, Advance::Bisect)
}

fn threshold_lcs<T: Ord>(a: &[T], b: &[T], advance: Advance) -> Vec<MatchPair> {
    let m = a.len();
    let n = b.len();
    let lists = MatchLists::build(a, b, MatchOrder::Ascending);

    // thresh[k]: lowest b position closing a common subsequence of length
    // k over the rows seen so far; n + 1 marks lengths not reached yet.
    let mut thresh = vec![n + 1; m + 1];
    thresh[0] = 0;
    let mut link: Vec<Option<usize>> = vec![None; m + 1];
    let mut arena = ChainArena::new();

    for i in 1..=m {
        let mut k = 0;
        // Pre-update value of the last slot visited. Later candidates at
        // or below it would land in the same slot with a higher position,
        // so they are skipped outright.
        let mut guard = 0;
        // Candidates arrive ascending, so the pending link write must be
        // deferred: link[k - 1] is read against the previous row state
        // before the held candidate of this row is flushed to link[r].
        let mut r = 0;
        let mut held = link[0];
        for &j in lists.for_line(i) {
            if j <= guard {
                continue;
            }
            match advance {
                Advance::Linear => {
                    k += 1;
                    while j > thresh[k] {
                        k += 1;
                    }
                }
                Advance::Bisect => {
                    k += thresh[k..].partition_point(|&t| t < j);
                }
            }
            debug_assert!(thresh[k - 1] < j && j <= thresh[k]);
            guard = thresh[k];
            if j < guard {
                thresh[k] = j;
                let prev = link[k - 1];
                link[r] = held;
                r = k;
                held = Some(arena.push(i, j, prev));
            }
        }
        link[r] = held;
    }

    let mut k = 0;
    while k < m && thresh[k + 1] != n + 1 {
        k += 1;
    }
    arena.backtrack(link[k])
}
