//! Hunt-McIlroy candidate merge.
//!
//! J. W. Hunt and M. D. McIlroy, "An Algorithm for Differential File
//! Comparison", Bell Labs Computing Science Technical Report #41, 1976.
//! This is the algorithm behind the original Unix `diff`: a table of
//! k-candidates, one slot per subsequence length, merged row by row
//! against the value-sorted lines of the second sequence.

use crate::lcs::chain::ChainArena;
use crate::lcs::matchlist::by_value;
use crate::lcs::MatchPair;

/// Longest common subsequence by candidate merge.
pub fn lcs<T: Ord>(a: &[T], b: &[T]) -> Vec<MatchPair> {
    let m = a.len();
    let n = b.len();

    // V: b positions ordered by (value, position). e_last[t] says the run
    // of equal values ends just before 0-based entry t, with sentinels at
    // both ends, so a run starts at t exactly when e_last[t] holds.
    let v = by_value(b);
    let mut e_last = vec![true; n + 1];
    for t in 1..n {
        e_last[t] = v[t - 1].1 != v[t].1;
    }

    // p[i]: 1-based index into V of the first entry equal to a[i], or 0
    // when a[i] never occurs in b.
    let mut p = vec![0usize; m + 1];
    for i in 1..=m {
        let t = v.partition_point(|&(_, value)| value < &a[i - 1]);
        debug_assert!(e_last[t]);
        if t < n && *v[t].1 == a[i - 1] {
            p[i] = t + 1;
        }
    }

    // slots[s] holds the best s-candidate; slots[k + 1] is the fence, a
    // pseudo-candidate past both sequences that every real position
    // undercuts.
    let mut arena = ChainArena::new();
    let origin = arena.push(0, 0, None);
    let fence = arena.push(m + 1, n + 1, None);
    let mut slots = vec![origin, fence];
    let mut k = 0usize;

    for i in 1..=m {
        if p[i] != 0 {
            merge(&mut arena, &mut slots, &mut k, i, &v, p[i], &e_last);
        }
    }

    arena.backtrack(Some(slots[k]))
}

/// Folds the matches of row `i` into the candidate table.
///
/// The candidate destined for slot `r` is held in `c` and written only
/// once every read against the previous table state is done; otherwise a
/// candidate created by this row could chain to another from the same row.
fn merge<T: Ord>(
    arena: &mut ChainArena,
    slots: &mut Vec<usize>,
    k: &mut usize,
    i: usize,
    v: &[(usize, &T)],
    p: usize,
    e_last: &[bool],
) {
    let mut r = 0usize;
    let mut c = slots[0];
    let mut p = p;
    loop {
        let j = v[p - 1].0;
        // Largest s in r..=k with slots[s].b < j, when one exists. Matches
        // arrive in ascending j, so slots below r are settled for this row.
        let below = slots[r..=*k].partition_point(|&ix| arena.b(ix) < j);
        if below > 0 {
            let s = r + below - 1;
            if j < arena.b(slots[s + 1]) {
                let prev = slots[s];
                slots[r] = c;
                r = s + 1;
                c = arena.push(i, j, Some(prev));
            }
            if s == *k {
                let fence = slots[*k + 1];
                slots.push(fence);
                *k += 1;
                break;
            }
        }
        if e_last[p] {
            break;
        }
        p += 1;
    }
    slots[r] = c;
}
