//! Shared preprocessing for the threshold engines.
//!
//! Both Hunt-Szymanski and Kuo-Cross start from the same structure: for each
//! line of `a`, the positions in `b` holding an equal value. Building it
//! takes one sort of each sequence and a linear merge, so the whole
//! preprocessing is `O((m + n) log(m + n))` regardless of how many matches
//! exist.

/// Tags each element with its 1-based position, then orders by value with
/// position as the tie-break. Equal values end up adjacent, positions
/// ascending within each run.
pub(crate) fn by_value<T: Ord>(seq: &[T]) -> Vec<(usize, &T)> {
    let mut tagged: Vec<(usize, &T)> = seq.iter().enumerate().map(|(i, v)| (i + 1, v)).collect();
    tagged.sort_by(|x, y| x.1.cmp(y.1).then(x.0.cmp(&y.0)));
    tagged
}

/// Requested ordering of each per-line match list.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchOrder {
    /// Positions in `b` ascending (Kuo-Cross).
    Ascending,
    /// Positions in `b` descending (Hunt-Szymanski).
    Descending,
}

/// For every line of `a`, the positions in `b` with an equal value.
///
/// Lines of `a` sharing a value also share one physical list; `by_line`
/// maps each 1-based `a` position to a list id, with id 0 reserved for the
/// shared empty list.
pub(crate) struct MatchLists {
    by_line: Vec<usize>,
    lists: Vec<Vec<usize>>,
}

impl MatchLists {
    /// Builds the match lists by merging the two value-sorted sequences.
    pub(crate) fn build<T: Ord>(a: &[T], b: &[T], order: MatchOrder) -> MatchLists {
        let sa = by_value(a);
        let sb = by_value(b);
        let mut by_line = vec![0usize; a.len() + 1];
        let mut lists: Vec<Vec<usize>> = vec![Vec::new()];

        let mut ia = 0;
        let mut ib = 0;
        while ia < sa.len() && ib < sb.len() {
            if sa[ia].1 < sb[ib].1 {
                ia += 1;
            } else if sa[ia].1 > sb[ib].1 {
                ib += 1;
            } else {
                // Collect the full run of equal values in b once, then hand
                // the same list id to every a line carrying that value.
                let mut cols: Vec<usize> = Vec::new();
                let value = sa[ia].1;
                while ib < sb.len() && sb[ib].1 == value {
                    cols.push(sb[ib].0);
                    ib += 1;
                }
                if order == MatchOrder::Descending {
                    cols.reverse();
                }
                let id = lists.len();
                lists.push(cols);
                while ia < sa.len() && sa[ia].1 == value {
                    by_line[sa[ia].0] = id;
                    ia += 1;
                }
            }
        }

        MatchLists { by_line, lists }
    }

    /// The match positions for the 1-based `a` line `i`.
    pub(crate) fn for_line(&self, i: usize) -> &[usize] {
        &self.lists[self.by_line[i]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_value_orders_by_value_then_position() {
        let seq = ["b", "a", "b", "a"];
        let sorted = by_value(&seq);
        let flat: Vec<(usize, &str)> = sorted.iter().map(|&(i, v)| (i, *v)).collect();
        assert_eq!(flat, vec![(2, "a"), (4, "a"), (1, "b"), (3, "b")]);
    }

    #[test]
    fn lines_without_matches_share_the_empty_list() {
        let a = ["x", "y", "x"];
        let b = ["q", "r"];
        let lists = MatchLists::build(&a, &b, MatchOrder::Ascending);
        for i in 1..=a.len() {
            assert!(lists.for_line(i).is_empty());
        }
    }

    #[test]
    fn equal_lines_share_one_list() {
        let a = ["a", "b", "a"];
        let b = ["a", "a", "b"];
        let lists = MatchLists::build(&a, &b, MatchOrder::Ascending);
        assert_eq!(lists.for_line(1), &[1, 2]);
        assert_eq!(lists.for_line(3), &[1, 2]);
        assert_eq!(lists.for_line(2), &[3]);
        // Same id, not just equal contents.
        assert_eq!(lists.by_line[1], lists.by_line[3]);
    }

    #[test]
    fn descending_order_reverses_each_run() {
        let a = ["a"];
        let b = ["a", "b", "a", "a"];
        let lists = MatchLists::build(&a, &b, MatchOrder::Descending);
        assert_eq!(lists.for_line(1), &[4, 3, 1]);
    }
}
