//! Unified-format hunks over a match list.
//!
//! Everything the match list skips is a change. Changes closer together
//! than twice the context width share a hunk; each hunk carries the
//! surrounding common lines and formats itself in `diff -u` form, header
//! line included.

use std::fmt;

use log::debug;

use crate::lcs::MatchPair;

/// Default number of common lines shown on each side of a change.
pub const CONTEXT: usize = 3;

/// Sentinel pair the hunk scan cannot step past.
const BOUND: usize = usize::MAX;

/// One body line of a hunk, tagged the way `diff -u` prints it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunkLine<'a> {
    /// Present in both sequences, printed with a leading space.
    Context(&'a str),
    /// Present only in the first sequence, printed with `-`.
    Deleted(&'a str),
    /// Present only in the second sequence, printed with `+`.
    Inserted(&'a str),
}

/// One `@@`-delimited block of a unified diff.
///
/// Starts are 1-based; a side whose count is zero names the line its
/// change sits behind instead, which is how `@@ -0,0 +1 @@` arises when
/// text is added to an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<'a> {
    pub a_start: usize,
    pub a_count: usize,
    pub b_start: usize,
    pub b_count: usize,
    pub lines: Vec<HunkLine<'a>>,
}

impl fmt::Display for Hunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "@@ -{} +{} @@",
            range(self.a_start, self.a_count),
            range(self.b_start, self.b_count)
        )?;
        for line in &self.lines {
            match line {
                HunkLine::Context(text) => writeln!(f, " {text}")?,
                HunkLine::Deleted(text) => writeln!(f, "-{text}")?,
                HunkLine::Inserted(text) => writeln!(f, "+{text}")?,
            }
        }
        Ok(())
    }
}

/// `diff -u` range notation: the count is omitted when it is exactly one.
fn range(start: usize, count: usize) -> String {
    if count == 1 {
        format!("{start}")
    } else {
        format!("{start},{count}")
    }
}

/// True when unmatched lines sit between pair `k` and pair `k + 1`.
fn at_change(ext: &[MatchPair], k: usize) -> bool {
    ext[k + 1].a - ext[k].a > 1 || ext[k + 1].b - ext[k].b > 1
}

/// Walks forward from pair `k` until a change opens or the tail sentinel
/// is next. Returns whether the scan ended, the pair reached, and how many
/// pairs it stepped over on the way.
fn next_change(ext: &[MatchPair], mut k: usize) -> (bool, usize, usize) {
    let mut common = 0;
    while ext[k + 1].a != BOUND && !at_change(ext, k) {
        k += 1;
        common += 1;
    }
    (ext[k + 1].a == BOUND, k, common)
}

/// Groups every change into context-bounded hunks.
///
/// `matches` must be an ascending match list over `a` and `b` as produced
/// by [`crate::lcs`]; `context` is the number of common lines kept on each
/// side of a change, with widths past the ends clamped to the input.
/// Identical sequences produce no hunks at all.
///
/// # Examples
///
/// ```
/// use lcsdiff::{lcs, unified};
///
/// let old = ["one", "two", "three"];
/// let new = ["one", "2", "three"];
/// let hunks = unified::hunks(&old, &new, &lcs(&old, &new), 1);
/// assert_eq!(hunks[0].to_string(), "@@ -1,3 +1,3 @@\n one\n-two\n+2\n three\n");
/// ```
pub fn hunks<'a>(
    a: &[&'a str],
    b: &[&'a str],
    matches: &[MatchPair],
    context: usize,
) -> Vec<Hunk<'a>> {
    if matches.len() == a.len() && matches.len() == b.len() {
        return Vec::new();
    }

    // Dummy pairs bracket the real ones: an origin, a pair one past both
    // sequences so trailing changes close like any other, and the bound.
    let mut ext = Vec::with_capacity(matches.len() + 3);
    ext.push(MatchPair { a: 0, b: 0 });
    ext.extend_from_slice(matches);
    ext.push(MatchPair {
        a: a.len() + 1,
        b: b.len() + 1,
    });
    ext.push(MatchPair { a: BOUND, b: BOUND });
    debug_assert!(
        ext[..ext.len() - 1]
            .windows(2)
            .all(|w| w[0].a < w[1].a && w[0].b < w[1].b),
        "match list must ascend within both sequences"
    );

    let mut result = Vec::new();
    let (mut end, mut first, _) = next_change(&ext, 0);
    debug_assert!(!end, "a non-identical pair of sequences has a change");
    while !end {
        // Stretch the hunk while the runs between changes are short enough
        // that their context windows would touch or overlap.
        let mut last = first;
        let (mut e, mut next, mut common) = next_change(&ext, last + 1);
        while !e && common < context.saturating_mul(2) {
            last = next;
            (e, next, common) = next_change(&ext, next + 1);
        }
        result.push(build(a, b, &ext, first, last, context));
        end = e;
        first = next;
    }
    debug!("grouped changes into {} hunks", result.len());
    result
}

/// Emits the hunk whose changes open at pairs `first..=last`.
fn build<'a>(
    a: &[&'a str],
    b: &[&'a str],
    ext: &[MatchPair],
    first: usize,
    last: usize,
    context: usize,
) -> Hunk<'a> {
    let begin = first.saturating_sub(context);
    let limit = (last + 1).saturating_add(context).min(ext.len() - 2);

    let mut a_start = ext[begin].a + 1;
    let a_count = ext[limit].a - a_start;
    let mut b_start = ext[begin].b + 1;
    let b_count = ext[limit].b - b_start;
    // An empty side names the line its change sits behind.
    if a_count == 0 {
        a_start -= 1;
    }
    if b_count == 0 {
        b_start -= 1;
    }

    let mut lines = Vec::new();
    for k in begin + 1..=limit {
        for t in ext[k - 1].a + 1..ext[k].a {
            lines.push(HunkLine::Deleted(a[t - 1]));
        }
        for t in ext[k - 1].b + 1..ext[k].b {
            lines.push(HunkLine::Inserted(b[t - 1]));
        }
        if k < limit {
            lines.push(HunkLine::Context(a[ext[k].a - 1]));
        }
    }

    Hunk {
        a_start,
        a_count,
        b_start,
        b_count,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcs::lcs;

    fn render(a: &[&str], b: &[&str], context: usize) -> String {
        hunks(a, b, &lcs(a, b), context)
            .iter()
            .map(Hunk::to_string)
            .collect()
    }

    #[test]
    fn replaced_line_keeps_context_on_both_sides() {
        let a = ["a", "b", "c"];
        let b = ["a", "x", "c"];
        assert_eq!(render(&a, &b, 3), "@@ -1,3 +1,3 @@\n a\n-b\n+x\n c\n");
    }

    #[test]
    fn insertion_widens_only_the_second_range() {
        let a = ["a", "c"];
        let b = ["a", "b", "c"];
        assert_eq!(render(&a, &b, 3), "@@ -1,2 +1,3 @@\n a\n+b\n c\n");
    }

    #[test]
    fn single_line_counts_drop_the_suffix() {
        let a = ["x"];
        let b = ["y"];
        assert_eq!(render(&a, &b, 3), "@@ -1 +1 @@\n-x\n+y\n");
    }

    #[test]
    fn empty_side_reports_start_zero() {
        let a: [&str; 0] = [];
        let b = ["a"];
        assert_eq!(render(&a, &b, 3), "@@ -0,0 +1 @@\n+a\n");
        assert_eq!(render(&b, &a, 3), "@@ -1 +0,0 @@\n-a\n");
    }

    #[test]
    fn zero_context_shows_changes_alone() {
        let a = ["a", "b", "c"];
        let b = ["a", "x", "c"];
        assert_eq!(render(&a, &b, 0), "@@ -2 +2 @@\n-b\n+x\n");
    }

    #[test]
    fn changes_within_twice_the_context_share_a_hunk() {
        let a = ["X", "c1", "c2", "c3", "c4", "c5", "c6", "Y"];
        let b = ["Z", "c1", "c2", "c3", "c4", "c5", "c6", "W"];
        let out = render(&a, &b, 3);
        assert_eq!(
            out,
            "@@ -1,8 +1,8 @@\n-X\n+Z\n c1\n c2\n c3\n c4\n c5\n c6\n-Y\n+W\n"
        );
    }

    #[test]
    fn changes_past_twice_the_context_split() {
        let a = ["X", "c1", "c2", "c3", "c4", "c5", "c6", "c7", "Y"];
        let b = ["Z", "c1", "c2", "c3", "c4", "c5", "c6", "c7", "W"];
        let out = render(&a, &b, 3);
        assert_eq!(
            out,
            "@@ -1,4 +1,4 @@\n-X\n+Z\n c1\n c2\n c3\n\
             @@ -6,4 +6,4 @@\n c5\n c6\n c7\n-Y\n+W\n"
        );
    }

    #[test]
    fn huge_context_is_clamped_to_the_input() {
        let a = ["a", "b", "c"];
        let b = ["a", "x", "c"];
        assert_eq!(render(&a, &b, usize::MAX), "@@ -1,3 +1,3 @@\n a\n-b\n+x\n c\n");
    }

    #[test]
    fn huge_context_merges_far_apart_changes() {
        let a = ["X", "c1", "c2", "c3", "c4", "c5", "c6", "c7", "Y"];
        let b = ["Z", "c1", "c2", "c3", "c4", "c5", "c6", "c7", "W"];
        assert_eq!(
            render(&a, &b, usize::MAX),
            "@@ -1,9 +1,9 @@\n-X\n+Z\n c1\n c2\n c3\n c4\n c5\n c6\n c7\n-Y\n+W\n"
        );
    }

    #[test]
    fn building_and_rendering_are_repeatable() {
        let a = ["a", "b", "c", "d"];
        let b = ["a", "x", "c", "y"];
        let m = lcs(&a, &b);
        assert_eq!(hunks(&a, &b, &m, 1), hunks(&a, &b, &m, 1));
        assert_eq!(render(&a, &b, 1), render(&a, &b, 1));
    }

    #[test]
    fn identical_sequences_produce_nothing() {
        let a = ["same", "lines"];
        assert!(hunks(&a, &a, &lcs(&a, &a), 3).is_empty());
        let empty: [&str; 0] = [];
        assert!(hunks(&empty, &empty, &lcs(&empty, &empty), 3).is_empty());
    }

    #[test]
    fn header_fields_match_the_rendered_ranges() {
        let a = ["keep", "old", "keep2"];
        let b = ["keep", "new", "keep2"];
        let hs = hunks(&a, &b, &lcs(&a, &b), 1);
        assert_eq!(hs.len(), 1);
        let h = &hs[0];
        assert_eq!((h.a_start, h.a_count), (1, 3));
        assert_eq!((h.b_start, h.b_count), (1, 3));
        assert_eq!(
            h.lines,
            vec![
                HunkLine::Context("keep"),
                HunkLine::Deleted("old"),
                HunkLine::Inserted("new"),
                HunkLine::Context("keep2"),
            ]
        );
    }

    #[test]
    fn truncated_tail_is_a_plain_deletion() {
        let a = ["a", "b", "c", "d"];
        let b = ["a", "b"];
        assert_eq!(render(&a, &b, 1), "@@ -2,3 +2 @@\n b\n-c\n-d\n");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "must ascend")]
    fn out_of_order_matches_are_rejected_in_debug() {
        let a = ["a", "b", "c"];
        let b = ["a", "b", "c"];
        let bad = [MatchPair { a: 2, b: 2 }, MatchPair { a: 1, b: 1 }];
        let _ = hunks(&a, &b, &bad, 1);
    }
}
