//! Candidate chains stored in an index arena.
//!
//! Every engine finishes holding the rightmost candidate of the longest
//! subsequence and walks predecessor links to recover the full match list.
//! Several live chains can share a tail, so nodes are immutable once
//! pushed; a chain is just an index plus the `prev` links behind it.

use crate::lcs::MatchPair;

#[derive(Clone, Copy)]
struct ChainNode {
    a: usize,
    b: usize,
    prev: Option<usize>,
}

/// Append-only arena of candidate nodes.
pub(crate) struct ChainArena {
    nodes: Vec<ChainNode>,
}

impl ChainArena {
    pub(crate) fn new() -> ChainArena {
        ChainArena { nodes: Vec::new() }
    }

    /// Adds a candidate matching `a` line `a` with `b` line `b`, chained
    /// after `prev`. Returns its index.
    pub(crate) fn push(&mut self, a: usize, b: usize, prev: Option<usize>) -> usize {
        self.nodes.push(ChainNode { a, b, prev });
        self.nodes.len() - 1
    }

    /// The `b` position of the candidate at `ix`.
    pub(crate) fn b(&self, ix: usize) -> usize {
        self.nodes[ix].b
    }

    /// Walks the chain ending at `head` and returns its pairs in ascending
    /// order. Origin sentinels (candidates with `a == 0`) are dropped.
    pub(crate) fn backtrack(&self, head: Option<usize>) -> Vec<MatchPair> {
        let mut pairs = Vec::new();
        let mut cur = head;
        while let Some(ix) = cur {
            let node = self.nodes[ix];
            if node.a > 0 {
                pairs.push(MatchPair {
                    a: node.a,
                    b: node.b,
                });
            }
            cur = node.prev;
        }
        pairs.reverse();
        pairs
    }
}
