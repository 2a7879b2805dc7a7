//! Longest common subsequence engines.
//!
//! Every strategy honors the same contract: given sequences `a` and `b`,
//! return an ordered list of 1-based match pairs forming a longest common
//! subsequence. They differ in preprocessing cost, memory, and worst-case
//! work:
//!
//! - [`hunt_mcilroy`]: the 1976 candidate-merge algorithm behind the
//!   original `diff`,
//! - [`hunt_szymanski`]: the 1977 threshold-array algorithm,
//! - [`kuo_cross`]: the 1989 refinement of Hunt-Szymanski, plus a variant
//!   that binary-searches instead of stepping the threshold slot pointer.
//!
//! When several subsequences share the maximum length the engines may pick
//! different ones; each engine on its own is deterministic, which is what
//! the order-sensitive hunk builder in [`crate::unified`] requires.

pub mod hunt_mcilroy;
pub mod hunt_szymanski;
pub mod kuo_cross;

pub(crate) mod chain;
pub(crate) mod matchlist;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One matched pair of positions: `a[self.a - 1]` equals `b[self.b - 1]`.
///
/// Positions are 1-based, matching the classic presentation of the
/// algorithms; a full result is strictly increasing in both fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPair {
    /// 1-based position in the first sequence.
    pub a: usize,
    /// 1-based position in the second sequence.
    pub b: usize,
}

/// Selects one of the interchangeable LCS engines.
///
/// # Examples
///
/// ```
/// use lcsdiff::lcs::Algorithm;
///
/// let algo: Algorithm = "hs".parse().unwrap();
/// assert_eq!(algo, Algorithm::HuntSzymanski);
/// assert_eq!(Algorithm::default(), Algorithm::KuoCrossMod);
/// assert!("patience".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Hunt-McIlroy candidate merge (`hm`).
    HuntMcIlroy,
    /// Hunt-Szymanski threshold array (`hs`).
    HuntSzymanski,
    /// Kuo-Cross with linear slot advance (`kc`).
    KuoCross,
    /// Kuo-Cross with bisecting slot advance (`kcmod`), the default.
    #[default]
    KuoCrossMod,
}

impl Algorithm {
    /// Every engine, in command-line token order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::HuntMcIlroy,
        Algorithm::HuntSzymanski,
        Algorithm::KuoCross,
        Algorithm::KuoCrossMod,
    ];

    /// The command-line token naming this engine.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::HuntMcIlroy => "hm",
            Algorithm::HuntSzymanski => "hs",
            Algorithm::KuoCross => "kc",
            Algorithm::KuoCrossMod => "kcmod",
        }
    }

    /// Runs this engine over `a` and `b`.
    pub fn lcs<T: Ord>(self, a: &[T], b: &[T]) -> Vec<MatchPair> {
        match self {
            Algorithm::HuntMcIlroy => hunt_mcilroy::lcs(a, b),
            Algorithm::HuntSzymanski => hunt_szymanski::lcs(a, b),
            Algorithm::KuoCross => kuo_cross::lcs(a, b),
            Algorithm::KuoCrossMod => kuo_cross::lcs_modified(a, b),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "hm" => Ok(Algorithm::HuntMcIlroy),
            "hs" => Ok(Algorithm::HuntSzymanski),
            "kc" => Ok(Algorithm::KuoCross),
            "kcmod" => Ok(Algorithm::KuoCrossMod),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes a longest common subsequence with the default engine.
///
/// # Examples
///
/// ```
/// use lcsdiff::lcs;
///
/// let a = ["a", "b", "c"];
/// let b = ["a", "x", "c"];
/// let pairs = lcs(&a, &b);
/// assert_eq!(pairs.len(), 2);
/// assert_eq!((pairs[0].a, pairs[0].b), (1, 1));
/// assert_eq!((pairs[1].a, pairs[1].b), (3, 3));
/// ```
pub fn lcs<T: Ord>(a: &[T], b: &[T]) -> Vec<MatchPair> {
    Algorithm::default().lcs(a, b)
}
