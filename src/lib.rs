//! Line-oriented unified diff built on classic LCS algorithms.
//!
//! The crate separates the two halves of a diff program: [`lcs`] computes a
//! longest common subsequence of two sequences with one of four
//! interchangeable engines (Hunt-McIlroy, Hunt-Szymanski, Kuo-Cross, and a
//! bisecting Kuo-Cross variant), and [`unified`] groups everything the match
//! list does not cover into context-bounded hunks in `diff -u` form.
//!
//! ```
//! use lcsdiff::{lcs, unified};
//!
//! let old = ["fn main() {", "    println!(\"hi\");", "}"];
//! let new = ["fn main() {", "    println!(\"bye\");", "}"];
//!
//! let matches = lcs(&old, &new);
//! for hunk in unified::hunks(&old, &new, &matches, 3) {
//!     print!("{hunk}");
//! }
//! ```

pub mod error;
pub mod lcs;
pub mod unified;

pub use error::{Error, Result};
pub use lcs::{lcs, Algorithm, MatchPair};
pub use unified::{hunks, Hunk, HunkLine};
