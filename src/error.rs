use thiserror::Error;

/// Errors surfaced by the driver-facing layers of the crate.
///
/// The comparison engines themselves are total functions and cannot fail:
/// heterogeneous inputs are unrepresentable under their `T: Ord` contract,
/// and broken search invariants are implementation bugs that panic rather
/// than propagate.
#[derive(Debug, Error)]
pub enum Error {
    /// An algorithm token that is not one of `hm`, `hs`, `kc`, `kcmod`.
    #[error("unknown algorithm `{0}` (expected one of hm, hs, kc, kcmod)")]
    UnknownAlgorithm(String),

    /// A context-width argument that does not parse as a line count.
    #[error("invalid context line count `{0}`")]
    BadContext(String),

    /// Opening, reading, or decoding an input failed.
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
