//! Error types for server list loading, continuum construction and lookups.

use std::collections::TryReserveError;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the server list reader, the continuum builder and lookups.
///
/// Every operation is all or nothing: a failed load never yields a partial
/// `ServerList`, a failed build never yields a partial `Continuum` and a failed
/// lookup never yields a fallback server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A data line of a server list could not be parsed.
    #[error("server list line {line}: {kind}")]
    Parse {
        /// 1-based line number of the offending line.
        line: usize,
        /// What was wrong with it.
        kind: ParseErrorKind,
    },

    /// A continuum was requested for a server list without usable weight.
    #[error("cannot build a continuum from an empty server list or a list without weight")]
    EmptyInput,

    /// A lookup was attempted on a continuum without points.
    #[error("continuum has no points")]
    EmptyContinuum,

    /// Growing the server list or the point buffer failed.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// Reading a server list file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a server list line is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("missing ':' between address and port")]
    MissingPort,
    #[error("address must be non-empty and contain only digits and '.'")]
    InvalidAddress,
    #[error("address is longer than 15 characters")]
    AddressTooLong,
    #[error("port must be non-empty and contain only digits")]
    InvalidPort,
    #[error("port is longer than 5 digits")]
    PortTooLong,
    #[error("missing weight after port")]
    MissingWeight,
    #[error("weight must be a non-negative integer")]
    InvalidWeight,
    #[error("weight does not fit into 64 bits")]
    WeightOverflow,
    #[error("unexpected characters after weight")]
    TrailingCharacters,
}
