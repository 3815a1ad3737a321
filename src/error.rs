use thiserror::Error;

/// Errors raised by this crate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The upper bound must be a positive integer
    #[error("invalid upper bound {0}: the bound must be positive")]
    InvalidBound(u64),

    /// The factor table for this bound cannot be indexed on this platform
    #[error("upper bound {0} is too large for an in-memory factor table")]
    BoundTooLarge(u64),

    /// A move string contained a character other than '0' and '1'
    #[error("invalid move {0:?}, expected '0' or '1'")]
    InvalidStep(char),
}

pub type Result<T> = std::result::Result<T, Error>;
