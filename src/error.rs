//! Error types for memdomain.

use std::fmt;

/// Error type for memory domain operations.
#[derive(Debug)]
pub enum Error {
    /// An argument was missing or malformed (empty device id, revoked handle).
    InvalidArgument(&'static str),
    /// The domain has no callback installed for the requested operation.
    NotSupported,
    /// Opaque failure reported by a concrete domain callback, as a negated
    /// errno value. The core never interprets it.
    Domain(i32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(what) => write!(f, "Invalid argument: {}", what),
            Error::NotSupported => write!(f, "Operation not supported by this memory domain"),
            Error::Domain(errno) => write!(f, "Domain callback failed with status {}", errno),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Negated-errno rendering of this error, for callers that speak the
    /// status-code convention of the completion path.
    pub fn errno(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => -libc::EINVAL,
            Error::NotSupported => -libc::ENOTSUP,
            Error::Domain(errno) => *errno,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
