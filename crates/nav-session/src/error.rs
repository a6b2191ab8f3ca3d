//! Session error type.

use thiserror::Error;

/// Errors produced by `nav-session`.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A session operation was attempted without a computed route.
    #[error("no active route")]
    NoActiveRoute,

    #[error("telemetry export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
