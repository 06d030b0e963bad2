//! Error types for the generator API

use thiserror::Error;

/// Errors returned by generator and analysis operations
///
/// The algorithm itself cannot fail once inputs are in range, so the only
/// failure mode is a caller passing an out-of-domain parameter.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RngError {
    #[error("Invalid argument: {name} = {value} ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },
}

impl RngError {
    pub(crate) fn invalid(name: &'static str, value: i64, reason: &'static str) -> Self {
        RngError::InvalidArgument {
            name,
            value,
            reason,
        }
    }

    /// Whether this is an `InvalidArgument` error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RngError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, RngError>;
