//! Error handling for the ring primitives

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

use bikering_api::{Error as CoreError, Result as CoreResult};

/// The error type for ring primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// A caller-supplied buffer broke an invariant the ring relies on
    Contract {
        /// Operation that received the buffer
        context: &'static str,
        /// Which invariant was broken
        details: &'static str,
    },

    /// Processing error during a ring operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

// Add convenience helper
impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for ring primitive operations
pub type Result<T> = core::result::Result<T, Error>;

// Display implementation for error formatting
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::Contract { context, details } => {
                write!(f, "Contract violation in {}: {}", context, details)
            },
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            },
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::InvalidParameter {
                    context: name,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Contract { context, details } => {
                #[cfg(not(feature = "std"))]
                let _ = details;
                CoreError::ContractViolation {
                    context,
                    #[cfg(feature = "std")]
                    message: details.to_string(),
                }
            },
            Error::Processing { operation, details } => {
                #[cfg(not(feature = "std"))]
                let _ = details;
                CoreError::Other {
                    context: operation,
                    #[cfg(feature = "std")]
                    message: details.to_string(),
                }
            },
            Error::Other(msg) => {
                #[cfg(not(feature = "std"))]
                let _ = msg;
                CoreError::Other {
                    context: "algorithms",
                    #[cfg(feature = "std")]
                    message: msg.to_string(),
                }
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use bikering_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
