//! Error type definitions for ring operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for ring operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A buffer passed to an operation broke its shape or bit invariant
    ContractViolation {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for ring operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
            #[cfg(feature = "std")]
            Self::ContractViolation { message, .. } => Self::ContractViolation { context, message },
            #[cfg(not(feature = "std"))]
            Self::ContractViolation { .. } => Self::ContractViolation { context },
            #[cfg(feature = "std")]
            Self::Other { message, .. } => Self::Other { context, message },
            #[cfg(not(feature = "std"))]
            Self::Other { .. } => Self::Other { context },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidLength { context, expected, actual } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::ContractViolation { context, .. } => Self::ContractViolation { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// The static context attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::ContractViolation { context, .. }
            | Self::Other { context, .. } => context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            },
            #[cfg(feature = "std")]
            Self::ContractViolation { context, message } => {
                write!(f, "Contract violation: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::ContractViolation { context } => {
                write!(f, "Contract violation: {}", context)
            },
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            },
        }
    }
}
