//! Error handling for the ring arithmetic ecosystem

pub mod types;
pub mod traits;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

#[cfg(feature = "std")]
use std::error::Error as StdError;

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl StdError for Error {}
