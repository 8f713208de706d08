//! # bikering
//!
//! Constant-time arithmetic over the polynomial ring GF(2)[x]/(x^r - 1),
//! the algebra underneath the BIKE post-quantum key encapsulation mechanism.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bikering = "0.3"
//! ```
//!
//! ```
//! use bikering::prelude::*;
//! use bikering::params::pqc::bike::BIKE_L1;
//!
//! let ring = Ring::for_level(&BIKE_L1)?;
//! let h0 = ring.from_indices(&[0, 17, 4242])?;
//! let h0_inv = ring.inv_checked(&h0)?;
//!
//! let mut check = ring.create();
//! ring.multiply(&h0, &h0_inv, &mut check);
//! assert_eq!(check, ring.one());
//! # Ok::<(), bikering::algorithms::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `alloc`: heap-backed ring elements without `std`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`bikering-api`]: Error types shared by every crate
//! - [`bikering-internal`]: Constant-time word helpers
//! - [`bikering-params`]: BIKE parameter sets
//! - [`bikering-algorithms`]: The ring arithmetic itself

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use bikering_algorithms as algorithms;
pub use bikering_api as api;
pub use bikering_internal as internal;
pub use bikering_params as params;

/// Common imports for bikering users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export the ring types
    #[cfg(feature = "alloc")]
    pub use crate::algorithms::{Element, Ring};

    // Re-export constant-time comparison
    pub use subtle::ConstantTimeEq;

    // Elements zeroize on drop; this allows explicit wiping as well
    pub use zeroize::Zeroize;
}
