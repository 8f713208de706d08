//! Constants for the BIKE key encapsulation mechanism
//!
//! Only the block length `r` is consumed by the ring arithmetic; the other
//! fields describe the surrounding KEM and are carried so that a single
//! value names a complete parameter set.

/// Size of the shared secret / message digest in bytes
pub const BIKE_SHARED_SECRET_SIZE: usize = 32;

/// Structure containing BIKE parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BikeParams {
    /// Human readable parameter set name
    pub name: &'static str,

    /// Block length, a prime with 2 primitive modulo r
    pub r: u32,

    /// Row weight of the private key (sum of both blocks)
    pub w: u32,

    /// Error weight
    pub t: u32,

    /// Shared secret length in bits
    pub l: u32,

    /// Public key size in bytes
    pub public_key_size: usize,

    /// Ciphertext size in bytes
    pub ciphertext_size: usize,

    /// Shared secret size in bytes
    pub shared_secret_size: usize,
}

/// Bytes needed to hold `r` bit-packed coefficients
pub const fn block_bytes(r: u32) -> usize {
    (r as usize + 7) / 8
}

impl BikeParams {
    const fn new(name: &'static str, r: u32, w: u32, t: u32) -> Self {
        Self {
            name,
            r,
            w,
            t,
            l: 256,
            public_key_size: block_bytes(r),
            ciphertext_size: block_bytes(r) + BIKE_SHARED_SECRET_SIZE,
            shared_secret_size: BIKE_SHARED_SECRET_SIZE,
        }
    }

    /// Weight of each half of the private key
    pub const fn half_weight(&self) -> u32 {
        self.w / 2
    }
}

/// BIKE parameters (NIST security level 1)
pub const BIKE_L1: BikeParams = BikeParams::new("BIKE-L1", 12323, 142, 134);

/// BIKE parameters (NIST security level 3)
pub const BIKE_L3: BikeParams = BikeParams::new("BIKE-L3", 24659, 206, 199);

/// BIKE parameters (NIST security level 5)
pub const BIKE_L5: BikeParams = BikeParams::new("BIKE-L5", 40973, 274, 264);

/// All standard parameter sets, lowest level first
pub const ALL: [BikeParams; 3] = [BIKE_L1, BIKE_L3, BIKE_L5];
