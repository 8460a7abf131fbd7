//! Error types for the transmission calculator and the demo renderer.

use thiserror::Error;

/// Every failure the library can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Bit rate was zero, negative or not finite.
    #[error("invalid bit rate: {rate} bps (must be positive and finite)")]
    InvalidRate {
        /// Offending rate in bits per second
        rate: f64,
    },

    /// Transfer time does not fit in an `f64`.
    #[error("transmission of {bit_count} bits at {rate} bps takes longer than f64 can hold")]
    DurationOverflow {
        /// Bits in the transfer
        bit_count: u64,
        /// Rate in bits per second
        rate: f64,
    },

    /// Payload bit count does not fit in a `u64`.
    #[error("payload of {data_bytes} bytes is too large to count in bits")]
    PayloadTooLarge {
        /// Requested payload size
        data_bytes: u64,
    },

    /// A transfer needs at least one wire.
    #[error("invalid wire count: 0 (need at least 1)")]
    InvalidWireCount,

    /// Diagram input was not exactly eight `0`/`1` characters.
    #[error("invalid bit pattern {0:?}: expected 8 characters of '0' or '1'")]
    InvalidBitPattern(String),

    /// Section number outside the demo.
    #[error("unknown section {number}: expected 1..={max}")]
    UnknownSection {
        /// Requested section number
        number: u8,
        /// Highest valid section number
        max: u8,
    },

    /// Writing the demo text failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
