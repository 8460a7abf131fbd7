//! Serial vs Parallel Transmission demonstration

#![forbid(unsafe_code, unused_must_use)]
#![warn(clippy::all, missing_docs)]

/// Demo constants.
pub mod common;

/// Error types.
pub mod error;

/// Transmission time and speedup.
pub mod calculator;

/// Diagrams and reference tables.
pub mod presentation;

/// Demo sections.
pub mod demo;

pub use calculator::{Comparison, compare_serial_vs_parallel, compute_time};
pub use demo::Section;
pub use error::{Error, Result};
