//! SHA-2 Digest Harness
//!
//! Command-line and library front end for the `shadigest-core` engine.
//!
//! # Overview
//!
//! The core computes one-shot SHA-256 and SHA-512 digests. This crate adds a
//! checking harness around it: run a message through a chosen algorithm,
//! compare the result with an expected digest, and report every character
//! position that differs.
//!
//! # Example
//!
//! ```rust
//! use shadigest::check::check;
//! use shadigest::vectors::Vector;
//!
//! let vector = Vector::new("sha256", "abc",
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
//!
//! let report = check(&vector).unwrap();
//! assert!(report.passed());
//! ```

// Re-export the core algorithm
pub use shadigest_core as algorithm;

pub mod check;
pub mod error;
pub mod vectors;

// Convenience re-exports
pub use algorithm::{digest, digest_many, Algorithm};
pub use error::HarnessError;
