//! # SHA-2 Digest Core
//!
//! One-shot SHA-256 and SHA-512 message digests (FIPS 180-4), returned as
//! canonical lowercase hex.
//!
//! Both variants share a single generic pipeline:
//!
//! ```text
//! message -> pad -> [block -> expand_schedule -> compress]* -> encode -> hex
//! ```
//!
//! Everything that differs between the variants (word width, block size,
//! round count, rotation amounts, IV, round constants) is carried by a
//! static [`Params`] value, selected once per call through [`Algorithm`].
//!
//! ## Example
//!
//! ```rust
//! use shadigest_core::{Algorithm, digest, sha512};
//!
//! let hex = digest(b"The quick brown fox jumps over the lazy dog", Algorithm::Sha256);
//! assert_eq!(hex, "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592");
//!
//! assert_eq!(sha512(b"").len(), 128);
//! ```
//!
//! ## Scope
//!
//! No streaming API, no HMAC, no truncated variants, no constant-time
//! guarantees. Messages whose bit length overflows the length field are
//! not supported.
//!
//! ## no_std Support
//!
//! This crate supports `no_std` environments with the `alloc` crate:
//!
//! ```toml
//! [dependencies]
//! shadigest-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod digest;
mod params;
mod primitives;
mod word;

#[cfg(feature = "std")]
mod ffi;

pub use digest::{
    Algorithm, ParseAlgorithmError, accumulate, digest, digest_bytes, digest_many, encode, sha256,
    sha512,
};
pub use params::*;
pub use primitives::{big_sigma, ch, compress, expand_schedule, maj, pad, small_sigma};
pub use word::{Word, pack, unpack};

#[cfg(feature = "std")]
pub use ffi::{SHADIGEST_SHA256, SHADIGEST_SHA512, shadigest_digest, shadigest_digest_len};

#[cfg(test)]
mod tests;
