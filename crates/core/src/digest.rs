//! One-shot SHA-256 / SHA-512 digests
//!
//! `digest` resolves the variant once, then runs the shared pipeline:
//! pad the message, expand and compress each block in order (Merkle–Damgård
//! chaining from the fixed IV), and serialize the final state big-endian.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::params::{Params, SHA256, SHA512, STATE_WORDS};
use crate::primitives::{compress, expand_schedule, pad};
use crate::word::{Word, unpack};

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha256,
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm, in declaration order
    pub const ALL: [Algorithm; 2] = [Algorithm::Sha256, Algorithm::Sha512];

    /// Canonical display name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Sha512 => "SHA-512",
        }
    }

    /// Block size in bytes
    pub fn block_size(self) -> usize {
        match self {
            Algorithm::Sha256 => SHA256.block_size,
            Algorithm::Sha512 => SHA512.block_size,
        }
    }

    /// Digest length in bytes
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha256 => STATE_WORDS * <u32 as Word>::BYTES,
            Algorithm::Sha512 => STATE_WORDS * <u64 as Word>::BYTES,
        }
    }

    /// Digest length in hex characters
    pub fn hex_len(self) -> usize {
        self.digest_len() * 2
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an algorithm name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown digest algorithm `{0}` (expected sha256 or sha512)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const SPELLINGS: [(&str, Algorithm); 6] = [
            ("sha256", Algorithm::Sha256),
            ("sha-256", Algorithm::Sha256),
            ("sha_256", Algorithm::Sha256),
            ("sha512", Algorithm::Sha512),
            ("sha-512", Algorithm::Sha512),
            ("sha_512", Algorithm::Sha512),
        ];

        SPELLINGS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, algorithm)| algorithm)
            .ok_or_else(|| ParseAlgorithmError(s.into()))
    }
}

/// Run the block pipeline and return the final chaining state.
pub fn accumulate<W: Word>(message: &[u8], params: &Params<W>) -> [W; STATE_WORDS] {
    let padded = pad(message, params.block_size, params.length_size);
    let mut state = params.iv;

    // Blocks must be consumed strictly in order: each starts from the
    // previous block's state.
    for block in padded.chunks_exact(params.block_size) {
        let schedule = expand_schedule(block, params);
        compress(&mut state, &schedule[..params.rounds()], params);
    }

    state
}

/// Serialize the state, h0 first, each word big-endian.
pub fn encode<W: Word>(state: &[W; STATE_WORDS]) -> Vec<u8> {
    let mut out = Vec::with_capacity(STATE_WORDS * W::BYTES);
    for &word in state {
        unpack(word, &mut out);
    }
    out
}

/// Raw digest bytes of `message`
pub fn digest_bytes(message: &[u8], algorithm: Algorithm) -> Vec<u8> {
    match algorithm {
        Algorithm::Sha256 => encode(&accumulate(message, &SHA256)),
        Algorithm::Sha512 => encode(&accumulate(message, &SHA512)),
    }
}

/// Lowercase hex digest of `message`
///
/// Always `algorithm.hex_len()` characters long.
///
/// # Example
///
/// ```rust
/// use shadigest_core::{Algorithm, digest};
///
/// assert_eq!(
///     digest(b"abc", Algorithm::Sha256),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn digest(message: &[u8], algorithm: Algorithm) -> String {
    hex::encode(digest_bytes(message, algorithm))
}

/// SHA-256 hex digest
pub fn sha256(message: &[u8]) -> String {
    digest(message, Algorithm::Sha256)
}

/// SHA-512 hex digest
pub fn sha512(message: &[u8]) -> String {
    digest(message, Algorithm::Sha512)
}

/// Digest many independent messages, preserving input order.
///
/// Each message is still hashed sequentially; only distinct messages
/// are spread across threads.
#[cfg(feature = "parallel")]
pub fn digest_many<M>(messages: &[M], algorithm: Algorithm) -> Vec<String>
where
    M: AsRef<[u8]> + Sync,
{
    messages
        .par_iter()
        .map(|m| digest(m.as_ref(), algorithm))
        .collect()
}

/// Digest many independent messages, preserving input order (sequential fallback).
#[cfg(not(feature = "parallel"))]
pub fn digest_many<M>(messages: &[M], algorithm: Algorithm) -> Vec<String>
where
    M: AsRef<[u8]> + Sync,
{
    messages
        .iter()
        .map(|m| digest(m.as_ref(), algorithm))
        .collect()
}
