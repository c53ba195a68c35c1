//! Known-answer vectors
//!
//! Vectors are either built in (canonical FIPS 180 / well-known values) or
//! read from a JSON array:
//!
//! ```json
//! [
//!   { "algorithm": "sha256", "message": "abc",
//!     "expected": "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad" },
//!   { "algorithm": "sha512", "message": "ff00", "hex": true, "expected": "..." },
//!   { "algorithm": "sha256", "message": "a", "repeat": 1000000, "expected": "..." }
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HarnessError;

fn one() -> usize {
    1
}

fn is_one(n: &usize) -> bool {
    *n == 1
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// A message together with the digest it must produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vector {
    /// Algorithm name, e.g. `sha256` or `SHA-512`
    pub algorithm: String,
    /// Message text (UTF-8, or hex when `hex` is set)
    pub message: String,
    /// Message is hex encoded
    #[serde(default, skip_serializing_if = "is_false")]
    pub hex: bool,
    /// Number of times the message is repeated
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub repeat: usize,
    /// Expected lowercase hex digest
    pub expected: String,
}

impl Vector {
    pub fn new(algorithm: &str, message: &str, expected: &str) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            message: message.to_string(),
            hex: false,
            repeat: 1,
            expected: expected.to_string(),
        }
    }

    /// Repeat the message `count` times
    pub fn repeated(mut self, count: usize) -> Self {
        self.repeat = count;
        self
    }

    /// Raw message bytes after hex decoding and repetition
    pub fn message_bytes(&self) -> Result<Vec<u8>, HarnessError> {
        let unit = if self.hex {
            hex::decode(&self.message)?
        } else {
            self.message.as_bytes().to_vec()
        };

        let too_large = || HarnessError::MessageTooLarge {
            len: unit.len(),
            repeat: self.repeat,
        };
        let total = unit.len().checked_mul(self.repeat).ok_or_else(too_large)?;

        let mut message = Vec::new();
        if total == 0 {
            return Ok(message);
        }
        message.try_reserve_exact(total).map_err(|_| too_large())?;
        for _ in 0..self.repeat {
            message.extend_from_slice(&unit);
        }
        Ok(message)
    }

    /// Short printable form of the message for reports
    pub fn label(&self) -> String {
        if self.repeat == 1 {
            self.message.clone()
        } else {
            format!("{} x {}", self.message, self.repeat)
        }
    }
}

/// Canonical known-answer vectors for both algorithms
pub fn builtin_vectors() -> Vec<Vector> {
    const FOX: &str = "The quick brown fox jumps over the lazy dog";
    const FOX_DOT: &str = "The quick brown fox jumps over the lazy dog.";
    const TWO_BLOCK_256: &str = "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    const TWO_BLOCK_512: &str = "abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

    vec![
        // SHA-256
        Vector::new(
            "sha256",
            "",
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ),
        Vector::new(
            "sha256",
            FOX,
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
        ),
        Vector::new(
            "sha256",
            FOX_DOT,
            "ef537f25c895bfa782526529a9b63d97aa631564d5d789c2b765448c8635fb6c",
        ),
        Vector::new(
            "sha256",
            "abc",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        Vector::new(
            "sha256",
            TWO_BLOCK_256,
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        ),
        Vector::new(
            "sha256",
            "a",
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
        )
        .repeated(1_000_000),
        // SHA-512
        Vector::new(
            "sha512",
            "",
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
        ),
        Vector::new(
            "sha512",
            FOX,
            "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb64\
             2e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6",
        ),
        Vector::new(
            "sha512",
            "abc",
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
        Vector::new(
            "sha512",
            TWO_BLOCK_512,
            "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
             501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
        ),
        Vector::new(
            "sha512",
            "a",
            "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb\
             de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b",
        )
        .repeated(1_000_000),
    ]
}

/// Parse a JSON array of vectors
pub fn parse_vectors(json: &str) -> Result<Vec<Vector>, HarnessError> {
    let vectors: Vec<Vector> = serde_json::from_str(json)?;
    debug!(count = vectors.len(), "parsed vectors");
    Ok(vectors)
}

/// Read a JSON vector file
pub fn load_vectors(path: &Path) -> Result<Vec<Vector>, HarnessError> {
    debug!(path = %path.display(), "loading vectors");
    let json = std::fs::read_to_string(path)?;
    parse_vectors(&json)
}
