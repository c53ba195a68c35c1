//! Harness errors

use shadigest_core::ParseAlgorithmError;
use thiserror::Error;

/// Errors raised while loading or running digest vectors
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Algorithm(#[from] ParseAlgorithmError),

    #[error("failed to read vectors: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed vector file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("message is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("message of {len} bytes repeated {repeat} times does not fit in memory")]
    MessageTooLarge { len: usize, repeat: usize },
}
