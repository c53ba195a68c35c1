//! C FFI bindings for mobile platforms

use crate::{Algorithm, digest_bytes};
use core::slice;

/// Algorithm id for SHA-256
pub const SHADIGEST_SHA256: u32 = 0;

/// Algorithm id for SHA-512
pub const SHADIGEST_SHA512: u32 = 1;

fn algorithm_from_id(id: u32) -> Option<Algorithm> {
    match id {
        SHADIGEST_SHA256 => Some(Algorithm::Sha256),
        SHADIGEST_SHA512 => Some(Algorithm::Sha512),
        _ => None,
    }
}

/// Digest length in bytes for an algorithm id, or 0 if the id is unknown
#[unsafe(no_mangle)]
pub extern "C" fn shadigest_digest_len(algorithm: u32) -> usize {
    algorithm_from_id(algorithm).map_or(0, Algorithm::digest_len)
}

/// Compute the digest of input data
/// - algorithm: SHADIGEST_SHA256 or SHADIGEST_SHA512
/// - input: pointer to input bytes (may be null when input_len is 0)
/// - input_len: length of input
/// - output: buffer receiving the raw digest
/// - output_len: capacity of output, at least shadigest_digest_len(algorithm)
///
/// Returns the number of bytes written, or 0 on invalid arguments.
///
/// # Safety
///
/// - `input` must be valid for reads of `input_len` bytes unless `input_len` is 0
/// - `output` must be valid for writes of `output_len` bytes
/// - the two regions must not overlap
#[unsafe(no_mangle)]
pub unsafe extern "C" fn shadigest_digest(
    algorithm: u32,
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
) -> usize {
    let Some(algorithm) = algorithm_from_id(algorithm) else {
        return 0;
    };
    let digest_len = algorithm.digest_len();

    if output.is_null() || output_len < digest_len || (input.is_null() && input_len != 0) {
        return 0;
    }

    let input_slice: &[u8] = if input_len == 0 {
        &[]
    } else {
        // SAFETY: non-null, caller guarantees `input_len` readable bytes
        unsafe { slice::from_raw_parts(input, input_len) }
    };
    let result = digest_bytes(input_slice, algorithm);

    // SAFETY: non-null, caller guarantees `output_len >= digest_len` writable bytes
    let output_slice = unsafe { slice::from_raw_parts_mut(output, digest_len) };
    output_slice.copy_from_slice(&result);

    digest_len
}
