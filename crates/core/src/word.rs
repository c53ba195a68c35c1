//! Big-endian word codec
//!
//! Packs runs of bytes into the variant's native word (`u32` for SHA-256,
//! `u64` for SHA-512) and back, most significant byte first.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt::Debug;
use core::ops::{BitAnd, BitXor, Not, Shr};

/// Native arithmetic unit of a SHA-2 variant.
///
/// All additions wrap modulo 2^BITS; overflow is part of the algorithm.
pub trait Word:
    Copy
    + Eq
    + Debug
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<u32, Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Width in bytes
    const BYTES: usize;

    /// The all-zero word
    const ZERO: Self;

    /// Addition modulo 2^BITS
    fn add(self, rhs: Self) -> Self;

    /// Circular right shift
    fn rotr(self, n: u32) -> Self;

    /// Read `BYTES` bytes, most significant first. `bytes` must be exactly
    /// `BYTES` long.
    fn from_be(bytes: &[u8]) -> Self;

    /// Append the big-endian representation to `out`.
    fn write_be(self, out: &mut Vec<u8>);
}

macro_rules! impl_word {
    ($ty:ty) => {
        impl Word for $ty {
            const BYTES: usize = core::mem::size_of::<$ty>();
            const ZERO: Self = 0;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn rotr(self, n: u32) -> Self {
                self.rotate_right(n)
            }

            #[inline(always)]
            fn from_be(bytes: &[u8]) -> Self {
                let mut buf = [0u8; core::mem::size_of::<$ty>()];
                buf.copy_from_slice(bytes);
                <$ty>::from_be_bytes(buf)
            }

            #[inline(always)]
            fn write_be(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_be_bytes());
            }
        }
    };
}

impl_word!(u32);
impl_word!(u64);

/// Read the word starting at `offset`.
///
/// Caller guarantees `offset + W::BYTES <= bytes.len()`.
#[inline(always)]
pub fn pack<W: Word>(bytes: &[u8], offset: usize) -> W {
    W::from_be(&bytes[offset..offset + W::BYTES])
}

/// Append `word` to `out`, most significant byte first.
#[inline(always)]
pub fn unpack<W: Word>(word: W, out: &mut Vec<u8>) {
    word.write_be(out);
}
