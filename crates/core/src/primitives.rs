//! Padding, message schedule and compression for both SHA-2 widths
//!
//! These follow FIPS 180-4. Every function is generic over the native
//! [`Word`] and reads its rotation amounts from the variant's [`Params`].

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::params::{BLOCK_WORDS, MAX_ROUNDS, Params, STATE_WORDS, Shifts};
use crate::word::{Word, pack};

/// Choose: bits of `f` where `e` is set, bits of `g` elsewhere
#[inline(always)]
pub fn ch<W: Word>(e: W, f: W, g: W) -> W {
    (e & f) ^ (!e & g)
}

/// Majority of `a`, `b`, `c` per bit
#[inline(always)]
pub fn maj<W: Word>(a: W, b: W, c: W) -> W {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Schedule sigma: two rotations and a plain shift
#[inline(always)]
pub fn small_sigma<W: Word>(x: W, [r0, r1, s]: Shifts) -> W {
    x.rotr(r0) ^ x.rotr(r1) ^ (x >> s)
}

/// Compression Sigma: three rotations
#[inline(always)]
pub fn big_sigma<W: Word>(x: W, [r0, r1, r2]: Shifts) -> W {
    x.rotr(r0) ^ x.rotr(r1) ^ x.rotr(r2)
}

/// Pad `message` to a whole number of blocks.
///
/// Appends `0x80`, zeroes up to `block_size - length_size` modulo
/// `block_size`, then the message length in bits as a big-endian integer
/// filling the last `length_size` bytes. A message that already ends
/// exactly where the length field would start still gets a full extra
/// block.
pub fn pad(message: &[u8], block_size: usize, length_size: usize) -> Vec<u8> {
    let len = message.len();
    let boundary = block_size - length_size;

    // smallest size >= len + 1 that is congruent to boundary mod block_size
    let zeros = (boundary + block_size - (len + 1) % block_size) % block_size;
    let new_size = len + 1 + zeros;

    let mut padded = Vec::with_capacity(new_size + length_size);
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(new_size, 0);

    // 2^128 bits is out of reach for any in-memory message
    let bit_len = (len as u128) << 3;
    padded.extend_from_slice(&bit_len.to_be_bytes()[16 - length_size..]);

    padded
}

/// Expand one block into the message schedule.
///
/// Only the first `params.rounds()` entries of the result are meaningful.
#[inline(always)]
pub fn expand_schedule<W: Word>(block: &[u8], params: &Params<W>) -> [W; MAX_ROUNDS] {
    let mut w = [W::ZERO; MAX_ROUNDS];

    for (j, slot) in w.iter_mut().take(BLOCK_WORDS).enumerate() {
        *slot = pack(block, j * W::BYTES);
    }

    for j in BLOCK_WORDS..params.rounds() {
        let s0 = small_sigma(w[j - 15], params.sigma0);
        let s1 = small_sigma(w[j - 2], params.sigma1);
        w[j] = w[j - 16].add(s0).add(w[j - 7]).add(s1);
    }

    w
}

/// Run all rounds over `schedule` and fold the result into `state`.
///
/// This is the only place the chaining state changes.
#[inline(always)]
pub fn compress<W: Word>(state: &mut [W; STATE_WORDS], schedule: &[W], params: &Params<W>) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (&ki, &wi) in params.k.iter().zip(schedule) {
        let t1 = h
            .add(big_sigma(e, params.big_sigma1))
            .add(ch(e, f, g))
            .add(ki)
            .add(wi);
        let t2 = big_sigma(a, params.big_sigma0).add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.add(t2);
    }

    for (slot, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *slot = slot.add(v);
    }
}
