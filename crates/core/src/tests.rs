//! Tests for the SHA-2 digest pipeline

use crate::{
    Algorithm, K256, K512, SHA256, SHA512, Word, accumulate, ch, digest, digest_bytes,
    digest_many, encode, expand_schedule, maj, pack, pad, sha256, sha512, unpack,
};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec, vec::Vec};

use proptest::prelude::*;

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";
const FOX_DOT: &[u8] = b"The quick brown fox jumps over the lazy dog.";
const TWO_BLOCK_256: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const TWO_BLOCK_512: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

// -------------------------------------------------------
// Known vectors
// -------------------------------------------------------

#[test]
fn test_sha256_known_vectors() {
    let vectors: [(&[u8], &str); 5] = [
        (
            b"",
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ),
        (
            b"abc",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        (
            FOX,
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
        ),
        (
            FOX_DOT,
            "ef537f25c895bfa782526529a9b63d97aa631564d5d789c2b765448c8635fb6c",
        ),
        (
            TWO_BLOCK_256,
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        ),
    ];

    for (message, expected) in vectors {
        assert_eq!(
            digest(message, Algorithm::Sha256),
            expected,
            "SHA-256 mismatch for {:?}",
            String::from_utf8_lossy(message)
        );
    }
}

#[test]
fn test_sha512_known_vectors() {
    let vectors: [(&[u8], &str); 5] = [
        (
            b"",
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
        ),
        (
            b"abc",
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
        (
            FOX,
            "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb64\
             2e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6",
        ),
        (
            FOX_DOT,
            "91ea1245f20d46ae9a037a989f54f1f790f0a47607eeb8a14d12890cea77a1bb\
             c6c7ed9cf205e67b7f2b8fd4c7dfd3a7a8617e45f3c463d481c7e586c39ac1ed",
        ),
        (
            TWO_BLOCK_512,
            "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
             501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
        ),
    ];

    for (message, expected) in vectors {
        assert_eq!(
            digest(message, Algorithm::Sha512),
            expected,
            "SHA-512 mismatch for {:?}",
            String::from_utf8_lossy(message)
        );
    }
}

#[test]
fn test_million_a() {
    let message = vec![b'a'; 1_000_000];

    assert_eq!(
        sha256(&message),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
    assert_eq!(
        sha512(&message),
        "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb\
         de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
    );
}

// -------------------------------------------------------
// Output shape
// -------------------------------------------------------

#[test]
fn test_fixed_length_lowercase_hex() {
    for algorithm in Algorithm::ALL {
        for len in [0usize, 1, 55, 56, 63, 64, 111, 112, 127, 128, 1000] {
            let message = vec![0xA5u8; len];
            let hex = digest(&message, algorithm);

            assert_eq!(hex.len(), algorithm.hex_len());
            assert!(
                hex.chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                "non-lowercase-hex output: {}",
                hex
            );
            assert_eq!(
                digest_bytes(&message, algorithm).len(),
                algorithm.digest_len()
            );
        }
    }
}

#[test]
fn test_digest_is_deterministic() {
    for algorithm in Algorithm::ALL {
        let first = digest(FOX, algorithm);
        for _ in 0..5 {
            assert_eq!(digest(FOX, algorithm), first, "digest must be deterministic");
        }
    }
}

#[test]
fn test_single_byte_messages_are_distinct() {
    for algorithm in Algorithm::ALL {
        let mut seen: Vec<String> = (0u8..=255).map(|b| digest(&[b], algorithm)).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 256, "{} collided on single bytes", algorithm);
    }
}

#[test]
fn test_variants_differ() {
    assert_ne!(
        &sha512(FOX)[..64],
        sha256(FOX),
        "SHA-512 prefix must not equal SHA-256"
    );
}

// -------------------------------------------------------
// Padding
// -------------------------------------------------------

fn assert_padding_invariant(message: &[u8], block_size: usize, length_size: usize) {
    let padded = pad(message, block_size, length_size);
    let len = message.len();

    assert!(!padded.is_empty());
    assert_eq!(padded.len() % block_size, 0, "len {} not block aligned", len);
    assert!(padded.len() >= len + 1 + length_size);
    // never more than one block of slack
    assert!(padded.len() < len + 1 + length_size + block_size);

    assert_eq!(&padded[..len], message);
    assert_eq!(padded[len], 0x80);

    let field_start = padded.len() - length_size;
    assert!(padded[len + 1..field_start].iter().all(|&b| b == 0));

    let mut field = [0u8; 16];
    field[16 - length_size..].copy_from_slice(&padded[field_start..]);
    assert_eq!(u128::from_be_bytes(field), (len as u128) * 8);
}

#[test]
fn test_padding_invariant_all_small_lengths() {
    for len in 0..300 {
        let message: Vec<u8> = (0..len).map(|i| i as u8).collect();
        assert_padding_invariant(&message, SHA256.block_size, SHA256.length_size);
        assert_padding_invariant(&message, SHA512.block_size, SHA512.length_size);
    }
}

#[test]
fn test_padding_block_boundaries_sha256() {
    // 55 bytes: 0x80 and the length field still fit in one block
    assert_eq!(pad(&[0u8; 55], 64, 8).len(), 64);
    // 56 bytes: the length field no longer fits, a full extra block follows
    assert_eq!(pad(&[0u8; 56], 64, 8).len(), 128);
    assert_eq!(pad(&[0u8; 64], 64, 8).len(), 128);
    assert_eq!(pad(&[0u8; 120], 64, 8).len(), 192);
}

#[test]
fn test_padding_block_boundaries_sha512() {
    assert_eq!(pad(&[0u8; 111], 128, 16).len(), 128);
    assert_eq!(pad(&[0u8; 112], 128, 16).len(), 256);
    assert_eq!(pad(&[0u8; 128], 128, 16).len(), 256);
    assert_eq!(pad(&[0u8; 240], 128, 16).len(), 384);
}

#[test]
fn test_padding_empty_message() {
    let padded = pad(b"", 64, 8);

    let mut expected = vec![0u8; 64];
    expected[0] = 0x80;
    assert_eq!(padded, expected);
}

#[test]
fn test_padding_length_field_is_big_endian() {
    let padded = pad(&[0u8; 300], 128, 16);

    // 300 * 8 = 2400 = 0x0960
    assert_eq!(&padded[padded.len() - 2..], &[0x09, 0x60]);
    assert!(padded[padded.len() - 16..padded.len() - 2]
        .iter()
        .all(|&b| b == 0));
}

// -------------------------------------------------------
// Word codec
// -------------------------------------------------------

#[test]
fn test_pack_reads_big_endian() {
    let bytes = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89];

    assert_eq!(pack::<u32>(&bytes, 0), 0xdeadbeef);
    assert_eq!(pack::<u32>(&bytes, 4), 0x01234567);
    assert_eq!(pack::<u64>(&bytes, 1), 0xadbeef0123456789);
}

#[test]
fn test_unpack_appends_big_endian() {
    let mut out = vec![0xff];
    unpack(0x0102_0304u32, &mut out);
    unpack(0x1122_3344_5566_7788u64, &mut out);

    assert_eq!(
        out,
        [0xff, 0x01, 0x02, 0x03, 0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]
    );
}

#[test]
fn test_word_addition_wraps() {
    assert_eq!(Word::add(u32::MAX, 1u32), 0);
    assert_eq!(Word::add(u32::MAX, u32::MAX), u32::MAX - 1);
    assert_eq!(Word::add(u64::MAX, 2u64), 1);
}

// -------------------------------------------------------
// Schedule and compression
// -------------------------------------------------------

#[test]
fn test_bit_functions() {
    assert_eq!(ch(0xffff_0000u32, 0x1234_5678, 0x9abc_def0), 0x1234_def0);
    assert_eq!(maj(0b1100u32, 0b1010, 0b0110), 0b1110);
    assert_eq!(maj(0u64, u64::MAX, u64::MAX), u64::MAX);
}

#[test]
fn test_schedule_matches_fips_example() {
    // FIPS 180-4 example: single padded block for "abc"
    let block = pad(b"abc", 64, 8);
    let w = expand_schedule(&block, &SHA256);

    assert_eq!(w[0], 0x61626380);
    assert_eq!(w[15], 0x00000018);
    assert_eq!(w[16], 0x61626380);
    assert_eq!(w[17], 0x000f0000);
    assert_eq!(w[63], 0x12b1edeb);
}

#[test]
fn test_schedule_length_per_variant() {
    assert_eq!(SHA256.rounds(), 64);
    assert_eq!(SHA512.rounds(), 80);
    assert_eq!(K256.len(), 64);
    assert_eq!(K512.len(), 80);

    // SHA-256 constants are the high halves of the SHA-512 ones
    for (k32, k64) in K256.iter().zip(K512.iter()) {
        assert_eq!(*k32, (*k64 >> 32) as u32);
    }
    for (h32, h64) in SHA256.iv.iter().zip(SHA512.iv.iter()) {
        assert_eq!(*h32, (*h64 >> 32) as u32);
    }
}

#[test]
fn test_accumulate_then_encode() {
    let state = accumulate(b"abc", &SHA256);
    assert_eq!(state[0], 0xba7816bf);
    assert_eq!(state[7], 0xf20015ad);

    let bytes = encode(&state);
    assert_eq!(bytes.len(), 32);
    assert_eq!(&bytes[..4], &[0xba, 0x78, 0x16, 0xbf]);
    assert_eq!(bytes, digest_bytes(b"abc", Algorithm::Sha256));
}

#[test]
fn test_multi_block_chaining() {
    // Messages spanning several blocks must chain, not restart, the state
    let message: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();

    for algorithm in Algorithm::ALL {
        let whole = digest(&message, algorithm);
        let prefix = digest(&message[..algorithm.block_size()], algorithm);
        assert_ne!(whole, prefix);
    }
}

// -------------------------------------------------------
// Algorithm selector
// -------------------------------------------------------

#[test]
fn test_algorithm_parsing() {
    for name in ["sha256", "SHA256", "sha-256", "SHA_256", "Sha-256"] {
        assert_eq!(name.parse::<Algorithm>(), Ok(Algorithm::Sha256), "{}", name);
    }
    for name in ["sha512", "SHA-512", "sha_512"] {
        assert_eq!(name.parse::<Algorithm>(), Ok(Algorithm::Sha512), "{}", name);
    }

    let err = "md5".parse::<Algorithm>().unwrap_err();
    assert_eq!(err.0, "md5");
}

#[test]
fn test_algorithm_parsing_rejects_loose_spellings() {
    for name in ["s-h-a-2-5-6", "__sha512--", "sha-_256", "sha2-56", "sha 256", "sha256-", ""] {
        assert!(name.parse::<Algorithm>().is_err(), "{:?} should be rejected", name);
    }
}

#[test]
fn test_algorithm_sizes() {
    assert_eq!(Algorithm::Sha256.block_size(), 64);
    assert_eq!(Algorithm::Sha512.block_size(), 128);
    assert_eq!(Algorithm::Sha256.digest_len(), 32);
    assert_eq!(Algorithm::Sha512.digest_len(), 64);
    assert_eq!(Algorithm::Sha256.hex_len(), 64);
    assert_eq!(Algorithm::Sha512.hex_len(), 128);
}

#[cfg(feature = "std")]
#[test]
fn test_algorithm_display() {
    assert_eq!(Algorithm::Sha256.to_string(), "SHA-256");
    assert_eq!(Algorithm::Sha512.to_string(), "SHA-512");
    assert_eq!(
        Algorithm::Sha512.to_string().parse::<Algorithm>(),
        Ok(Algorithm::Sha512)
    );
}

// -------------------------------------------------------
// Batches and threads
// -------------------------------------------------------

#[test]
fn test_digest_many_preserves_order() {
    let messages: Vec<Vec<u8>> = (0..64u8).map(|i| vec![i; i as usize * 7]).collect();

    for algorithm in Algorithm::ALL {
        let batch = digest_many(&messages, algorithm);
        let sequential: Vec<String> = messages.iter().map(|m| digest(m, algorithm)).collect();
        assert_eq!(batch, sequential);
    }
}

#[test]
fn test_digest_many_empty() {
    let messages: [&[u8]; 0] = [];
    assert!(digest_many(&messages, Algorithm::Sha256).is_empty());
}

#[cfg(feature = "std")]
#[test]
fn test_concurrent_invocations_are_independent() {
    let expected = sha256(FOX);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| (0..50).map(|_| sha256(FOX)).collect::<Vec<_>>()))
            .collect();

        for handle in handles {
            for hex in handle.join().expect("worker panicked") {
                assert_eq!(hex, expected);
            }
        }
    });
}

// -------------------------------------------------------
// FFI
// -------------------------------------------------------

#[cfg(feature = "std")]
#[test]
fn test_ffi_digest() {
    use crate::{SHADIGEST_SHA256, SHADIGEST_SHA512, shadigest_digest, shadigest_digest_len};

    assert_eq!(shadigest_digest_len(SHADIGEST_SHA256), 32);
    assert_eq!(shadigest_digest_len(SHADIGEST_SHA512), 64);
    assert_eq!(shadigest_digest_len(7), 0);

    let mut out = [0u8; 64];
    let written = unsafe {
        shadigest_digest(SHADIGEST_SHA256, FOX.as_ptr(), FOX.len(), out.as_mut_ptr(), 64)
    };
    assert_eq!(written, 32);
    assert_eq!(hex::encode(&out[..32]), sha256(FOX));

    let written =
        unsafe { shadigest_digest(SHADIGEST_SHA512, core::ptr::null(), 0, out.as_mut_ptr(), 64) };
    assert_eq!(written, 64);
    assert_eq!(hex::encode(out), sha512(b""));
}

#[cfg(feature = "std")]
#[test]
fn test_ffi_rejects_invalid_arguments() {
    use crate::{SHADIGEST_SHA256, SHADIGEST_SHA512, shadigest_digest};

    let mut out = [0u8; 64];

    unsafe {
        // unknown algorithm
        assert_eq!(shadigest_digest(9, FOX.as_ptr(), FOX.len(), out.as_mut_ptr(), 64), 0);
        // output too small
        assert_eq!(
            shadigest_digest(SHADIGEST_SHA512, FOX.as_ptr(), FOX.len(), out.as_mut_ptr(), 32),
            0
        );
        // null input with non-zero length
        assert_eq!(
            shadigest_digest(SHADIGEST_SHA256, core::ptr::null(), 4, out.as_mut_ptr(), 64),
            0
        );
        // null output
        assert_eq!(
            shadigest_digest(SHADIGEST_SHA256, FOX.as_ptr(), FOX.len(), core::ptr::null_mut(), 64),
            0
        );
    }
    assert!(out.iter().all(|&b| b == 0), "rejected calls must not write");
}

// -------------------------------------------------------
// Properties
// -------------------------------------------------------

proptest! {
    #[test]
    fn prop_sha256_matches_reference(message in proptest::collection::vec(any::<u8>(), 0..600)) {
        use sha2::Digest as _;
        let expected = hex::encode(sha2::Sha256::digest(&message));
        prop_assert_eq!(digest(&message, Algorithm::Sha256), expected);
    }

    #[test]
    fn prop_sha512_matches_reference(message in proptest::collection::vec(any::<u8>(), 0..600)) {
        use sha2::Digest as _;
        let expected = hex::encode(sha2::Sha512::digest(&message));
        prop_assert_eq!(digest(&message, Algorithm::Sha512), expected);
    }

    #[test]
    fn prop_padding_invariant(message in proptest::collection::vec(any::<u8>(), 0..400)) {
        assert_padding_invariant(&message, 64, 8);
        assert_padding_invariant(&message, 128, 16);
    }

    #[test]
    fn prop_digest_deterministic_and_fixed_length(message in proptest::collection::vec(any::<u8>(), 0..300)) {
        for algorithm in Algorithm::ALL {
            let first = digest(&message, algorithm);
            prop_assert_eq!(first.len(), algorithm.hex_len());
            prop_assert_eq!(digest(&message, algorithm), first);
        }
    }
}
