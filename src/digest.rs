//! 128-bit digests used to place points on the continuum and to hash keys.
//!
//! The continuum only needs 16 bytes of deterministic digest material per
//! input. Which digest produces them is a type parameter of
//! [`Continuum`](crate::Continuum), the same way a `BuildHasher` is chosen for
//! a `HashMap`. Changing the digest changes point placement, so every client
//! sharing a server list has to agree on it.

use std::array;
use std::hash::Hasher;

use siphasher::sip128::{Hasher128, SipHasher13};

/// Produces 16 bytes of digest material for arbitrary input bytes.
///
/// Implementations must be deterministic and sensitive to byte order.
pub trait Digest {
    fn digest16(&self, input: &[u8]) -> [u8; 16];
}

/// MD5, as used by libketama. This is the digest to use when placement has to
/// match other ketama clients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Md5Digest;

impl Digest for Md5Digest {
    fn digest16(&self, input: &[u8]) -> [u8; 16] {
        md5::compute(input).0
    }
}

/// SipHash-1-3 with a 128-bit output.
///
/// Much cheaper than MD5, but its placement is not compatible with other
/// ketama implementations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sip128Digest {
    k0: u64,
    k1: u64,
}

impl Sip128Digest {
    /// Digest keyed with `0, 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Digest keyed with the given keys.
    pub fn with_keys(k0: u64, k1: u64) -> Self {
        Sip128Digest { k0, k1 }
    }
}

impl Digest for Sip128Digest {
    fn digest16(&self, input: &[u8]) -> [u8; 16] {
        let mut hasher = SipHasher13::new_with_keys(self.k0, self.k1);
        hasher.write(input);
        hasher.finish128().as_bytes()
    }
}

/// Split 16 bytes of digest material into four little-endian words.
///
/// Byte `4 * n` is the least significant byte of word `n`.
pub fn words(digest: &[u8; 16]) -> [u32; 4] {
    array::from_fn(|n| {
        let mut word = [0u8; 4];
        word.copy_from_slice(&digest[n * 4..n * 4 + 4]);
        u32::from_le_bytes(word)
    })
}

/// The 32-bit ketama hash of `key`: the first little-endian word of its MD5 digest.
pub fn hash(key: &[u8]) -> u32 {
    hash_with(&Md5Digest, key)
}

/// The 32-bit hash of `key` under an arbitrary digest.
pub fn hash_with<D: Digest + ?Sized>(digest: &D, key: &[u8]) -> u32 {
    words(&digest.digest16(key))[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_matches_reference_vectors() {
        // RFC 1321 test suite
        assert_eq!(
            Md5Digest.digest16(b""),
            [
                0xd4, 0x1d, 0x8c, 0xd9, 0x8f, 0x00, 0xb2, 0x04, 0xe9, 0x80, 0x09, 0x98, 0xec, 0xf8,
                0x42, 0x7e
            ]
        );
        assert_eq!(
            Md5Digest.digest16(b"abc"),
            [
                0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0, 0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1,
                0x7f, 0x72
            ]
        );
    }

    #[test]
    fn words_are_little_endian() {
        let digest = [
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
            0x0f, 0x10,
        ];
        assert_eq!(
            words(&digest),
            [0x04030201, 0x08070605, 0x0c0b0a09, 0x100f0e0d]
        );
    }

    #[test]
    fn hash_uses_first_word_of_md5() {
        // md5("abc") = 90 01 50 98 ...
        assert_eq!(hash(b"abc"), 0x98500190);
        assert_eq!(hash(b""), 0xd98c1dd4);
    }

    #[test]
    fn sip128_is_deterministic_and_keyed() {
        let digest = Sip128Digest::new();
        assert_eq!(digest.digest16(b"10.0.0.1:11211-0"), digest.digest16(b"10.0.0.1:11211-0"));
        assert_ne!(digest.digest16(b"10.0.0.1:11211-0"), digest.digest16(b"10.0.0.1:11211-1"));

        let keyed = Sip128Digest::with_keys(1, 2);
        assert_ne!(digest.digest16(b"foo"), keyed.digest16(b"foo"));
    }
}
