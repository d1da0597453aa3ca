//! Curve parameters and wire-format constants.
//!
//! The field prime and group order are taken from the `secp256k1` crate so that this crate and the
//! curve library can never disagree about them.

use std::sync::LazyLock;

use num_bigint::BigUint;
use secp256k1::constants::{CURVE_ORDER, FIELD_SIZE};

/// Length of a serialized private scalar.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Length of an x-only public key.
pub const X_ONLY_PUBLIC_KEY_LEN: usize = 32;

/// Length of a compressed public key: parity byte followed by the x-coordinate.
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;

/// Length of an uncompressed public key: `0x04 || x || y`.
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;

/// Parity byte of a compressed point with an even y-coordinate.
pub const EVEN_PARITY: u8 = 0x02;

/// Parity byte of a compressed point with an odd y-coordinate.
pub const ODD_PARITY: u8 = 0x03;

/// Leading byte of an uncompressed point.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// The curve constant `b` in `y^2 = x^3 + b`.
pub const CURVE_B: u32 = 7;

/// Multicodec prefix for a secp256k1 x-only public key.
///
/// This is the unsigned-varint form of the `secp256k1-xonly` code `0x2561`.
pub const MULTIKEY_PREFIX: [u8; 2] = [0xe1, 0x4a];

/// SHA-256 of [`MULTIKEY_PREFIX`], lowercase hex.
///
/// base58btc carries no checksum, so decoding compares the prefix against this digest.
pub const MULTIKEY_PREFIX_SHA256: &str =
    "b8f54beb0c765fcb38fd625a6194439e47a742da2c85df5abcfa071554d21d21";

/// Length of a decoded multikey payload.
pub const MULTIKEY_LEN: usize = MULTIKEY_PREFIX.len() + X_ONLY_PUBLIC_KEY_LEN;

/// The secp256k1 field prime `p`.
pub static FIELD_PRIME: LazyLock<BigUint> = LazyLock::new(|| BigUint::from_bytes_be(&FIELD_SIZE));

/// The secp256k1 group order `n`.
pub static GROUP_ORDER: LazyLock<BigUint> =
    LazyLock::new(|| BigUint::from_bytes_be(&CURVE_ORDER));

#[cfg(test)]
mod tests {
    use sha2::{Digest, Sha256};

    use super::*;

    #[test]
    fn prefix_digest_matches_prefix() {
        let digest = Sha256::digest(MULTIKEY_PREFIX);
        assert_eq!(hex::encode(digest), MULTIKEY_PREFIX_SHA256);
    }

    #[test]
    fn field_prime_is_3_mod_4() {
        assert_eq!(&*FIELD_PRIME % 4u32, BigUint::from(3u8));
    }

    #[test]
    fn curve_params() {
        assert_eq!(
            hex::encode(FIELD_PRIME.to_bytes_be()),
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
        );
        assert_eq!(
            hex::encode(GROUP_ORDER.to_bytes_be()),
            "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"
        );
    }
}
