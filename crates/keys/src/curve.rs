//! The curve library seam.
//!
//! Group-law arithmetic is never reimplemented here: scalar multiplication and scalar validity
//! come from a [`CurveBackend`], which in production is [`Secp256k1Backend`].

use secp256k1::{
    rand::{rngs::OsRng, RngCore},
    PublicKey, SecretKey, SECP256K1,
};

use crate::constants::{COMPRESSED_PUBLIC_KEY_LEN, EVEN_PARITY, ODD_PARITY};

/// Scalar multiplication and validity predicates over secp256k1.
pub trait CurveBackend {
    /// Multiplies the generator by `scalar`.
    ///
    /// Returns the 33-byte compressed point when `compressed` is set, otherwise the 65-byte
    /// uncompressed point. Returns `None` if the scalar is not a valid private key.
    fn scalar_mul_base(&self, scalar: &[u8; 32], compressed: bool) -> Option<Vec<u8>>;

    /// Whether `scalar` is a 32-byte big-endian integer in `[1, n)`.
    fn is_valid_scalar(&self, scalar: &[u8]) -> bool;

    /// Whether `point` is a well-formed compressed point.
    fn is_compressed(&self, point: &[u8]) -> bool;
}

/// [`CurveBackend`] over libsecp256k1's global context.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Backend;

impl CurveBackend for Secp256k1Backend {
    fn scalar_mul_base(&self, scalar: &[u8; 32], compressed: bool) -> Option<Vec<u8>> {
        let sk = SecretKey::from_slice(scalar).ok()?;
        let pk = PublicKey::from_secret_key(SECP256K1, &sk);

        if compressed {
            Some(pk.serialize().to_vec())
        } else {
            Some(pk.serialize_uncompressed().to_vec())
        }
    }

    fn is_valid_scalar(&self, scalar: &[u8]) -> bool {
        SecretKey::from_slice(scalar).is_ok()
    }

    fn is_compressed(&self, point: &[u8]) -> bool {
        point.len() == COMPRESSED_PUBLIC_KEY_LEN
            && matches!(point[0], EVEN_PARITY | ODD_PARITY)
            && PublicKey::from_slice(point).is_ok()
    }
}

/// Fills `buf` from the operating system's CSPRNG.
pub fn fill_random(buf: &mut [u8]) {
    OsRng.fill_bytes(buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_from_scalar_one() {
        let mut one = [0u8; 32];
        one[31] = 1;

        let compressed = Secp256k1Backend.scalar_mul_base(&one, true).unwrap();
        assert_eq!(
            hex::encode(&compressed),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
        assert!(Secp256k1Backend.is_compressed(&compressed));

        let uncompressed = Secp256k1Backend.scalar_mul_base(&one, false).unwrap();
        assert_eq!(uncompressed.len(), 65);
        assert!(!Secp256k1Backend.is_compressed(&uncompressed));
    }

    #[test]
    fn zero_scalar_is_invalid() {
        assert!(!Secp256k1Backend.is_valid_scalar(&[0u8; 32]));
        assert!(Secp256k1Backend.scalar_mul_base(&[0u8; 32], true).is_none());
    }

    #[test]
    fn random_fill_is_not_constant() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        fill_random(&mut a);
        fill_random(&mut b);

        assert_ne!(a, b);
    }
}
