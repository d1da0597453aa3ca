//! Recovery of full curve points from x-only coordinates.

use num_bigint::BigUint;

use crate::{
    constants::{
        CURVE_B, FIELD_PRIME, UNCOMPRESSED_PUBLIC_KEY_LEN, UNCOMPRESSED_TAG, X_ONLY_PUBLIC_KEY_LEN,
    },
    errors::PointError,
    field::{is_quadratic_residue, sqrt_mod},
};

/// Recovers the uncompressed point `0x04 || x || y` for the given big-endian x-coordinate.
///
/// `y` is whichever root [`sqrt_mod`] yields; no parity is enforced. Callers that need the even
/// (or odd) root select it with [`has_even_y`] and [`negate_y`].
///
/// # Errors
///
/// - [`PointError::OutOfRange`] if `x` is not 32 bytes, or if `x == 0` or `x >= p`.
/// - [`PointError::NotOnCurve`] if `x^3 + 7` is not a square modulo `p`.
pub fn lift_x(x: &[u8]) -> Result<[u8; UNCOMPRESSED_PUBLIC_KEY_LEN], PointError> {
    if x.len() != X_ONLY_PUBLIC_KEY_LEN {
        return Err(PointError::OutOfRange);
    }

    let p = &*FIELD_PRIME;
    let x_int = BigUint::from_bytes_be(x);
    if x_int == BigUint::from(0u8) || x_int >= *p {
        return Err(PointError::OutOfRange);
    }

    let y_sq = (x_int.pow(3) + CURVE_B) % p;
    if !is_quadratic_residue(&y_sq, p) {
        return Err(PointError::NotOnCurve);
    }
    let y = sqrt_mod(&y_sq, p);

    let mut point = [0u8; UNCOMPRESSED_PUBLIC_KEY_LEN];
    point[0] = UNCOMPRESSED_TAG;
    point[1..33].copy_from_slice(x);
    point[33..].copy_from_slice(&to_be_bytes32(&y));

    Ok(point)
}

/// Whether the big-endian field element `y` is even.
pub const fn has_even_y(y: &[u8; 32]) -> bool {
    y[31] & 1 == 0
}

/// Returns `p - y`, the other square root sharing the same x-coordinate.
pub fn negate_y(y: &[u8; 32]) -> [u8; 32] {
    let y = BigUint::from_bytes_be(y);
    if y == BigUint::from(0u8) {
        return [0u8; 32];
    }

    to_be_bytes32(&(&*FIELD_PRIME - y))
}

/// Left-pads a big-endian integer below `2^256` to 32 bytes.
pub(crate) fn to_be_bytes32(value: &BigUint) -> [u8; 32] {
    let bytes = value.to_bytes_be();
    debug_assert!(bytes.len() <= 32, "value does not fit in 32 bytes");

    let mut out = [0u8; 32];
    let len = bytes.len().min(32);
    out[32 - len..].copy_from_slice(&bytes[bytes.len() - len..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const G_X: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const G_Y: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    fn x_bytes(hex_str: &str) -> Vec<u8> {
        hex::decode(hex_str).unwrap()
    }

    #[test]
    fn lifts_generator() {
        let point = lift_x(&x_bytes(G_X)).unwrap();

        assert_eq!(point[0], 0x04);
        assert_eq!(hex::encode(&point[1..33]), G_X);
        assert_eq!(hex::encode(&point[33..]), G_Y);
    }

    #[test]
    fn lifts_x_equal_to_one() {
        let mut x = [0u8; 32];
        x[31] = 1;
        let point = lift_x(&x).unwrap();

        assert_eq!(
            hex::encode(&point[33..]),
            "4218f20ae6c646b363db68605822fb14264ca8d2587fdd6fbc750d587e76a7ee"
        );
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(lift_x(&[0u8; 32]), Err(PointError::OutOfRange));
    }

    #[test]
    fn rejects_field_prime_and_above() {
        let p = to_be_bytes32(&FIELD_PRIME);
        assert_eq!(lift_x(&p), Err(PointError::OutOfRange));
        assert_eq!(lift_x(&[0xff; 32]), Err(PointError::OutOfRange));
    }

    #[test]
    fn rejects_x_off_curve() {
        let mut x = [0u8; 32];
        x[31] = 5;
        assert_eq!(lift_x(&x), Err(PointError::NotOnCurve));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(lift_x(&[1u8; 31]), Err(PointError::OutOfRange));
        assert_eq!(lift_x(&[1u8; 33]), Err(PointError::OutOfRange));
        assert_eq!(lift_x(&[]), Err(PointError::OutOfRange));
    }

    #[test]
    fn negation_flips_parity() {
        let y: [u8; 32] = x_bytes(G_Y).try_into().unwrap();
        let neg = negate_y(&y);

        assert!(has_even_y(&y));
        assert!(!has_even_y(&neg));
        assert_eq!(negate_y(&neg), y);
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;
        use crate::test_utils::arb_private_key;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            // Lifting the x of a real public key yields that key's point or its negation.
            #[test]
            fn lift_x_recovers_public_key(sk in arb_private_key()) {
                let full = secp256k1::PublicKey::from_secret_key(secp256k1::SECP256K1, &sk)
                    .serialize_uncompressed();
                let point = lift_x(&full[1..33]).unwrap();

                prop_assert_eq!(&point[..33], &full[..33]);
                let y: [u8; 32] = full[33..].try_into().unwrap();
                let lifted: [u8; 32] = point[33..].try_into().unwrap();
                prop_assert!(lifted == y || lifted == negate_y(&y));
            }
        }
    }
}
