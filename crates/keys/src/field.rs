//! Arithmetic over prime fields, as needed for point recovery.

use num_bigint::BigUint;

/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// A modulus of one yields zero. The caller guarantees `modulus > 0`.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    let one = BigUint::from(1u8);
    if *modulus == one {
        return BigUint::from(0u8);
    }

    let mut result = one;
    let mut base = base % modulus;
    for i in 0..exponent.bits() {
        if exponent.bit(i) {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
    }

    result
}

/// Computes a candidate square root of `a` modulo `p` as `a^((p + 1) / 4) mod p`.
///
/// Only meaningful for primes `p ≡ 3 (mod 4)`, which includes the secp256k1 field prime. The
/// residuosity of `a` is not checked: for a non-residue the result squares to `-a`, not `a`. Use
/// [`is_quadratic_residue`] first when that matters, as [`lift_x`](crate::point::lift_x) does.
pub fn sqrt_mod(a: &BigUint, p: &BigUint) -> BigUint {
    let exponent = (p + 1u32) >> 2usize;
    mod_pow(a, &exponent, p)
}

/// Euler's criterion: `a` is a square modulo the odd prime `p` iff `a^((p - 1) / 2) ∈ {0, 1}`.
pub fn is_quadratic_residue(a: &BigUint, p: &BigUint) -> bool {
    let a = a % p;
    if a == BigUint::from(0u8) {
        return true;
    }

    let exponent = (p - 1u32) >> 1usize;
    mod_pow(&a, &exponent, p) == BigUint::from(1u8)
}
