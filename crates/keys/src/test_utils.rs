//! Test utilities for the key types.

use proptest::prelude::*;
use secp256k1::SecretKey;

/// Strategy over valid secp256k1 secret keys.
pub(crate) fn arb_private_key() -> impl Strategy<Value = SecretKey> {
    any::<[u8; 32]>().prop_filter_map("scalar must be in [1, n)", |bytes| {
        SecretKey::from_slice(&bytes).ok()
    })
}
