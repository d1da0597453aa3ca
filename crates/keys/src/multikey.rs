//! The multikey wire format for x-only public keys.
//!
//! A multikey is `MULTIKEY_PREFIX || x` (34 bytes) rendered as a base58btc multibase string, so
//! every encoded key starts with `z66P` or `z66Q`. base58btc has no checksum; the prefix is
//! instead checked against its known SHA-256 digest when decoding.

use multibase::Base;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::{
    constants::{MULTIKEY_LEN, MULTIKEY_PREFIX, MULTIKEY_PREFIX_SHA256, X_ONLY_PUBLIC_KEY_LEN},
    errors::{KeyError, MultikeyError},
    public_key::PublicKey,
};

/// A decoded multikey: the type prefix and the x-only key it tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Multikey {
    prefix: [u8; 2],
    key: [u8; X_ONLY_PUBLIC_KEY_LEN],
}

impl Multikey {
    /// The 2-byte type prefix.
    pub const fn prefix(&self) -> [u8; 2] {
        self.prefix
    }

    /// The 32-byte x-only key.
    pub const fn key(&self) -> [u8; X_ONLY_PUBLIC_KEY_LEN] {
        self.key
    }

    /// The full 34-byte payload.
    pub fn to_bytes(&self) -> [u8; MULTIKEY_LEN] {
        let mut buf = [0u8; MULTIKEY_LEN];
        buf[..2].copy_from_slice(&self.prefix);
        buf[2..].copy_from_slice(&self.key);
        buf
    }

    /// Interprets the key as an even-y public key.
    pub fn public_key(&self) -> Result<PublicKey, KeyError> {
        PublicKey::from_x_only(&self.key)
    }
}

/// Encodes the x-coordinate of `public_key` as a multikey string.
pub fn encode(public_key: &PublicKey) -> Result<String, MultikeyError> {
    encode_x_only(&public_key.x())
}

/// Encodes raw x-only key bytes as a multikey string.
///
/// # Errors
///
/// [`MultikeyError::Encode`] if `x` is not 32 bytes.
pub fn encode_x_only(x: &[u8]) -> Result<String, MultikeyError> {
    if x.len() != X_ONLY_PUBLIC_KEY_LEN {
        return Err(MultikeyError::Encode(format!(
            "x-only public key must be {X_ONLY_PUBLIC_KEY_LEN} bytes, got {}",
            x.len()
        )));
    }

    let mut buf = [0u8; MULTIKEY_LEN];
    buf[..2].copy_from_slice(&MULTIKEY_PREFIX);
    buf[2..].copy_from_slice(x);

    Ok(multibase::encode(Base::Base58Btc, buf))
}

/// Decodes a multikey string and verifies its prefix.
///
/// The key bytes are not checked to be a curve point; use [`Multikey::public_key`] for that.
///
/// # Errors
///
/// [`MultikeyError::Decode`] if the string is not base58btc multibase, does not decode to
/// 34 bytes, or its prefix does not hash to [`MULTIKEY_PREFIX_SHA256`].
pub fn decode(s: &str) -> Result<Multikey, MultikeyError> {
    let (base, bytes) = multibase::decode(s).map_err(|e| {
        debug!(%e, "multibase decode failed");
        MultikeyError::Decode(e.to_string())
    })?;

    if base != Base::Base58Btc {
        return Err(MultikeyError::Decode(format!(
            "expected base58btc multibase, got {base:?}"
        )));
    }

    let payload: [u8; MULTIKEY_LEN] = bytes.as_slice().try_into().map_err(|_| {
        MultikeyError::Decode(format!(
            "multikey must be {MULTIKEY_LEN} bytes, got {}",
            bytes.len()
        ))
    })?;

    let mut prefix = [0u8; 2];
    prefix.copy_from_slice(&payload[..2]);
    let mut key = [0u8; X_ONLY_PUBLIC_KEY_LEN];
    key.copy_from_slice(&payload[2..]);

    if hex::encode(Sha256::digest(prefix)) != MULTIKEY_PREFIX_SHA256 {
        debug!(prefix = %hex::encode(prefix), "multikey prefix digest mismatch");
        return Err(MultikeyError::Decode("malformed multibase prefix".to_string()));
    }

    Ok(Multikey { prefix, key })
}
