//! secp256k1 public keys in compressed form.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    constants::{
        COMPRESSED_PUBLIC_KEY_LEN, EVEN_PARITY, ODD_PARITY, UNCOMPRESSED_PUBLIC_KEY_LEN,
        X_ONLY_PUBLIC_KEY_LEN,
    },
    errors::{KeyError, MultikeyError},
    multikey,
    point::{has_even_y, lift_x, negate_y},
};

/// A curve point stored as `[parity, x(32)]`.
///
/// A bare x-only key is assumed to have an even y-coordinate. Every accessor returns an owned
/// array, so callers can never alias the stored bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicKey {
    compressed: [u8; COMPRESSED_PUBLIC_KEY_LEN],
}

impl PublicKey {
    /// Creates a public key from 32 x-only bytes or 33 compressed bytes.
    ///
    /// # Errors
    ///
    /// - [`KeyError::Constructor`] on any other length or on a parity byte other than `0x02` or
    ///   `0x03`.
    /// - [`KeyError::Range`] if x is outside `[1, p)` or is not the x-coordinate of a curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let mut compressed = [0u8; COMPRESSED_PUBLIC_KEY_LEN];
        match bytes.len() {
            X_ONLY_PUBLIC_KEY_LEN => {
                compressed[0] = EVEN_PARITY;
                compressed[1..].copy_from_slice(bytes);
            }
            COMPRESSED_PUBLIC_KEY_LEN => {
                if !matches!(bytes[0], EVEN_PARITY | ODD_PARITY) {
                    return Err(KeyError::Constructor(format!(
                        "invalid parity byte 0x{:02x}",
                        bytes[0]
                    )));
                }
                compressed.copy_from_slice(bytes);
            }
            len => {
                return Err(KeyError::Constructor(format!(
                    "public key must be {X_ONLY_PUBLIC_KEY_LEN} or {COMPRESSED_PUBLIC_KEY_LEN} \
                     bytes, got {len}"
                )));
            }
        }

        lift_x(&compressed[1..]).map_err(|e| KeyError::Range(e.to_string()))?;

        Ok(Self { compressed })
    }

    /// Creates a public key from an x-only coordinate, assuming an even y.
    pub fn from_x_only(x: &[u8; X_ONLY_PUBLIC_KEY_LEN]) -> Result<Self, KeyError> {
        Self::from_bytes(x)
    }

    /// Decodes a multikey string.
    pub fn from_multibase(s: &str) -> Result<Self, MultikeyError> {
        Ok(multikey::decode(s)?.public_key()?)
    }

    /// The 33-byte compressed encoding.
    pub const fn bytes(&self) -> [u8; COMPRESSED_PUBLIC_KEY_LEN] {
        self.compressed
    }

    /// The 32-byte x-coordinate.
    pub fn x(&self) -> [u8; X_ONLY_PUBLIC_KEY_LEN] {
        let mut x = [0u8; X_ONLY_PUBLIC_KEY_LEN];
        x.copy_from_slice(&self.compressed[1..]);
        x
    }

    /// The 32-byte y-coordinate matching the stored parity.
    ///
    /// Recomputed on every call.
    pub fn y(&self) -> Result<[u8; 32], KeyError> {
        let uncompressed = self.uncompressed()?;
        let mut y = [0u8; 32];
        y.copy_from_slice(&uncompressed[33..]);
        Ok(y)
    }

    /// The parity byte, `0x02` or `0x03`.
    pub const fn parity(&self) -> u8 {
        self.compressed[0]
    }

    /// Whether the stored parity denotes an even y-coordinate.
    pub const fn has_even_y(&self) -> bool {
        self.compressed[0] == EVEN_PARITY
    }

    /// The 65-byte uncompressed encoding `0x04 || x || y`, with y chosen to match the parity
    /// byte.
    pub fn uncompressed(&self) -> Result<[u8; UNCOMPRESSED_PUBLIC_KEY_LEN], KeyError> {
        let mut point = lift_x(&self.compressed[1..])?;

        let mut y = [0u8; 32];
        y.copy_from_slice(&point[33..]);
        if has_even_y(&y) != self.has_even_y() {
            point[33..].copy_from_slice(&negate_y(&y));
        }

        Ok(point)
    }

    /// The multikey encoding of the x-coordinate.
    pub fn to_multibase(&self) -> Result<String, MultikeyError> {
        multikey::encode(self)
    }

    /// Lowercase hex of the compressed encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.compressed)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.to_hex()).finish()
    }
}

impl FromStr for PublicKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| KeyError::Constructor(e.to_string()))?;
        Self::from_bytes(&bytes)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = KeyError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
