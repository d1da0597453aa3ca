//! The [`KeyPair`] aggregate.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    errors::{KeyError, MultikeyError},
    multikey,
    private_key::PrivateKey,
    public_key::PublicKey,
};

/// An optional private key together with its public key.
///
/// When only a private key is supplied the public key is derived from it. When both are supplied
/// their x-coordinates must agree; the public key's parity byte is kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    private_key: Option<PrivateKey>,
    public_key: PublicKey,
}

impl KeyPair {
    /// Builds a key pair from whichever keys are available.
    ///
    /// # Errors
    ///
    /// - [`KeyError::Constructor`] if neither key is given, or if the public key does not belong
    ///   to the private key.
    /// - [`KeyError::Derivation`] if the public key cannot be derived.
    pub fn new(
        private_key: Option<PrivateKey>,
        public_key: Option<PublicKey>,
    ) -> Result<Self, KeyError> {
        let public_key = match (&private_key, public_key) {
            (None, None) => {
                return Err(KeyError::Constructor(
                    "key pair needs a private key or a public key".to_string(),
                ))
            }
            (None, Some(public_key)) => public_key,
            (Some(private_key), None) => private_key.compute_public_key()?,
            (Some(private_key), Some(public_key)) => {
                let derived = private_key.compute_public_key()?;
                if derived.x() != public_key.x() {
                    return Err(KeyError::Constructor(
                        "public key does not match private key".to_string(),
                    ));
                }
                public_key
            }
        };

        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Builds a key pair from a private key, deriving the public key.
    pub fn from_private_key(private_key: PrivateKey) -> Result<Self, KeyError> {
        Self::new(Some(private_key), None)
    }

    /// Builds a public-only key pair.
    pub const fn from_public_key(public_key: PublicKey) -> Self {
        Self {
            private_key: None,
            public_key,
        }
    }

    /// Builds a key pair from 32 private key bytes.
    pub fn from_private_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        Self::from_private_key(PrivateKey::from_bytes(bytes)?)
    }

    /// Builds a key pair from an integer secret.
    pub fn from_secret(secret: &BigUint) -> Result<Self, KeyError> {
        Self::from_private_key(PrivateKey::from_secret(secret)?)
    }

    /// Generates a fresh key pair from the operating system's CSPRNG.
    pub fn generate() -> Result<Self, KeyError> {
        let pair = Self::from_private_key(PrivateKey::generate())?;
        debug!(public_key = %pair.public_key, "generated key pair");
        Ok(pair)
    }

    /// The private key.
    ///
    /// # Errors
    ///
    /// [`KeyError::Unavailable`] for a public-only key pair.
    pub fn private_key(&self) -> Result<&PrivateKey, KeyError> {
        self.private_key.as_ref().ok_or(KeyError::Unavailable)
    }

    /// The public key.
    pub const fn public_key(&self) -> PublicKey {
        self.public_key
    }

    /// Whether the private key is present.
    pub const fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Exports the pair, including the private key if present, for persistence.
    pub fn export(&self) -> Result<KeyPairExport, MultikeyError> {
        Ok(KeyPairExport {
            public_key: self.public_key,
            multibase: self.public_key.to_multibase()?,
            private_key: self.private_key.as_ref().map(PrivateKey::to_hex),
        })
    }

    /// Rebuilds a pair from an export, checking that its parts agree.
    pub fn import(export: &KeyPairExport) -> Result<Self, MultikeyError> {
        let decoded = multikey::decode(&export.multibase)?;
        if decoded.key() != export.public_key.x() {
            return Err(MultikeyError::Decode(
                "multibase does not match public key".to_string(),
            ));
        }

        let private_key = export
            .private_key
            .as_deref()
            .map(|hex_sk| {
                let bytes =
                    hex::decode(hex_sk).map_err(|e| KeyError::Constructor(e.to_string()))?;
                PrivateKey::from_bytes(&bytes)
            })
            .transpose()?;

        Ok(Self::new(private_key, Some(export.public_key))?)
    }
}

/// Serializable form of a [`KeyPair`].
///
/// Only produced by the explicit [`KeyPair::export`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPairExport {
    /// Compressed public key, hex.
    pub public_key: PublicKey,

    /// Multikey encoding of the public key.
    pub multibase: String,

    /// Private key, hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY3_COMPRESSED: &str =
        "02f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9";

    fn key3() -> PrivateKey {
        PrivateKey::from_secret(&BigUint::from(3u8)).unwrap()
    }

    #[test]
    fn requires_some_key() {
        assert!(matches!(
            KeyPair::new(None, None),
            Err(KeyError::Constructor(_))
        ));
    }

    #[test]
    fn derives_public_key() {
        let pair = KeyPair::from_private_key(key3()).unwrap();

        assert_eq!(pair.public_key().to_hex(), KEY3_COMPRESSED);
        assert_eq!(pair.private_key().unwrap(), &key3());
        assert!(pair.has_private_key());
    }

    #[test]
    fn public_only_has_no_private_key() {
        let pk: PublicKey = KEY3_COMPRESSED.parse().unwrap();
        let pair = KeyPair::new(None, Some(pk)).unwrap();

        assert_eq!(pair, KeyPair::from_public_key(pk));
        assert_eq!(pair.private_key(), Err(KeyError::Unavailable));
        assert!(!pair.has_private_key());
    }

    #[test]
    fn keeps_supplied_parity() {
        let odd: PublicKey = KEY3_COMPRESSED.replacen("02", "03", 1).parse().unwrap();
        let pair = KeyPair::new(Some(key3()), Some(odd)).unwrap();

        assert_eq!(pair.public_key().parity(), 0x03);
    }

    #[test]
    fn rejects_mismatched_keys() {
        let other = PrivateKey::from_secret(&BigUint::from(4u8))
            .unwrap()
            .compute_public_key()
            .unwrap();

        assert!(matches!(
            KeyPair::new(Some(key3()), Some(other)),
            Err(KeyError::Constructor(_))
        ));
    }

    #[test]
    fn constructors_agree() {
        let by_secret = KeyPair::from_secret(&BigUint::from(3u8)).unwrap();
        let by_bytes = KeyPair::from_private_bytes(&key3().bytes()).unwrap();

        assert_eq!(by_secret, by_bytes);
    }

    #[test]
    fn generated_pair_is_consistent() {
        let pair = KeyPair::generate().unwrap();
        let derived = pair.private_key().unwrap().compute_public_key().unwrap();

        assert_eq!(derived, pair.public_key());
    }

    #[test]
    fn export_round_trip() {
        let pair = KeyPair::from_private_key(key3()).unwrap();
        let export = pair.export().unwrap();

        assert_eq!(
            export.multibase,
            "z66Q3f6ypQE3nsuuaWxn3z6e1K7QNgAEdtR99MeqXjzxkENU"
        );
        let json = serde_json::to_string(&export).unwrap();
        let parsed: KeyPairExport = serde_json::from_str(&json).unwrap();
        assert_eq!(KeyPair::import(&parsed).unwrap(), pair);
    }

    #[test]
    fn public_only_export_omits_private_key() {
        let pair = KeyPair::from_public_key(KEY3_COMPRESSED.parse().unwrap());
        let json = serde_json::to_string(&pair.export().unwrap()).unwrap();

        assert!(!json.contains("private_key"));
        let parsed: KeyPairExport = serde_json::from_str(&json).unwrap();
        assert_eq!(KeyPair::import(&parsed).unwrap(), pair);
    }

    #[test]
    fn import_rejects_mismatched_multibase() {
        let mut export = KeyPair::from_private_key(key3()).unwrap().export().unwrap();
        export.multibase = "z66Pu5cFv1WyftyTbLJxfydJXo9WcoyqcqBE6WwzwNWo4Tvw".to_string();

        assert!(matches!(
            KeyPair::import(&export),
            Err(MultikeyError::Decode(_))
        ));
    }
}
