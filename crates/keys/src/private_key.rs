//! secp256k1 private scalars.

use std::{fmt, sync::OnceLock};

use num_bigint::BigUint;
use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    constants::{GROUP_ORDER, PRIVATE_KEY_LEN},
    curve::{fill_random, CurveBackend, Secp256k1Backend},
    errors::KeyError,
    point::to_be_bytes32,
    public_key::PublicKey,
};

/// The two accepted encodings of a private scalar.
#[derive(Clone, Copy)]
pub enum ScalarInput<'a> {
    /// 32 big-endian bytes.
    Bytes(&'a [u8]),

    /// The scalar as an integer.
    Secret(&'a BigUint),
}

impl fmt::Debug for ScalarInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(bytes) => write!(f, "ScalarInput::Bytes(<{} bytes>)", bytes.len()),
            Self::Secret(_) => f.write_str("ScalarInput::Secret(<redacted>)"),
        }
    }
}

/// A private scalar `d` with `1 <= d < n`.
///
/// The bytes are canonical; the integer form is derived on first use and cached. The key is
/// zeroized on drop, its [`Debug`](fmt::Debug) output is redacted, and it does not implement
/// `Serialize`.
#[derive(Clone)]
pub struct PrivateKey {
    bytes: [u8; PRIVATE_KEY_LEN],

    /// Integer form of `bytes`. Reset together with `bytes` on zeroize.
    secret: OnceLock<BigUint>,
}

impl PrivateKey {
    /// Creates a private key from either of its encodings.
    ///
    /// # Errors
    ///
    /// - [`KeyError::Constructor`] if bytes are not exactly 32 long.
    /// - [`KeyError::Range`] if the scalar is zero or not below the group order.
    pub fn new(input: ScalarInput<'_>) -> Result<Self, KeyError> {
        match input {
            ScalarInput::Bytes(bytes) => Self::from_bytes(bytes),
            ScalarInput::Secret(secret) => Self::from_secret(secret),
        }
    }

    /// Creates a private key from 32 big-endian bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let bytes: [u8; PRIVATE_KEY_LEN] = bytes.try_into().map_err(|_| {
            KeyError::Constructor(format!(
                "private key must be {PRIVATE_KEY_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;

        if !Secp256k1Backend.is_valid_scalar(&bytes) {
            return Err(KeyError::Range("private key must be in [1, n)".to_string()));
        }

        Ok(Self {
            bytes,
            secret: OnceLock::new(),
        })
    }

    /// Creates a private key from an integer secret.
    pub fn from_secret(secret: &BigUint) -> Result<Self, KeyError> {
        if *secret == BigUint::from(0u8) || *secret >= *GROUP_ORDER {
            return Err(KeyError::Range("secret must be in [1, n)".to_string()));
        }

        let bytes = to_be_bytes32(secret);
        if !Secp256k1Backend.is_valid_scalar(&bytes) {
            return Err(KeyError::Range(
                "secret does not encode a valid scalar".to_string(),
            ));
        }

        let cached = OnceLock::new();
        let _ = cached.set(secret.clone());

        Ok(Self {
            bytes,
            secret: cached,
        })
    }

    /// Generates a fresh private key from the operating system's CSPRNG.
    pub fn generate() -> Self {
        Self::generate_with(&Secp256k1Backend)
    }

    /// Generates a fresh private key, resampling until `backend` accepts the scalar.
    pub fn generate_with(backend: &impl CurveBackend) -> Self {
        let mut bytes = [0u8; PRIVATE_KEY_LEN];
        loop {
            fill_random(&mut bytes);
            if backend.is_valid_scalar(&bytes) {
                break;
            }
            trace!("sampled invalid scalar, retrying");
        }

        debug!("generated private key");
        Self {
            bytes,
            secret: OnceLock::new(),
        }
    }

    /// The scalar as 32 big-endian bytes.
    pub const fn bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        self.bytes
    }

    /// The scalar as an integer.
    pub fn secret(&self) -> BigUint {
        self.secret
            .get_or_init(|| BigUint::from_bytes_be(&self.bytes))
            .clone()
    }

    /// Lowercase hex of the 32-byte scalar.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Whether the scalar is accepted by the curve library.
    ///
    /// Always true for keys built through this type's constructors.
    pub fn is_valid(&self) -> bool {
        Secp256k1Backend.is_valid_scalar(&self.bytes)
    }

    /// Computes `d·G` as a compressed public key.
    pub fn compute_public_key(&self) -> Result<PublicKey, KeyError> {
        self.compute_public_key_with(&Secp256k1Backend)
    }

    /// Computes `d·G` with the given backend.
    ///
    /// # Errors
    ///
    /// [`KeyError::Derivation`] if the backend returns nothing or anything other than a valid
    /// compressed point.
    pub fn compute_public_key_with(
        &self,
        backend: &impl CurveBackend,
    ) -> Result<PublicKey, KeyError> {
        let point = backend
            .scalar_mul_base(&self.bytes, true)
            .ok_or_else(|| KeyError::Derivation("backend produced no point".to_string()))?;

        if !backend.is_compressed(&point) {
            debug!(len = point.len(), "backend returned a non-compressed point");
            return Err(KeyError::Derivation(
                "backend returned a non-compressed point".to_string(),
            ));
        }

        PublicKey::from_bytes(&point).map_err(|e| KeyError::Derivation(e.to_string()))
    }

    /// The x-coordinate of the public key as an integer.
    pub fn point(&self) -> Result<BigUint, KeyError> {
        let public_key = self.compute_public_key()?;
        Ok(BigUint::from_bytes_be(&public_key.x()))
    }
}

// Manual Drop implementation to zeroize keys on drop.
impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Zeroize for PrivateKey {
    #[inline]
    fn zeroize(&mut self) {
        let Self { bytes, secret } = self;

        bytes.zeroize();

        // NOTE: `BigUint` has no `Zeroize` impl. Overwriting with a full-width zero writes over
        // the existing limbs before the allocation is released.
        if let Some(mut cached) = secret.take() {
            cached.assign_from_slice(&[0u32; PRIVATE_KEY_LEN / 4]);
        }
    }
}

impl ZeroizeOnDrop for PrivateKey {}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_hex() == other.to_hex()
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = KeyError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl TryFrom<&BigUint> for PrivateKey {
    type Error = KeyError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        Self::from_secret(value)
    }
}
