//! secp256k1 key material for BIP340 Schnorr signatures.
//!
//! This crate provides:
//!
//! - [`PrivateKey`] and [`PublicKey`], validated byte-level key representations;
//! - [`KeyPair`], an optional private key with its public key;
//! - [`lift_x`](point::lift_x), recovery of a full point from an x-only key;
//! - the [`multikey`] codec, which publishes x-only keys as `z66P…`/`z66Q…` strings.
//!
//! Group arithmetic is delegated to libsecp256k1 through [`curve::CurveBackend`]; only the field
//! arithmetic needed for point recovery lives here.
//!
//! # Usage
//!
//! ```rust
//! use bip340_keys::{multikey, KeyPair, PublicKey};
//!
//! let pair = KeyPair::generate()?;
//! let encoded = multikey::encode(&pair.public_key())?;
//! let decoded = PublicKey::from_multibase(&encoded)?;
//!
//! assert_eq!(decoded.x(), pair.public_key().x());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod constants;
pub mod curve;
pub mod errors;
pub mod field;
pub mod keypair;
pub mod multikey;
pub mod point;
pub mod private_key;
pub mod public_key;

#[cfg(test)]
mod test_utils;

pub use errors::{KeyError, MultikeyError, PointError};
pub use keypair::{KeyPair, KeyPairExport};
pub use multikey::Multikey;
pub use private_key::{PrivateKey, ScalarInput};
pub use public_key::PublicKey;
