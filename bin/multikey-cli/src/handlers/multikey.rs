//! Multikey encoding and decoding.

use anyhow::Result;
use bip340_keys::{multikey, PublicKey};
use tracing::warn;

use super::{parse_hex, render};
use crate::{
    cli::{DecodeArgs, PubkeyArgs},
    config::OutputFormat,
};

/// Handles the encode command. The output is always the bare multikey string.
pub(crate) fn handle_encode(args: PubkeyArgs) -> Result<String> {
    let public_key = PublicKey::from_bytes(&parse_hex(&args.pubkey)?)?;

    Ok(multikey::encode(&public_key)?)
}

/// Handles the decode command.
pub(crate) fn handle_decode(args: DecodeArgs, format: OutputFormat) -> Result<String> {
    let decoded = multikey::decode(args.multikey.trim())?;

    let on_curve = match decoded.public_key() {
        Ok(_) => true,
        Err(e) => {
            warn!(%e, "multikey does not carry a curve point");
            false
        }
    };

    render(
        &[
            ("prefix", hex::encode(decoded.prefix())),
            ("x_only", hex::encode(decoded.key())),
            ("on_curve", on_curve.to_string()),
        ],
        format,
    )
}
