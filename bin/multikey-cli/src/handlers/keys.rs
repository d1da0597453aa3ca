//! Key generation, derivation and inspection.

use anyhow::{bail, Result};
use bip340_keys::{constants::X_ONLY_PUBLIC_KEY_LEN, point::lift_x, KeyPair, PublicKey};
use tracing::info;

use super::{parse_hex, render};
use crate::{
    cli::{DeriveArgs, LiftXArgs, PubkeyArgs},
    config::OutputFormat,
};

/// Handles the generate command.
pub(crate) fn handle_generate(format: OutputFormat) -> Result<String> {
    let pair = KeyPair::generate()?;
    info!(public_key = %pair.public_key(), "generated key pair");

    render_pair(&pair, format)
}

/// Handles the derive command.
pub(crate) fn handle_derive(args: DeriveArgs, format: OutputFormat) -> Result<String> {
    let secret = parse_hex(&args.secret)?;
    let pair = KeyPair::from_private_bytes(&secret)?;

    render_pair(&pair, format)
}

/// Handles the inspect command.
pub(crate) fn handle_inspect(args: PubkeyArgs, format: OutputFormat) -> Result<String> {
    let public_key = PublicKey::from_bytes(&parse_hex(&args.pubkey)?)?;

    render(
        &[
            ("compressed", public_key.to_hex()),
            ("x_only", hex::encode(public_key.x())),
            ("y", hex::encode(public_key.y()?)),
            ("parity", format!("0x{:02x}", public_key.parity())),
            ("uncompressed", hex::encode(public_key.uncompressed()?)),
            ("multibase", public_key.to_multibase()?),
        ],
        format,
    )
}

/// Handles the lift-x command.
pub(crate) fn handle_lift_x(args: LiftXArgs, format: OutputFormat) -> Result<String> {
    let x = parse_hex(&args.x)?;
    if x.len() != X_ONLY_PUBLIC_KEY_LEN {
        bail!(
            "x must be exactly {X_ONLY_PUBLIC_KEY_LEN} bytes ({} hex chars), got {} bytes",
            X_ONLY_PUBLIC_KEY_LEN * 2,
            x.len()
        );
    }

    let point = lift_x(&x)?;

    render(
        &[
            ("uncompressed", hex::encode(point)),
            ("y", hex::encode(&point[33..])),
        ],
        format,
    )
}

fn render_pair(pair: &KeyPair, format: OutputFormat) -> Result<String> {
    let export = pair.export()?;

    let mut fields = vec![
        ("public_key", export.public_key.to_hex()),
        ("x_only", hex::encode(export.public_key.x())),
        ("multibase", export.multibase),
    ];
    if let Some(private_key) = export.private_key {
        fields.push(("private_key", private_key));
    }

    render(&fields, format)
}
