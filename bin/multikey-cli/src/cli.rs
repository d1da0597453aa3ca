use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "multikey-cli",
    about = "Generate, inspect and multikey-encode BIP340 secp256k1 keys",
    version
)]
pub(crate) struct Cli {
    #[arg(
        long,
        short = 'c',
        env = "MULTIKEY_CLI_CONFIG",
        help = "the path to the TOML config file"
    )]
    pub(crate) config: Option<PathBuf>,

    #[arg(long, value_enum, help = "output format, overrides the config file")]
    pub(crate) format: Option<OutputFormat>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    /// Generate a fresh key pair.
    Generate,

    /// Derive the key pair for an existing private key.
    Derive(DeriveArgs),

    /// Show every encoding of a public key.
    Inspect(PubkeyArgs),

    /// Recover the uncompressed point for an x-coordinate.
    LiftX(LiftXArgs),

    /// Encode a public key as a multikey.
    Encode(PubkeyArgs),

    /// Decode and validate a multikey.
    Decode(DecodeArgs),
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct DeriveArgs {
    #[arg(long, env = "MULTIKEY_CLI_SECRET", help = "the 32-byte private key as hex")]
    pub(crate) secret: String,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct PubkeyArgs {
    #[arg(long, help = "the x-only (32-byte) or compressed (33-byte) public key as hex")]
    pub(crate) pubkey: String,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct LiftXArgs {
    #[arg(long, help = "the 32-byte x-coordinate as hex")]
    pub(crate) x: String,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct DecodeArgs {
    #[arg(long, help = "the multikey string, e.g. z66P...")]
    pub(crate) multikey: String,
}
