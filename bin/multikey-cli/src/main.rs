//! CLI for generating, inspecting and encoding BIP340 secp256k1 keys.

mod cli;
mod config;
mod handlers;

use anyhow::Result;
use bip340_keys_common::logging::{self, LoggerConfig};
use clap::Parser;
use tracing::debug;

use crate::{
    cli::{Cli, Commands},
    config::Config,
    handlers::{keys, multikey},
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    logging::init(LoggerConfig::with_base_name(config.logging.whoami()));
    debug!(?config, "loaded config");

    let format = cli.format.unwrap_or(config.output.format);
    let output = match cli.command {
        Commands::Generate => keys::handle_generate(format)?,
        Commands::Derive(args) => keys::handle_derive(args, format)?,
        Commands::Inspect(args) => keys::handle_inspect(args, format)?,
        Commands::LiftX(args) => keys::handle_lift_x(args, format)?,
        Commands::Encode(args) => multikey::handle_encode(args)?,
        Commands::Decode(args) => multikey::handle_decode(args, format)?,
    };

    println!("{output}");

    Ok(())
}
