use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use pixelveil_core::config::TransformConfig;
use pixelveil_core::transform::{CommandTransform, IdentityTransform, TextTransform};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Transform configuration file
    #[arg(short, long, value_name = "config file", default_value = "config.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Encode(encode::EncodeArgs),
    Decode(decode::DecodeArgs),
}

/// Builds the message transform for a run. `plain` skips the external
/// program entirely, everything else needs the configuration file.
pub fn load_transform(config: &Path, plain: bool) -> crate::CliResult<Box<dyn TextTransform>> {
    if plain {
        return Ok(Box::new(IdentityTransform));
    }

    let config = TransformConfig::from_file(config)?;
    log::debug!("using transform program {:?}", config.program);
    Ok(Box::new(CommandTransform::from_config(config)))
}
