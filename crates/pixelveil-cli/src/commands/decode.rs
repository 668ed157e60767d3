use std::path::{Path, PathBuf};

use clap::Args;

use crate::CliResult;

/// Recovers a hidden text message from a PNG image
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Source image that contains secret data
    #[arg(short = 'i', long = "in", value_name = "image source file", required = true)]
    pub image: PathBuf,

    /// Print the embedded payload as-is, skipping the external transform
    #[arg(long)]
    pub plain: bool,
}

impl DecodeArgs {
    pub fn run(self, config: &Path) -> CliResult<()> {
        let transform = crate::cli::load_transform(config, self.plain)?;
        let message = pixelveil_core::commands::decode(&self.image, transform.as_ref())?;
        println!("{message}");

        Ok(())
    }
}
