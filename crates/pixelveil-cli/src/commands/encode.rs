use std::path::{Path, PathBuf};

use clap::Args;

use crate::CliResult;

/// Hides a text message in a PNG image
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Carrier image, used readonly
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// The text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Output image; defaults to "<input stem>-enc.png"
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub output: Option<PathBuf>,

    /// Embed the message as-is, skipping the external transform
    #[arg(long)]
    pub plain: bool,
}

impl EncodeArgs {
    pub fn run(self, config: &Path) -> CliResult<()> {
        let transform = crate::cli::load_transform(config, self.plain)?;
        let output = self
            .output
            .unwrap_or_else(|| default_output_path(&self.image));

        pixelveil_core::commands::encode(&self.image, &output, &self.message, transform.as_ref())?;
        println!("Message successfully hidden in {}", output.display());

        Ok(())
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{stem}-enc.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_derive_the_output_path_next_to_the_input() {
        assert_eq!(
            default_output_path(Path::new("photos/cat.png")),
            PathBuf::from("photos/cat-enc.png")
        );
        assert_eq!(
            default_output_path(Path::new("cat.png")),
            PathBuf::from("cat-enc.png")
        );
        assert_eq!(
            default_output_path(Path::new("archive.tar.png")),
            PathBuf::from("archive.tar-enc.png")
        );
    }
}
