//! External message transform, applied before embedding and after
//! extraction.
//!
//! The codec never interprets the transformed text, it only carries it. The
//! transform is injected as a trait object so the core stays testable
//! without the external program installed.

use std::path::PathBuf;
use std::process::Command;

use log::debug;

use crate::config::TransformConfig;
use crate::error::StegError;
use crate::result::Result;

/// A reversible text-to-text transform.
///
/// `decode(encode(text))` must return `text` exactly for round-trips
/// through a carrier image to work.
pub trait TextTransform {
    /// Transforms a plain message into its embeddable text representation.
    fn encode(&self, plain: &str) -> Result<String>;

    /// Reverses [`encode`](TextTransform::encode).
    fn decode(&self, transformed: &str) -> Result<String>;
}

/// Passes messages through unchanged.
///
/// Used by tests and by the CLI plain mode.
pub struct IdentityTransform;

impl TextTransform for IdentityTransform {
    fn encode(&self, plain: &str) -> Result<String> {
        Ok(plain.to_owned())
    }

    fn decode(&self, transformed: &str) -> Result<String> {
        Ok(transformed.to_owned())
    }
}

/// Shells out to the configured transform program.
///
/// The program contract is `[program] [--cuda] -m <model> -F base64 c|d
/// <text>`, writing the result to stdout and diagnostics to stderr. The
/// call is synchronous and carries no timeout; callers wanting
/// cancellation must wrap it.
///
/// ## Example
/// ```rust,no_run
/// use pixelveil_core::config::TransformConfig;
/// use pixelveil_core::transform::{CommandTransform, TextTransform};
///
/// let config = TransformConfig::from_file("config.json".as_ref()).unwrap();
/// let transform = CommandTransform::from_config(config);
/// let compressed = transform.encode("Hello World!").unwrap();
/// ```
pub struct CommandTransform {
    program: PathBuf,
    cuda: bool,
    model_path: String,
}

impl CommandTransform {
    pub fn from_config(config: TransformConfig) -> Self {
        Self {
            program: config.program,
            cuda: config.cuda,
            model_path: config.model_path,
        }
    }

    fn run(&self, mode: &str, text: &str) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        if self.cuda {
            cmd.arg("--cuda");
        }
        cmd.arg("-m")
            .arg(&self.model_path)
            .args(["-F", "base64", mode])
            .arg(text);

        debug!("running transform program {:?} in mode {mode}", self.program);
        let output = cmd.output().map_err(|source| StegError::TransformSpawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(StegError::TransformFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }
}

impl TextTransform for CommandTransform {
    fn encode(&self, plain: &str) -> Result<String> {
        self.run("c", plain)
    }

    fn decode(&self, transformed: &str) -> Result<String> {
        self.run("d", transformed)
    }
}
