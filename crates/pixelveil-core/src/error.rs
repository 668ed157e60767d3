use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegError {
    /// Represents an unsupported carrier media. For example, a JPEG would lose channel values
    #[error("Media format is not supported, only PNG images round-trip losslessly")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a frame that does not fit into the carrier grid
    #[error("Capacity error: the frame needs {required} bits but the image only offers {available}")]
    CapacityExceeded { required: u64, available: u64 },

    /// Represents a grid that ends before the declared frame does
    #[error("Truncated image: {needed} channel slots needed but only {available} exist")]
    TruncatedImage { needed: u64, available: u64 },

    /// Represents invalid UTF-8 text data extracted from a carrier
    #[error("No valid UTF-8 message found inside the image")]
    InvalidTextData(#[from] FromUtf8Error),

    /// Represents a transform program that ran but reported failure
    #[error("Transform program exited with {status}: {stderr}")]
    TransformFailed { status: i32, stderr: String },

    /// Represents a transform program that could not be started at all
    #[error("Transform program {program:?} could not be run")]
    TransformSpawn {
        program: PathBuf,
        source: std::io::Error,
    },

    /// Represents a missing configuration file
    #[error("Configuration file {0:?} not found")]
    ConfigNotFound(PathBuf),

    /// Represents a configuration file with malformed content
    #[error("Configuration is not valid JSON")]
    InvalidConfig(#[from] serde_json::Error),

    /// Represents a failure when encoding the carrier image file
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
