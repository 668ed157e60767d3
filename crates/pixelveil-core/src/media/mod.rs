//! Carrier media loading and persisting.

pub(crate) mod iterators;

use std::fs::File;
use std::path::Path;

use image::RgbaImage;
use log::error;

use crate::error::StegError;
use crate::result::Result;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> Result<()>;
}

/// A carrier image for steganography.
///
/// Only PNG is accepted since the channel values must round-trip exactly;
/// a lossy container would destroy the embedded frame.
#[derive(Debug)]
pub struct Carrier {
    image: RgbaImage,
}

impl Carrier {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        match f.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("png") => Ok(Self::from_image(
                image::open(f)
                    .map_err(|e| {
                        error!("Error opening carrier image {f:?}: {e}");
                        StegError::InvalidImageMedia
                    })?
                    .to_rgba8(),
            )),
            _ => Err(StegError::UnsupportedMedia),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }
}

impl Persist for Carrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let mut f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegError::WriteError { source: e }
        })?;

        self.image
            .write_to(&mut f, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegError::ImageEncodingError
            })
    }
}
