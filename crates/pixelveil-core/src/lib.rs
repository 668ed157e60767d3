//! # Pixelveil Core API
//!
//! Hides a text message inside the pixel data of a PNG image and recovers
//! it later. One bit is stored per color channel, keyed by the parity of
//! the channel's upper seven bits, so a plain LSB dump does not reveal the
//! payload. The embedded frame is a 32 bit big-endian bit-length header
//! followed by the message bytes, MSB-first, in row-major pixel order over
//! the R, G and B channels.
//!
//! Messages pass through an external, pluggable text transform before they
//! are embedded and after they are extracted; see [`transform`].
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image and read it back
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use pixelveil_core::LsbCodec;
//! use pixelveil_core::transform::{IdentityTransform, TextTransform};
//!
//! let mut image = RgbaImage::from_pixel(32, 32, Rgba([127, 64, 32, 255]));
//!
//! let transform = IdentityTransform;
//! let payload = transform.encode("Hello World!").unwrap();
//! LsbCodec::embed(&mut image, payload.as_bytes()).unwrap();
//!
//! let extracted = LsbCodec::extract(&image).unwrap();
//! let message = transform
//!     .decode(&String::from_utf8(extracted).unwrap())
//!     .unwrap();
//! assert_eq!(message, "Hello World!");
//! ```
//!
//! ## File to file, transform included
//!
//! ```rust,no_run
//! use pixelveil_core::commands::{decode, encode};
//! use pixelveil_core::config::TransformConfig;
//! use pixelveil_core::transform::CommandTransform;
//!
//! let config = TransformConfig::from_file("config.json".as_ref()).unwrap();
//! let transform = CommandTransform::from_config(config);
//!
//! encode(
//!     "carrier.png".as_ref(),
//!     "carrier-enc.png".as_ref(),
//!     "Hello World!",
//!     &transform,
//! )
//! .unwrap();
//!
//! let message = decode("carrier-enc.png".as_ref(), &transform).unwrap();
//! assert_eq!(message, "Hello World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod commands;
pub mod config;
pub mod error;
pub mod frame;
pub mod lsb_codec;
pub mod media;
pub mod parity;
pub mod result;
pub mod transform;

pub use crate::error::StegError;
pub use crate::frame::Frame;
pub use crate::lsb_codec::LsbCodec;
pub use crate::media::{Carrier, Persist};
pub use crate::result::Result;
