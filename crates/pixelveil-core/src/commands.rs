use std::path::Path;

use log::debug;

use crate::lsb_codec::LsbCodec;
use crate::media::{Carrier, Persist};
use crate::result::Result;
use crate::transform::TextTransform;

/// Transforms `message` and hides it inside the carrier at `secret_media`,
/// writing the result to `destination`.
pub fn encode(
    secret_media: &Path,
    destination: &Path,
    message: &str,
    transform: &dyn TextTransform,
) -> Result<()> {
    let transformed = transform.encode(message)?;
    debug!(
        "transformed message is {} bytes of base64 text",
        transformed.len()
    );

    let mut carrier = Carrier::from_file(secret_media)?;
    LsbCodec::embed(carrier.image_mut(), transformed.as_bytes())?;
    carrier.save_as(destination)
}

/// Recovers the hidden message from the carrier at `secret_media`.
///
/// The extracted payload must be valid UTF-8 before the transform gets to
/// see it; anything else is reported as `InvalidTextData`.
pub fn decode(secret_media: &Path, transform: &dyn TextTransform) -> Result<String> {
    let carrier = Carrier::from_file(secret_media)?;
    let payload = LsbCodec::extract(carrier.image())?;
    let transformed = String::from_utf8(payload)?;
    debug!(
        "extracted {} bytes of base64 text from the carrier",
        transformed.len()
    );

    transform.decode(&transformed)
}
