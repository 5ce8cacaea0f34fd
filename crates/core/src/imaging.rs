//! Header-only image metadata extraction.
//!
//! Dimensions are read from the image header without decoding pixel data;
//! they are recorded with the detection so the history view can size its
//! thumbnails. Extraction failure is not an error; the upload pipeline
//! accepts any `image/*` payload, so unknown formats just yield no
//! dimensions.

use std::io::Cursor;

/// Extract `(width, height)` from the image header, if recognizable.
pub fn image_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}
