//! Container serialization with JPEG fallback.
//!
//! The requested extension picks the container; anything unrecognized
//! (including an empty string) falls back to JPEG, and the *effective*
//! extension travels with the bytes so callers label the result by what was
//! actually written, not what they asked for.

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Supported output containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    Gif,
}

impl OutputFormat {
    /// Map a requested extension to a container. Matching is exact: only
    /// `jpg`, `png` and `gif` are recognized; everything else is JPEG.
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            "jpg" => Self::Jpeg,
            "png" => Self::Png,
            "gif" => Self::Gif,
            _ => Self::Jpeg,
        }
    }

    /// The effective extension for this container.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
        }
    }
}

/// Encoded output bytes plus the extension that was actually used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

/// Serialize the buffer into the container selected by `extension`.
///
/// JPEG has no alpha channel, so that path drops it; PNG and GIF keep it.
pub fn encode(image: &DynamicImage, extension: &str) -> Result<EncodedImage, EncodeError> {
    let format = OutputFormat::from_extension(extension);
    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);
    match format {
        OutputFormat::Jpeg => {
            DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut cursor, ImageFormat::Jpeg)?;
        }
        OutputFormat::Png => image.write_to(&mut cursor, ImageFormat::Png)?,
        OutputFormat::Gif => {
            DynamicImage::ImageRgba8(image.to_rgba8()).write_to(&mut cursor, ImageFormat::Gif)?;
        }
    }
    Ok(EncodedImage {
        bytes,
        extension: format.extension(),
    })
}
