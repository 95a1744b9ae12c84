//! The orchestrator: option map in, encoded bytes out.
//!
//! [`process`] turns an inbound option map plus a target size into an
//! ordered sequence of engine calls. The surrounding delivery system owns
//! decoding and serving; this module never reads or writes anything but the
//! buffers it is handed.

use crate::encoder::{self, EncodeError, EncodedImage};
use crate::options::{
    CENTER_CROP, CROP_X, CROP_Y, GREY_SCALE, KEEP_ORIENTATION, OptionMap, ROTATE_FLIP,
    USE_CUSTOM_FUNCTIONS,
};
use crate::transform::{self, CropRegion, RotateFlip};
use image::DynamicImage;

/// Everything the delivery system hands over for one request.
#[derive(Debug)]
pub struct ProcessRequest<'a> {
    /// The decoded source bitmap. Consumed by the pipeline.
    pub image: DynamicImage,
    /// The original encoded bytes, used only for metadata inspection
    /// (the decoded buffer no longer carries EXIF data).
    pub source_bytes: &'a [u8],
    /// Requested output width; `0` means unset. Cropping and
    /// center-cropping require both dimensions to be positive.
    pub target_width: u32,
    /// Requested output height; `0` means unset.
    pub target_height: u32,
    /// Requested output extension, passed through to the encoder.
    pub extension: &'a str,
}

/// Run the transform pipeline for one request.
///
/// Returns `None` when the request does not opt in (`useCustomFunctions`
/// absent or not `"1"`) or when processing fails; in both cases the caller
/// must serve the original bytes. Failures are logged with the source
/// buffer's context; they never propagate.
///
/// Each step takes its keys from the map whether or not the step applies,
/// so a processed map carries no processing key afterwards.
pub fn process(request: ProcessRequest<'_>, options: &mut OptionMap) -> Option<EncodedImage> {
    if options.take(USE_CUSTOM_FUNCTIONS).as_deref() != Some("1") {
        return None;
    }

    let (source_width, source_height) = (request.image.width(), request.image.height());
    let extension = request.extension.to_string();

    match run(request, options) {
        Ok(encoded) => Some(encoded),
        Err(error) => {
            tracing::error!(
                %error,
                source_width,
                source_height,
                %extension,
                "image transform failed, serving original"
            );
            None
        }
    }
}

/// Steps 2–8: orientation correction → pixel-exact crop → center crop →
/// grayscale → explicit rotate/flip → encode. The order is fixed; later
/// geometric operations must act on the already-corrected buffer.
fn run(request: ProcessRequest<'_>, options: &mut OptionMap) -> Result<EncodedImage, EncodeError> {
    let ProcessRequest {
        mut image,
        source_bytes,
        target_width,
        target_height,
        extension,
    } = request;

    if options.take(KEEP_ORIENTATION).as_deref() == Some("1") {
        for code in transform::orientation_entries(source_bytes) {
            image = RotateFlip::from_orientation(code).apply(image);
        }
    }

    // Unparsable coordinates read as "not requested", never as an error.
    let crop_x = options.take(CROP_X).and_then(|value| value.parse::<i64>().ok());
    let crop_y = options.take(CROP_Y).and_then(|value| value.parse::<i64>().ok());
    if let (Some(x), Some(y)) = (crop_x, crop_y)
        && target_width > 0
        && target_height > 0
    {
        image = transform::crop(
            image,
            &CropRegion {
                x,
                y,
                width: i64::from(target_width),
                height: i64::from(target_height),
            },
        );
    }

    // Presence gates the ratio check; only the value "1" actually applies.
    if let Some(value) = options.take(CENTER_CROP) {
        let source_ratio = f64::from(image.width()) / f64::from(image.height());
        let template_ratio = f64::from(target_width) / f64::from(target_height);
        if source_ratio != template_ratio
            && value == "1"
            && target_width > 0
            && target_height > 0
        {
            image = transform::center_crop(image, target_width, target_height);
        }
    }

    if options.take(GREY_SCALE).as_deref() == Some("1") {
        image = transform::grayscale(image);
    }

    if let Some(name) = options.take(ROTATE_FLIP)
        && !name.is_empty()
    {
        image = RotateFlip::from_name(&name).apply(image);
    }

    encoder::encode(&image, extension)
}
