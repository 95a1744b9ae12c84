//! Pixel operations on top of the `image` crate.
//!
//! Each function consumes its input buffer and returns the successor, so
//! chained transforms never hold more than two buffers alive. Out-of-range
//! and degenerate inputs return the buffer unchanged rather than erroring;
//! the pipeline's fail-soft policy lives here, not in the caller.

use super::calculations::{CropRegion, center_crop_region};
use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};

/// Luminosity-weighted grayscale as a 5×5 color matrix.
///
/// Rows are the R, G, B, A and translation components of the input; columns
/// are the output channels. Every output color channel gets
/// `0.3·R + 0.59·G + 0.11·B`; alpha passes through.
const GRAYSCALE_MATRIX: [[f32; 5]; 5] = [
    [0.3, 0.3, 0.3, 0.0, 0.0],
    [0.59, 0.59, 0.59, 0.0, 0.0],
    [0.11, 0.11, 0.11, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 1.0],
];

/// Convert to luminosity-weighted grayscale, alpha preserved.
pub fn grayscale(image: DynamicImage) -> DynamicImage {
    apply_color_matrix(image, &GRAYSCALE_MATRIX)
}

/// Apply a 5×5 color matrix uniformly over the whole buffer in one pass.
///
/// Channels are normalized to 0..1 for the multiply, then rounded back to
/// 8-bit, so rounding behavior is identical for every pixel.
fn apply_color_matrix(image: DynamicImage, matrix: &[[f32; 5]; 5]) -> DynamicImage {
    let mut buffer = image.into_rgba8();
    for pixel in buffer.pixels_mut() {
        let input = [
            f32::from(pixel[0]) / 255.0,
            f32::from(pixel[1]) / 255.0,
            f32::from(pixel[2]) / 255.0,
            f32::from(pixel[3]) / 255.0,
            1.0,
        ];
        for channel in 0..4 {
            let mut acc = 0.0;
            for row in 0..5 {
                acc += input[row] * matrix[row][channel];
            }
            pixel[channel] = (acc.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
    }
    DynamicImage::ImageRgba8(buffer)
}

/// Copy out exactly the given sub-region, pixel for pixel.
///
/// A region that violates the in-range invariant returns the input buffer
/// unchanged: skipping is policy, not an error.
pub fn crop(image: DynamicImage, region: &CropRegion) -> DynamicImage {
    if !region.fits_within(image.width(), image.height()) {
        return image;
    }
    image.crop_imm(
        region.x as u32,
        region.y as u32,
        region.width as u32,
        region.height as u32,
    )
}

/// Aspect-fit center crop: fill the target canvas exactly, preserving the
/// center of the source and its proportions.
///
/// Plans the centered intermediate region via
/// [`center_crop_region`](super::calculations::center_crop_region), copies
/// it out, and resamples onto a white-cleared canvas of exactly
/// `target_width × target_height`. Zero-area sources, zero target
/// dimensions, and plans whose kept dimension floors to zero all return the
/// source unchanged.
pub fn center_crop(image: DynamicImage, target_width: u32, target_height: u32) -> DynamicImage {
    if image.width() == 0 || image.height() == 0 || target_width == 0 || target_height == 0 {
        return image;
    }

    match center_crop_region(
        (image.width(), image.height()),
        (target_width, target_height),
    ) {
        None => resample_onto_canvas(&image, target_width, target_height),
        Some(region) if region.width == 0 || region.height == 0 => image,
        Some(region) => {
            let picked = image.crop_imm(
                region.x as u32,
                region.y as u32,
                region.width as u32,
                region.height as u32,
            );
            resample_onto_canvas(&picked, target_width, target_height)
        }
    }
}

/// Resample onto an opaque white canvas of exactly the given size.
///
/// White shows only where resampling leaves slack or the source carries
/// transparency; an opaque source covers the canvas completely.
fn resample_onto_canvas(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let resized = image.resize_exact(width, height, FilterType::Lanczos3);
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    image::imageops::overlay(&mut canvas, &resized.to_rgba8(), 0, 0);
    DynamicImage::ImageRgba8(canvas)
}
