//! End-to-end scenarios through the public API: option map in, encoded
//! container bytes out.

use image::{DynamicImage, Rgba, RgbaImage};
use reframe::{OptionMap, ProcessRequest, process};

/// Source whose pixels encode their own coordinates, for content checks.
fn numbered(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, 0, 255])
    }))
}

fn request<'a>(
    image: DynamicImage,
    source_bytes: &'a [u8],
    target: (u32, u32),
    extension: &'a str,
) -> ProcessRequest<'a> {
    ProcessRequest {
        image,
        source_bytes,
        target_width: target.0,
        target_height: target.1,
        extension,
    }
}

/// Minimal little-endian TIFF carrying one orientation entry.
fn exif_tiff(orientation: u16) -> Vec<u8> {
    let mut bytes = vec![b'I', b'I', 42, 0, 8, 0, 0, 0, 1, 0];
    bytes.extend_from_slice(&0x0112u16.to_le_bytes());
    bytes.extend_from_slice(&3u16.to_le_bytes());
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&orientation.to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
    bytes
}

#[test]
fn grayscale_without_target_size_skips_cropping() {
    // Scenario: greyScale=1 with target (0,0); only the color transform runs.
    let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(6, 4, Rgba([10, 20, 30, 255])));
    let mut options = OptionMap::parse("useCustomFunctions=1&greyScale=1");

    let encoded = process(request(source, &[], (0, 0), "png"), &mut options).unwrap();
    assert_eq!(encoded.extension, "png");

    let decoded = image::load_from_memory(&encoded.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (6, 4));
    for pixel in decoded.to_rgba8().pixels() {
        assert_eq!(pixel.0, [18, 18, 18, 255]);
    }
}

#[test]
fn pixel_exact_crop_uses_origin_and_target_size() {
    // Scenario: cropX=10, cropY=20 with target 100×50 on a 200×200 source.
    let mut options = OptionMap::parse("useCustomFunctions=1&cropX=10&cropY=20");

    let encoded = process(request(numbered(200, 200), &[], (100, 50), "png"), &mut options)
        .unwrap();
    let decoded = image::load_from_memory(&encoded.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (100, 50));

    let pixels = decoded.to_rgba8();
    assert_eq!(pixels.get_pixel(0, 0).0, [10, 20, 0, 255]);
    assert_eq!(pixels.get_pixel(99, 49).0, [109, 69, 0, 255]);
}

#[test]
fn center_crop_keeps_the_centered_square() {
    // Scenario: 400×300 source into a 100×100 target; content comes from
    // the horizontally-centered 300×300 region.
    let source = DynamicImage::ImageRgba8(RgbaImage::from_fn(400, 300, |x, _| {
        if (50..350).contains(&x) {
            Rgba([0, 255, 0, 255])
        } else {
            Rgba([255, 0, 0, 255])
        }
    }));
    let mut options = OptionMap::parse("useCustomFunctions=1&centerCrop=1");

    let encoded = process(request(source, &[], (100, 100), "png"), &mut options).unwrap();
    let decoded = image::load_from_memory(&encoded.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (100, 100));
    for pixel in decoded.to_rgba8().pixels() {
        assert_eq!(pixel.0, [0, 255, 0, 255]);
    }
}

#[test]
fn absent_opt_in_never_encodes() {
    let mut options = OptionMap::parse("greyScale=1&cropX=10&cropY=20");
    let result = process(request(numbered(50, 50), &[], (10, 10), "png"), &mut options);
    assert!(result.is_none());
}

#[test]
fn unknown_extension_reports_effective_jpg() {
    let mut options = OptionMap::parse("useCustomFunctions=1");
    let encoded = process(request(numbered(8, 8), &[], (0, 0), "bmp"), &mut options).unwrap();
    assert_eq!(encoded.extension, "jpg");
    assert_eq!(&encoded.bytes[..2], &[0xFF, 0xD8]);
}

#[test]
fn exif_orientation_corrects_before_cropping() {
    // A 4×2 buffer whose source bytes say orientation 6 (rotate 90 CW):
    // correction runs first, so the crop sees a 2×4 buffer.
    let raw = exif_tiff(6);
    let mut options = OptionMap::parse("useCustomFunctions=1&keepOrientation=1&cropX=0&cropY=0");

    let encoded = process(request(numbered(4, 2), &raw, (2, 4), "png"), &mut options).unwrap();
    let decoded = image::load_from_memory(&encoded.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (2, 4));

    // Rotate 90 CW of the numbered 4×2: first output row is the left-most
    // source column, bottom to top.
    let pixels = decoded.to_rgba8();
    assert_eq!(pixels.get_pixel(0, 0).0, [0, 1, 0, 255]);
    assert_eq!(pixels.get_pixel(1, 0).0, [0, 0, 0, 255]);
}

#[test]
fn transforms_compose_in_pipeline_order() {
    // Crop a 100×100 window out of the 200×200 source, then grayscale, then
    // rotate; the rotate acts on the cropped grayscale buffer.
    let mut options = OptionMap::parse(
        "useCustomFunctions=1&cropX=50&cropY=50&greyScale=1&rotateFlip=Rotate90FlipNone",
    );
    let source = DynamicImage::ImageRgba8(RgbaImage::from_fn(200, 200, |x, y| {
        if x >= 50 && x < 150 && y >= 50 && y < 150 {
            Rgba([10, 20, 30, 255])
        } else {
            Rgba([255, 0, 0, 255])
        }
    }));

    let encoded = process(request(source, &[], (100, 100), "png"), &mut options).unwrap();
    let decoded = image::load_from_memory(&encoded.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (100, 100));
    for pixel in decoded.to_rgba8().pixels() {
        assert_eq!(pixel.0, [18, 18, 18, 255]);
    }
    assert!(options.is_empty());
}
