//! Pure dimension math for crop planning.
//!
//! Everything here operates on integers and ratios only, with no pixel
//! access and no I/O, so the geometry rules are testable without any
//! image data.

/// Integer sub-region descriptor, `(x, y, width, height)`.
///
/// Coordinates are signed so that negative request values survive parsing
/// and fail the range check instead of being mangled by conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl CropRegion {
    /// The in-range invariant a crop must satisfy to apply: non-negative
    /// origin and size, and the far edge inside the buffer on both axes.
    pub fn fits_within(&self, buffer_width: u32, buffer_height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.width >= 0
            && self.height >= 0
            && self.x + self.width <= i64::from(buffer_width)
            && self.y + self.height <= i64::from(buffer_height)
    }
}

/// Plan the intermediate region for an aspect-fit center crop.
///
/// Compares the target ("template") ratio against the source ratio as real
/// values. Returns `None` when the ratios are exactly equal: the source
/// resamples directly with no crop. Otherwise returns the centered
/// sub-region that matches the template ratio: full source width with a
/// floored height of `source_width / template_ratio` when the template is
/// relatively wider, the symmetric full-height region when it is relatively
/// taller. The centering offset is `floor((source_dim - kept_dim) / 2)`.
///
/// Both source dimensions and both target dimensions must be positive;
/// degenerate buffers are the caller's fail-soft case.
pub fn center_crop_region(source: (u32, u32), target: (u32, u32)) -> Option<CropRegion> {
    let (source_width, source_height) = source;
    let (target_width, target_height) = target;

    let template_ratio = f64::from(target_width) / f64::from(target_height);
    let source_ratio = f64::from(source_width) / f64::from(source_height);

    if template_ratio == source_ratio {
        return None;
    }

    if template_ratio > source_ratio {
        let kept_height = (f64::from(source_width) / template_ratio).floor() as i64;
        Some(CropRegion {
            x: 0,
            y: (i64::from(source_height) - kept_height) / 2,
            width: i64::from(source_width),
            height: kept_height,
        })
    } else {
        let kept_width = (f64::from(source_height) * template_ratio).floor() as i64;
        Some(CropRegion {
            x: (i64::from(source_width) - kept_width) / 2,
            y: 0,
            width: kept_width,
            height: i64::from(source_height),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // fits_within tests
    // =========================================================================

    #[test]
    fn region_inside_bounds_fits() {
        let region = CropRegion {
            x: 10,
            y: 20,
            width: 100,
            height: 50,
        };
        assert!(region.fits_within(200, 200));
    }

    #[test]
    fn region_touching_far_edge_fits() {
        let region = CropRegion {
            x: 100,
            y: 150,
            width: 100,
            height: 50,
        };
        assert!(region.fits_within(200, 200));
    }

    #[test]
    fn region_past_far_edge_does_not_fit() {
        let region = CropRegion {
            x: 101,
            y: 0,
            width: 100,
            height: 50,
        };
        assert!(!region.fits_within(200, 200));
    }

    #[test]
    fn negative_origin_does_not_fit() {
        let region = CropRegion {
            x: -1,
            y: 0,
            width: 10,
            height: 10,
        };
        assert!(!region.fits_within(200, 200));
    }

    #[test]
    fn negative_size_does_not_fit() {
        let region = CropRegion {
            x: 0,
            y: 0,
            width: -10,
            height: 10,
        };
        assert!(!region.fits_within(200, 200));
    }

    #[test]
    fn zero_size_region_fits() {
        let region = CropRegion {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        };
        assert!(region.fits_within(200, 200));
    }

    // =========================================================================
    // center_crop_region tests
    // =========================================================================

    #[test]
    fn equal_ratios_need_no_crop() {
        assert_eq!(center_crop_region((800, 600), (400, 300)), None);
        assert_eq!(center_crop_region((100, 100), (50, 50)), None);
    }

    #[test]
    fn wider_template_crops_vertically_centered() {
        // 200×200 source into a 200×100 template: keep floor(200/2.0) = 100
        // rows starting at (200-100)/2 = 50.
        assert_eq!(
            center_crop_region((200, 200), (200, 100)),
            Some(CropRegion {
                x: 0,
                y: 50,
                width: 200,
                height: 100,
            })
        );
    }

    #[test]
    fn taller_template_crops_horizontally_centered() {
        // 400×300 source into a square template: keep floor(300*1.0) = 300
        // columns starting at (400-300)/2 = 50.
        assert_eq!(
            center_crop_region((400, 300), (100, 100)),
            Some(CropRegion {
                x: 50,
                y: 0,
                width: 300,
                height: 300,
            })
        );
    }

    #[test]
    fn kept_dimension_and_offset_are_floored() {
        // kept width = floor(50 * 2.0) = 100, offset = floor((101-100)/2) = 0.
        assert_eq!(
            center_crop_region((101, 50), (2, 1)),
            Some(CropRegion {
                x: 0,
                y: 0,
                width: 100,
                height: 50,
            })
        );
    }

    #[test]
    fn extreme_template_ratio_can_keep_zero_rows() {
        // kept height = floor(10 / 1000) = 0; the engine treats this as its
        // degenerate pass-through case.
        assert_eq!(
            center_crop_region((10, 10), (1000, 1)),
            Some(CropRegion {
                x: 0,
                y: 5,
                width: 10,
                height: 0,
            })
        );
    }
}
