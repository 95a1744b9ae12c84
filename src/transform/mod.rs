//! Geometry & color engine: stateless transforms over in-memory buffers.
//!
//! | Operation | Where |
//! |---|---|
//! | **Grayscale** | [`engine::grayscale`] — 5×5 color matrix, one pass |
//! | **Pixel-exact crop** | [`engine::crop`] — fail-soft on out-of-range rectangles |
//! | **Center crop** | [`engine::center_crop`] + pure planning in [`calculations`] |
//! | **Rotate/flip** | [`RotateFlip::apply`] — 16 canonical combinations |
//! | **EXIF orientation** | [`exif::orientation_entries`] + [`RotateFlip::from_orientation`] |
//!
//! Every operation consumes its input buffer and returns the successor; no
//! I/O, no shared state. The module is split into:
//! - **Calculations**: pure dimension math (unit testable without pixels)
//! - **Rotate/flip**: the descriptor value type and its total name/code mappings
//! - **Engine**: pixel work on top of the `image` crate
//! - **Exif**: orientation extraction from the original encoded bytes

pub mod calculations;
pub mod engine;
pub mod exif;
mod rotate_flip;

pub use calculations::{CropRegion, center_crop_region};
pub use engine::{center_crop, crop, grayscale};
pub use rotate_flip::{Flip, RotateFlip, Rotation};
pub use self::exif::orientation_entries;
