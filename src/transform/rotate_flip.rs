//! The rotate/flip descriptor and its total name/code mappings.

use image::DynamicImage;

/// Clockwise rotation component of a [`RotateFlip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Cw90,
    Cw180,
    Cw270,
}

/// Mirror component of a [`RotateFlip`], applied after the rotation.
///
/// `Horizontal` mirrors across the vertical axis (flip-X), `Vertical`
/// across the horizontal axis (flip-Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    None,
    Horizontal,
    Vertical,
    Both,
}

/// One of the 16 canonical rotation×mirror combinations.
///
/// Each combination has a fixed wire name (`Rotate90FlipX` and friends) used
/// on request URLs. Both mapping functions are total: unknown names and
/// orientation codes yield [`RotateFlip::IDENTITY`] rather than an error, so
/// a typo in a URL degrades to a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateFlip {
    pub rotation: Rotation,
    pub flip: Flip,
}

impl Default for RotateFlip {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RotateFlip {
    pub const IDENTITY: Self = Self {
        rotation: Rotation::None,
        flip: Flip::None,
    };

    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Map a wire name to a descriptor. Unrecognized names are the identity.
    pub fn from_name(name: &str) -> Self {
        let (rotation, flip) = match name {
            "RotateNoneFlipNone" => (Rotation::None, Flip::None),
            "RotateNoneFlipX" => (Rotation::None, Flip::Horizontal),
            "RotateNoneFlipY" => (Rotation::None, Flip::Vertical),
            "RotateNoneFlipXY" => (Rotation::None, Flip::Both),
            "Rotate90FlipNone" => (Rotation::Cw90, Flip::None),
            "Rotate90FlipX" => (Rotation::Cw90, Flip::Horizontal),
            "Rotate90FlipY" => (Rotation::Cw90, Flip::Vertical),
            "Rotate90FlipXY" => (Rotation::Cw90, Flip::Both),
            "Rotate180FlipNone" => (Rotation::Cw180, Flip::None),
            "Rotate180FlipX" => (Rotation::Cw180, Flip::Horizontal),
            "Rotate180FlipY" => (Rotation::Cw180, Flip::Vertical),
            "Rotate180FlipXY" => (Rotation::Cw180, Flip::Both),
            "Rotate270FlipNone" => (Rotation::Cw270, Flip::None),
            "Rotate270FlipX" => (Rotation::Cw270, Flip::Horizontal),
            "Rotate270FlipY" => (Rotation::Cw270, Flip::Vertical),
            "Rotate270FlipXY" => (Rotation::Cw270, Flip::Both),
            _ => return Self::IDENTITY,
        };
        Self { rotation, flip }
    }

    /// The canonical wire name of this descriptor.
    pub fn name(self) -> &'static str {
        match (self.rotation, self.flip) {
            (Rotation::None, Flip::None) => "RotateNoneFlipNone",
            (Rotation::None, Flip::Horizontal) => "RotateNoneFlipX",
            (Rotation::None, Flip::Vertical) => "RotateNoneFlipY",
            (Rotation::None, Flip::Both) => "RotateNoneFlipXY",
            (Rotation::Cw90, Flip::None) => "Rotate90FlipNone",
            (Rotation::Cw90, Flip::Horizontal) => "Rotate90FlipX",
            (Rotation::Cw90, Flip::Vertical) => "Rotate90FlipY",
            (Rotation::Cw90, Flip::Both) => "Rotate90FlipXY",
            (Rotation::Cw180, Flip::None) => "Rotate180FlipNone",
            (Rotation::Cw180, Flip::Horizontal) => "Rotate180FlipX",
            (Rotation::Cw180, Flip::Vertical) => "Rotate180FlipY",
            (Rotation::Cw180, Flip::Both) => "Rotate180FlipXY",
            (Rotation::Cw270, Flip::None) => "Rotate270FlipNone",
            (Rotation::Cw270, Flip::Horizontal) => "Rotate270FlipX",
            (Rotation::Cw270, Flip::Vertical) => "Rotate270FlipY",
            (Rotation::Cw270, Flip::Both) => "Rotate270FlipXY",
        }
    }

    /// Map an EXIF orientation code (tag 0x0112) to the correction that
    /// upright-displays the image. Codes outside 1–8 are the identity.
    pub fn from_orientation(code: u32) -> Self {
        let (rotation, flip) = match code {
            2 => (Rotation::None, Flip::Horizontal),
            3 => (Rotation::Cw180, Flip::None),
            4 => (Rotation::Cw180, Flip::Horizontal),
            5 => (Rotation::Cw90, Flip::Horizontal),
            6 => (Rotation::Cw90, Flip::None),
            7 => (Rotation::Cw270, Flip::Horizontal),
            8 => (Rotation::Cw270, Flip::None),
            _ => return Self::IDENTITY,
        };
        Self { rotation, flip }
    }

    /// Rotate, then mirror. Consumes the buffer and returns the successor.
    pub fn apply(self, image: DynamicImage) -> DynamicImage {
        let rotated = match self.rotation {
            Rotation::None => image,
            Rotation::Cw90 => image.rotate90(),
            Rotation::Cw180 => image.rotate180(),
            Rotation::Cw270 => image.rotate270(),
        };
        match self.flip {
            Flip::None => rotated,
            Flip::Horizontal => rotated.fliph(),
            Flip::Vertical => rotated.flipv(),
            Flip::Both => rotated.fliph().flipv(),
        }
    }
}
