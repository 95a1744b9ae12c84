//! Request option codec.
//!
//! Transform requests are carried as flat key/value pairs on a media URL.
//! This module owns both directions of that contract:
//!
//! - [`TransformOptions`] is the typed bundle used when *building* a URL; it
//!   serializes to a canonical query fragment via
//!   [`to_query_fragment`](TransformOptions::to_query_fragment).
//! - [`OptionMap`] is the ordered string map attached to an *inbound*
//!   request; the pipeline reads it back one key at a time with
//!   [`take`](OptionMap::take), and attribute renderers purge it with
//!   [`strip`](OptionMap::strip).
//!
//! The key vocabulary is fixed (see [`PROCESSING_KEYS`]). Unknown keys pass
//! through both sides untouched; this codec never validates beyond type
//! conversion.

use crate::transform::RotateFlip;

/// Master switch: the pipeline only runs when this key equals `"1"`.
pub const USE_CUSTOM_FUNCTIONS: &str = "useCustomFunctions";
/// Correct orientation from the source's EXIF metadata when `"1"`.
pub const KEEP_ORIENTATION: &str = "keepOrientation";
/// Convert to grayscale when `"1"`.
pub const GREY_SCALE: &str = "greyScale";
/// Rotate/flip combination name, e.g. `Rotate90FlipX`.
pub const ROTATE_FLIP: &str = "rotateFlip";
/// Center-crop to the requested aspect ratio when `"1"`.
pub const CENTER_CROP: &str = "centerCrop";
/// Pixel-exact crop origin, decimal integers. Both must be present.
pub const CROP_X: &str = "cropX";
/// See [`CROP_X`].
pub const CROP_Y: &str = "cropY";

/// Every processing-only key. None of these may survive into rendered
/// attributes: strip them with [`OptionMap::strip`] before rendering.
pub const PROCESSING_KEYS: [&str; 7] = [
    USE_CUSTOM_FUNCTIONS,
    KEEP_ORIENTATION,
    GREY_SCALE,
    ROTATE_FLIP,
    CENTER_CROP,
    CROP_X,
    CROP_Y,
];

/// Top-left corner of a pixel-exact crop, in source coordinates.
///
/// A plain value carried inside [`TransformOptions`]; the crop dimensions
/// come separately from the request's target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropOrigin {
    pub x: i32,
    pub y: i32,
}

/// Typed option bundle for building a request URL.
///
/// `use_custom_functions` gates everything: when false, the bundle
/// serializes to nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    pub use_custom_functions: bool,
    pub keep_orientation: bool,
    pub grey_scale: bool,
    pub rotate_flip: RotateFlip,
    pub center_crop: bool,
    pub crop_origin: Option<CropOrigin>,
}

impl Default for TransformOptions {
    /// Custom processing enabled, every individual transform off.
    fn default() -> Self {
        Self {
            use_custom_functions: true,
            keep_orientation: false,
            grey_scale: false,
            rotate_flip: RotateFlip::IDENTITY,
            center_crop: false,
            crop_origin: None,
        }
    }
}

impl TransformOptions {
    /// Serialize to a bare query fragment in canonical key order.
    ///
    /// Emits `useCustomFunctions=1` only when the bundle is enabled, then
    /// each requested option in fixed order. The identity rotate/flip is
    /// never emitted; the crop origin emits `cropX` and `cropY` as a pair or
    /// not at all. Integers use Rust's plain (locale-independent) decimal
    /// formatting.
    pub fn to_query_fragment(&self) -> String {
        if !self.use_custom_functions {
            return String::new();
        }

        let mut fragment = format!("{USE_CUSTOM_FUNCTIONS}=1");
        if self.keep_orientation {
            fragment.push_str(&format!("&{KEEP_ORIENTATION}=1"));
        }
        if self.grey_scale {
            fragment.push_str(&format!("&{GREY_SCALE}=1"));
        }
        if !self.rotate_flip.is_identity() {
            fragment.push_str(&format!("&{ROTATE_FLIP}={}", self.rotate_flip.name()));
        }
        if self.center_crop {
            fragment.push_str(&format!("&{CENTER_CROP}=1"));
        }
        if let Some(origin) = self.crop_origin {
            fragment.push_str(&format!("&{CROP_X}={}&{CROP_Y}={}", origin.x, origin.y));
        }
        fragment
    }

    /// Append the fragment to existing URL content.
    ///
    /// Prefixes `&` only when `base` is non-empty; a disabled bundle returns
    /// `base` unchanged.
    pub fn append_to(&self, base: &str) -> String {
        let fragment = self.to_query_fragment();
        if fragment.is_empty() {
            base.to_string()
        } else if base.is_empty() {
            fragment
        } else {
            format!("{base}&{fragment}")
        }
    }
}

/// Ordered string→string dictionary attached to an inbound request.
///
/// Keys keep their first-insertion order. The pipeline consumes entries with
/// [`take`](Self::take) as each option is applied, so a fully processed map
/// no longer carries any processing key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    entries: Vec<(String, String)>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query fragment like `a=1&b=two` into an ordered map.
    ///
    /// Tolerates a leading `?` or `&`; empty segments are skipped and a
    /// segment without `=` becomes a key with an empty value.
    pub fn parse(query: &str) -> Self {
        let mut map = Self::new();
        for pair in query
            .trim_start_matches(['?', '&'])
            .split('&')
            .filter(|pair| !pair.is_empty())
        {
            match pair.split_once('=') {
                Some((key, value)) => map.insert(key, value),
                None => map.insert(pair, ""),
            }
        }
        map
    }

    /// Insert a pair, replacing the value if the key already exists.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(existing, _)| existing == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Remove one key and return its value.
    pub fn take(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(existing, _)| existing == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Remove every named key, returning the removed pairs in key-list
    /// order. Absent keys are simply absent from the result.
    pub fn strip(&mut self, keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .filter_map(|key| self.take(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remaining pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
