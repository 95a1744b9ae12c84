//! EXIF orientation extraction from the original encoded byte stream.
//!
//! The pipeline works on a decoded buffer, which no longer carries
//! metadata, so orientation correction reads tag 0x0112 straight from the
//! source bytes via `kamadak-exif`. Only the primary IFD is consulted;
//! thumbnail IFDs repeat the tag and would double-apply the correction.

use exif::{In, Reader, Tag};
use std::io::Cursor;

/// Every orientation entry (tag 0x0112) in the primary IFD, in the order
/// the reader yields them.
///
/// Real images carry at most one entry; multiple entries are folded
/// sequentially by the caller. Byte streams without parseable EXIF data
/// yield an empty list, never an error.
pub fn orientation_entries(bytes: &[u8]) -> Vec<u32> {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .fields()
            .filter(|field| field.tag == Tag::Orientation && field.ifd_num == In::PRIMARY)
            .filter_map(|field| field.value.get_uint(0))
            .collect(),
        Err(_) => Vec::new(),
    }
}
