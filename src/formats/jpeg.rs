use memchr::memchr_iter;

use crate::error::{HeaderError, Result};
use crate::types::{ImageFormat, ImageSize};

pub const MARKER_PREFIX: u8 = 0xFF;

/// Frame fields relative to the marker prefix.
const HEIGHT_OFFSET: usize = 5;
const WIDTH_OFFSET: usize = 7;

/// The whole `0xC0..=0xCF` family counts, including DHT/DAC codes that share
/// the range.
#[inline]
pub fn is_frame_marker(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xCF)
}

/// Offset of the first `FF Cx` pair, scanning from the start of `data`.
pub fn find_frame_marker(data: &[u8]) -> Option<usize> {
    memchr_iter(MARKER_PREFIX, data)
        .find(|&pos| data.get(pos + 1).copied().is_some_and(is_frame_marker))
}

/// Reads height then width from the first frame marker.
pub fn read_dimensions(data: &[u8]) -> Result<ImageSize> {
    let pos = find_frame_marker(data)
        .ok_or_else(|| HeaderError::malformed(ImageFormat::Jpeg, "no start-of-frame marker"))?;

    if pos + WIDTH_OFFSET + 1 >= data.len() {
        return Err(HeaderError::malformed(
            ImageFormat::Jpeg,
            "start-of-frame marker truncated",
        ));
    }

    let height = u16::from_be_bytes([data[pos + HEIGHT_OFFSET], data[pos + HEIGHT_OFFSET + 1]]);
    let width = u16::from_be_bytes([data[pos + WIDTH_OFFSET], data[pos + WIDTH_OFFSET + 1]]);

    if width == 0 || height == 0 {
        return Err(HeaderError::malformed(ImageFormat::Jpeg, "zero dimension"));
    }

    Ok(ImageSize::new(u32::from(width), u32::from(height)))
}
