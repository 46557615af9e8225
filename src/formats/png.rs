use crate::error::{HeaderError, Result};
use crate::types::{ImageFormat, ImageSize};

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub const IHDR_CHUNK_TYPE: &[u8; 4] = b"IHDR";

/// Offset of the IHDR width field; height follows immediately.
pub const DIMENSIONS_OFFSET: usize = 16;
pub const MIN_HEADER_LEN: usize = DIMENSIONS_OFFSET + 8;

const IHDR_CRC_END: usize = 33;

/// Reads width and height from the IHDR chunk.
///
/// Only the length is checked; a wrong signature or chunk type is logged
/// and tolerated.
pub fn read_dimensions(data: &[u8]) -> Result<ImageSize> {
    if data.len() < MIN_HEADER_LEN {
        return Err(HeaderError::malformed(
            ImageFormat::Png,
            "fewer than 24 header bytes",
        ));
    }

    if data[..8] != PNG_SIGNATURE || &data[12..16] != IHDR_CHUNK_TYPE {
        tracing::warn!("PNG signature or IHDR chunk type missing, reading dimensions anyway");
    }

    let mut pos = DIMENSIONS_OFFSET;
    let width = read_be_u32(data, &mut pos);
    let height = read_be_u32(data, &mut pos);

    if width == 0 || height == 0 {
        return Err(HeaderError::malformed(ImageFormat::Png, "zero dimension"));
    }

    Ok(ImageSize::new(width, height))
}

fn read_be_u32(data: &[u8], pos: &mut usize) -> u32 {
    let mut value = 0u32;
    for _ in 0..4 {
        value = value * 256 + u32::from(data[*pos]);
        *pos += 1;
    }
    value
}

/// Whether the stored IHDR CRC matches its type and payload.
pub fn ihdr_checksum_matches(data: &[u8]) -> bool {
    if data.len() < IHDR_CRC_END || &data[12..16] != IHDR_CHUNK_TYPE {
        return false;
    }

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&data[12..29]);
    let calculated = hasher.finalize();
    let stored = u32::from_be_bytes([data[29], data[30], data[31], data[32]]);

    calculated == stored
}
