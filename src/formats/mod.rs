//! Image header probing.
//!
//! Only the dimensions are read; pixel decoding belongs to whatever renderer
//! receives [`ImageMetadata::into_raw_bytes`].

pub mod jpeg;
pub mod png;

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{HeaderError, Result};
use crate::types::{ImageFormat, ImageSize};

impl ImageFormat {
    /// Case-insensitive match against `png`, `jpg` and `jpeg`.
    pub fn from_extension(extension: &str) -> Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            _ => Err(HeaderError::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }
}

pub fn read_dimensions(data: &[u8], format: ImageFormat) -> Result<ImageSize> {
    match format {
        ImageFormat::Png => png::read_dimensions(data),
        ImageFormat::Jpeg => jpeg::read_dimensions(data),
    }
}

/// A probed image: its format, positive pixel dimensions and the raw file
/// bytes awaiting a decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageMetadata {
    format: ImageFormat,
    width: u32,
    height: u32,
    #[serde(skip)]
    raw_bytes: Vec<u8>,
}

impl ImageMetadata {
    /// Probes `bytes`, choosing the parser from the extension of `file_name`.
    pub fn parse(bytes: Vec<u8>, file_name: &str) -> Result<Self> {
        let format = ImageFormat::from_path(file_name)?;
        Self::parse_as(bytes, format)
    }

    pub fn parse_as(bytes: Vec<u8>, format: ImageFormat) -> Result<Self> {
        let size = read_dimensions(&bytes, format)?;
        Ok(Self {
            format,
            width: size.width,
            height: size.height,
            raw_bytes: bytes,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        let bytes = fs::read(path)?;
        let metadata = Self::parse_as(bytes, format)?;
        tracing::debug!(
            "Probed {} as {} {}x{}",
            path.display(),
            metadata.format,
            metadata.width,
            metadata.height
        );
        Ok(metadata)
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width, self.height)
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.raw_bytes
    }

    /// Hands the file bytes to the decoder.
    pub fn into_raw_bytes(self) -> Vec<u8> {
        self.raw_bytes
    }
}
