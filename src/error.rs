use std::io;
use thiserror::Error;

use crate::types::ImageFormat;

/// Errors raised while probing an image file for its dimensions
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("Unsupported image format: {extension:?} (expected png, jpg or jpeg)")]
    UnsupportedFormat { extension: String },

    #[error("Malformed {format} header: {reason}")]
    MalformedHeader {
        format: ImageFormat,
        reason: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Discriminant of [`HeaderError`], handy for assertions and UI branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderErrorKind {
    UnsupportedFormat,
    MalformedHeader,
    Io,
}

impl HeaderError {
    pub(crate) fn malformed(format: ImageFormat, reason: &'static str) -> Self {
        Self::MalformedHeader { format, reason }
    }

    pub fn kind(&self) -> HeaderErrorKind {
        match self {
            Self::UnsupportedFormat { .. } => HeaderErrorKind::UnsupportedFormat,
            Self::MalformedHeader { .. } => HeaderErrorKind::MalformedHeader,
            Self::Io(_) => HeaderErrorKind::Io,
        }
    }
}

/// Errors raised when session settings do not fit the chosen image
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("Column count {columns} must be at least 2 and divide the image width {image_width}")]
    InvalidColumns { columns: u32, image_width: u32 },

    #[error("Row count {rows} must be at least 2 and divide the image height {image_height}")]
    InvalidRows { rows: u32, image_height: u32 },

    #[error("Removed tile ({column}, {row}) lies outside the {columns}x{rows} grid")]
    RemovedTileOutOfRange {
        column: i32,
        row: i32,
        columns: u32,
        rows: u32,
    },

    #[error("Display area {width}x{height} must be positive")]
    InvalidDisplay { width: f64, height: f64 },

    #[error("Could not read settings file: {0}")]
    Read(String),

    #[error("Could not parse settings file: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, HeaderError>;
