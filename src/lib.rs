pub mod board;
pub mod error;
pub mod formats;
pub mod geometry;
pub mod session;
pub mod types;

pub use board::{PuzzleBoard, Tile};
pub use error::{HeaderError, HeaderErrorKind, Result, SettingsError};
pub use formats::ImageMetadata;
pub use geometry::TileLayout;
pub use session::{PuzzleSession, SessionSettings, TilePlacement};
pub use types::{
    Direction, DisplaySize, GridIndex, GridSize, ImageFormat, ImageSize, Point, Rect,
};
