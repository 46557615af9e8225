//! A single puzzle session: the probed image, the settings it was started
//! with, the board and its layout.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::PuzzleBoard;
use crate::error::SettingsError;
use crate::formats::ImageMetadata;
use crate::geometry::TileLayout;
use crate::types::{
    Direction, DisplaySize, GridIndex, GridSize, MIN_GRID_SIDE, Point, Rect,
};

pub const DEFAULT_SHUFFLE_MOVES: usize = 100;
pub const DEFAULT_DIVISIONS: u32 = 3;

/// Options for starting a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Horizontal division count
    pub columns: u32,
    /// Vertical division count
    pub rows: u32,
    /// Random legal moves applied after the gap opens
    pub shuffle_moves: usize,
    /// Area the board is drawn into
    pub display: DisplaySize,
    /// Cell left empty (defaults to the last column and row)
    pub removed_tile: Option<GridIndex>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_DIVISIONS,
            rows: DEFAULT_DIVISIONS,
            shuffle_moves: DEFAULT_SHUFFLE_MOVES,
            display: DisplaySize::default(),
            removed_tile: None,
        }
    }
}

impl SessionSettings {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            ..Default::default()
        }
    }

    pub fn with_shuffle_moves(mut self, moves: usize) -> Self {
        self.shuffle_moves = moves;
        self
    }

    pub fn with_display(mut self, display: DisplaySize) -> Self {
        self.display = display;
        self
    }

    pub fn with_removed_tile(mut self, index: GridIndex) -> Self {
        self.removed_tile = Some(index);
        self
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::Read(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(text).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    pub fn grid(&self) -> GridSize {
        GridSize::new(self.columns, self.rows)
    }

    pub fn removed_tile(&self) -> GridIndex {
        self.removed_tile.unwrap_or_else(|| self.grid().last())
    }

    /// Checks the division counts against `image`: each must be at least 2
    /// and divide the matching image side exactly.
    pub fn validate(&self, image: &ImageMetadata) -> Result<(), SettingsError> {
        if !divides(self.columns, image.width()) {
            return Err(SettingsError::InvalidColumns {
                columns: self.columns,
                image_width: image.width(),
            });
        }

        if !divides(self.rows, image.height()) {
            return Err(SettingsError::InvalidRows {
                rows: self.rows,
                image_height: image.height(),
            });
        }

        let removed = self.removed_tile();
        if !self.grid().contains(removed) {
            return Err(SettingsError::RemovedTileOutOfRange {
                column: removed.column,
                row: removed.row,
                columns: self.columns,
                rows: self.rows,
            });
        }

        let display = self.display;
        if !(display.width > 0.0 && display.height > 0.0) {
            return Err(SettingsError::InvalidDisplay {
                width: display.width,
                height: display.height,
            });
        }

        Ok(())
    }
}

fn divides(divisions: u32, side: u32) -> bool {
    divisions >= MIN_GRID_SIDE && divisions <= side && side % divisions == 0
}

/// Everything a renderer needs to draw one tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TilePlacement {
    /// Cell the tile occupies now
    pub current: GridIndex,
    /// Cell the tile belongs to, which also selects its image slice
    pub correct: GridIndex,
    pub source: Rect,
    pub position: Point,
    pub scale: (f64, f64),
}

#[derive(Debug)]
pub struct PuzzleSession {
    image: ImageMetadata,
    settings: SessionSettings,
    board: PuzzleBoard,
    layout: TileLayout,
}

impl PuzzleSession {
    pub fn start(image: ImageMetadata, settings: SessionSettings) -> Result<Self, SettingsError> {
        Self::start_with(image, settings, &mut rand::rng())
    }

    /// Validates `settings`, opens the gap and shuffles with `rng`.
    pub fn start_with<R: Rng + ?Sized>(
        image: ImageMetadata,
        settings: SessionSettings,
        rng: &mut R,
    ) -> Result<Self, SettingsError> {
        settings.validate(&image)?;

        let mut board = PuzzleBoard::new(settings.columns, settings.rows);
        board.remove_tile(settings.removed_tile());
        board.shuffle_with(settings.shuffle_moves, rng);

        let layout = TileLayout::new(settings.grid(), image.size(), settings.display);

        tracing::info!(
            "Started {}x{} session on {} image {}x{}",
            settings.columns,
            settings.rows,
            image.format(),
            image.width(),
            image.height()
        );

        Ok(Self {
            image,
            settings,
            board,
            layout,
        })
    }

    pub fn image(&self) -> &ImageMetadata {
        &self.image
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn board(&self) -> &PuzzleBoard {
        &self.board
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    pub fn try_move(&mut self, target: GridIndex) -> bool {
        self.board.try_move(target)
    }

    /// Moves the tile under a pointer position, if it is next to the gap.
    pub fn try_move_at(&mut self, point: Point) -> bool {
        match self.layout.cell_at(point) {
            Some(index) => self.board.try_move(index),
            None => false,
        }
    }

    pub fn try_slide(&mut self, direction: Direction) -> bool {
        self.board.try_slide(direction)
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    pub fn tile_placements(&self) -> Vec<TilePlacement> {
        let scale = self.layout.display_scale();
        self.board
            .tiles()
            .map(|(current, tile)| TilePlacement {
                current,
                correct: tile.correct_index(),
                source: self.layout.source_rect_for(tile.correct_index()),
                position: self.layout.placement_for(current),
                scale,
            })
            .collect()
    }

    /// Ends the session, returning the image for reuse in the next one.
    pub fn into_image(self) -> ImageMetadata {
        self.image
    }
}
