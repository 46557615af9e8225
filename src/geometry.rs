//! Mapping between grid cells, source-image rectangles and display positions.
//!
//! The board is drawn centred on the display origin with rows growing along
//! +y, so row 0 is the bottom row on a y-up canvas.

use serde::Serialize;

use crate::types::{DisplaySize, GridIndex, GridSize, ImageSize, Point, Rect};

/// Sub-rectangle of the source image shown by the tile whose solved cell is
/// `index`.
pub fn source_rect_for(index: GridIndex, board: GridSize, image: ImageSize) -> Rect {
    let (board_w, board_h) = (f64::from(board.columns), f64::from(board.rows));
    let (image_w, image_h) = (f64::from(image.width), f64::from(image.height));
    Rect::new(
        f64::from(index.column) / board_w * image_w,
        f64::from(index.row) / board_h * image_h,
        image_w / board_w,
        image_h / board_h,
    )
}

/// Per-axis factors from source pixels to display units.
pub fn display_scale(target: DisplaySize, image: ImageSize) -> (f64, f64) {
    (
        target.width / f64::from(image.width),
        target.height / f64::from(image.height),
    )
}

/// Display size of one cell.
pub fn per_index(board: GridSize, image: ImageSize, target: DisplaySize) -> Point {
    let (scale_x, scale_y) = display_scale(target, image);
    Point::new(
        f64::from(image.width) / f64::from(board.columns) * scale_x,
        f64::from(image.height) / f64::from(board.rows) * scale_y,
    )
}

/// Centre of cell (0, 0).
pub fn origin(board: GridSize, image: ImageSize, target: DisplaySize) -> Point {
    let cell = per_index(board, image, target);
    Point::new(
        -target.width / 2.0 + cell.x / 2.0,
        -target.height / 2.0 + cell.y / 2.0,
    )
}

pub fn placement_for(
    index: GridIndex,
    board: GridSize,
    image: ImageSize,
    target: DisplaySize,
) -> Point {
    let cell = per_index(board, image, target);
    let origin = origin(board, image, target);
    Point::new(
        origin.x + f64::from(index.column) * cell.x,
        origin.y + f64::from(index.row) * cell.y,
    )
}

/// Nearest cell to `point`. The result is not clamped and may lie off the
/// board.
pub fn index_for(
    point: Point,
    board: GridSize,
    image: ImageSize,
    target: DisplaySize,
) -> GridIndex {
    let cell = per_index(board, image, target);
    let origin = origin(board, image, target);
    GridIndex::new(
        ((point.x - origin.x) / cell.x).round() as i32,
        ((point.y - origin.y) / cell.y).round() as i32,
    )
}

/// Board, image and display dimensions bundled for repeated lookups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileLayout {
    pub board: GridSize,
    pub image: ImageSize,
    pub target: DisplaySize,
}

impl TileLayout {
    pub fn new(board: GridSize, image: ImageSize, target: DisplaySize) -> Self {
        Self {
            board,
            image,
            target,
        }
    }

    pub fn source_rect_for(&self, index: GridIndex) -> Rect {
        source_rect_for(index, self.board, self.image)
    }

    pub fn display_scale(&self) -> (f64, f64) {
        display_scale(self.target, self.image)
    }

    pub fn per_index(&self) -> Point {
        per_index(self.board, self.image, self.target)
    }

    pub fn origin(&self) -> Point {
        origin(self.board, self.image, self.target)
    }

    pub fn placement_for(&self, index: GridIndex) -> Point {
        placement_for(index, self.board, self.image, self.target)
    }

    pub fn index_for(&self, point: Point) -> GridIndex {
        index_for(point, self.board, self.image, self.target)
    }

    /// Like [`TileLayout::index_for`] but `None` when the point falls off the
    /// board.
    pub fn cell_at(&self, point: Point) -> Option<GridIndex> {
        let index = self.index_for(point);
        self.board.contains(index).then_some(index)
    }
}
