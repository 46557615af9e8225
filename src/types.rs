use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

pub const MIN_GRID_SIDE: u32 = 2;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cell coordinate on the puzzle grid.
///
/// Components are signed so that unclamped pointer lookups and neighbour
/// arithmetic can step off the board; callers check range with
/// [`GridSize::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct GridIndex {
    pub column: i32,
    pub row: i32,
}

impl GridIndex {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    pub fn manhattan_distance(&self, other: GridIndex) -> u32 {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }

    pub fn is_adjacent(&self, other: GridIndex) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Add for GridIndex {
    type Output = GridIndex;

    fn add(self, rhs: GridIndex) -> GridIndex {
        GridIndex::new(self.column + rhs.column, self.row + rhs.row)
    }
}

impl Sub for GridIndex {
    type Output = GridIndex;

    fn sub(self, rhs: GridIndex) -> GridIndex {
        GridIndex::new(self.column - rhs.column, self.row - rhs.row)
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Direction a tile travels when it slides into the blank.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Motion vector of the sliding tile. Rows grow upwards, matching the
    /// display placement where row 0 sits at the bottom of the board.
    pub const fn offset(&self) -> GridIndex {
        match self {
            Direction::Up => GridIndex::new(0, 1),
            Direction::Right => GridIndex::new(1, 0),
            Direction::Down => GridIndex::new(0, -1),
            Direction::Left => GridIndex::new(-1, 0),
        }
    }
}

/// Number of tile columns and rows on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub columns: u32,
    pub rows: u32,
}

impl GridSize {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    pub fn contains(&self, index: GridIndex) -> bool {
        index.column >= 0
            && index.row >= 0
            && (index.column as u32) < self.columns
            && (index.row as u32) < self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Every in-range index, column-major like the board's construction order.
    pub fn indices(&self) -> impl Iterator<Item = GridIndex> + use<> {
        let rows = self.rows as i32;
        (0..self.columns as i32)
            .flat_map(move |column| (0..rows).map(move |row| GridIndex::new(column, row)))
    }

    /// Index of the last column and last row.
    pub fn last(&self) -> GridIndex {
        GridIndex::new(self.columns as i32 - 1, self.rows as i32 - 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Target area the board is drawn into, in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

impl DisplaySize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for DisplaySize {
    fn default() -> Self {
        Self::new(400.0, 400.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
