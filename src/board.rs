//! Sliding-puzzle board state.
//!
//! A board holds one [`Tile`] per cell until [`PuzzleBoard::remove_tile`]
//! opens the gap. From then on exactly one cell is empty, and every move swaps
//! a tile with that gap, so the tiles always form a permutation of the
//! remaining cells.

use rand::Rng;

use crate::types::{Direction, GridIndex, GridSize, MIN_GRID_SIDE};

/// A slice of the picture. Not `Clone`: a tile lives in exactly one cell.
#[derive(Debug, PartialEq, Eq)]
pub struct Tile {
    correct_index: GridIndex,
}

impl Tile {
    fn new(correct_index: GridIndex) -> Self {
        Self { correct_index }
    }

    /// Cell this tile occupies when the puzzle is solved.
    pub fn correct_index(&self) -> GridIndex {
        self.correct_index
    }
}

#[derive(Debug)]
pub struct PuzzleBoard {
    size: GridSize,
    cells: Vec<Option<Tile>>,
    blank: Option<GridIndex>,
}

impl PuzzleBoard {
    /// Builds a solved board with no gap yet.
    ///
    /// # Panics
    ///
    /// Panics if either side is smaller than 2.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width >= MIN_GRID_SIDE && height >= MIN_GRID_SIDE,
            "board must be at least {MIN_GRID_SIDE}x{MIN_GRID_SIDE}, got {width}x{height}"
        );

        let size = GridSize::new(width, height);
        let mut cells: Vec<Option<Tile>> = (0..size.cell_count()).map(|_| None).collect();
        for index in size.indices() {
            cells[slot(size, index)] = Some(Tile::new(index));
        }

        Self {
            size,
            cells,
            blank: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.size.columns
    }

    pub fn height(&self) -> u32 {
        self.size.rows
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn contains(&self, index: GridIndex) -> bool {
        self.size.contains(index)
    }

    /// The empty cell, once a tile has been removed.
    pub fn blank(&self) -> Option<GridIndex> {
        self.blank
    }

    pub fn tile_at(&self, index: GridIndex) -> Option<&Tile> {
        if !self.contains(index) {
            return None;
        }
        self.cells[slot(self.size, index)].as_ref()
    }

    /// Occupied cells with their tiles, row by row from row 0.
    pub fn tiles(&self) -> impl Iterator<Item = (GridIndex, &Tile)> {
        let columns = self.size.columns as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            let index = GridIndex::new((i % columns) as i32, (i / columns) as i32);
            cell.as_ref().map(|tile| (index, tile))
        })
    }

    /// Opens the gap at `index` and returns the tile that was there.
    ///
    /// # Panics
    ///
    /// Panics if `index` is off the board or already empty.
    pub fn remove_tile(&mut self, index: GridIndex) -> Tile {
        assert!(self.contains(index), "cannot remove tile at {index}: off the board");
        if let Some(previous) = self.blank {
            panic!("cannot remove tile at {index}: the gap is already open at {previous}");
        }
        let tile = self.cells[slot(self.size, index)]
            .take()
            .unwrap_or_else(|| panic!("cannot remove tile at {index}: cell is already empty"));
        self.blank = Some(index);
        tracing::debug!("Removed tile at {index}");
        tile
    }

    /// Slides the tile at `target` into the gap if the two cells share an
    /// edge. Returns `false` and leaves the board untouched otherwise.
    pub fn try_move(&mut self, target: GridIndex) -> bool {
        let Some(blank) = self.blank else {
            tracing::debug!("Move to {target} rejected: no gap on the board");
            return false;
        };

        if !self.contains(target) {
            tracing::debug!("Move to {target} rejected: off the board");
            return false;
        }

        if !target.is_adjacent(blank) {
            tracing::debug!("Move to {target} rejected: not adjacent to gap {blank}");
            return false;
        }

        let tile = self.cells[slot(self.size, target)].take();
        self.cells[slot(self.size, blank)] = tile;
        self.blank = Some(target);
        tracing::debug!("Slid tile from {target} to {blank}");
        true
    }

    /// Slides the gap's neighbour that would travel in `direction`.
    pub fn try_slide(&mut self, direction: Direction) -> bool {
        match self.blank {
            Some(blank) => self.try_move(blank - direction.offset()),
            None => false,
        }
    }

    /// In-range cells next to the gap, i.e. every legal move target.
    pub fn movable_tiles(&self) -> Vec<GridIndex> {
        let Some(blank) = self.blank else {
            return Vec::new();
        };
        Direction::ALL
            .iter()
            .map(|d| blank + d.offset())
            .filter(|&index| self.contains(index))
            .collect()
    }

    /// Scrambles the board with `move_count` random legal moves.
    pub fn shuffle(&mut self, move_count: usize) {
        self.shuffle_with(move_count, &mut rand::rng());
    }

    /// Scrambles the board with `move_count` legal moves drawn from `rng`.
    ///
    /// Each step picks one of the four directions uniformly and draws again
    /// while the candidate lies off the board. Starting from a reachable
    /// state, the result is always solvable.
    ///
    /// # Panics
    ///
    /// Panics if no tile has been removed yet.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, move_count: usize, rng: &mut R) {
        let Some(mut blank) = self.blank else {
            panic!("shuffle requires a gap; call remove_tile first");
        };

        for _ in 0..move_count {
            let target = loop {
                let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
                let candidate = blank + direction.offset();
                if self.contains(candidate) {
                    break candidate;
                }
            };
            let moved = self.try_move(target);
            debug_assert!(moved, "in-range neighbour of the gap must be movable");
            blank = target;
        }

        tracing::info!(
            "Shuffled {}x{} board with {} moves, {} tiles out of place",
            self.size.columns,
            self.size.rows,
            move_count,
            self.misplaced_count()
        );
    }

    /// True when every tile sits on its own cell.
    ///
    /// The gap is skipped, never compared with the removed tile's home. Moves
    /// only permute tiles, so once every tile is home the gap is back where
    /// the removed tile belongs anyway.
    pub fn is_solved(&self) -> bool {
        self.tiles().all(|(index, tile)| tile.correct_index() == index)
    }

    pub fn misplaced_count(&self) -> usize {
        self.tiles()
            .filter(|(index, tile)| tile.correct_index() != *index)
            .count()
    }
}

fn slot(size: GridSize, index: GridIndex) -> usize {
    index.row as usize * size.columns as usize + index.column as usize
}
