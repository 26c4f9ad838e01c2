//! Board module - manages the game grid
//!
//! The board is a W x H grid where each cell is empty or holds the color of the
//! piece that locked there. Dimensions are fixed at construction.
//! Uses a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Pieces may sit partly above the board (negative y); those cells are only
//! checked against the side walls and are discarded on lock.

use crate::pieces::Tetromino;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_DIM, MIN_BOARD_DIM};

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given size.
    ///
    /// Each edge is clamped to `MIN_BOARD_DIM..=MAX_BOARD_DIM`.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        let height = height.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || y < 0 || x as i16 >= self.width as i16 || y as i16 >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether every occupied cell of `piece` is inside the side walls,
    /// above the floor, and not overlapping a locked cell.
    ///
    /// Cells above the top edge (negative y) only have to respect the walls.
    pub fn is_valid_position(&self, piece: &Tetromino) -> bool {
        piece.cells().iter().all(|&(x, y)| {
            if x < 0 || x as i16 >= self.width as i16 || y as i16 >= self.height as i16 {
                return false;
            }
            y < 0 || !self.is_occupied(x, y)
        })
    }

    /// Write the piece's color into every occupied cell that lies on the board.
    ///
    /// Cells above row 0 are dropped. Returns how many were dropped.
    pub fn lock(&mut self, piece: &Tetromino) -> usize {
        let color = piece.color();
        let mut discarded = 0;
        for (x, y) in piece.cells() {
            if y < 0 || !self.set(x, y, Some(color)) {
                discarded += 1;
            }
        }
        discarded
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let width = self.width as usize;
        let start = y * width;
        self.cells[start..start + width].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift every row above it down by one and empty the top row.
    fn remove_row(&mut self, y: usize) {
        let width = self.width as usize;
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }
        self.cells[..width].fill(None);
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Scans bottom to top. After a removal the same index is examined again,
    /// since it now holds the row that used to sit above it.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height as usize;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// The piece moved straight down to the lowest row it can legally occupy.
    ///
    /// Linear probe: step down until invalid, then back off one row.
    pub fn landing_position(&self, piece: &Tetromino) -> Tetromino {
        let mut probe = *piece;
        while self.is_valid_position(&probe) {
            probe.y += 1;
        }
        probe.y -= 1;
        probe
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Empty every cell. Dimensions are unchanged.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
