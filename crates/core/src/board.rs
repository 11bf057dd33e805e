//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! kind of the piece that was locked there. Storage is a flat row-major vector
//! for cache locality; the size is chosen once and never changes.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Rows above the board (negative y) are allowed for falling pieces and are
//! never collision-checked.

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind};

/// Result of writing a piece into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    /// Every cell was written.
    Locked,
    /// Part of the piece lies above the top row; nothing was written.
    Overflow,
}

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "board must be at least 1x1");
        Self {
            width,
            height,
            cells: vec![None; usize::from(width) * usize::from(height)],
        }
    }

    /// Build a board from rows of cells (top row first).
    ///
    /// Returns `None` if there are no rows, a row is empty, or rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let width = u16::try_from(width).ok()?;
        let height = u16::try_from(rows.len()).ok()?;
        Some(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some(y as usize * usize::from(self.width) + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether `shape` can sit with its matrix origin at `(x, y)`.
    ///
    /// A cell is rejected when it is left or right of the board, below the
    /// bottom row, or overlaps a filled cell. Cells above the top row only
    /// need to be horizontally in range.
    pub fn is_valid(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape.cells().all(|(r, c)| {
            let col = x + c as i32;
            let row = y + r as i32;
            if col < 0 || col >= i32::from(self.width) || row >= i32::from(self.height) {
                return false;
            }
            row < 0 || !self.is_occupied(col, row)
        })
    }

    /// Write `kind` into every cell covered by `shape` at `(x, y)`.
    ///
    /// If any covered cell is above the top row the board overflowed:
    /// nothing is written and [`LockOutcome::Overflow`] is returned. Cells
    /// outside the sides or bottom are skipped; a shape that passed
    /// [`Board::is_valid`] has none.
    pub fn lock(&mut self, shape: &Shape, x: i32, y: i32, kind: PieceKind) -> LockOutcome {
        if shape.cells().any(|(r, _)| y + (r as i32) < 0) {
            return LockOutcome::Overflow;
        }

        for (r, c) in shape.cells() {
            self.set(x + c as i32, y + r as i32, Some(kind));
        }
        LockOutcome::Locked
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Remove every full row and insert the same number of empty rows at the
    /// top. Remaining rows keep their relative order. Returns the number of
    /// rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = usize::from(self.width);
        // Compact surviving rows toward the bottom, in place.
        let mut dst = usize::from(self.height);
        for y in (0..usize::from(self.height)).rev() {
            if self.is_row_full(y) {
                continue;
            }
            dst -= 1;
            if dst != y {
                self.cells
                    .copy_within(y * width..(y + 1) * width, dst * width);
            }
        }
        self.cells[..dst * width].fill(None);
        dst
    }

    /// One row as a slice, or None if `y` is out of range.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= usize::from(self.height) {
            return None;
        }
        let width = usize::from(self.width);
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(usize::from(self.width))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Convert to 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT)
    }
}
