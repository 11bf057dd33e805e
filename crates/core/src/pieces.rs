//! Pieces module - shape catalog, rotation geometry and the falling piece
//!
//! Each piece is a small boolean matrix (at most 4x4). The seven prototypes
//! live in a constant table; pieces copy their matrix out of it, so rotating
//! one piece never touches the catalog or any other piece.

use crate::types::PieceKind;

/// Largest row or column count of any shape matrix.
pub const MAX_SHAPE_DIM: usize = 4;

/// Rectangular boolean matrix marking the occupied cells of a piece.
///
/// Cells outside `rows x cols` are always `false`, so two shapes compare
/// equal exactly when their visible matrices do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    const fn from_bits(rows: u8, cols: u8, bits: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM]) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < rows as usize {
            let mut c = 0;
            while c < cols as usize {
                cells[r][c] = bits[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { rows, cols, cells }
    }

    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` for an empty, ragged or larger than 4x4 matrix.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let cols = rows.first()?.len();
        if rows.len() > MAX_SHAPE_DIM || cols == 0 || cols > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &bit) in row.iter().enumerate() {
                cells[r][c] = bit != 0;
            }
        }
        Some(Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the cell at `(row, col)` is occupied. Out of range is `false`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Occupied cells as `(row, col)` pairs, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols()).filter_map(move |c| self.cells[r][c].then_some((r, c)))
        })
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.cells().count()
    }

    /// The shape turned 90° clockwise: transpose, then reverse the row order.
    ///
    /// An R x C matrix becomes C x R. Position is not involved; callers decide
    /// whether the result fits.
    pub fn rotated_cw(&self) -> Shape {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let rows = self.rows();
        for (r, row) in cells.iter_mut().enumerate().take(self.cols()) {
            for (c, cell) in row.iter_mut().enumerate().take(rows) {
                *cell = self.cells[rows - 1 - c][r];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Prototype matrices, indexed by [`PieceKind::index`].
const CATALOG: [Shape; 7] = [
    // I
    Shape::from_bits(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]),
    // J
    Shape::from_bits(2, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
    // L
    Shape::from_bits(2, 3, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
    // O
    Shape::from_bits(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
    // S
    Shape::from_bits(2, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
    // T
    Shape::from_bits(2, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]),
    // Z
    Shape::from_bits(2, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]),
];

/// The spawn-orientation matrix of a piece kind.
pub fn prototype(kind: PieceKind) -> &'static Shape {
    &CATALOG[kind.index()]
}

/// Spawn column for a matrix of `cols` columns: centered, rounding left.
pub fn spawn_x(board_width: u16, cols: usize) -> i32 {
    i32::from(board_width) / 2 - cols as i32 / 2
}

/// A piece: its own copy of a shape matrix plus the board offset of the
/// matrix origin. `y` may be negative while the piece is partly above row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece of `kind` at the spawn position of a board `board_width` wide.
    pub fn spawn(kind: PieceKind, board_width: u16) -> Self {
        let shape = *prototype(kind);
        Self {
            kind,
            shape,
            x: spawn_x(board_width, shape.cols()),
            y: 0,
        }
    }

    /// Same piece shifted by `(dx, dy)`.
    pub fn shifted(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Same piece with its matrix turned clockwise, position unchanged.
    pub fn rotated(self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..self
        }
    }

    /// Board coordinates `(x, y)` of every occupied cell.
    pub fn board_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(move |(r, c)| (self.x + c as i32, self.y + r as i32))
    }
}
