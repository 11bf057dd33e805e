use crate::pieces::{Piece, Shape};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl PieceSnapshot {
    /// Board coordinates `(x, y)` of every occupied cell.
    pub fn board_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .map(move |(r, c)| (self.x + c as i32, self.y + r as i32))
    }
}

/// Read-only view of a session, everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major board cells (`y * width + x`).
    pub board: Vec<Cell>,
    pub current: PieceSnapshot,
    /// Preview of the piece that spawns after the current one locks.
    pub next: PieceSnapshot,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Cell at `(x, y)`, or None when out of bounds.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        self.board
            .get(y as usize * usize::from(self.width) + x as usize)
            .copied()
    }

    /// Set cell at `(x, y)`. Out of bounds is ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return;
        }
        let idx = y as usize * usize::from(self.width) + x as usize;
        if let Some(slot) = self.board.get_mut(idx) {
            *slot = cell;
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let placeholder = PieceSnapshot::from(Piece::spawn(PieceKind::I, BOARD_WIDTH));
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![None; usize::from(BOARD_WIDTH) * usize::from(BOARD_HEIGHT)],
            current: placeholder,
            next: placeholder,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}
