//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, audio).
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Sessions may pick other
//! sizes at creation time; the size is then fixed for the whole session.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 500 | Gravity tick interval |
//! | `FRAME_MS` | 16 | Redraw cadence of the terminal loop (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cue, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let action = GameAction::from_str("softDrop").unwrap();
//! assert_eq!(action, GameAction::SoftDrop);
//! assert_eq!(Cue::LineClear.as_str(), "clear");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u16 = 20;

/// Gravity interval: one row every 500ms
pub const FALL_INTERVAL_MS: u32 = 500;

/// Redraw cadence of the terminal loop (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Points for a single cleared row. A lock clearing `n` rows scores
/// `LINE_CLEAR_BASE * n * n`.
pub const LINE_CLEAR_BASE: u32 = 100;

/// Tetromino piece kinds. The kind doubles as the color identity of the
/// cells a piece leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position of this kind in [`PieceKind::ALL`].
    pub const fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Player commands accepted by a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Fire-and-forget notifications emitted by the game for sound playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A rotation was accepted.
    Rotate,
    /// A piece was written into the board.
    Lock,
    /// At least one row was cleared.
    LineClear,
    /// A left, right or soft-drop move was accepted.
    Move,
    /// Gravity moved the piece down one row.
    Fall,
}

impl Cue {
    pub const COUNT: usize = 5;

    pub const ALL: [Cue; Cue::COUNT] = [Cue::Rotate, Cue::Lock, Cue::LineClear, Cue::Move, Cue::Fall];

    /// Position of this cue in [`Cue::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Cue::Rotate => 0,
            Cue::Lock => 1,
            Cue::LineClear => 2,
            Cue::Move => 3,
            Cue::Fall => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Rotate => "rotate",
            Cue::Lock => "lock",
            Cue::LineClear => "clear",
            Cue::Move => "move",
            Cue::Fall => "fall",
        }
    }
}

/// Receiver of game cues.
///
/// Delivery is best-effort: implementations must never fail loudly, and an
/// absent sink (`None`) is a valid sink that ignores everything.
pub trait CueSink {
    fn play(&mut self, cue: Cue);
}

impl<S: CueSink> CueSink for Option<S> {
    fn play(&mut self, cue: Cue) {
        if let Some(sink) = self {
            sink.play(cue);
        }
    }
}

impl<S: CueSink + ?Sized> CueSink for &mut S {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue);
    }
}

/// Collects cues in memory. Handy for tests and replays.
impl CueSink for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;
