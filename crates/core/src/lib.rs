//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with validity checks, locking and line clearing
//! - [`game_state`]: the session: current and next piece, score, game over
//! - [`pieces`]: shape catalog, clockwise rotation, the falling piece
//! - [`rng`]: uniform random piece generation
//! - [`scoring`]: quadratic line-clear rewards
//! - [`snapshot`]: read-only state for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn picks any of the 7 pieces with equal odds
//! - **In-place rotation**: clockwise only, rejected if blocked (no wall kicks)
//! - **Gravity**: one row per tick; a piece that cannot descend locks immediately
//! - **Scoring**: `100 × lines²` per lock
//! - **Game over**: a lock above the top row, or a blocked spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::with_seed(10, 20, 12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! while game.apply_action(GameAction::SoftDrop) {}
//!
//! // The piece is resting on the floor; the next tick locks it.
//! assert!(game.tick());
//! assert!(game.board().cells().iter().any(|cell| cell.is_some()));
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The core has no clock. The caller invokes
//! [`GameState::tick`](game_state::GameState::tick) once every
//! [`fall_interval`](game_state::GameState::fall_interval) (500ms by default).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockOutcome};
pub use game_state::GameState;
pub use pieces::{prototype, Piece, Shape};
pub use rng::PieceGenerator;
pub use scoring::line_clear_score;
pub use snapshot::{GameSnapshot, PieceSnapshot};
