//! Game state module - manages the complete game session
//!
//! This module ties together the board, the piece generator and scoring.
//! It advances gravity one row per [`GameState::tick`], applies player
//! commands, and runs the lock → clear → respawn sequence.
//!
//! Rejected moves and rotations are silent: the call returns `false` and
//! nothing changes. The only terminal condition is game over, reached when a
//! piece locks above the top row or a new piece cannot be placed.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::board::{Board, LockOutcome};
use crate::pieces::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::line_clear_score;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::*;

/// Cues buffered between drains. Extra cues are dropped.
pub const MAX_PENDING_CUES: usize = 16;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Piece,
    next: Piece,
    generator: PieceGenerator,
    score: u32,
    /// Total rows cleared this session.
    lines: u32,
    game_over: bool,
    fall_interval_ms: u32,
    cues: ArrayVec<Cue, MAX_PENDING_CUES>,
}

impl GameState {
    /// Start a session on an empty `width x height` board with OS randomness.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_generator(width, height, PieceGenerator::new())
    }

    /// Start a reproducible session: the same seed deals the same pieces.
    pub fn with_seed(width: u16, height: u16, seed: u64) -> Self {
        Self::with_generator(width, height, PieceGenerator::seeded(seed))
    }

    pub fn with_generator(width: u16, height: u16, mut generator: PieceGenerator) -> Self {
        let board = Board::new(width, height);
        let current = generator.spawn(width);
        let next = generator.spawn(width);
        // Boards narrower than a piece can be unplayable from the start.
        let game_over = !board.is_valid(&current.shape, current.x, current.y);

        Self {
            board,
            current,
            next,
            generator,
            score: 0,
            lines: 0,
            game_over,
            fall_interval_ms: FALL_INTERVAL_MS,
            cues: ArrayVec::new(),
        }
    }

    /// Override the gravity interval reported by [`GameState::fall_interval`].
    pub fn with_fall_interval_ms(mut self, fall_interval_ms: u32) -> Self {
        self.fall_interval_ms = fall_interval_ms.max(1);
        self
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// How often the presentation loop should call [`GameState::tick`].
    pub fn fall_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.fall_interval_ms))
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    #[cfg(test)]
    pub(crate) fn set_next(&mut self, piece: Piece) {
        self.next = piece;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.current = PieceSnapshot::from(self.current);
        out.next = PieceSnapshot::from(self.next);
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Check whether `piece` fits on the board as it stands.
    pub fn fits(&self, piece: &Piece) -> bool {
        self.board.is_valid(&piece.shape, piece.x, piece.y)
    }

    fn push_cue(&mut self, cue: Cue) {
        // Best-effort: an undrained buffer just stops recording.
        let _ = self.cues.try_push(cue);
    }

    /// Take the cues queued since the last drain, oldest first.
    pub fn drain_cues(&mut self) -> impl Iterator<Item = Cue> + '_ {
        self.cues.drain(..)
    }

    /// Forward queued cues to `sink`.
    pub fn emit_cues(&mut self, sink: &mut impl CueSink) {
        for cue in self.cues.drain(..) {
            sink.play(cue);
        }
    }

    /// Try to move the current piece
    pub(crate) fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let candidate = self.current.shifted(dx, dy);
        if !self.fits(&candidate) {
            return false;
        }
        self.current = candidate;
        true
    }

    /// Try to rotate the current piece clockwise in place (no wall kicks).
    pub(crate) fn try_rotate(&mut self) -> bool {
        let candidate = self.current.rotated();
        if !self.fits(&candidate) {
            return false;
        }
        self.current = candidate;
        true
    }

    /// Lock the current piece onto the board, clear rows and spawn the next piece
    fn lock_piece(&mut self) {
        let piece = self.current;
        match self.board.lock(&piece.shape, piece.x, piece.y, piece.kind) {
            LockOutcome::Overflow => {
                self.game_over = true;
                return;
            }
            LockOutcome::Locked => self.push_cue(Cue::Lock),
        }

        let cleared = self.board.clear_full_rows();
        if cleared > 0 {
            self.score = self.score.saturating_add(line_clear_score(cleared));
            self.lines = self
                .lines
                .saturating_add(u32::try_from(cleared).unwrap_or(u32::MAX));
            self.push_cue(Cue::LineClear);
        }

        let spawned = self.generator.spawn(self.board.width());
        self.current = std::mem::replace(&mut self.next, spawned);
        if !self.fits(&self.current) {
            self.game_over = true;
        }
    }

    /// Advance gravity by one row, locking the piece if it cannot descend.
    ///
    /// Returns false once the game is over.
    pub fn tick(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        if self.try_move(0, 1) {
            self.push_cue(Cue::Fall);
        } else {
            self.lock_piece();
        }
        true
    }

    /// Apply a game action
    ///
    /// Returns true if the action changed the current piece.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }

        let (applied, cue) = match action {
            GameAction::MoveLeft => (self.try_move(-1, 0), Cue::Move),
            GameAction::MoveRight => (self.try_move(1, 0), Cue::Move),
            GameAction::SoftDrop => (self.try_move(0, 1), Cue::Move),
            GameAction::Rotate => (self.try_rotate(), Cue::Rotate),
        };
        if applied {
            self.push_cue(cue);
        }
        applied
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::prototype;

    fn fill_row_except(state: &mut GameState, y: i32, gap_x: &[i32]) {
        let width = i32::from(state.board.width());
        for x in 0..width {
            if !gap_x.contains(&x) {
                state.board_mut().set(x, y, Some(PieceKind::Z));
            }
        }
    }

    fn vertical_i_at(x: i32, y: i32) -> Piece {
        Piece {
            kind: PieceKind::I,
            shape: prototype(PieceKind::I).rotated_cw(),
            x,
            y,
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::with_seed(10, 20, 12345);

        assert!(!state.game_over());
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.current().y, 0);
        assert_eq!(state.fall_interval(), Duration::from_millis(500));
        assert!(state.board().cells().iter().all(Option::is_none));
    }

    #[test]
    fn test_tick_descends_one_row_and_cues_fall() {
        let mut state = GameState::with_seed(10, 20, 1);
        let before = state.current();

        assert!(state.tick());
        assert_eq!(state.current().y, before.y + 1);
        assert_eq!(state.current().x, before.x);
        assert_eq!(state.drain_cues().collect::<Vec<_>>(), vec![Cue::Fall]);
    }

    #[test]
    fn test_o_piece_soft_drops_to_floor_and_locks() {
        let mut state = GameState::with_seed(10, 20, 3);
        let o = Piece::spawn(PieceKind::O, 10);
        assert_eq!((o.x, o.y), (4, 0));
        state.set_current(o);
        state.set_next(Piece::spawn(PieceKind::T, 10));

        let mut drops = 0;
        while state.apply_action(GameAction::SoftDrop) {
            drops += 1;
        }
        assert_eq!(drops, 18);
        assert_eq!(state.current().y, 18);

        // A blocked soft drop never locks; gravity does.
        assert!(state.board().cells().iter().all(Option::is_none));
        assert!(state.tick());

        for y in 18..20 {
            for x in 4..6 {
                assert_eq!(state.board().get(x, y), Some(Some(PieceKind::O)));
            }
        }
        let filled = state.board().cells().iter().filter(|c| c.is_some()).count();
        assert_eq!(filled, 4);
        assert_eq!(state.score(), 0);
        assert_eq!(state.current().kind, PieceKind::T);
        assert!(!state.game_over());
    }

    #[test]
    fn test_quadratic_line_clear_scoring() {
        for (rows, expected) in [(1, 100), (2, 400), (3, 900), (4, 1600)] {
            let mut state = GameState::with_seed(10, 20, 9);
            for y in (20 - rows)..20 {
                fill_row_except(&mut state, y, &[0]);
            }
            state.set_current(vertical_i_at(0, 16));

            assert!(state.tick());
            assert_eq!(state.score(), expected, "{} rows", rows);
            assert_eq!(state.lines(), rows as u32);

            let cues: Vec<_> = state.drain_cues().collect();
            assert_eq!(cues, vec![Cue::Lock, Cue::LineClear]);
        }
    }

    #[test]
    fn test_lock_without_clear_adds_nothing() {
        let mut state = GameState::with_seed(10, 20, 9);
        state.set_current(vertical_i_at(0, 16));
        assert!(state.tick());
        assert_eq!(state.score(), 0);
        assert_eq!(state.drain_cues().collect::<Vec<_>>(), vec![Cue::Lock]);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut state = GameState::with_seed(10, 20, 5);
        state.set_current(Piece {
            x: 0,
            ..Piece::spawn(PieceKind::J, 10)
        });
        state.board_mut().set(7, 19, Some(PieceKind::S));

        let board_before = state.board().clone();
        let piece_before = state.current();

        assert!(!state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.current(), piece_before);
        assert_eq!(state.board(), &board_before);
        assert_eq!(state.drain_cues().count(), 0);
    }

    #[test]
    fn test_rotation_rejected_against_wall_keeps_shape() {
        let mut state = GameState::with_seed(10, 20, 5);
        // Vertical I in the rightmost column: turning it flat would stick out.
        let piece = vertical_i_at(9, 5);
        state.set_current(piece);

        assert!(!state.apply_action(GameAction::Rotate));
        assert_eq!(state.current(), piece);

        state.set_current(vertical_i_at(4, 5));
        assert!(state.apply_action(GameAction::Rotate));
        assert_eq!(state.current().shape, *prototype(PieceKind::I));
        assert_eq!((state.current().x, state.current().y), (4, 5));
        assert_eq!(state.drain_cues().collect::<Vec<_>>(), vec![Cue::Rotate]);
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut state = GameState::with_seed(10, 20, 11);
        // Rows 0 and 1 filled except column 0: not full, but every spawn collides.
        fill_row_except(&mut state, 0, &[0]);
        fill_row_except(&mut state, 1, &[0]);
        state.set_current(Piece {
            y: 18,
            ..Piece::spawn(PieceKind::O, 10)
        });

        assert!(state.tick());
        assert!(state.game_over());

        let board_before = state.board().clone();
        let piece_before = state.current();
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::Rotate));
        assert!(!state.tick());
        assert_eq!(state.current(), piece_before);
        assert_eq!(state.board(), &board_before);
    }

    #[test]
    fn test_lock_above_top_is_overflow() {
        let mut state = GameState::with_seed(10, 20, 2);
        fill_row_except(&mut state, 0, &[0, 1, 2, 7, 8, 9]);
        let next_before = state.next();
        // Flat I hanging one row above the board, resting on row 0.
        state.set_current(Piece {
            y: -1,
            ..Piece::spawn(PieceKind::I, 10)
        });
        let board_before = state.board().clone();

        assert!(state.tick());
        assert!(state.game_over());
        assert_eq!(state.board(), &board_before);
        // No respawn after an overflow.
        assert_eq!(state.next(), next_before);
        assert_eq!(state.current().y, -1);
    }

    #[test]
    fn test_pieces_may_hang_above_the_board() {
        let mut state = GameState::with_seed(10, 20, 2);
        state.set_current(vertical_i_at(4, -3));
        assert!(state.apply_action(GameAction::MoveLeft));
        assert!(state.tick());
        assert_eq!(state.current().y, -2);
    }

    #[test]
    fn test_next_becomes_current_after_lock() {
        let mut state = GameState::with_seed(10, 20, 21);
        let next = Piece::spawn(PieceKind::S, 10);
        state.set_next(next);
        state.set_current(vertical_i_at(0, 16));

        assert!(state.tick());
        assert_eq!(state.current(), next);
    }

    #[test]
    fn test_cue_buffer_drops_overflow() {
        let mut state = GameState::with_seed(10, 20, 4);
        state.set_current(vertical_i_at(4, 5));
        for _ in 0..MAX_PENDING_CUES + 4 {
            state.apply_action(GameAction::Rotate);
        }
        assert_eq!(state.drain_cues().count(), MAX_PENDING_CUES);
        assert_eq!(state.drain_cues().count(), 0);
    }

    #[test]
    fn test_emit_cues_into_sink() {
        let mut state = GameState::with_seed(10, 20, 4);
        state.apply_action(GameAction::MoveLeft);
        state.tick();

        let mut sink: Vec<Cue> = Vec::new();
        state.emit_cues(&mut sink);
        assert_eq!(sink, vec![Cue::Move, Cue::Fall]);

        let mut absent: Option<Vec<Cue>> = None;
        state.tick();
        state.emit_cues(&mut absent);
        assert_eq!(state.drain_cues().count(), 0);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::with_seed(10, 20, 8);
        state.board_mut().set(2, 19, Some(PieceKind::L));

        let snap = state.snapshot();
        assert_eq!((snap.width, snap.height), (10, 20));
        assert_eq!(snap.cell(2, 19), Some(Some(PieceKind::L)));
        assert_eq!(snap.current.kind, state.current().kind);
        assert_eq!(snap.next.kind, state.next().kind);
        assert_eq!(snap.score, 0);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_tiny_board_is_over_immediately() {
        let state = GameState::with_seed(1, 4, 3);
        assert!(state.game_over());
    }
}
