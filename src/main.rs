//! Terminal runner (default binary).
//!
//! Reads configuration from the environment, opens the sound board, then
//! runs the game loop: render, wait for a key until the next gravity tick,
//! apply input, tick, play cues.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::audio::SoundBoard;
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;
use blockfall::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    for warning in &config.warnings {
        eprintln!("[Config] {warning}");
    }

    // Audio problems are reported before the screen switches over.
    let sounds = if config.mute {
        None
    } else {
        match SoundBoard::open(&config.sound_dir) {
            Ok(board) => Some(board),
            Err(err) => {
                eprintln!("[Audio] sound disabled: {err:#}");
                None
            }
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, sounds);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &GameConfig,
    mut sounds: Option<SoundBoard>,
) -> Result<()> {
    let mut game = match config.seed {
        Some(seed) => GameState::with_seed(config.width, config.height, seed),
        None => GameState::new(config.width, config.height),
    }
    .with_fall_interval_ms(config.fall_ms);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let fall_interval = game.fall_interval();
    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut last_fall = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next gravity step, capped to one frame.
        let timeout = fall_interval
            .checked_sub(last_fall.elapsed())
            .unwrap_or(Duration::ZERO)
            .min(frame);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity. A finished game stays on screen until the player quits.
        if last_fall.elapsed() >= fall_interval {
            last_fall = Instant::now();
            game.tick();
        }

        game.emit_cues(&mut sounds);
    }
}
