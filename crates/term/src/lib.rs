//! Terminal game renderer.
//!
//! Renders a [`core::GameSnapshot`] into a plain framebuffer of styled
//! character cells, then flushes that framebuffer to the terminal with
//! crossterm. No widget toolkit is involved, so the board keeps an exact
//! 2-columns-per-cell aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
