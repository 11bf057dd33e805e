//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Each key
//! press is one discrete command; there is no auto-repeat handling here, the
//! terminal's own key repeat simply delivers more presses.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
