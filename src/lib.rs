//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the runner, the
//! integration tests and the benches share one import path:
//! `blockfall::{core,input,term,audio,types}`.

pub mod config;

pub use blockfall_audio as audio;
pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::GameConfig;
