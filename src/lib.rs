//! Canvas Tetris (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `canvas_tetris::{core,input,term,types}` and adds the host's
//! configuration and logging setup.

pub mod config;
pub mod logging;

pub use canvas_tetris_core as core;
pub use canvas_tetris_input as input;
pub use canvas_tetris_term as term;
pub use canvas_tetris_types as types;

pub use config::Config;
