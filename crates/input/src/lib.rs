//! Terminal input module.
//!
//! Maps `crossterm` key events into gameplay [`Command`]s and lifecycle
//! [`Control`]s, and applies them to a [`Game`]. Holds no state of its own.
//!
//! [`Command`]: crate::types::Command
//! [`Control`]: crate::types::Control
//! [`Game`]: crate::core::Game

pub mod dispatch;
pub mod map;

pub use canvas_tetris_core as core;
pub use canvas_tetris_types as types;

pub use dispatch::{dispatch, on_focus_lost, Outcome};
pub use map::{map_key, Input};
