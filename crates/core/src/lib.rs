//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on rendering, terminal I/O or wall-clock time, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every game rule
//! - **Portable**: The host decides how frames are scheduled and drawn
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with collision checks, locking and line clearing
//! - [`game`]: the controller: lifecycle, commands, scoring and the frame loop
//! - [`pieces`]: the seven-shape catalog and mutable piece instances
//! - [`rng`]: seeded uniform piece selection
//! - [`scoring`]: line-clear points, level and drop interval
//!
//! # Example
//!
//! ```
//! use canvas_tetris_core::Game;
//! use canvas_tetris_types::Command;
//!
//! let mut game = Game::new(12345);
//! assert!(game.start());
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! game.apply(Command::HardDrop);
//!
//! // The dropped piece is on the board and a new one is falling.
//! assert!(game.board().cells().iter().any(|c| c.is_some()));
//! assert!(game.active().is_some());
//! ```
//!
//! # Timing
//!
//! Call [`Game::frame`](game::Game::frame) once per display refresh with a
//! monotonic timestamp in milliseconds. It returns `false` once the host should
//! stop scheduling frames (paused or game over).

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use canvas_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::Game;
pub use pieces::{shape_def, Mask, ShapeDef, Tetromino, SHAPES};
pub use rng::SimpleRng;
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_points};
