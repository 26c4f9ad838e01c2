//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, canvas rendering, terminal presentation).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (the board itself takes its size at construction):
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Drop Interval by Level
//!
//! Gravity speeds up by 100ms per level, starting at 1000ms on level 1:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 3 | 800ms |
//! | ... | ... |
//! | 10+ | 100ms (floor) |
//!
//! # Examples
//!
//! ```
//! use canvas_tetris_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(PieceKind::ALL.len(), 7);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest board edge `Board::new` accepts
pub const MIN_BOARD_DIM: u8 = 4;

/// Largest board edge `Board::new` accepts; piece coordinates are `i8`, so rows
/// and columns plus a mask edge must stay below 128.
pub const MAX_BOARD_DIM: u8 = 64;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Drop interval on level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Drop interval reduction per level
pub const DROP_STEP_MS: u32 = 100;

/// Drop interval floor
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table indexed by simultaneously cleared lines.
///
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by the level in effect before the clear.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    ///
    /// ```
    /// use canvas_tetris_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex(0x38bdf8), Rgb::new(0x38, 0xbd, 0xf8));
    /// ```
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Source-over blend of `src` onto `self` with `alpha` in 0..=255.
    pub fn blend(self, src: Rgb, alpha: u8) -> Rgb {
        let a = alpha as u32;
        let inv = 255 - a;
        let mix = |d: u8, s: u8| ((d as u32 * inv + s as u32 * a + 127) / 255) as u8;
        Rgb {
            r: mix(self.r, src.r),
            g: mix(self.g, src.g),
            b: mix(self.b, src.b),
        }
    }
}

/// The seven tetromino piece kinds
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
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Uppercase letter used in logs and the side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta (-1 or +1)
    pub fn dx(self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Gameplay commands accepted by the controller.
///
/// These are the five discrete key-driven commands; lifecycle controls
/// (start, pause) are separate calls on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
}

/// Lifecycle controls (the start, pause/resume and restart buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    TogglePause,
    Restart,
    Quit,
}

/// Coarse lifecycle phase derived from the controller's flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Cell filled with the color of the piece that locked there
pub type Cell = Option<Rgb>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_score_table() {
        assert_eq!(LINE_SCORES, [0, 40, 100, 300, 1200]);
    }

    #[test]
    fn blend_extremes() {
        let dst = Rgb::new(10, 20, 30);
        assert_eq!(dst.blend(Rgb::WHITE, 0), dst);
        assert_eq!(dst.blend(Rgb::WHITE, 255), Rgb::WHITE);
    }

    #[test]
    fn blend_twenty_percent_black() {
        // 0.2 * 255 = 51
        let c = Rgb::new(200, 100, 50).blend(Rgb::BLACK, 51);
        assert_eq!(c, Rgb::new(160, 80, 40));
    }

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Left.dx(), -1);
        assert_eq!(Direction::Right.dx(), 1);
    }

    #[test]
    fn piece_kind_log_letters() {
        let letters: String = PieceKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(letters, "IJLOSTZ");
    }
}
