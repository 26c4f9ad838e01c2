//! Terminal presentation for the game.
//!
//! The board is painted on a [`Canvas`] of RGB pixels, laid out with the side
//! panel by [`GameView`] into a [`FrameBuffer`] of glyphs, and flushed to the
//! terminal by [`TerminalRenderer`], which only re-emits changed glyphs.
//!
//! - [`canvas`]: pixel surface with rect fills, blending and block bevels
//! - [`fb`]: glyph framebuffer
//! - [`game_view`]: half-block blit, side panel and overlays
//! - [`renderer`]: crossterm backend

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use canvas_tetris_core as core;
pub use canvas_tetris_types as types;

pub use canvas::{bevel_px, Canvas, Rect, BACKGROUND, GHOST_ALPHA};
pub use fb::{FrameBuffer, Glyph, GlyphStyle};
pub use game_view::{AnchorY, FrameRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
