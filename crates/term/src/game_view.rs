//! GameView: lays the pixel canvas and the game's status out in a framebuffer.
//!
//! Pure (no I/O), so layouts are unit-tested. Canvas pixels are shown two per
//! terminal cell with the upper half block: foreground is the top pixel,
//! background the bottom one.

use crate::canvas::{Canvas, BACKGROUND};
use crate::core::Game;
use crate::fb::{FrameBuffer, Glyph, GlyphStyle};
use crate::types::{GamePhase, Rgb};

const HALF_BLOCK: char = '▀';

const BORDER: GlyphStyle = GlyphStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const LABEL: GlyphStyle = GlyphStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
const VALUE: GlyphStyle = GlyphStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const BUTTON: GlyphStyle = GlyphStyle::new(Rgb::new(76, 175, 80), Rgb::BLACK).bold();
const BUTTON_IDLE: GlyphStyle = GlyphStyle::new(Rgb::new(120, 120, 120), Rgb::BLACK);
const OVERLAY: GlyphStyle = GlyphStyle::new(Rgb::WHITE, Rgb::BLACK).bold();

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame landed, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board frame placement for a canvas in a viewport.
    pub fn frame_rect(&self, canvas: &Canvas, viewport: Viewport) -> FrameRect {
        let inner_w = canvas.width().min(u16::MAX as u32 - 2) as u16;
        let inner_h = canvas.height().div_ceil(2).min(u16::MAX as u32 - 2) as u16;
        let w = inner_w + 2;
        let h = inner_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        FrameRect { x, y, w, h }
    }

    /// Render into a reused framebuffer. The canvas must already hold the
    /// current frame.
    pub fn render_into(&self, game: &Game, canvas: &Canvas, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let frame = self.frame_rect(canvas, viewport);
        self.draw_border(fb, frame);
        self.blit(fb, canvas, frame);
        self.draw_side_panel(fb, game, viewport, frame);

        match game.phase() {
            GamePhase::Idle => {
                self.draw_overlay(fb, frame, 0, "PRESS ENTER");
                self.draw_overlay(fb, frame, 1, "TO START");
            }
            GamePhase::Paused => {
                self.draw_overlay(fb, frame, 0, "PAUSED");
            }
            GamePhase::GameOver => {
                self.draw_overlay(fb, frame, -1, "GAME OVER");
                if let Some(score) = game.final_score() {
                    self.draw_overlay_score(fb, frame, 0, score);
                }
                self.draw_overlay(fb, frame, 1, "[R] RESTART");
            }
            GamePhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, canvas: &Canvas, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, canvas, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, r: FrameRect) {
        let (x, y, w, h) = (r.x, r.y, r.w, r.h);
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn blit(&self, fb: &mut FrameBuffer, canvas: &Canvas, r: FrameRect) {
        for ty in 0..r.h - 2 {
            let top_y = ty as u32 * 2;
            for tx in 0..r.w - 2 {
                let top = canvas.pixel(tx as u32, top_y).unwrap_or(BACKGROUND);
                let bottom = canvas.pixel(tx as u32, top_y + 1).unwrap_or(BACKGROUND);
                fb.put_char(
                    r.x + 1 + tx,
                    r.y + 1 + ty,
                    HALF_BLOCK,
                    GlyphStyle::new(top, bottom),
                );
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, game: &Game, viewport: Viewport, r: FrameRect) {
        let panel_x = r.x.saturating_add(r.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let mut y = r.y;
        for (label, value) in [
            ("SCORE", game.score()),
            ("LEVEL", game.level()),
            ("LINES", game.lines()),
        ] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_u32(panel_x, y.saturating_add(1), value, VALUE);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "SPEED", LABEL);
        let ms = game.drop_interval_ms();
        fb.put_u32(panel_x, y.saturating_add(1), ms, VALUE);
        fb.put_str(panel_x + digits(ms) + 1, y.saturating_add(1), "ms", VALUE);
        y = y.saturating_add(3);

        let (start_label, start_style) = if game.is_running() {
            ("PLAYING...", BUTTON_IDLE)
        } else {
            ("START GAME", BUTTON)
        };
        fb.put_str(panel_x, y, "[ENTER]", LABEL);
        fb.put_str(panel_x + 8, y, start_label, start_style);
        y = y.saturating_add(1);

        let (pause_label, pause_style) = match (game.is_running(), game.is_paused()) {
            (true, true) => ("RESUME", BUTTON),
            (true, false) => ("PAUSE", BUTTON),
            _ => ("PAUSE", BUTTON_IDLE),
        };
        fb.put_str(panel_x, y, "[P]", LABEL);
        fb.put_str(panel_x + 8, y, pause_label, pause_style);
        y = y.saturating_add(1);

        let restart_style = if game.is_game_over() { BUTTON } else { BUTTON_IDLE };
        fb.put_str(panel_x, y, "[R]", LABEL);
        fb.put_str(panel_x + 8, y, "RESTART", restart_style);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "[Q]", LABEL);
        fb.put_str(panel_x + 8, y, "QUIT", VALUE);
    }

    fn overlay_row(&self, r: FrameRect, offset: i16) -> u16 {
        let mid = (r.y + r.h / 2) as i16;
        mid.saturating_add(offset).max(0) as u16
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, r: FrameRect, offset: i16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = r.x.saturating_add(r.w.saturating_sub(text_w) / 2);
        fb.put_str(x, self.overlay_row(r, offset), text, OVERLAY);
    }

    fn draw_overlay_score(&self, fb: &mut FrameBuffer, r: FrameRect, offset: i16, score: u32) {
        let text_w = 6 + digits(score);
        let x = r.x.saturating_add(r.w.saturating_sub(text_w) / 2);
        let y = self.overlay_row(r, offset);
        fb.put_str(x, y, "SCORE ", OVERLAY);
        fb.put_u32(x + 6, y, score, OVERLAY);
    }
}

fn digits(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
