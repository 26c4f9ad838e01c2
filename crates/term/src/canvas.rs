//! Canvas: the pixel render surface for the board and the active piece.
//!
//! The canvas is `board width x block_px` by `board height x block_px` RGB
//! pixels. Drawing is CPU-only and never fails; anything outside the surface is
//! clipped. The terminal view samples these pixels, so the canvas is the single
//! place where colors, bevels and the ghost's translucency are decided.

use crate::core::{Board, Tetromino};
use crate::types::Rgb;

/// Empty-board color.
pub const BACKGROUND: Rgb = Rgb::new(0x1e, 0x1e, 0x28);

/// Ghost piece opacity (20%).
pub const GHOST_ALPHA: u8 = 51;

/// Top/left bevel: white at 10%.
pub const HIGHLIGHT_ALPHA: u8 = 26;

/// Bottom/right bevel: black at 20%.
pub const SHADOW_ALPHA: u8 = 51;

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Bevel thickness for a block edge: 2px on a 30px block, none on tiny blocks.
pub fn bevel_px(block_px: u32) -> u32 {
    if block_px < 4 {
        0
    } else {
        (block_px / 15).max(1)
    }
}

/// Combine a per-draw alpha with a global alpha.
fn scale_alpha(alpha: u8, global: u8) -> u8 {
    ((alpha as u32 * global as u32 + 127) / 255) as u8
}

/// RGB pixel surface sized to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    block_px: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    /// Create a canvas for a board of `cols x rows` cells.
    pub fn new(cols: u8, rows: u8, block_px: u32) -> Self {
        let block_px = block_px.max(1);
        let width = cols as u32 * block_px;
        let height = rows as u32 * block_px;
        Self {
            width,
            height,
            block_px,
            pixels: vec![BACKGROUND; width as usize * height as usize],
        }
    }

    pub fn for_board(board: &Board, block_px: u32) -> Self {
        Self::new(board.width(), board.height(), block_px)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn block_px(&self) -> u32 {
        self.block_px
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Fill the whole surface with the background color.
    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    /// Opaque fill, clipped to the surface.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.blend_rect(rect, color, 255);
    }

    /// Alpha-blended fill over existing content, clipped to the surface.
    pub fn blend_rect(&mut self, rect: Rect, color: Rgb, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let max_x = rect.x.saturating_add(rect.w).min(self.width);
        let max_y = rect.y.saturating_add(rect.h).min(self.height);
        if rect.x >= max_x || rect.y >= max_y {
            return;
        }

        let stride = self.width as usize;
        for y in rect.y..max_y {
            let row_start = y as usize * stride;
            let row = &mut self.pixels[row_start + rect.x as usize..row_start + max_x as usize];
            if alpha == 255 {
                row.fill(color);
            } else {
                for px in row {
                    *px = px.blend(color, alpha);
                }
            }
        }
    }

    /// Redraw the frame: background, locked cells, active piece, then its ghost.
    pub fn draw(&mut self, board: &Board, active: Option<&Tetromino>) {
        if self.width != board.width() as u32 * self.block_px
            || self.height != board.height() as u32 * self.block_px
        {
            *self = Self::for_board(board, self.block_px);
        }
        self.clear();

        for (y, row) in board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(color) = cell {
                    self.draw_block(x as i8, y as i8, *color, 255);
                }
            }
        }

        if let Some(piece) = active {
            self.draw_piece(piece, 255);
            let ghost = board.landing_position(piece);
            self.draw_piece(&ghost, GHOST_ALPHA);
        }
    }

    fn draw_piece(&mut self, piece: &Tetromino, alpha: u8) {
        let color = piece.color();
        for (x, y) in piece.cells() {
            self.draw_block(x, y, color, alpha);
        }
    }

    /// One board cell with a bevel: lighter top/left edges, darker bottom/right.
    fn draw_block(&mut self, x: i8, y: i8, color: Rgb, alpha: u8) {
        if x < 0 || y < 0 {
            return;
        }
        let b = self.block_px;
        let px = x as u32 * b;
        let py = y as u32 * b;

        self.blend_rect(Rect::new(px, py, b, b), color, alpha);

        let edge = bevel_px(b);
        if edge == 0 {
            return;
        }
        let highlight = scale_alpha(HIGHLIGHT_ALPHA, alpha);
        self.blend_rect(Rect::new(px, py, b, edge), Rgb::WHITE, highlight);
        self.blend_rect(Rect::new(px, py, edge, b), Rgb::WHITE, highlight);

        let shadow = scale_alpha(SHADOW_ALPHA, alpha);
        self.blend_rect(Rect::new(px + b - edge, py, edge, b), Rgb::BLACK, shadow);
        self.blend_rect(Rect::new(px, py + b - edge, b, edge), Rgb::BLACK, shadow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape_def;
    use crate::types::PieceKind;

    const RED: Rgb = Rgb::new(200, 0, 0);

    #[test]
    fn test_canvas_sized_to_board() {
        let board = Board::default();
        let canvas = Canvas::for_board(&board, 30);
        assert_eq!(canvas.width(), 300);
        assert_eq!(canvas.height(), 600);
        assert_eq!(canvas.pixels().len(), 300 * 600);
    }

    #[test]
    fn test_bevel_thickness() {
        assert_eq!(bevel_px(1), 0);
        assert_eq!(bevel_px(2), 0);
        assert_eq!(bevel_px(4), 1);
        assert_eq!(bevel_px(30), 2);
    }

    #[test]
    fn test_blend_rect_clips() {
        let mut canvas = Canvas::new(2, 2, 2);
        canvas.fill_rect(Rect::new(3, 3, 10, 10), RED);
        assert_eq!(canvas.pixel(3, 3), Some(RED));
        assert_eq!(canvas.pixel(2, 2), Some(BACKGROUND));
        // Fully outside: no panic, no change.
        canvas.fill_rect(Rect::new(50, 50, 1, 1), RED);
    }

    #[test]
    fn test_locked_cell_has_bevel() {
        let mut board = Board::default();
        board.set(1, 2, Some(RED));
        let mut canvas = Canvas::for_board(&board, 30);
        canvas.draw(&board, None);

        // Center is the plain color.
        assert_eq!(canvas.pixel(45, 75), Some(RED));
        // Top edge is lighter, bottom edge darker.
        let top = canvas.pixel(45, 60).unwrap();
        let bottom = canvas.pixel(45, 89).unwrap();
        assert!(top.g > RED.g);
        assert!(bottom.r < RED.r);
        // Neighboring empty cell stays background.
        assert_eq!(canvas.pixel(15, 75), Some(BACKGROUND));
    }

    #[test]
    fn test_active_and_ghost() {
        let board = Board::default();
        let mut piece = Tetromino::spawn(PieceKind::O);
        piece.x = 4;
        let mut canvas = Canvas::for_board(&board, 2);
        canvas.draw(&board, Some(&piece));

        let color = shape_def(PieceKind::O).color;
        // Active piece is opaque at (4, 0).
        assert_eq!(canvas.pixel(8, 0), Some(color));
        // Ghost at rows 18..19 is a 20% mix over the background.
        assert_eq!(canvas.pixel(8, 36), Some(BACKGROUND.blend(color, GHOST_ALPHA)));
    }

    #[test]
    fn test_cells_above_board_are_clipped() {
        let board = Board::default();
        let mut piece = Tetromino::spawn(PieceKind::I);
        piece.x = 3;
        piece.y = -1;
        let mut canvas = Canvas::for_board(&board, 2);
        canvas.draw(&board, Some(&piece));
        // The I's row sits at y=0.
        assert_eq!(canvas.pixel(6, 0), Some(piece.color()));
    }

    #[test]
    fn test_draw_resizes_for_other_board() {
        let board = Board::new(6, 8);
        let mut canvas = Canvas::new(10, 20, 3);
        canvas.draw(&board, None);
        assert_eq!((canvas.width(), canvas.height()), (18, 24));
    }
}
