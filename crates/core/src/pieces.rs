//! Pieces module - tetromino catalog and piece instances
//!
//! Each shape is a small square bitmask plus a display color. A [`Tetromino`]
//! owns its own copy of the mask, so rotating an instance never touches the
//! catalog template.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rgb};

/// Largest mask edge in the catalog (the I piece is 4x4).
pub const MAX_MASK: usize = 4;

/// Upper bound on occupied cells in a mask
pub const MAX_CELLS: usize = MAX_MASK * MAX_MASK;

/// Immutable shape template
#[derive(Debug)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub rows: &'static [&'static [u8]],
    pub color: Rgb,
}

/// The seven catalog shapes, in [`PieceKind::ALL`] order.
pub static SHAPES: [ShapeDef; 7] = [
    ShapeDef {
        kind: PieceKind::I,
        rows: &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
        color: Rgb::from_hex(0x38bdf8),
    },
    ShapeDef {
        kind: PieceKind::J,
        rows: &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
        color: Rgb::from_hex(0x818cf8),
    },
    ShapeDef {
        kind: PieceKind::L,
        rows: &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
        color: Rgb::from_hex(0xfb923c),
    },
    ShapeDef {
        kind: PieceKind::O,
        rows: &[&[1, 1], &[1, 1]],
        color: Rgb::from_hex(0xfacc15),
    },
    ShapeDef {
        kind: PieceKind::S,
        rows: &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
        color: Rgb::from_hex(0x4ade80),
    },
    ShapeDef {
        kind: PieceKind::T,
        rows: &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
        color: Rgb::from_hex(0xc084fc),
    },
    ShapeDef {
        kind: PieceKind::Z,
        rows: &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
        color: Rgb::from_hex(0xf87171),
    },
];

/// Look up the catalog template for a piece kind
pub fn shape_def(kind: PieceKind) -> &'static ShapeDef {
    match kind {
        PieceKind::I => &SHAPES[0],
        PieceKind::J => &SHAPES[1],
        PieceKind::L => &SHAPES[2],
        PieceKind::O => &SHAPES[3],
        PieceKind::S => &SHAPES[4],
        PieceKind::T => &SHAPES[5],
        PieceKind::Z => &SHAPES[6],
    }
}

/// Square occupancy mask of edge `size` (at most [`MAX_MASK`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    size: usize,
    bits: [[bool; MAX_MASK]; MAX_MASK],
}

impl Mask {
    /// Build a mask from template rows (non-zero = occupied).
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len().min(MAX_MASK);
        let mut bits = [[false; MAX_MASK]; MAX_MASK];
        for (r, row) in rows.iter().take(size).enumerate() {
            for (c, &v) in row.iter().take(size).enumerate() {
                bits[r][c] = v != 0;
            }
        }
        Self { size, bits }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Occupancy at (row, col); false outside the mask.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.bits[row][col]
    }

    /// 90° clockwise rotation: `new[r][c] = old[n-1-c][r]`.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size;
        let mut bits = [[false; MAX_MASK]; MAX_MASK];
        for (r, row) in bits.iter_mut().enumerate().take(n) {
            for (c, bit) in row.iter_mut().enumerate().take(n) {
                *bit = self.bits[n - 1 - c][r];
            }
        }
        Self { size: n, bits }
    }

    /// Occupied (col, row) offsets inside the mask, row-major.
    pub fn offsets(&self) -> ArrayVec<(i8, i8), MAX_CELLS> {
        let mut out = ArrayVec::new();
        for r in 0..self.size {
            for c in 0..self.size {
                if self.bits[r][c] {
                    out.push((c as i8, r as i8));
                }
            }
        }
        out
    }
}

/// A live piece: its kind, current rotation mask, and board offset of the
/// mask's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub mask: Mask,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new piece with a fresh copy of the catalog mask at (0, 0).
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            mask: Mask::from_rows(shape_def(kind).rows),
            x: 0,
            y: 0,
        }
    }

    pub fn color(&self) -> Rgb {
        shape_def(self.kind).color
    }

    /// Bounding-box width (the mask edge).
    pub fn width(&self) -> usize {
        self.mask.size()
    }

    /// Rotate 90° clockwise in place.
    pub fn rotate(&mut self) {
        self.mask = self.mask.rotated_cw();
    }

    /// Rotated candidate; `self` is left untouched.
    pub fn rotated(&self) -> Self {
        Self {
            mask: self.mask.rotated_cw(),
            ..*self
        }
    }

    /// Candidate shifted by (dx, dy).
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Absolute board (x, y) of every occupied cell.
    pub fn cells(&self) -> ArrayVec<(i8, i8), MAX_CELLS> {
        self.mask
            .offsets()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_kinds() {
        for (def, kind) in SHAPES.iter().zip(PieceKind::ALL) {
            assert_eq!(def.kind, kind);
            assert_eq!(shape_def(kind).kind, kind);
        }
    }

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Tetromino::spawn(kind).cells().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        for (i, a) in SHAPES.iter().enumerate() {
            for b in SHAPES.iter().skip(i + 1) {
                assert_ne!(a.color, b.color);
            }
        }
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let mut t = Tetromino::spawn(PieceKind::T);
        t.rotate();
        // 010/111/000 -> 010/011/010
        assert_eq!(t.mask, Mask::from_rows(&[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]]));
    }

    #[test]
    fn test_rotated_leaves_receiver_untouched() {
        let piece = Tetromino::spawn(PieceKind::L);
        let candidate = piece.rotated();
        assert_eq!(piece.mask, Mask::from_rows(shape_def(PieceKind::L).rows));
        assert_ne!(candidate.mask, piece.mask);
    }

    #[test]
    fn test_mutation_does_not_touch_template() {
        let mut piece = Tetromino::spawn(PieceKind::J);
        piece.rotate();
        piece.rotate();
        let fresh = Tetromino::spawn(PieceKind::J);
        assert_eq!(fresh.mask, Mask::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]));
    }

    #[test]
    fn test_cells_are_offset_by_position() {
        let piece = Tetromino::spawn(PieceKind::O).shifted(4, 7);
        let cells: Vec<_> = piece.cells().into_iter().collect();
        assert_eq!(cells, vec![(4, 7), (5, 7), (4, 8), (5, 8)]);
    }
}
