//! Board behavior through the public API

use canvas_tetris::core::{Board, Tetromino};
use canvas_tetris::types::{PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

const GRAY: Rgb = Rgb::new(128, 128, 128);

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..board.width() as i8 {
        board.set(x, y, Some(GRAY));
    }
}

fn at(kind: PieceKind, x: i8, y: i8) -> Tetromino {
    let mut piece = Tetromino::spawn(kind);
    piece.x = x;
    piece.y = y;
    piece
}

#[test]
fn test_default_board_is_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 200);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_out_of_bounds_access() {
    let mut board = Board::default();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(GRAY)));
    assert_eq!(board.get(0, 0), Some(None));
}

#[test]
fn test_valid_position_walls_floor_and_stack() {
    let mut board = Board::default();
    // T at x=0 is flush with the left wall.
    assert!(board.is_valid_position(&at(PieceKind::T, 0, 0)));
    assert!(!board.is_valid_position(&at(PieceKind::T, -1, 0)));
    assert!(!board.is_valid_position(&at(PieceKind::T, 8, 0)));
    // Its bottom row is mask row 1, so y=18 touches the floor and y=19 is through it.
    assert!(board.is_valid_position(&at(PieceKind::T, 3, 18)));
    assert!(!board.is_valid_position(&at(PieceKind::T, 3, 19)));

    board.set(4, 10, Some(GRAY));
    assert!(!board.is_valid_position(&at(PieceKind::T, 3, 9)));
}

#[test]
fn test_cells_above_top_only_check_walls() {
    let board = Board::default();
    assert!(board.is_valid_position(&at(PieceKind::O, 4, -2)));
    assert!(!board.is_valid_position(&at(PieceKind::O, 9, -2)));
}

#[test]
fn test_bottom_row_clear_shifts_rows_down() {
    let mut board = Board::default();
    fill_row(&mut board, 19);
    board.set(2, 18, Some(Rgb::WHITE));
    board.set(7, 0, Some(Rgb::WHITE));

    assert_eq!(board.clear_lines(), 1);
    assert_eq!(board.get(2, 19), Some(Some(Rgb::WHITE)));
    assert_eq!(board.get(7, 1), Some(Some(Rgb::WHITE)));
    assert!(board.rows().next().unwrap().iter().all(|c| c.is_none()));
}

#[test]
fn test_adjacent_full_rows_clear_together() {
    let mut board = Board::default();
    for y in 16..20 {
        fill_row(&mut board, y);
    }
    board.set(0, 15, Some(Rgb::WHITE));

    assert_eq!(board.clear_lines(), 4);
    assert_eq!(board.get(0, 19), Some(Some(Rgb::WHITE)));
    assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
}

#[test]
fn test_lock_then_clear() {
    let mut board = Board::default();
    for x in 0..6 {
        board.set(x, 19, Some(GRAY));
    }
    // Horizontal I fills columns 6..=9 of row 19.
    let discarded = board.lock(&at(PieceKind::I, 6, 18));
    assert_eq!(discarded, 0);
    assert!(board.is_row_full(19));
    assert_eq!(board.clear_lines(), 1);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_landing_on_stack() {
    let mut board = Board::default();
    board.set(5, 12, Some(GRAY));
    let landed = board.landing_position(&at(PieceKind::O, 4, 0));
    assert_eq!(landed.y, 10);
    assert_eq!((landed.x, landed.kind), (4, PieceKind::O));
}

#[test]
fn test_custom_dimensions() {
    let mut board = Board::new(4, 6);
    assert_eq!(board.rows().count(), 6);
    fill_row(&mut board, 5);
    assert_eq!(board.clear_lines(), 1);
    board.set(3, 5, Some(GRAY));
    board.reset();
    assert!(board.cells().iter().all(|c| c.is_none()));
}
