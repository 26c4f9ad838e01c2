//! Game controller - owns the board, the active piece and the lifecycle flags
//!
//! Lifecycle: `Idle -> Running <-> Paused`, `Running -> GameOver -> Running`
//! (restart is just `start()` again).
//!
//! The controller never schedules anything itself. The host calls
//! [`Game::frame`] once per display refresh while its scheduling flag is set;
//! `frame` reports whether it wants to be called again, and [`Game::start`] /
//! [`Game::toggle_pause`] report when the host has to (re)enter its loop.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::rng::SimpleRng;
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_points};
use crate::types::{Command, Direction, GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Column offsets tried in order when a rotation does not fit as-is.
const ROTATION_KICKS: [i8; 3] = [0, -1, 1];

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<Tetromino>,
    rng: SimpleRng,
    score: u32,
    level: u32,
    lines: u32,
    running: bool,
    paused: bool,
    game_over: bool,
    final_score: Option<u32>,
    /// Timestamp of the previous frame; `None` right after start/resume.
    last_time_ms: Option<u64>,
    /// Time accumulated towards the next automatic drop.
    drop_counter_ms: u64,
}

impl Game {
    /// Create an idle game on the default 10x20 board
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::new(BOARD_WIDTH, BOARD_HEIGHT), seed)
    }

    /// Create an idle game on the given board
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            active: None,
            rng: SimpleRng::new(seed),
            score: 0,
            level: 1,
            lines: 0,
            running: false,
            paused: false,
            game_over: false,
            final_score: None,
            last_time_ms: None,
            drop_counter_ms: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Tetromino> {
        self.active.as_ref()
    }

    /// Where the active piece would land if hard-dropped now
    pub fn ghost(&self) -> Option<Tetromino> {
        self.active.map(|piece| self.board.landing_position(&piece))
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Score at the moment the last game ended
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if !self.running {
            GamePhase::Idle
        } else if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        }
    }

    /// Get current drop interval based on level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    fn accepts_commands(&self) -> bool {
        self.running && !self.paused
    }

    /// Start (or restart) a game.
    ///
    /// Ignored while a game is already running. Returns `true` when the host
    /// has to start scheduling frames.
    pub fn start(&mut self) -> bool {
        if self.running && !self.game_over {
            return false;
        }

        self.board.reset();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.final_score = None;
        self.game_over = false;
        self.paused = false;
        self.running = true;

        info!(seed = self.rng.state(), "game started");
        self.spawn_tetromino();

        self.last_time_ms = None;
        self.drop_counter_ms = 0;
        self.running
    }

    /// Pause or resume.
    ///
    /// Ignored unless a game is running. Returns `true` when the game resumed
    /// and the host has to schedule frames again.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.running || self.game_over {
            return false;
        }

        self.paused = !self.paused;
        if self.paused {
            info!(score = self.score, "paused");
            false
        } else {
            info!("resumed");
            // Paused wall-clock time must not count towards the next drop.
            self.last_time_ms = None;
            true
        }
    }

    /// Spawn a random piece centered at the top. An invalid spawn ends the game.
    pub fn spawn_tetromino(&mut self) {
        let kind = self.rng.next_kind();
        self.spawn_kind(kind);
    }

    fn spawn_kind(&mut self, kind: PieceKind) {
        let mut piece = Tetromino::spawn(kind);
        piece.x = (self.board.width() / 2) as i8 - (piece.width() / 2) as i8;
        piece.y = 0;
        self.active = Some(piece);
        trace!(kind = kind.as_str(), x = piece.x, "spawn");

        if !self.board.is_valid_position(&piece) {
            self.game_over();
        }
    }

    /// Shift the active piece one column; rejected moves leave it in place.
    pub fn move_by(&mut self, dir: Direction) -> bool {
        if !self.accepts_commands() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.shifted(dir.dx(), 0);
        if self.board.is_valid_position(&candidate) {
            self.active = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Rotate clockwise, trying the original column, then one left, then one right.
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_commands() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        let accepted = ROTATION_KICKS
            .iter()
            .map(|&dx| rotated.shifted(dx, 0))
            .find(|candidate| self.board.is_valid_position(candidate));

        match accepted {
            Some(candidate) => {
                self.active = Some(candidate);
                true
            }
            None => false,
        }
    }

    /// Move the active piece down one row, locking it if it cannot move.
    ///
    /// Resets the drop counter either way.
    pub fn drop(&mut self) {
        if !self.accepts_commands() {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        let candidate = active.shifted(0, 1);
        if self.board.is_valid_position(&candidate) {
            self.active = Some(candidate);
        } else {
            self.lock_piece();
        }
        self.drop_counter_ms = 0;
    }

    /// Drop the active piece to the lowest valid row and lock it.
    pub fn hard_drop(&mut self) {
        if !self.accepts_commands() {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        self.active = Some(self.board.landing_position(&active));
        self.lock_piece();
        self.drop_counter_ms = 0;
    }

    /// Commit the active piece, clear lines, score, and spawn the next piece.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let discarded = self.board.lock(&active);
        if discarded > 0 {
            debug!(discarded, kind = active.kind.as_str(), "locked cells above the board");
        }

        let cleared = self.board.clear_lines();
        if cleared > 0 {
            self.award_lines(cleared);
        }

        self.spawn_tetromino();
    }

    fn award_lines(&mut self, cleared: usize) {
        // The multiplier is the level before this clear.
        let points = line_clear_points(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);
        self.level = level_for_lines(self.lines);
        debug!(
            cleared,
            points,
            score = self.score,
            lines = self.lines,
            level = self.level,
            "lines cleared"
        );
    }

    /// End the game and keep the final score for the presentation layer.
    pub fn game_over(&mut self) {
        self.running = false;
        self.game_over = true;
        self.final_score = Some(self.score);
        info!(
            score = self.score,
            level = self.level,
            lines = self.lines,
            "game over"
        );
    }

    /// Advance the drop timer to `now_ms`.
    ///
    /// Does nothing when not running or paused. Returns whether the host should
    /// keep scheduling frames.
    pub fn frame(&mut self, now_ms: u64) -> bool {
        if !self.running || self.paused {
            return false;
        }

        let delta = self
            .last_time_ms
            .map(|last| now_ms.saturating_sub(last))
            .unwrap_or(0);
        self.last_time_ms = Some(now_ms);

        self.drop_counter_ms += delta;
        if self.drop_counter_ms > self.drop_interval_ms() as u64 {
            self.drop();
            self.drop_counter_ms = 0;
        }

        self.running && !self.paused
    }

    /// Apply a gameplay command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => {
                self.move_by(Direction::Left);
            }
            Command::MoveRight => {
                self.move_by(Direction::Right);
            }
            Command::SoftDrop => self.drop(),
            Command::Rotate => {
                self.rotate();
            }
            Command::HardDrop => self.hard_drop(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
