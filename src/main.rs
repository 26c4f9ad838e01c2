//! Terminal runner (default binary).
//!
//! Owns the frame schedule: `Game::frame` is called every `frame_ms` only while
//! the game asked to be scheduled, and the screen is redrawn after every frame
//! or input event.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal;
use tracing::info;

use canvas_tetris::core::{Board, Game};
use canvas_tetris::input::{dispatch, map_key, on_focus_lost, Outcome};
use canvas_tetris::term::{Canvas, FrameBuffer, GameView, TerminalRenderer, Viewport};
use canvas_tetris::{logging, Config};

/// Poll timeout while no frames are scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = Config::from_env().context("load configuration")?;
    logging::init(&config)?;
    info!(
        seed = config.seed,
        width = config.board_width,
        height = config.board_height,
        block_px = config.block_px,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always restore the terminal, but report the game's error first.
    let restored = term.exit();
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let board = Board::new(config.board_width, config.board_height);
    let mut game = Game::with_board(board, config.seed);
    let mut canvas = Canvas::for_board(game.board(), config.block_px);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame_interval = Duration::from_millis(config.frame_ms as u64);
    let clock = Instant::now();
    let mut scheduled = false;
    let mut next_frame = clock;

    loop {
        if scheduled && Instant::now() >= next_frame {
            scheduled = game.frame(clock.elapsed().as_millis() as u64);
            next_frame = Instant::now() + frame_interval;
        }

        canvas.draw(game.board(), game.active());
        let (w, h) = terminal::size().context("query terminal size")?;
        view.render_into(&game, &canvas, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = if scheduled {
            next_frame.saturating_duration_since(Instant::now())
        } else {
            IDLE_POLL
        };
        if !event::poll(timeout).context("poll terminal events")? {
            continue;
        }

        match event::read().context("read terminal event")? {
            Event::Key(key) => {
                let Some(input) = map_key(key) else {
                    continue;
                };
                match dispatch(&mut game, input) {
                    Outcome::Quit => {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    Outcome::Schedule => {
                        scheduled = true;
                        next_frame = Instant::now();
                    }
                    Outcome::Redraw => {}
                }
            }
            Event::FocusLost => on_focus_lost(&mut game),
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
