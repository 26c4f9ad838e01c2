//! Applies decoded inputs to the game.

use tracing::debug;

use crate::core::Game;
use crate::map::Input;
use crate::types::Control;

/// What the host loop has to do after an input was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing beyond a redraw
    Redraw,
    /// (Re)enter the frame loop
    Schedule,
    Quit,
}

/// Apply one input to the game.
///
/// Gameplay keys are dropped while the game is over; the buttons still work.
pub fn dispatch(game: &mut Game, input: Input) -> Outcome {
    match input {
        Input::Play(command) => {
            if !game.is_game_over() {
                game.apply(command);
            }
            Outcome::Redraw
        }
        Input::Control(Control::Start) => schedule_if(game.start()),
        Input::Control(Control::Restart) => {
            if game.is_game_over() {
                schedule_if(game.start())
            } else {
                Outcome::Redraw
            }
        }
        Input::Control(Control::TogglePause) => schedule_if(game.toggle_pause()),
        Input::Control(Control::Quit) => Outcome::Quit,
    }
}

/// Pause a running game when the terminal loses focus.
pub fn on_focus_lost(game: &mut Game) {
    if game.is_running() && !game.is_paused() {
        debug!("focus lost, pausing");
        game.toggle_pause();
    }
}

fn schedule_if(schedule: bool) -> Outcome {
    if schedule {
        Outcome::Schedule
    } else {
        Outcome::Redraw
    }
}
