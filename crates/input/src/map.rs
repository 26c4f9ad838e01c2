//! Key mapping from terminal events to game inputs.

use crate::types::{Command, Control};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Play(Command),
    Control(Control),
}

/// Map a key event to an input.
///
/// Auto-repeat counts as a press; releases and unknown keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Input::Control(Control::Quit));
    }

    match key.code {
        // Gameplay
        KeyCode::Left => Some(Input::Play(Command::MoveLeft)),
        KeyCode::Right => Some(Input::Play(Command::MoveRight)),
        KeyCode::Down => Some(Input::Play(Command::SoftDrop)),
        KeyCode::Up => Some(Input::Play(Command::Rotate)),
        KeyCode::Char(' ') => Some(Input::Play(Command::HardDrop)),

        // Buttons
        KeyCode::Enter => Some(Input::Control(Control::Start)),
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(Input::Control(Control::TogglePause))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Input::Control(Control::Restart)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Input::Control(Control::Quit)),

        _ => None,
    }
}
