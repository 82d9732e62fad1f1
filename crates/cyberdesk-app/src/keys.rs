//! Key handling for the input line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cyberdesk_types::input::{Direction, TerminalEvent};

/// Result of handling a single key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the interpreter.
    Event(TerminalEvent),
    /// The input line changed locally.
    Edited,
    Ignore,
    Quit,
}

/// Map a key press onto the input buffer or an interpreter event.
pub fn map_key(key: KeyEvent, input: &mut String) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c' | 'd') if ctrl => KeyAction::Quit,
        KeyCode::Char('u') if ctrl => {
            input.clear();
            KeyAction::Edited
        },
        KeyCode::Char('l') if ctrl => KeyAction::Event(TerminalEvent::Submit("clear".into())),
        KeyCode::Enter => KeyAction::Event(TerminalEvent::Submit(input.clone())),
        KeyCode::Tab => KeyAction::Event(TerminalEvent::Complete(input.clone())),
        KeyCode::Up => KeyAction::Event(TerminalEvent::Navigate(Direction::Older)),
        KeyCode::Down => KeyAction::Event(TerminalEvent::Navigate(Direction::Newer)),
        KeyCode::Backspace => {
            input.pop();
            KeyAction::Edited
        },
        KeyCode::Char(ch) if !ctrl => {
            input.push(ch);
            KeyAction::Edited
        },
        _ => KeyAction::Ignore,
    }
}
