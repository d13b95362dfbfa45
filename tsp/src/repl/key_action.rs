//! Key to action mapping, kept pure so it can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const NONE: KeyModifiers = KeyModifiers::NONE;
const CTRL: KeyModifiers = KeyModifiers::CONTROL;
const SHIFT: KeyModifiers = KeyModifiers::SHIFT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    // cursor
    CursorLeft,
    CursorRight,
    CursorToBegin,
    CursorToEnd,

    // history
    HistoryPrevious,
    HistoryNext,

    // editing
    InsertChar(char),
    Backspace,
    DeleteToBeginning,

    // completion
    TriggerCompletion,
    AcceptCompletion,
    CancelCompletion,

    Execute,
    ClearScreen,
    Interrupt,

    Unsupported,
}

/// Prompt state the mapping depends on.
#[derive(Debug, Clone, Default)]
pub struct KeyContext {
    pub cursor_at_end: bool,
    /// A ghost suffix is on screen.
    pub has_completion: bool,
}

pub fn determine_key_action(key: &KeyEvent, ctx: &KeyContext) -> KeyAction {
    match (key.code, key.modifiers) {
        (KeyCode::Up, NONE) => KeyAction::HistoryPrevious,
        (KeyCode::Down, NONE) => KeyAction::HistoryNext,

        (KeyCode::Left, NONE) => KeyAction::CursorLeft,
        // Right takes the ghost text when there is one to take
        (KeyCode::Right, NONE) if ctx.has_completion && ctx.cursor_at_end => {
            KeyAction::AcceptCompletion
        }
        (KeyCode::Right, NONE) => KeyAction::CursorRight,
        (KeyCode::Home, NONE) | (KeyCode::Char('a'), CTRL) => KeyAction::CursorToBegin,
        (KeyCode::End, NONE) => KeyAction::CursorToEnd,
        (KeyCode::Char('e'), CTRL) if ctx.has_completion => KeyAction::AcceptCompletion,
        (KeyCode::Char('e'), CTRL) => KeyAction::CursorToEnd,

        (KeyCode::Char(ch), NONE) | (KeyCode::Char(ch), SHIFT) => KeyAction::InsertChar(ch),
        (KeyCode::Backspace, NONE) => KeyAction::Backspace,
        (KeyCode::Char('u'), CTRL) => KeyAction::DeleteToBeginning,

        (KeyCode::Tab, NONE) => KeyAction::TriggerCompletion,
        (KeyCode::Esc, NONE) => KeyAction::CancelCompletion,

        (KeyCode::Enter, NONE) => KeyAction::Execute,
        (KeyCode::Char('l'), CTRL) => KeyAction::ClearScreen,
        (KeyCode::Char('c'), CTRL) => KeyAction::Interrupt,

        _ => KeyAction::Unsupported,
    }
}
