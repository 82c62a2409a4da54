//! Semantic application events — crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`to_app_event`] on every [`crossterm::event::Event`]
//! and match on the returned [`AppEvent`] instead of crossterm types.
//!
//! # Keybindings
//!
//! The prompt is always in insert mode: every printable key types into the
//! focused input, so all commands sit on control or function keys.
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `Ctrl+c`                | `Quit`                     |
//! | `Esc`                   | `Escape`                   |
//! | `Enter`                 | `Enter`                    |
//! | `↓`, `Tab`, `Ctrl+n`    | `SelectNext`               |
//! | `↑`, `Shift+Tab`, `Ctrl+p` | `SelectPrev`            |
//! | `PageDown`              | `PageDown`                 |
//! | `PageUp`                | `PageUp`                   |
//! | `Ctrl+d`                | `DeleteSelected`           |
//! | `Ctrl+x`                | `CommandMode`              |
//! | `F1`                    | `Help`                     |
//! | `←` / `→`               | `Cursor(Left / Right)`     |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | terminal resize         | `Resize(w, h)`             |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Text cursor movement inside an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
///
/// Widgets receive `AppEvent` values — they never inspect crossterm types
/// directly. The App shell is responsible for routing events to the
/// appropriate widget based on the current focus state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit without accepting a row.
    Quit,
    /// Cancel the command bar, or leave the prompt.
    Escape,
    /// Accept the selected row, or run the typed command.
    Enter,
    /// Move the list selection down one row.
    SelectNext,
    /// Move the list selection up one row.
    SelectPrev,
    PageDown,
    PageUp,
    /// Delete the selected row from the category.
    DeleteSelected,
    /// Open the `:` command bar.
    CommandMode,
    /// Toggle the help popup.
    Help,
    /// Move the text cursor.
    Cursor(Direction),
    /// A printable character forwarded to the active text input.
    Char(char),
    /// Delete the character before the cursor in the active text input.
    Backspace,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`].
///
/// Returns `None` for events that carry no semantic meaning for the
/// application (mouse events, focus changes, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        // List selection
        Down | Tab if key.modifiers == Mod::NONE => Some(AppEvent::SelectNext),
        Char('n') if key.modifiers == Mod::CONTROL => Some(AppEvent::SelectNext),
        Up if key.modifiers == Mod::NONE => Some(AppEvent::SelectPrev),
        // Shift+Tab arrives as BackTab, with or without SHIFT set
        BackTab => Some(AppEvent::SelectPrev),
        Char('p') if key.modifiers == Mod::CONTROL => Some(AppEvent::SelectPrev),
        PageDown => Some(AppEvent::PageDown),
        PageUp => Some(AppEvent::PageUp),

        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::DeleteSelected),
        Char('x') if key.modifiers == Mod::CONTROL => Some(AppEvent::CommandMode),
        F(1) => Some(AppEvent::Help),

        Left => Some(AppEvent::Cursor(Direction::Left)),
        Right => Some(AppEvent::Cursor(Direction::Right)),

        // Text input — forward printable characters (including shifted ones)
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
