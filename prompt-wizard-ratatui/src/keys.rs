//! Mapping from terminal keys to wizard events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use prompt_wizard::{StepKind, WizardEvent};

/// Translate a key press into a wizard event for a step of the given kind.
///
/// On text input steps every printable character is typed into the buffer,
/// so letter shortcuts (`q`, `b`, `a`, `hjkl`) only work on the other kinds.
/// Returns `None` for key releases and unbound keys.
pub fn map_key(kind: &StepKind, key: KeyEvent) -> Option<WizardEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c' | 'C')) {
        return Some(WizardEvent::Quit);
    }

    match key.code {
        KeyCode::Enter => return Some(WizardEvent::Commit),
        KeyCode::Esc => return Some(WizardEvent::GoBack),
        _ => {}
    }

    if let StepKind::Input(_) = kind {
        return match key.code {
            KeyCode::Char(c) if !ctrl => Some(WizardEvent::TextEdit(c)),
            KeyCode::Backspace | KeyCode::Delete => Some(WizardEvent::Backspace),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(WizardEvent::Quit),
        KeyCode::Char('b' | 'B') => Some(WizardEvent::GoBack),
        KeyCode::Up | KeyCode::Char('k') => Some(WizardEvent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(WizardEvent::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(WizardEvent::ToggleConfirmLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(WizardEvent::ToggleConfirmRight),
        KeyCode::Char(' ') => Some(WizardEvent::ToggleCurrentOption),
        KeyCode::Char('a' | 'A') => Some(WizardEvent::ToggleSelectAll),
        _ => None,
    }
}
