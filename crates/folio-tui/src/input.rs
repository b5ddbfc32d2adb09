use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{ComposeField, Mode};

/// High-level action derived from a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    HalfPageDown,
    HalfPageUp,
    JumpTop,
    JumpBottom,
    /// Nav link click: jump to section by index
    NavJump(usize),
    /// Open the contact form
    Compose,
    ComposeInput(char),
    ComposeBackspace,
    ComposeNextField,
    ComposeSubmit,
    /// Close the active popup or cancel composing
    Cancel,
    None,
}

/// Map a key press to an action for the current mode
pub fn handle_key(key: KeyEvent, mode: &Mode) -> Action {
    match mode {
        Mode::Compose(draft) => compose_key(key, draft.field),
        Mode::Notice(_) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(_) => Action::Cancel,
            _ => Action::None,
        },
        Mode::Normal => normal_key(key),
    }
}

fn normal_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Char('d') | KeyCode::PageDown => Action::HalfPageDown,
        KeyCode::Char('u') | KeyCode::PageUp => Action::HalfPageUp,
        KeyCode::Char('g') | KeyCode::Home => Action::JumpTop,
        KeyCode::Char('G') | KeyCode::End => Action::JumpBottom,
        KeyCode::Char('c') => Action::Compose,
        // Nav links are numbered 1..9 in the header
        KeyCode::Char(c @ '1'..='9') => Action::NavJump(c as usize - '1' as usize),
        _ => Action::None,
    }
}

fn compose_key(key: KeyEvent, field: ComposeField) -> Action {
    match key.code {
        KeyCode::Esc => Action::Cancel,
        KeyCode::Tab => Action::ComposeNextField,
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ComposeSubmit,
        KeyCode::Enter if field == ComposeField::Message => Action::ComposeSubmit,
        KeyCode::Enter => Action::ComposeNextField,
        KeyCode::Backspace => Action::ComposeBackspace,
        KeyCode::Char(c) => Action::ComposeInput(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_normal_mode_keys() {
        assert_eq!(handle_key(press(KeyCode::Char('q')), &Mode::Normal), Action::Quit);
        assert_eq!(
            handle_key(press(KeyCode::Char('j')), &Mode::Normal),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key(press(KeyCode::Char('3')), &Mode::Normal),
            Action::NavJump(2)
        );
    }

    #[test]
    fn test_compose_mode_captures_text() {
        let draft = crate::app::ComposeDraft::default();
        let mode = Mode::Compose(draft);
        assert_eq!(
            handle_key(press(KeyCode::Char('q')), &mode),
            Action::ComposeInput('q')
        );
        assert_eq!(handle_key(press(KeyCode::Esc), &mode), Action::Cancel);
    }
}
