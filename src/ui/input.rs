use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Selection movement in the coin list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

/// What a key press means to the coin list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    InsertChar(char),
    DeleteChar,
    ClearQuery,
    Move(Movement),
}

pub fn map_key(key: KeyEvent) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'c') {
        return Some(InputAction::Quit);
    }
    if is_ctrl_char(key, 'u') {
        return Some(InputAction::ClearQuery);
    }

    let action = match key.code {
        KeyCode::Esc => InputAction::Quit,
        KeyCode::Backspace => InputAction::DeleteChar,
        KeyCode::Up => InputAction::Move(Movement::Up),
        KeyCode::Down => InputAction::Move(Movement::Down),
        KeyCode::PageUp => InputAction::Move(Movement::PageUp),
        KeyCode::PageDown => InputAction::Move(Movement::PageDown),
        KeyCode::Home => InputAction::Move(Movement::Home),
        KeyCode::End => InputAction::Move(Movement::End),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            InputAction::InsertChar(ch)
        }
        _ => return None,
    };
    Some(action)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
