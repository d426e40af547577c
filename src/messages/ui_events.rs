//! UI events - messages from the UI layer and the ticker to the App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events the app actor processes, one at a time
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Timer period elapsed
    Tick,

    // Page buttons
    Increment,
    Decrement,
    Like,
    TogglePause,
    Restart,

    // Comment input
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    SubmitComment,

    // Popups
    DismissAlert,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    input_mode: InputMode,
    show_help: bool,
    alert_open: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // A pending alert blocks everything else
    if alert_open {
        return Some(UiEvent::DismissAlert);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(UiEvent::Increment),
            KeyCode::Char('-') => Some(UiEvent::Decrement),
            KeyCode::Char('l') => Some(UiEvent::Like),
            KeyCode::Char('p') => Some(UiEvent::TogglePause),
            KeyCode::Char('r') => Some(UiEvent::Restart),
            KeyCode::Char('e') | KeyCode::Char('c') => Some(UiEvent::StartEditing),
            KeyCode::Enter => Some(UiEvent::SubmitComment),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Enter => Some(UiEvent::SubmitComment),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_buttons() {
        let map = |c| key_to_ui_event(press(KeyCode::Char(c)), InputMode::Normal, false, false);
        assert_eq!(map('+'), Some(UiEvent::Increment));
        assert_eq!(map('-'), Some(UiEvent::Decrement));
        assert_eq!(map('l'), Some(UiEvent::Like));
        assert_eq!(map('p'), Some(UiEvent::TogglePause));
        assert_eq!(map('r'), Some(UiEvent::Restart));
        assert_eq!(map('x'), None);
    }

    #[test]
    fn test_editing_mode_types_button_keys() {
        let event = key_to_ui_event(press(KeyCode::Char('+')), InputMode::Editing, false, false);
        assert_eq!(event, Some(UiEvent::CharInput('+')));
        let event = key_to_ui_event(press(KeyCode::Enter), InputMode::Editing, false, false);
        assert_eq!(event, Some(UiEvent::SubmitComment));
    }

    #[test]
    fn test_alert_blocks_other_keys() {
        let event = key_to_ui_event(press(KeyCode::Char('+')), InputMode::Normal, false, true);
        assert_eq!(event, Some(UiEvent::DismissAlert));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            key_to_ui_event(key, InputMode::Editing, true, true),
            Some(UiEvent::Quit)
        );
    }
}
