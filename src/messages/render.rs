//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::{seconds_text, PAUSE_LABEL};
use crate::messages::ui_events::InputMode;

/// A page button as the UI should draw it
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
}

impl ButtonView {
    pub fn new(label: &str) -> Self {
        ButtonView {
            label: label.to_string(),
            disabled: false,
        }
    }
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Page text
    pub seconds: String,
    pub counter: String,
    pub likes: Vec<String>,
    pub comments: Vec<String>,

    // Buttons
    pub plus: ButtonView,
    pub minus: ButtonView,
    pub heart: ButtonView,
    pub pause: ButtonView,
    /// None when the page has no restart control
    pub restart: Option<ButtonView>,

    // Comment input
    pub comment_input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Popups
    pub alert: Option<String>,
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            seconds: seconds_text(0),
            counter: String::from("0"),
            likes: Vec::new(),
            comments: Vec::new(),
            plus: ButtonView::new("+"),
            minus: ButtonView::new("-"),
            heart: ButtonView::new("♥"),
            pause: ButtonView::new(PAUSE_LABEL),
            restart: Some(ButtonView::new("Restart")),
            comment_input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            alert: None,
            show_help: false,
        }
    }
}
