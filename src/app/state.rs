//! App state - the page controller plus front-end editing state, no I/O

use crate::app::controller::{MountError, PageController};
use crate::dom::{Document, ElementId, RenderPort};
use crate::messages::render::ButtonView;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;

/// Main application state - pure data, no I/O
pub struct AppState {
    pub page: PageController<Document>,

    // Comment input editing
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Popups
    pub show_help: bool,
}

impl AppState {
    /// Mount the controller on a document
    pub fn new(document: Document) -> Result<Self, MountError> {
        Ok(AppState {
            page: PageController::mount(document)?,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            show_help: false,
        })
    }

    /// Whether a blocking notification is waiting to be dismissed
    pub fn alert_open(&self) -> bool {
        self.page.port().alert_message().is_some()
    }

    pub fn dismiss_alert(&mut self) {
        if let Some(message) = self.page.port_mut().take_alert() {
            tracing::debug!(message = %message, "Alert dismissed");
        }
    }

    // ========================
    // Comment input
    // ========================

    fn input(&self) -> String {
        self.page.port().input_value(ElementId::CommentInput)
    }

    fn set_input(&mut self, value: &str) {
        self.page
            .port_mut()
            .set_input_value(ElementId::CommentInput, value);
    }

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let mut input = self.input();
        let cursor_pos = self.cursor_position.min(input.len());
        input.insert(cursor_pos, c);
        self.cursor_position = cursor_pos + c.len_utf8();
        self.set_input(&input);
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let mut input = self.input();
        let prev_pos = input[..self.cursor_position]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        input.remove(prev_pos);
        self.cursor_position = prev_pos;
        self.set_input(&input);
    }

    /// Submit the comment input; a successful post leaves editing mode
    pub fn submit_comment(&mut self) {
        if self.page.submit_comment() {
            self.cursor_position = 0;
            self.input_mode = InputMode::Normal;
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Render
    // ========================

    fn button(&self, id: ElementId) -> ButtonView {
        let doc = self.page.port();
        ButtonView {
            label: doc.text(id).to_string(),
            disabled: doc.is_disabled(id),
        }
    }

    /// Convert to render state for UI
    pub fn to_render_state(&self) -> RenderState {
        let doc = self.page.port();
        RenderState {
            seconds: doc.text(ElementId::Seconds).to_string(),
            counter: doc.text(ElementId::Counter).to_string(),
            likes: doc.children(ElementId::Likes).to_vec(),
            comments: doc.children(ElementId::List).to_vec(),
            plus: self.button(ElementId::Plus),
            minus: self.button(ElementId::Minus),
            heart: self.button(ElementId::Heart),
            pause: self.button(ElementId::Pause),
            restart: self
                .page
                .restart_available()
                .then(|| self.button(ElementId::Restart)),
            comment_input: self.input(),
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            alert: doc.alert_message().map(str::to_string),
            show_help: self.show_help,
        }
    }
}
