//! Page controller - owns the game state and renders through a port

use std::fmt;

use crate::constants::{
    seconds_text, EMPTY_COMMENT_ALERT, PAUSED_COMMENT, PAUSE_LABEL, RESTARTED_COMMENT,
    RESUMED_COMMENT, RESUME_LABEL,
};
use crate::dom::{ElementId, RenderPort};
use crate::models::{CommentLog, Counter, LikeEntry, LikeTracker, PauseState, TimerState};

/// Startup failure: the host page is missing something the controller needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    MissingElement(ElementId),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::MissingElement(id) => write!(f, "Required element '{}' is missing", id),
        }
    }
}

impl std::error::Error for MountError {}

/// Game state plus the port it is rendered into.
///
/// Every operation is total: it either applies and re-renders, or is a
/// no-op (paused, restart not bound).
pub struct PageController<P: RenderPort> {
    timer: TimerState,
    counter: Counter,
    likes: LikeTracker,
    pause: PauseState,
    comments: CommentLog,
    restart_bound: bool,
    port: P,
}

impl<P: RenderPort> PageController<P> {
    /// Bind to a port, checking required elements and doing the initial render
    pub fn mount(port: P) -> Result<Self, MountError> {
        if let Some(id) = ElementId::required().find(|id| !port.contains(*id)) {
            return Err(MountError::MissingElement(id));
        }

        let restart_bound = port.contains(ElementId::Restart);
        let mut controller = PageController {
            timer: TimerState::default(),
            counter: Counter::default(),
            likes: LikeTracker::default(),
            pause: PauseState::default(),
            comments: CommentLog::default(),
            restart_bound,
            port,
        };
        controller.update_counter();

        tracing::info!(restart_bound, "Page controller mounted");
        Ok(controller)
    }

    // ========================
    // Accessors
    // ========================

    pub fn seconds(&self) -> u64 {
        self.timer.seconds_passed
    }

    pub fn count(&self) -> i64 {
        self.counter.count
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused
    }

    pub fn likes(&self) -> &[LikeEntry] {
        self.likes.entries()
    }

    pub fn comments(&self) -> &[String] {
        self.comments.entries()
    }

    pub fn restart_available(&self) -> bool {
        self.restart_bound
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    // ========================
    // Operations
    // ========================

    /// One timer period elapsed
    pub fn tick(&mut self) {
        if self.pause.is_paused {
            return;
        }
        let seconds = self.timer.advance();
        self.port.set_text(ElementId::Seconds, &seconds_text(seconds));
    }

    pub fn increment(&mut self) {
        if self.ignored_while_paused("increment") {
            return;
        }
        let count = self.counter.increment();
        self.update_counter();
        self.leave_comment(format!("Count increased to {}", count));
        tracing::debug!(count, "Counter incremented");
    }

    pub fn decrement(&mut self) {
        if self.ignored_while_paused("decrement") {
            return;
        }
        let count = self.counter.decrement();
        self.update_counter();
        self.leave_comment(format!("Count decreased to {}", count));
        tracing::debug!(count, "Counter decremented");
    }

    /// Like the current counter value
    pub fn like(&mut self) {
        if self.ignored_while_paused("like") {
            return;
        }
        let key = self.counter.key();
        let likes = self.likes.like(&key);
        self.update_likes_display();
        self.leave_comment(format!("Number {} now has {} like(s)!", key, likes));
        tracing::debug!(key = %key, likes, "Value liked");
    }

    pub fn toggle_pause(&mut self) {
        let paused = self.pause.toggle();
        self.port.set_text(
            ElementId::Pause,
            if paused { RESUME_LABEL } else { PAUSE_LABEL },
        );
        self.set_controls_disabled(paused);
        self.leave_comment(if paused { PAUSED_COMMENT } else { RESUMED_COMMENT });
        tracing::info!(paused, "Pause toggled");
    }

    /// Reset timer, counter and pause. Likes and comments are kept.
    ///
    /// Returns false when the page has no restart control.
    pub fn restart(&mut self) -> bool {
        if !self.restart_bound {
            tracing::debug!("Restart requested but no restart control is bound");
            return false;
        }

        self.timer.reset();
        self.counter.reset();
        self.pause.is_paused = false;
        self.port.set_text(ElementId::Pause, PAUSE_LABEL);
        self.set_controls_disabled(false);
        self.update_counter();
        self.port.set_text(ElementId::Seconds, &seconds_text(0));
        self.leave_comment(RESTARTED_COMMENT);
        tracing::info!("Game restarted");
        true
    }

    /// Post the comment input's trimmed value. Returns false when it was blank.
    pub fn submit_comment(&mut self) -> bool {
        let raw = self.port.input_value(ElementId::CommentInput);
        let text = raw.trim();
        if text.is_empty() {
            tracing::warn!("Rejected empty comment");
            self.port.alert(EMPTY_COMMENT_ALERT);
            return false;
        }

        self.leave_comment(text);
        self.port.set_input_value(ElementId::CommentInput, "");
        tracing::debug!(len = text.len(), "Comment posted");
        true
    }

    // ========================
    // Rendering helpers
    // ========================

    fn ignored_while_paused(&self, op: &str) -> bool {
        if self.pause.is_paused {
            tracing::debug!(op, "Ignored while paused");
        }
        self.pause.is_paused
    }

    fn update_counter(&mut self) {
        self.port
            .set_text(ElementId::Counter, &self.counter.count.to_string());
    }

    fn update_likes_display(&mut self) {
        self.port.clear_children(ElementId::Likes);
        for entry in self.likes.entries() {
            self.port.append_child(ElementId::Likes, &entry.display());
        }
    }

    fn set_controls_disabled(&mut self, disabled: bool) {
        for id in ElementId::PAUSABLE_CONTROLS {
            self.port.set_disabled(id, disabled);
        }
    }

    fn leave_comment(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.port.append_child(ElementId::List, &text);
        self.comments.push(text);
    }
}
