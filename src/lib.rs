//! # Clicker TUI
//!
//! A terminal rendition of a small clicker page.
//!
//! ## Features
//! - Seconds timer, gated by pause
//! - Counter with +/- buttons
//! - Likes per counter value
//! - Pause/resume and restart
//! - Comment feed
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (page controller over an in-memory document)
//! - Ticker (Tokio interval task)

pub mod models;
pub mod config;
pub mod constants;
pub mod dom;
pub mod ui;
pub mod messages;
pub mod app;

// Re-export commonly used types
pub use models::{CommentLog, Counter, LikeEntry, LikeTracker, PauseState, TimerState};
pub use config::Config;
pub use dom::{Document, ElementId, RenderPort};
pub use messages::{UiEvent, RenderState};
pub use app::{AppActor, AppState, MountError, PageController, Ticker};
