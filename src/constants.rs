//! Application constants
//!
//! Centralized location for display strings and configuration defaults.

/// Default timer period in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Default log file name (written to the working directory)
pub const DEFAULT_LOG_FILE: &str = "clicker.log";

/// Config directory under the user's home
pub const CONFIG_DIR_NAME: &str = ".clicker";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Pause button label while running
pub const PAUSE_LABEL: &str = "Pause";

/// Pause button label while paused
pub const RESUME_LABEL: &str = "Resume";

pub const PAUSED_COMMENT: &str = "⏸️ Game paused.";
pub const RESUMED_COMMENT: &str = "▶️ Game resumed.";
pub const RESTARTED_COMMENT: &str = "🔄 Game restarted!";

/// Alert shown when submitting a blank comment
pub const EMPTY_COMMENT_ALERT: &str = "Please enter a comment before submitting.";

/// Application name
pub const APP_NAME: &str = "Clicker TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn seconds_text(seconds: u64) -> String {
    format!("Seconds: {}", seconds)
}
