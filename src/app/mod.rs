//! App layer - page controller and event processing
//!
//! The App actor receives ticks and UI events, drives the page controller,
//! and emits render state.

pub mod controller;
pub mod state;
pub mod ticker;
pub mod actor;

pub use controller::{MountError, PageController};
pub use state::AppState;
pub use ticker::Ticker;
pub use actor::AppActor;
