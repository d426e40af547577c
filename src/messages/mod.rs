//! Message types flowing between the UI loop, the ticker and the app actor.

pub mod ui_events;
pub mod render;

pub use ui_events::UiEvent;
pub use render::RenderState;
