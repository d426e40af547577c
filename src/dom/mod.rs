//! Page elements and the rendering port the controller draws through.
//!
//! The controller never touches a concrete element tree; it only sees a
//! [`RenderPort`]. [`Document`] is the in-memory tree the terminal front end
//! draws from.

pub mod element;
pub mod port;
pub mod document;

pub use element::ElementId;
pub use port::RenderPort;
pub use document::Document;
