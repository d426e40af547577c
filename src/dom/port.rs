//! Rendering port - the capability set the page controller renders through

use super::ElementId;

/// Element operations the page controller needs from its host.
///
/// Implementations treat every call as an immediate, synchronous update.
/// Calls naming an element the host does not have are ignored.
pub trait RenderPort {
    /// Whether the host has this element
    fn contains(&self, id: ElementId) -> bool;

    /// Replace the element's text content
    fn set_text(&mut self, id: ElementId, value: &str);

    fn set_disabled(&mut self, id: ElementId, disabled: bool);

    /// Append a text block to a container
    fn append_child(&mut self, container: ElementId, text: &str);

    fn clear_children(&mut self, container: ElementId);

    /// Current value of a text input
    fn input_value(&self, id: ElementId) -> String;

    fn set_input_value(&mut self, id: ElementId, value: &str);

    /// Show a blocking notification to the user
    fn alert(&mut self, message: &str);
}
