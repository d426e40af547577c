//! In-memory element tree

use std::collections::HashMap;

use super::{ElementId, RenderPort};
use crate::constants::{seconds_text, PAUSE_LABEL};

/// A single element's renderable state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub text: String,
    pub disabled: bool,
    pub children: Vec<String>,
    pub value: String,
}

/// In-memory page the controller renders into
#[derive(Clone, Debug, Default)]
pub struct Document {
    elements: HashMap<ElementId, Element>,
    alert: Option<String>,
}

impl Document {
    /// Empty document with no elements
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard page. `restart` controls whether the optional restart
    /// button is present.
    pub fn page(restart: bool) -> Self {
        let mut doc = Document::new();
        for id in ElementId::ALL {
            if id == ElementId::Restart && !restart {
                continue;
            }
            doc.insert(id);
        }
        doc.set_text(ElementId::Seconds, &seconds_text(0));
        doc.set_text(ElementId::Plus, "+");
        doc.set_text(ElementId::Minus, "-");
        doc.set_text(ElementId::Heart, "♥");
        doc.set_text(ElementId::Pause, PAUSE_LABEL);
        doc.set_text(ElementId::Restart, "Restart");
        doc.set_text(ElementId::Submit, "Submit");
        doc
    }

    /// Add an empty element, replacing any existing one
    pub fn insert(&mut self, id: ElementId) {
        self.elements.insert(id, Element::default());
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(&id)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Text content, empty for a missing element
    pub fn text(&self, id: ElementId) -> &str {
        self.element(id).map(|e| e.text.as_str()).unwrap_or("")
    }

    /// Child text blocks, empty for a missing element
    pub fn children(&self, id: ElementId) -> &[String] {
        self.element(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    pub fn is_disabled(&self, id: ElementId) -> bool {
        self.element(id).map(|e| e.disabled).unwrap_or(false)
    }

    /// Pending notification, if any
    pub fn alert_message(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Dismiss the pending notification
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }
}

impl RenderPort for Document {
    fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    fn set_text(&mut self, id: ElementId, value: &str) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.text = value.to_string();
        }
    }

    fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.disabled = disabled;
        }
    }

    fn append_child(&mut self, container: ElementId, text: &str) {
        if let Some(el) = self.elements.get_mut(&container) {
            el.children.push(text.to_string());
        }
    }

    fn clear_children(&mut self, container: ElementId) {
        if let Some(el) = self.elements.get_mut(&container) {
            el.children.clear();
        }
    }

    fn input_value(&self, id: ElementId) -> String {
        self.element(id).map(|e| e.value.clone()).unwrap_or_default()
    }

    fn set_input_value(&mut self, id: ElementId, value: &str) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.value = value.to_string();
        }
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_every_element() {
        let doc = Document::page(true);
        for id in ElementId::ALL {
            assert!(doc.contains(id), "missing {}", id);
        }
        assert_eq!(doc.text(ElementId::Seconds), "Seconds: 0");
        assert_eq!(doc.text(ElementId::Pause), "Pause");
    }

    #[test]
    fn test_page_without_restart() {
        let doc = Document::page(false);
        assert!(!doc.contains(ElementId::Restart));
        assert!(doc.contains(ElementId::Pause));
    }

    #[test]
    fn test_missing_element_is_ignored() {
        let mut doc = Document::page(false);
        doc.set_text(ElementId::Restart, "Restart");
        doc.append_child(ElementId::Restart, "x");
        assert_eq!(doc.text(ElementId::Restart), "");
        assert!(doc.children(ElementId::Restart).is_empty());
    }

    #[test]
    fn test_children_and_alert() {
        let mut doc = Document::page(true);
        doc.append_child(ElementId::List, "one");
        doc.append_child(ElementId::List, "two");
        assert_eq!(doc.children(ElementId::List), ["one", "two"]);
        doc.clear_children(ElementId::List);
        assert!(doc.children(ElementId::List).is_empty());

        doc.alert("careful");
        assert_eq!(doc.alert_message(), Some("careful"));
        assert_eq!(doc.take_alert().as_deref(), Some("careful"));
        assert!(doc.alert_message().is_none());
    }
}
