//! Stable element identifiers

use std::fmt;
use std::str::FromStr;

/// Identifier of an element on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    Seconds,
    Counter,
    Plus,
    Minus,
    Heart,
    Pause,
    Restart,
    Submit,
    Likes,
    List,
    CommentInput,
}

impl ElementId {
    pub const ALL: [ElementId; 11] = [
        ElementId::Seconds,
        ElementId::Counter,
        ElementId::Plus,
        ElementId::Minus,
        ElementId::Heart,
        ElementId::Pause,
        ElementId::Restart,
        ElementId::Submit,
        ElementId::Likes,
        ElementId::List,
        ElementId::CommentInput,
    ];

    /// Controls that are disabled while paused
    pub const PAUSABLE_CONTROLS: [ElementId; 3] =
        [ElementId::Plus, ElementId::Minus, ElementId::Heart];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::Seconds => "seconds",
            ElementId::Counter => "counter",
            ElementId::Plus => "plus",
            ElementId::Minus => "minus",
            ElementId::Heart => "heart",
            ElementId::Pause => "pause",
            ElementId::Restart => "restart",
            ElementId::Submit => "submit",
            ElementId::Likes => "likes",
            ElementId::List => "list",
            ElementId::CommentInput => "comment-input",
        }
    }

    /// Whether the page cannot work without this element
    pub fn is_required(&self) -> bool {
        !matches!(self, ElementId::Restart)
    }

    pub fn required() -> impl Iterator<Item = ElementId> {
        Self::ALL.into_iter().filter(|id| id.is_required())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown element id: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_element_ids() {
        for id in ElementId::ALL {
            assert_eq!(id.as_str().parse::<ElementId>().unwrap(), id);
        }
        assert!("heart-button".parse::<ElementId>().is_err());
    }

    #[test]
    fn test_only_restart_is_optional() {
        let required: Vec<ElementId> = ElementId::required().collect();
        assert_eq!(required.len(), ElementId::ALL.len() - 1);
        assert!(!required.contains(&ElementId::Restart));
    }
}
