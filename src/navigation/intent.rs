//! Navigation intents and change notifications

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaginationError;

/// A user navigation request, before it is resolved to a page index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "intent", content = "page", rename_all = "camelCase")]
pub enum NavigationIntent {
    First,
    Previous,
    Next,
    Last,
    /// Jump straight to a page index
    SelectPage(usize),
}

impl NavigationIntent {
    /// Control identifier used by the host for this intent's button
    ///
    /// `SelectPage` has no dedicated button and returns `None`.
    pub fn control_id(&self) -> Option<&'static str> {
        match self {
            NavigationIntent::First => Some("first"),
            NavigationIntent::Previous => Some("prev"),
            NavigationIntent::Next => Some("next"),
            NavigationIntent::Last => Some("last"),
            NavigationIntent::SelectPage(_) => None,
        }
    }
}

impl fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationIntent::SelectPage(page) => write!(f, "select({})", page),
            other => f.write_str(other.control_id().unwrap_or_default()),
        }
    }
}

impl FromStr for NavigationIntent {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(NavigationIntent::First),
            "prev" | "previous" => Ok(NavigationIntent::Previous),
            "next" => Ok(NavigationIntent::Next),
            "last" => Ok(NavigationIntent::Last),
            other => Err(PaginationError::invalid(format!(
                "unknown navigation control '{}'",
                other
            ))),
        }
    }
}

/// Notification the host dispatches once a new current page is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageChanged {
    pub page: usize,
}

impl PageChanged {
    pub fn new(page: usize) -> Self {
        Self { page }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_control_ids() {
        assert_eq!("first".parse::<NavigationIntent>(), Ok(NavigationIntent::First));
        assert_eq!("prev".parse::<NavigationIntent>(), Ok(NavigationIntent::Previous));
        assert_eq!("previous".parse::<NavigationIntent>(), Ok(NavigationIntent::Previous));
        assert_eq!("next".parse::<NavigationIntent>(), Ok(NavigationIntent::Next));
        assert_eq!("last".parse::<NavigationIntent>(), Ok(NavigationIntent::Last));
        assert!("sideways".parse::<NavigationIntent>().is_err());
    }

    #[test]
    fn test_control_id_round_trip() {
        for intent in [
            NavigationIntent::First,
            NavigationIntent::Previous,
            NavigationIntent::Next,
            NavigationIntent::Last,
        ] {
            let id = intent.control_id().unwrap();
            assert_eq!(id.parse::<NavigationIntent>(), Ok(intent));
        }
        assert_eq!(NavigationIntent::SelectPage(3).control_id(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(NavigationIntent::Previous.to_string(), "prev");
        assert_eq!(NavigationIntent::SelectPage(4).to_string(), "select(4)");
    }

    #[test]
    fn test_page_changed_json() {
        let json = serde_json::to_string(&PageChanged::new(7)).unwrap();
        assert_eq!(json, r#"{"page":7}"#);
    }

    #[test]
    fn test_intent_json() {
        let intent: NavigationIntent =
            serde_json::from_str(r#"{"intent":"selectPage","page":2}"#).unwrap();
        assert_eq!(intent, NavigationIntent::SelectPage(2));

        let intent: NavigationIntent = serde_json::from_str(r#"{"intent":"next"}"#).unwrap();
        assert_eq!(intent, NavigationIntent::Next);
    }
}
