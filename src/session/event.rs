//! Events the presentation layer sends to a session.

use serde::{Deserialize, Serialize};

use crate::core::{ColorId, ModeConfig};

/// Closed set of player actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Begin a game in the given mode.
    Start { mode: ModeConfig },
    /// Highlight a candidate. May be repeated before Submit.
    Select { id: ColorId },
    /// Judge the highlighted candidate.
    Submit,
    /// Give up on the current round.
    Skip,
    /// Move past an answered round.
    Next,
    /// Back to the main menu.
    Reset,
}

impl Event {
    /// Stable name for logs and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Event::Start { .. } => "start",
            Event::Select { .. } => "select",
            Event::Submit => "submit",
            Event::Skip => "skip",
            Event::Next => "next",
            Event::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Event::Start { mode: ModeConfig::normal() }.name(), "start");
        assert_eq!(Event::Select { id: ColorId::new(0) }.name(), "select");
        assert_eq!(Event::Reset.name(), "reset");
    }

    #[test]
    fn test_serde() {
        let event = Event::Select { id: ColorId::new(2) };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"Select":{"id":2}}"#);

        let back: Event = serde_json::from_str(r#""Submit""#).unwrap();
        assert_eq!(back, Event::Submit);
    }
}
