//! Event type labels and shorthand resolution

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three labels the tool ever writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "Policy-Announcement")]
    PolicyAnnouncement,
    #[serde(rename = "Leader-Activity")]
    LeaderActivity,
    #[serde(rename = "Emergency-Event")]
    EmergencyEvent,
}

/// Text that is neither a canonical label nor a shorthand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event type '{0}'")]
pub struct ParseEventTypeError(pub String);

struct TypeKeywords {
    event_type: EventType,
    keywords: &'static [&'static str],
}

// Checked in order; the first entry with any hit wins.
const EVENT_KEYWORD_MAP: &[TypeKeywords] = &[
    TypeKeywords {
        event_type: EventType::PolicyAnnouncement,
        keywords: &["PA", "POLICY"],
    },
    TypeKeywords {
        event_type: EventType::LeaderActivity,
        keywords: &["LA", "LEADER"],
    },
    TypeKeywords {
        event_type: EventType::EmergencyEvent,
        keywords: &["EE", "EMERGENCY"],
    },
];

impl EventType {
    pub const ALL: [EventType; 3] = [
        EventType::PolicyAnnouncement,
        EventType::LeaderActivity,
        EventType::EmergencyEvent,
    ];

    /// Canonical label as stored in the collection file
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::PolicyAnnouncement => "Policy-Announcement",
            EventType::LeaderActivity => "Leader-Activity",
            EventType::EmergencyEvent => "Emergency-Event",
        }
    }

    pub fn shorthand(self) -> &'static str {
        match self {
            EventType::PolicyAnnouncement => "PA",
            EventType::LeaderActivity => "LA",
            EventType::EmergencyEvent => "EE",
        }
    }

    /// Map free text typed by the operator to a label.
    ///
    /// Matching is a case-insensitive substring test, so `pa`, `Policy`
    /// and `Policy-Announcement` all resolve to the same label.
    pub fn resolve(token: &str) -> Option<Self> {
        let upper = token.to_uppercase();
        EVENT_KEYWORD_MAP
            .iter()
            .find(|entry| entry.keywords.iter().any(|kw| upper.contains(kw)))
            .map(|entry| entry.event_type)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: the canonical label or its shorthand, ignoring ASCII case.
/// Use [`EventType::resolve`] for the forgiving match applied to typed input.
impl FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        EventType::ALL
            .into_iter()
            .find(|t| s.eq_ignore_ascii_case(t.as_str()) || s.eq_ignore_ascii_case(t.shorthand()))
            .ok_or_else(|| ParseEventTypeError(s.to_string()))
    }
}
