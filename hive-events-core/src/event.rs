//! Unified event model.
//!
//! Every board card becomes an `Event`. The category-specific fields live
//! in `EventDetails`, which serializes flat next to the base fields with a
//! `type` tag, so a beekeeping event looks like:
//!
//! ```json
//! {"eventId":"abc","start":"2023-06-15T10:00:00.000Z","type":"BEEKEEPING",
//!  "jobs":["EQUIPMENT"],"hives":["ROSE"],"roles":[]}
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EventsError;
use crate::timestamp::Timestamp;

/// Which board an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Meeting,
    Beekeeping,
    Collective,
}

impl Category {
    /// All categories, in the order they are queried when no type is given.
    pub const ALL: [Category; 3] = [Category::Meeting, Category::Beekeeping, Category::Collective];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Meeting => "MEETING",
            Category::Beekeeping => "BEEKEEPING",
            Category::Collective => "COLLECTIVE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EventsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| EventsError::InvalidArgument(format!("Invalid type: {}", s)))
    }
}

/// Meeting location, taken from the `ONLINE` / `IN-PERSON` labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "ONLINE")]
    Online,
    #[serde(rename = "IN-PERSON")]
    InPerson,
}

/// An event (board-neutral)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: String,
    pub start: Timestamp,
    #[serde(flatten)]
    pub details: EventDetails,
}

impl Event {
    pub fn category(&self) -> Category {
        match self.details {
            EventDetails::Meeting(_) => Category::Meeting,
            EventDetails::Beekeeping(_) => Category::Beekeeping,
            EventDetails::Collective => Category::Collective,
        }
    }

    pub fn beekeeping(&self) -> Option<&BeekeepingDetails> {
        match &self.details {
            EventDetails::Beekeeping(details) => Some(details),
            _ => None,
        }
    }

    pub fn meeting(&self) -> Option<&MeetingDetails> {
        match &self.details {
            EventDetails::Meeting(details) => Some(details),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventDetails {
    Meeting(MeetingDetails),
    Beekeeping(BeekeepingDetails),
    Collective,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetails {
    /// Only ever `Some(true)`; absent when no MONTHLY label is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_monthly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeekeepingDetails {
    #[serde(default)]
    pub jobs: Vec<String>,
    #[serde(default)]
    pub hives: Vec<String>,
    /// At most one object, parsed from a leading `{...}` in the card description.
    #[serde(default)]
    pub roles: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Events from a single board, kept together while the per-category
/// filters run.
#[derive(Debug, Clone)]
pub struct EventGroup {
    pub category: Category,
    pub events: Vec<Event>,
}

impl EventGroup {
    pub fn new(category: Category, events: Vec<Event>) -> Self {
        EventGroup { category, events }
    }
}
