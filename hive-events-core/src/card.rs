//! Board cards, as handed to the mapper.

use crate::timestamp::Timestamp;

/// A card that has a due date.
///
/// Board clients drop cards without one before building these, so the
/// mapper never has to think about undated cards.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Short identifier, becomes the event id.
    pub short_link: String,
    pub due: Timestamp,
    pub description: String,
    /// Label names in board order.
    pub labels: Vec<String>,
}

impl Card {
    pub fn new(short_link: impl Into<String>, due: Timestamp) -> Self {
        Card {
            short_link: short_link.into(),
            due,
            description: String::new(),
            labels: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }
}
