//! Trello wire types.

use hive_events_core::{Card, Timestamp};
use serde::Deserialize;

/// A card as returned by `GET /1/boards/{id}/cards`.
///
/// Only the fields the mapper needs are decoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloCard {
    pub short_link: String,
    #[serde(default)]
    pub due: Option<Timestamp>,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub labels: Vec<TrelloLabel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrelloLabel {
    #[serde(default)]
    pub name: String,
}

impl TrelloCard {
    /// Convert into a core card. Cards without a due date aren't events.
    pub fn into_card(self) -> Option<Card> {
        let due = self.due?;
        Some(Card {
            short_link: self.short_link,
            due,
            description: self.desc,
            labels: self.labels.into_iter().map(|label| label.name).collect(),
        })
    }
}
