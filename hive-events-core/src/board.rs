//! Board sources.
//!
//! The orchestrator only needs "give me the dated cards of board X"; the
//! Trello client implements that, tests use in-memory boards.

use std::future::Future;

use serde::Deserialize;

use crate::card::Card;
use crate::error::EventsResult;
use crate::event::Category;

/// Something that can list the dated cards of a board.
pub trait BoardSource {
    /// Fetch every card with a due date on `board_id`.
    fn fetch_cards(&self, board_id: &str) -> impl Future<Output = EventsResult<Vec<Card>>> + Send;
}

/// Board identifier per category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardIds {
    pub meeting: String,
    pub beekeeping: String,
    pub collective: String,
}

impl BoardIds {
    pub fn board_for(&self, category: Category) -> &str {
        match category {
            Category::Meeting => &self.meeting,
            Category::Beekeeping => &self.beekeeping,
            Category::Collective => &self.collective,
        }
    }
}

impl<T: BoardSource + Sync> BoardSource for &T {
    fn fetch_cards(&self, board_id: &str) -> impl Future<Output = EventsResult<Vec<Card>>> + Send {
        (**self).fetch_cards(board_id)
    }
}
