//! Trello board client for hive-events.
//!
//! Lists the cards of a board through the Trello REST API and hands the
//! dated ones to the core as `Card`s.

mod client;
mod types;

pub use client::TrelloClient;
pub use types::{TrelloCard, TrelloLabel};
