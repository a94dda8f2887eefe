//! Core types for hive-events.
//!
//! This crate turns board cards into events and runs the events query:
//! - `event` / `card` for the data model
//! - `mapper` for card → event conversion
//! - `filter` for the filter pipeline stages
//! - `query` for query arguments and the `EventService` orchestrator
//! - `board` for the `BoardSource` seam implemented by board clients

pub mod board;
pub mod card;
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod mapper;
pub mod query;
pub mod timestamp;

pub use board::{BoardIds, BoardSource};
pub use card::Card;
pub use error::{EventsError, EventsResult};
pub use event::*;
pub use query::{EventQuery, EventService, ResolverEvent};
pub use timestamp::Timestamp;
