use std::sync::Arc;

use hive_events_core::config::Settings;
use hive_events_core::{EventService, EventsResult};
use hive_events_trello::TrelloClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // Read-only after startup; every request fetches fresh cards
    events: Arc<EventService<TrelloClient>>,
}

impl AppState {
    pub fn new(settings: &Settings) -> EventsResult<Self> {
        let client = TrelloClient::new(settings)?;
        Ok(AppState {
            events: Arc::new(EventService::new(client, settings.boards.clone())),
        })
    }

    pub fn events(&self) -> &EventService<TrelloClient> {
        &self.events
    }
}
