//! Trello REST client.

use std::time::Duration;

use hive_events_core::config::{Credentials, Settings};
use hive_events_core::{BoardSource, Card, EventsError, EventsResult};
use reqwest::header::ACCEPT;
use url::Url;

use crate::types::TrelloCard;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Lists board cards from the Trello API.
pub struct TrelloClient {
    http: reqwest::Client,
    api_base: Url,
    credentials: Credentials,
}

impl TrelloClient {
    pub fn new(settings: &Settings) -> EventsResult<Self> {
        let api_base = Url::parse(&settings.api_base).map_err(|e| {
            EventsError::Config(format!("Invalid API base '{}': {}", settings.api_base, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EventsError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(TrelloClient {
            http,
            api_base,
            credentials: settings.credentials.clone(),
        })
    }

    fn cards_url(&self, board_id: &str) -> EventsResult<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                EventsError::Config(format!("API base '{}' cannot have a path", self.api_base))
            })?
            .pop_if_empty()
            .extend(["1", "boards", board_id, "cards"]);
        Ok(url)
    }

    /// Fetch every card on a board, dated or not.
    pub async fn board_cards(&self, board_id: &str) -> EventsResult<Vec<TrelloCard>> {
        let url = self.cards_url(board_id)?;

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .query(&[
                ("key", self.credentials.key.as_str()),
                ("token", self.credentials.token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EventsError::ExternalService(format!(
                        "Trello request timed out after {}s",
                        REQUEST_TIMEOUT.as_secs()
                    ))
                } else {
                    EventsError::ExternalService(format!("Trello request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Trello returned {} for board {}", status, board_id);
            return Err(EventsError::ExternalService(format!(
                "Trello API error: {} {}",
                status,
                body.trim()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| EventsError::ExternalService(format!("Failed to parse board cards: {}", e)))
    }
}

impl BoardSource for TrelloClient {
    async fn fetch_cards(&self, board_id: &str) -> EventsResult<Vec<Card>> {
        let cards = self.board_cards(board_id).await?;
        let total = cards.len();

        let dated: Vec<Card> = cards.into_iter().filter_map(TrelloCard::into_card).collect();
        log::debug!(
            "Board {}: {} cards, {} with a due date",
            board_id,
            total,
            dated.len()
        );

        Ok(dated)
    }
}
