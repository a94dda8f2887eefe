//! Events query: arguments and the request pipeline.

use serde::Deserialize;

use crate::board::{BoardIds, BoardSource};
use crate::error::EventsResult;
use crate::event::{Category, Event, EventGroup};
use crate::filter;
use crate::mapper::map_cards;
use crate::timestamp::Timestamp;

/// Arguments of the `events` query. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    /// Category names; validated when the query runs so an unknown name is
    /// reported as an invalid argument rather than a decode failure.
    #[serde(rename = "type")]
    pub types: Option<Vec<String>>,
    /// Maximum events per category, applied before flattening.
    pub limit: Option<usize>,
    /// `true`: upcoming only, `false`: past only, absent: everything.
    pub future: Option<bool>,
    /// `[start, end]`, both exclusive.
    pub date_range: Option<Vec<String>>,
    pub is_monthly: Option<bool>,
    pub jobs: Option<Vec<String>>,
    pub hives: Option<Vec<String>>,
}

impl EventQuery {
    /// Categories to fetch, in request order. All of them when no type is
    /// given.
    pub fn categories(&self) -> EventsResult<Vec<Category>> {
        match &self.types {
            Some(types) => types.iter().map(|t| t.parse()).collect(),
            None => Ok(Category::ALL.to_vec()),
        }
    }
}

/// The resolver event wrapping the query arguments.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResolverEvent {
    #[serde(default)]
    pub arguments: Option<EventQuery>,
}

/// Answers events queries from a board source.
pub struct EventService<B> {
    source: B,
    boards: BoardIds,
}

impl<B: BoardSource> EventService<B> {
    pub fn new(source: B, boards: BoardIds) -> Self {
        EventService { source, boards }
    }

    /// Handle a resolver event. No `arguments` means no events.
    pub async fn handle(&self, event: &ResolverEvent) -> EventsResult<Vec<Event>> {
        match &event.arguments {
            Some(query) => self.query(query).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn query(&self, query: &EventQuery) -> EventsResult<Vec<Event>> {
        self.query_at(query, Timestamp::now()).await
    }

    /// Run the pipeline with `now` as the reference instant for `future`.
    pub async fn query_at(&self, query: &EventQuery, now: Timestamp) -> EventsResult<Vec<Event>> {
        let categories = query.categories()?;

        let mut groups = Vec::with_capacity(categories.len());
        for category in categories {
            let board_id = self.boards.board_for(category);
            let cards = self.source.fetch_cards(board_id).await?;
            log::debug!("Fetched {} dated cards for {}", cards.len(), category);
            groups.push(EventGroup::new(category, map_cards(category, cards)));
        }

        filter::filter_by_category(
            &mut groups,
            query.hives.as_deref(),
            query.jobs.as_deref(),
            query.is_monthly,
        );
        filter::filter_by_direction(&mut groups, query.future, now);
        filter::limit_groups(&mut groups, query.limit);

        let events = filter::flatten(groups);
        let events = filter::filter_by_date_range(events, query.date_range.as_deref())?;

        log::debug!("Returning {} events", events.len());
        Ok(events)
    }
}
