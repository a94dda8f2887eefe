//! Card → Event mapping.

use serde_json::{Map, Value};

use crate::card::Card;
use crate::event::{BeekeepingDetails, Category, Event, EventDetails, Location, MeetingDetails};

const JOB_PREFIX: &str = "job:";
const HIVE_PREFIX: &str = "hive:";
const MONTHLY_PREFIX: &str = "MONTHLY";
const ONLINE_LABEL: &str = "ONLINE";
const IN_PERSON_LABEL: &str = "IN-PERSON";

/// Convert a board's cards into events of the given category.
///
/// Beekeeping cards without any `job:` label are dropped.
pub fn map_cards(category: Category, cards: Vec<Card>) -> Vec<Event> {
    cards
        .into_iter()
        .filter_map(|card| map_card(category, card))
        .collect()
}

fn map_card(category: Category, card: Card) -> Option<Event> {
    let details = match category {
        Category::Beekeeping => {
            let details = beekeeping_details(&card);
            if details.jobs.is_empty() {
                log::debug!("Skipping beekeeping card {} without jobs", card.short_link);
                return None;
            }
            EventDetails::Beekeeping(details)
        }
        Category::Meeting => EventDetails::Meeting(meeting_details(&card.labels)),
        Category::Collective => EventDetails::Collective,
    };

    Some(Event {
        event_id: card.short_link,
        start: card.due,
        details,
    })
}

fn beekeeping_details(card: &Card) -> BeekeepingDetails {
    let mut details = BeekeepingDetails::default();

    if let Some(roles) = parse_roles(&card.description) {
        details.roles.push(roles);
    }

    for label in &card.labels {
        if let Some(job) = label.strip_prefix(JOB_PREFIX) {
            details.jobs.push(job.to_string());
        } else if let Some(hive) = label.strip_prefix(HIVE_PREFIX) {
            details.hives.push(hive.to_string());
        }
    }

    details
}

fn meeting_details(labels: &[String]) -> MeetingDetails {
    let mut details = MeetingDetails::default();

    for label in labels {
        if label.starts_with(MONTHLY_PREFIX) {
            details.is_monthly = Some(true);
        }
        match label.as_str() {
            ONLINE_LABEL => details.location = Some(Location::Online),
            IN_PERSON_LABEL => details.location = Some(Location::InPerson),
            _ => {}
        }
    }

    details
}

/// Parse a leading `{...}` block of a description as a JSON object.
///
/// Only the text before the first `}` is considered and a closing brace is
/// always appended, so nested objects never parse and an unterminated object
/// is closed. Anything that isn't a valid object yields `None`.
pub fn parse_roles(description: &str) -> Option<Map<String, Value>> {
    if !description.starts_with('{') {
        return None;
    }
    let body = match description.find('}') {
        Some(end) => &description[..end],
        None => description,
    };
    serde_json::from_str(&format!("{}}}", body)).ok()
}
