//! Filter pipeline stages.
//!
//! Every stage builds its output by filtering, never by removing items from
//! the collection it is iterating.

use std::collections::HashSet;
use std::fmt;

use crate::error::{EventsError, EventsResult};
use crate::event::{Category, Event, EventGroup};
use crate::timestamp::Timestamp;

/// Hive tag that matches any hive filter.
pub const ALL_HIVES: &str = "ALL";

const INVALID_DATE_RANGE: &str = "Invalid date range";

/// Keep beekeeping events matching the hive and job filters.
///
/// Both filters are optional and, when both are given, an event has to
/// pass both.
pub fn filter_beekeeping(
    events: Vec<Event>,
    hives: Option<&[String]>,
    jobs: Option<&[String]>,
) -> Vec<Event> {
    let hives: Option<HashSet<&str>> = hives.map(|h| h.iter().map(String::as_str).collect());
    let jobs: Option<HashSet<&str>> = jobs.map(|j| j.iter().map(String::as_str).collect());

    events
        .into_iter()
        .filter(|event| {
            let Some(details) = event.beekeeping() else {
                return true;
            };
            let hive_ok = hives.as_ref().is_none_or(|wanted| {
                details
                    .hives
                    .iter()
                    .any(|h| h == ALL_HIVES || wanted.contains(h.as_str()))
            });
            let job_ok = jobs
                .as_ref()
                .is_none_or(|wanted| details.jobs.iter().any(|j| wanted.contains(j.as_str())));
            hive_ok && job_ok
        })
        .collect()
}

/// Keep only monthly meetings when `is_monthly` is `Some(true)`.
///
/// Meetings without the flag count as not monthly. `Some(false)` and `None`
/// leave the list untouched.
pub fn filter_monthly(events: Vec<Event>, is_monthly: Option<bool>) -> Vec<Event> {
    if is_monthly != Some(true) {
        return events;
    }
    events
        .into_iter()
        .filter(|event| {
            event
                .meeting()
                .is_none_or(|details| details.is_monthly == Some(true))
        })
        .collect()
}

/// Apply the category specific filters to each group.
pub fn filter_by_category(
    groups: &mut [EventGroup],
    hives: Option<&[String]>,
    jobs: Option<&[String]>,
    is_monthly: Option<bool>,
) {
    for group in groups.iter_mut() {
        let events = std::mem::take(&mut group.events);
        group.events = match group.category {
            Category::Beekeeping => filter_beekeeping(events, hives, jobs),
            Category::Meeting => filter_monthly(events, is_monthly),
            Category::Collective => events,
        };
    }
}

/// Drop events on the wrong side of `now` and sort each group.
///
/// - `Some(true)`: drop events starting before `now`, soonest first.
/// - `Some(false)`: drop events starting after `now`, most recent first.
/// - `None`: keep everything, oldest first.
pub fn filter_by_direction(groups: &mut [EventGroup], future: Option<bool>, now: Timestamp) {
    for group in groups.iter_mut() {
        match future {
            Some(true) => {
                group.events.retain(|event| event.start >= now);
                group.events.sort_by(|a, b| a.start.cmp(&b.start));
            }
            Some(false) => {
                group.events.retain(|event| event.start <= now);
                group.events.sort_by(|a, b| b.start.cmp(&a.start));
            }
            None => group.events.sort_by(|a, b| a.start.cmp(&b.start)),
        }
    }
}

/// Cap each group at `limit` events.
pub fn limit_groups(groups: &mut [EventGroup], limit: Option<usize>) {
    if let Some(limit) = limit {
        for group in groups.iter_mut() {
            group.events.truncate(limit);
        }
    }
}

/// Concatenate the groups, in group order.
pub fn flatten(groups: Vec<EventGroup>) -> Vec<Event> {
    groups.into_iter().flat_map(|group| group.events).collect()
}

/// Bounds parsed from a `dateRange` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl DateRange {
    /// Parse `[start, end]`. Anything but two timestamps with
    /// `start <= end` is rejected.
    pub fn from_args(range: &[String]) -> EventsResult<Self> {
        let [start, end] = range else {
            return Err(EventsError::InvalidArgument(INVALID_DATE_RANGE.into()));
        };
        let start = parse_bound(start)?;
        let end = parse_bound(end)?;
        if start > end {
            return Err(EventsError::InvalidArgument(INVALID_DATE_RANGE.into()));
        }
        Ok(DateRange { start, end })
    }

    /// Both ends are exclusive.
    pub fn contains(&self, ts: &Timestamp) -> bool {
        self.start < *ts && *ts < self.end
    }
}

/// Range bounds must carry 1 to 6 fractional digits, unlike board due dates.
fn parse_bound(s: &str) -> EventsResult<Timestamp> {
    if !has_fraction(s) {
        return Err(invalid_bound(s, "missing fractional seconds"));
    }
    s.parse().map_err(|e| invalid_bound(s, e))
}

fn has_fraction(s: &str) -> bool {
    s.strip_suffix('Z')
        .and_then(|rest| rest.rsplit_once('.'))
        .is_some_and(|(_, digits)| {
            (1..=6).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
        })
}

fn invalid_bound(s: &str, reason: impl fmt::Display) -> EventsError {
    EventsError::InvalidArgument(format!(
        "Invalid date '{}', expected YYYY-MM-DDTHH:MM:SS.sssZ: {}",
        s, reason
    ))
}

/// Keep events strictly inside `range`. `None` keeps everything.
pub fn filter_by_date_range(events: Vec<Event>, range: Option<&[String]>) -> EventsResult<Vec<Event>> {
    let Some(range) = range else {
        return Ok(events);
    };
    let range = DateRange::from_args(range)?;
    Ok(events
        .into_iter()
        .filter(|event| range.contains(&event.start))
        .collect())
}
