//! End-to-end tests for the events query against in-memory boards.

use std::collections::HashMap;
use std::sync::Mutex;

use hive_events_core::{
    BoardIds, BoardSource, Card, Category, Event, EventQuery, EventService, EventsError,
    EventsResult, ResolverEvent, Timestamp,
};

const MEETING_BOARD: &str = "board-meeting";
const BEEKEEPING_BOARD: &str = "board-beekeeping";
const COLLECTIVE_BOARD: &str = "board-collective";

struct FixtureBoards {
    boards: HashMap<String, Vec<Card>>,
    failing: Option<String>,
    fetched: Mutex<Vec<String>>,
}

impl FixtureBoards {
    fn new() -> Self {
        let mut boards = HashMap::new();
        boards.insert(MEETING_BOARD.to_string(), meeting_board());
        boards.insert(BEEKEEPING_BOARD.to_string(), beekeeping_board());
        boards.insert(COLLECTIVE_BOARD.to_string(), collective_board());
        FixtureBoards {
            boards,
            failing: None,
            fetched: Mutex::new(Vec::new()),
        }
    }

    fn failing_on(board_id: &str) -> Self {
        FixtureBoards {
            failing: Some(board_id.to_string()),
            ..Self::new()
        }
    }

    fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl BoardSource for FixtureBoards {
    async fn fetch_cards(&self, board_id: &str) -> EventsResult<Vec<Card>> {
        self.fetched.lock().unwrap().push(board_id.to_string());
        if self.failing.as_deref() == Some(board_id) {
            return Err(EventsError::ExternalService("503 Service Unavailable".into()));
        }
        Ok(self.boards.get(board_id).cloned().unwrap_or_default())
    }
}

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

fn meeting_board() -> Vec<Card> {
    vec![
        Card::new("mtg1", ts("2023-06-10T18:00:00.000Z")).with_labels(["MONTHLY", "ONLINE"]),
        Card::new("mtg2", ts("2023-06-24T18:00:00.000Z")).with_labels(["IN-PERSON"]),
        Card::new("mtg3", ts("2099-02-01T18:00:00.000Z")).with_labels(["MONTHLY check-in"]),
    ]
}

fn beekeeping_board() -> Vec<Card> {
    vec![
        Card::new("bk1", ts("2023-06-15T09:00:00.000Z"))
            .with_description(r#"{"lead": "Sam"} Bring the spare frames."#)
            .with_labels(["job:EQUIPMENT", "hive:ROSE"]),
        Card::new("bk2", ts("2023-06-05T09:00:00.000Z"))
            .with_labels(["job:EQUIPMENT", "hive:ALL"]),
        Card::new("bk3", ts("2023-06-20T09:00:00.000Z")).with_labels(["job:FEEDING", "hive:LILY"]),
        // No job label, never becomes an event.
        Card::new("bk4", ts("2023-06-25T09:00:00.000Z")).with_labels(["hive:ROSE"]),
        Card::new("bk5", ts("2099-05-01T09:00:00.000Z")).with_labels(["job:EQUIPMENT", "hive:ROSE"]),
    ]
}

fn collective_board() -> Vec<Card> {
    vec![Card::new("col1", ts("2023-07-01T12:00:00.000Z"))]
}

fn board_ids() -> BoardIds {
    BoardIds {
        meeting: MEETING_BOARD.to_string(),
        beekeeping: BEEKEEPING_BOARD.to_string(),
        collective: COLLECTIVE_BOARD.to_string(),
    }
}

fn service(boards: FixtureBoards) -> EventService<FixtureBoards> {
    EventService::new(boards, board_ids())
}

fn borrowed_service(boards: &FixtureBoards) -> EventService<&FixtureBoards> {
    EventService::new(boards, board_ids())
}

fn now() -> Timestamp {
    ts("2024-01-01T00:00:00.000Z")
}

fn types(names: &[&str]) -> Option<Vec<String>> {
    Some(names.iter().map(|s| s.to_string()).collect())
}

fn count(events: &[Event], category: Category) -> usize {
    events.iter().filter(|e| e.category() == category).count()
}

async fn run(query: EventQuery) -> EventsResult<Vec<Event>> {
    service(FixtureBoards::new()).query_at(&query, now()).await
}

#[tokio::test]
async fn test_no_arguments_returns_every_qualifying_event() {
    let events = run(EventQuery::default()).await.unwrap();

    assert_eq!(events.len(), 8);
    assert_eq!(count(&events, Category::Meeting), 3);
    assert_eq!(count(&events, Category::Beekeeping), 4);
    assert_eq!(count(&events, Category::Collective), 1);
    assert!(events
        .iter()
        .filter_map(Event::beekeeping)
        .all(|b| !b.jobs.is_empty()));
}

#[tokio::test]
async fn test_resolver_event_without_arguments_is_empty() {
    let boards = FixtureBoards::new();
    let service = service(boards);

    let events = service.handle(&ResolverEvent::default()).await.unwrap();

    assert!(events.is_empty());
}

#[tokio::test]
async fn test_resolver_event_with_empty_arguments_fetches_everything() {
    let event: ResolverEvent = serde_json::from_str(r#"{"arguments": {}}"#).unwrap();
    let service = service(FixtureBoards::new());

    let events = service.handle(&event).await.unwrap();

    assert_eq!(events.len(), 8);
}

#[tokio::test]
async fn test_type_restricts_categories() {
    let events = run(EventQuery {
        types: types(&["MEETING"]),
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.category() == Category::Meeting));
}

#[tokio::test]
async fn test_limit_caps_each_category() {
    let events = run(EventQuery {
        limit: Some(2),
        ..Default::default()
    })
    .await
    .unwrap();

    for category in Category::ALL {
        assert!(count(&events, category) <= 2);
    }
    assert_eq!(events.len(), 5);
}

#[tokio::test]
async fn test_future_returns_upcoming_events_only() {
    let events = run(EventQuery {
        future: Some(true),
        ..Default::default()
    })
    .await
    .unwrap();

    let ids: Vec<_> = events.iter().map(|e| e.event_id.as_str()).collect();
    assert_eq!(ids, vec!["mtg3", "bk5"]);
    assert!(events.iter().all(|e| e.start > now()));
}

#[tokio::test]
async fn test_past_returns_elapsed_events_most_recent_first() {
    let events = run(EventQuery {
        future: Some(false),
        types: types(&["MEETING"]),
        ..Default::default()
    })
    .await
    .unwrap();

    let ids: Vec<_> = events.iter().map(|e| e.event_id.as_str()).collect();
    assert_eq!(ids, vec!["mtg2", "mtg1"]);
    assert!(events.iter().all(|e| e.start < now()));
}

#[tokio::test]
async fn test_job_filter() {
    let events = run(EventQuery {
        types: types(&["BEEKEEPING"]),
        jobs: types(&["EQUIPMENT"]),
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(events.len(), 3);
    for event in &events {
        assert!(event.beekeeping().unwrap().jobs.contains(&"EQUIPMENT".to_string()));
    }
}

#[tokio::test]
async fn test_hive_filter_accepts_all() {
    let events = run(EventQuery {
        types: types(&["BEEKEEPING"]),
        hives: types(&["ROSE"]),
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(events.len(), 3);
    for event in &events {
        let hives = &event.beekeeping().unwrap().hives;
        assert!(hives.iter().any(|h| h == "ROSE" || h == "ALL"));
    }
}

#[tokio::test]
async fn test_monthly_filter_only_affects_meetings() {
    let events = run(EventQuery {
        is_monthly: Some(true),
        ..Default::default()
    })
    .await
    .unwrap();

    let meetings: Vec<_> = events.iter().filter_map(Event::meeting).collect();
    assert_eq!(meetings.len(), 2);
    assert!(meetings.iter().all(|m| m.is_monthly == Some(true)));
    assert_eq!(count(&events, Category::Beekeeping), 4);
    assert_eq!(count(&events, Category::Collective), 1);
}

#[tokio::test]
async fn test_date_range_filters_across_categories() {
    let start = ts("2023-06-01T00:00:00.000Z");
    let end = ts("2023-06-30T00:00:00.000Z");
    let events = run(EventQuery {
        date_range: types(&["2023-06-01T00:00:00.000Z", "2023-06-30T00:00:00.000Z"]),
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(events.len(), 5);
    assert!(events.iter().all(|e| start < e.start && e.start < end));
}

#[tokio::test]
async fn test_inverted_date_range_is_rejected() {
    let err = run(EventQuery {
        types: types(&["MEETING"]),
        date_range: types(&["2023-06-30T00:00:00.000Z", "2023-06-01T00:00:00.000Z"]),
        ..Default::default()
    })
    .await
    .unwrap_err();

    assert!(matches!(err, EventsError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Invalid date range");
}

#[tokio::test]
async fn test_single_date_range_is_rejected() {
    let err = run(EventQuery {
        types: types(&["MEETING"]),
        date_range: types(&["2023-06-30T00:00:00.000Z"]),
        ..Default::default()
    })
    .await
    .unwrap_err();

    assert!(matches!(err, EventsError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Invalid date range");
}

#[tokio::test]
async fn test_all_arguments_combined() {
    let start = ts("2023-06-01T00:00:00.000Z");
    let end = ts("2023-06-30T00:00:00.000Z");
    let events = run(EventQuery {
        types: types(&["BEEKEEPING"]),
        jobs: types(&["EQUIPMENT"]),
        hives: types(&["ROSE"]),
        date_range: types(&["2023-06-01T00:00:00.000Z", "2023-06-30T00:00:00.000Z"]),
        limit: Some(1),
        ..Default::default()
    })
    .await
    .unwrap();

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.event_id, "bk2");
    let details = event.beekeeping().unwrap();
    assert!(details.jobs.contains(&"EQUIPMENT".to_string()));
    assert!(details.hives.iter().any(|h| h == "ROSE" || h == "ALL"));
    assert!(start < event.start && event.start < end);
}

#[tokio::test]
async fn test_unknown_type_fails_before_fetching() {
    let boards = FixtureBoards::new();
    let service = borrowed_service(&boards);
    let query = EventQuery {
        types: types(&["MEETING", "BOGUS"]),
        ..Default::default()
    };

    let err = service.query_at(&query, now()).await.unwrap_err();

    assert!(matches!(err, EventsError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Invalid type: BOGUS");
    assert!(boards.fetched().is_empty());
}

#[tokio::test]
async fn test_board_failure_aborts_whole_request() {
    let boards = FixtureBoards::failing_on(BEEKEEPING_BOARD);
    let service = service(boards);

    let err = service
        .query_at(&EventQuery::default(), now())
        .await
        .unwrap_err();

    assert!(matches!(err, EventsError::ExternalService(_)));
}

#[tokio::test]
async fn test_only_requested_boards_are_fetched() {
    let boards = FixtureBoards::new();
    let query = EventQuery {
        types: types(&["COLLECTIVE"]),
        ..Default::default()
    };
    let service = borrowed_service(&boards);

    service.query_at(&query, now()).await.unwrap();

    assert_eq!(boards.fetched(), vec![COLLECTIVE_BOARD.to_string()]);
}
