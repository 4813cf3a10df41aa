// tests/feed_loader.rs
//
// Feed parsing shapes, fetch failure handling, and the liveness guard
// that discards deliveries after teardown.

use std::sync::Arc;
use std::sync::mpsc;

use ems_desk::feed::{self, FEED_ERROR_MSG, FeedOutcome, FeedShared, VacancyListing, parse_feed};
use ems_desk::s;

#[test]
fn empty_array_is_an_empty_feed_not_an_error() {
    let listings = parse_feed("[]").unwrap();
    assert!(listings.is_empty());
}

#[test]
fn non_array_json_counts_as_no_vacancies() {
    assert!(parse_feed("{\"jobs\": []}").unwrap().is_empty());
    assert!(parse_feed("\"hello\"").unwrap().is_empty());
    assert!(parse_feed("42").unwrap().is_empty());
}

#[test]
fn invalid_json_is_an_error() {
    assert!(parse_feed("not json").is_err());
    assert!(parse_feed("").is_err());
}

#[test]
fn wire_names_are_camel_case() {
    let body = r#"[{
        "id": "j1",
        "title": "Site Engineer",
        "company": "Simplex",
        "location": "New Delhi",
        "description": "High-rise project",
        "tags": ["Contract"],
        "postedAt": "2026-08-20",
        "applyUrl": "https://emsconsulting.in/apply/j1"
    }]"#;

    let listings = parse_feed(body).unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].posted_at, "2026-08-20");
    assert_eq!(listings[0].apply_url, "https://emsconsulting.in/apply/j1");
}

#[test]
fn malformed_entries_degrade_to_blanks() {
    let body = r#"[{"id": "j1", "title": "Engineer"}, 42, {"id": 7}]"#;

    let listings = parse_feed(body).unwrap();
    assert_eq!(listings.len(), 3);

    assert_eq!(listings[0].id, "j1");
    assert_eq!(listings[0].title, "Engineer");
    assert_eq!(listings[0].company, "");
    assert!(listings[0].tags.is_empty());

    // entries that don't fit the model at all become all-blank listings
    assert_eq!(listings[1], VacancyListing::default());
    assert_eq!(listings[2], VacancyListing::default());
}

#[test]
fn fetch_failure_sets_the_single_user_facing_message() {
    // nothing listens here; the connection is refused immediately
    let outcome = feed::fetch_feed("http://127.0.0.1:9/vacancies.json");
    assert!(outcome.vacancies.is_empty());
    assert_eq!(outcome.error.as_deref(), Some(FEED_ERROR_MSG));
}

#[test]
fn delivery_before_teardown_is_taken() {
    let shared = FeedShared::new();
    assert!(shared.deliver(FeedOutcome::default()));
    assert!(shared.take().is_some());
    assert!(shared.take().is_none());
}

#[test]
fn delivery_after_teardown_is_discarded() {
    let shared = FeedShared::new();
    shared.retire();

    assert!(!shared.deliver(FeedOutcome::default()));
    assert!(shared.take().is_none());
}

#[test]
fn retired_worker_never_notifies() {
    let shared = Arc::new(FeedShared::new());
    shared.retire();

    // worker resolves after the owner is gone; notify must not fire
    let (tx, rx) = mpsc::channel();
    feed::spawn_fetch(s!("http://127.0.0.1:9/vacancies.json"), shared.clone(), move || {
        let _ = tx.send(());
    });

    // the worker thread ends either way; the channel stays empty
    assert!(rx.recv_timeout(std::time::Duration::from_secs(30)).is_err());
    assert!(shared.take().is_none());
}
