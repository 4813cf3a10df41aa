// src/feed.rs
//
// Vacancy feed: the wire model, a one-shot loader, and the shared cell
// the fetch worker delivers into.
//
// The feed is fetched exactly once per app session. "No vacancies" is a
// valid feed, not an error; only a transport or parse failure sets the
// user-facing error message.

use std::error::Error;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};
use std::thread;

use serde::{Deserialize, Serialize};

use crate::net;

/// Shown when the feed cannot be fetched or read at all.
pub const FEED_ERROR_MSG: &str = "Unable to load vacancies right now.";

/// One open role as published in vacancies.json.
/// Every field defaults to empty: a partial or malformed entry renders
/// blanks rather than rejecting the whole feed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VacancyListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub tags: Vec<String>,
    pub posted_at: String,
    pub apply_url: String,
}

/// Result of one feed fetch. `vacancies` and `error` are independent:
/// an empty feed with no error means "no open roles right now".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedOutcome {
    pub vacancies: Vec<VacancyListing>,
    pub error: Option<String>,
}

impl FeedOutcome {
    fn unavailable() -> Self {
        Self { vacancies: Vec::new(), error: Some(s!(FEED_ERROR_MSG)) }
    }
}

/// Parse a response body into listings.
///
/// A JSON array parses entry by entry, substituting blanks for entries
/// that don't fit the model. Any other valid JSON value counts as an
/// empty feed. Invalid JSON is an error (the feed is unreadable).
pub fn parse_feed(body: &str) -> Result<Vec<VacancyListing>, Box<dyn Error>> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    let listings = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    };

    Ok(listings)
}

/// Fetch and parse the feed. Never fails: failures collapse into an
/// empty feed plus the single user-facing message.
pub fn fetch_feed(url: &str) -> FeedOutcome {
    let body = match net::http_get(url) {
        Ok(b) => b,
        Err(e) => {
            loge!("Feed: Fetch failed: {}", e);
            return FeedOutcome::unavailable();
        }
    };

    match parse_feed(&body) {
        Ok(vacancies) => {
            logf!("Feed: Loaded {} vacancies", vacancies.len());
            FeedOutcome { vacancies, error: None }
        }
        Err(e) => {
            loge!("Feed: Unreadable body: {}", e);
            FeedOutcome::unavailable()
        }
    }
}

/// Handoff cell between the fetch worker and the UI loop.
///
/// The liveness flag is keyed to the owning app instance: once `retire()`
/// runs, late deliveries are discarded instead of written, so a torn-down
/// consumer is never updated.
pub struct FeedShared {
    alive: AtomicBool,
    slot: Mutex<Option<FeedOutcome>>,
}

impl FeedShared {
    pub fn new() -> Self {
        Self { alive: AtomicBool::new(true), slot: Mutex::new(None) }
    }

    /// Mark the owner as gone. Subsequent deliveries are dropped.
    pub fn retire(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    /// Worker side: store an outcome, unless the owner retired first.
    /// Returns whether the outcome was accepted.
    pub fn deliver(&self, outcome: FeedOutcome) -> bool {
        if !self.alive.load(Ordering::SeqCst) {
            logd!("Feed: Result discarded (owner retired)");
            return false;
        }
        *self.slot.lock().unwrap() = Some(outcome);
        true
    }

    /// UI side: claim a delivered outcome, if any. Polled every frame.
    pub fn take(&self) -> Option<FeedOutcome> {
        self.slot.lock().unwrap().take()
    }
}

impl Default for FeedShared {
    fn default() -> Self {
        Self::new()
    }
}

/// Kick off the session's single fetch on a worker thread.
/// `notify` runs after a successful delivery (e.g. request a repaint).
pub fn spawn_fetch(url: String, shared: Arc<FeedShared>, notify: impl FnOnce() + Send + 'static) {
    thread::spawn(move || {
        let outcome = fetch_feed(&url);
        if shared.deliver(outcome) {
            notify();
        }
    });
}
