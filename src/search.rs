// src/search.rs
//
// Derived view of the vacancy feed: free-text filtering, the display
// cap, and the "New" badge. Pure functions of (feed, query, clock) —
// recomputed every frame, never cached, never mutating the feed.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::config::consts::{NEW_BADGE_DAYS, VACANCY_DISPLAY_CAP};
use crate::feed::VacancyListing;

/// Trim + lowercase. An empty normalized query matches everything.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

// Single haystack per listing: title, company, location, description,
// then the space-joined tags, lowercased as one blob.
fn search_blob(v: &VacancyListing) -> String {
    format!(
        "{} {} {} {} {}",
        v.title,
        v.company,
        v.location,
        v.description,
        v.tags.join(" ")
    )
    .to_lowercase()
}

/// Case-insensitive substring containment. No tokenization, no ranking.
pub fn matches_query(v: &VacancyListing, normalized_query: &str) -> bool {
    normalized_query.is_empty() || search_blob(v).contains(normalized_query)
}

/// The listings to render: matching entries in original feed order,
/// capped at the first `VACANCY_DISPLAY_CAP`.
pub fn visible_vacancies<'a>(feed: &'a [VacancyListing], query: &str) -> Vec<&'a VacancyListing> {
    let q = normalize_query(query);
    feed.iter()
        .filter(|v| matches_query(v, &q))
        .take(VACANCY_DISPLAY_CAP)
        .collect()
}

// postedAt arrives as free text. Accept RFC 3339 or a bare date;
// anything else is simply "not new".
fn parse_posted_at(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}

/// A listing is "New" if it was posted within the badge window.
/// Unparseable dates never flag and never error.
pub fn is_new(posted_at: &str, now: DateTime<Utc>) -> bool {
    match parse_posted_at(posted_at) {
        Some(t) => now.signed_duration_since(t) <= Duration::days(NEW_BADGE_DAYS),
        None => false,
    }
}
