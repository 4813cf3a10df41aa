// tests/vacancy_search.rs
//
// Filter + display cap + "New" badge, checked as pure functions over
// (feed, query, clock).

use chrono::{Duration, Utc};

use ems_desk::config::consts::VACANCY_DISPLAY_CAP;
use ems_desk::s;
use ems_desk::feed::VacancyListing;
use ems_desk::search::{is_new, visible_vacancies};

fn listing(id: &str, title: &str, company: &str, location: &str) -> VacancyListing {
    VacancyListing {
        id: id.into(),
        title: title.into(),
        company: company.into(),
        location: location.into(),
        description: s!("Long-term site role"),
        ..Default::default()
    }
}

fn sample_feed() -> Vec<VacancyListing> {
    vec![
        listing("1", "Site Engineer", "Simplex", "New Delhi"),
        listing("2", "Project Manager", "HMC", "Mumbai"),
        listing("3", "Quantity Surveyor", "Metro Buildtech", "New Delhi"),
        listing("4", "Safety Officer", "NCC", "Chennai"),
    ]
}

#[test]
fn filtering_is_pure() {
    let feed = sample_feed();
    let a: Vec<String> = visible_vacancies(&feed, "delhi").iter().map(|v| v.id.clone()).collect();
    let b: Vec<String> = visible_vacancies(&feed, "delhi").iter().map(|v| v.id.clone()).collect();
    assert_eq!(a, b);
}

#[test]
fn substring_match_is_case_insensitive() {
    let feed = sample_feed();
    let hits = visible_vacancies(&feed, "delhi");
    let ids: Vec<&str> = hits.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn query_is_trimmed() {
    let feed = sample_feed();
    assert_eq!(visible_vacancies(&feed, "  delhi  ").len(), 2);
}

#[test]
fn empty_query_returns_all_in_order_up_to_cap() {
    let feed = sample_feed();
    let hits = visible_vacancies(&feed, "");
    let ids: Vec<&str> = hits.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
}

#[test]
fn display_cap_keeps_the_first_matches() {
    let feed: Vec<VacancyListing> = (0..10)
        .map(|i| listing(&i.to_string(), "Engineer", "EMS", "Delhi"))
        .collect();

    let hits = visible_vacancies(&feed, "");
    assert_eq!(hits.len(), VACANCY_DISPLAY_CAP);
    let ids: Vec<&str> = hits.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["0", "1", "2", "3", "4", "5"]);
}

#[test]
fn tags_are_part_of_the_search_blob() {
    let mut v = listing("1", "Engineer", "EMS", "Delhi");
    v.tags = vec![s!("Contract"), s!("GCC")];
    let feed = vec![v];

    assert_eq!(visible_vacancies(&feed, "gcc").len(), 1);
    assert_eq!(visible_vacancies(&feed, "remote").len(), 0);
}

#[test]
fn matches_keep_original_feed_order() {
    let feed = vec![
        listing("a", "Engineer", "X", "Delhi"),
        listing("b", "Manager", "Y", "Pune"),
        listing("c", "Engineer", "Z", "Delhi"),
    ];
    let ids: Vec<&str> = visible_vacancies(&feed, "engineer").iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
}

#[test]
fn posted_ten_days_ago_is_new() {
    let now = Utc::now();
    let posted = (now - Duration::days(10)).to_rfc3339();
    assert!(is_new(&posted, now));
}

#[test]
fn posted_twenty_days_ago_is_not_new() {
    let now = Utc::now();
    let posted = (now - Duration::days(20)).to_rfc3339();
    assert!(!is_new(&posted, now));
}

#[test]
fn plain_dates_parse_too() {
    let now = Utc::now();
    let posted = (now - Duration::days(3)).format("%Y-%m-%d").to_string();
    assert!(is_new(&posted, now));
}

#[test]
fn unparseable_posted_at_is_not_new() {
    let now = Utc::now();
    assert!(!is_new("not-a-date", now));
    assert!(!is_new("", now));
}
