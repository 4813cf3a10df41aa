// tests/router_nav.rs
//
// Navigation state machine: one current view, idempotent repeats, and
// the vacancies-anchor special case with its settle/claim/expire cycle.

use std::time::{Duration, Instant};

use ems_desk::config::consts::{SCROLL_GRACE_MS, SCROLL_SETTLE_MS};
use ems_desk::gui::router::{self, Anchor, Router, View};

fn settle() -> Duration {
    Duration::from_millis(SCROLL_SETTLE_MS)
}

#[test]
fn page_table_covers_every_view() {
    assert_eq!(router::PAGES.len(), View::ALL.len());
    for view in View::ALL {
        let page = router::page_for(view);
        assert_eq!(page.view(), view);
        assert!(!page.title().is_empty());
    }
}

#[test]
fn starts_on_home() {
    let router = Router::new();
    assert_eq!(router.current(), View::Home);
    assert!(!router.has_pending_scroll());
}

#[test]
fn every_view_reachable_from_every_view() {
    for from in View::ALL {
        for to in View::ALL {
            let mut router = Router::new();
            router.navigate(from);
            router.navigate(to);
            assert_eq!(router.current(), to);
        }
    }
}

#[test]
fn current_always_equals_last_request() {
    let mut router = Router::new();
    let sequence = [
        View::About,
        View::Enquiry,
        View::Enquiry, // repeat
        View::Home,
        View::Contact,
        View::Candidates,
    ];
    for view in sequence {
        router.navigate(view);
        assert_eq!(router.current(), view);
    }
}

#[test]
fn repeat_navigation_is_a_noop() {
    let mut router = Router::new();
    assert!(router.navigate(View::Mission));
    assert!(!router.navigate(View::Mission));
    assert_eq!(router.current(), View::Mission);
}

#[test]
fn anchor_nav_from_elsewhere_lands_on_home() {
    let now = Instant::now();
    let mut router = Router::new();
    router.navigate(View::Contact);

    assert!(router.navigate_to_anchor(Anchor::Vacancies, now));
    assert_eq!(router.current(), View::Home);
    assert!(router.has_pending_scroll());
}

#[test]
fn anchor_nav_on_home_skips_the_view_change() {
    let now = Instant::now();
    let mut router = Router::new();

    assert!(!router.navigate_to_anchor(Anchor::Vacancies, now));
    assert_eq!(router.current(), View::Home);
    assert!(router.has_pending_scroll());
}

#[test]
fn scroll_request_waits_for_the_settle_delay() {
    let now = Instant::now();
    let mut router = Router::new();
    router.navigate(View::About);
    router.navigate_to_anchor(Anchor::Vacancies, now);

    // not due yet
    assert!(!router.take_due_scroll(Anchor::Vacancies, now));
    assert!(router.has_pending_scroll());

    // due: claimed exactly once
    let later = now + settle();
    assert!(router.take_due_scroll(Anchor::Vacancies, later));
    assert!(!router.has_pending_scroll());
    assert!(!router.take_due_scroll(Anchor::Vacancies, later));
}

#[test]
fn unclaimed_scroll_expires_silently() {
    let now = Instant::now();
    let mut router = Router::new();
    router.navigate_to_anchor(Anchor::Vacancies, now);

    // within the grace window the request survives
    router.expire_scroll(now + settle());
    assert!(router.has_pending_scroll());

    // past it, the request is dropped (anchor target absent)
    router.expire_scroll(now + settle() + Duration::from_millis(SCROLL_GRACE_MS));
    assert!(!router.has_pending_scroll());
}
