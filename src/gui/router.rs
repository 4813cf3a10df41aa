// src/gui/router.rs
//
// Single-view navigation state machine plus the anchor-scroll special
// case used by the "Vacancies" nav entry. All seven views are reachable
// from all views; exactly one is current; the app starts on Home.

use std::time::{Duration, Instant};

use crate::config::consts::{SCROLL_GRACE_MS, SCROLL_SETTLE_MS};
use super::pages::{self, Page};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    About,
    Mission,
    Candidates,
    Employers,
    Contact,
    Enquiry,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Home,
        View::About,
        View::Mission,
        View::Candidates,
        View::Employers,
        View::Contact,
        View::Enquiry,
    ];
}

/// In-page scroll targets. Only the vacancies section on Home for now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Vacancies,
}

#[derive(Clone, Copy, Debug)]
struct PendingScroll {
    anchor: Anchor,
    due: Instant,
}

pub struct Router {
    current: View,
    pending_scroll: Option<PendingScroll>,
}

impl Router {
    pub fn new() -> Self {
        Self { current: View::Home, pending_scroll: None }
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Switch to `view`. Idempotent: navigating to the current view is a
    /// no-op. Returns whether the view actually changed.
    pub fn navigate(&mut self, view: View) -> bool {
        if self.current == view {
            return false;
        }
        self.current = view;
        true
    }

    /// The anchor lives inside Home: land there first if needed, then
    /// queue a scroll request that becomes due after the settle delay,
    /// giving the home content a frame to mount. Returns whether the
    /// view changed.
    pub fn navigate_to_anchor(&mut self, anchor: Anchor, now: Instant) -> bool {
        let changed = self.navigate(View::Home);
        self.pending_scroll = Some(PendingScroll {
            anchor,
            due: now + Duration::from_millis(SCROLL_SETTLE_MS),
        });
        changed
    }

    /// Called by the section that owns `anchor` while it draws. Claims a
    /// due request; the caller performs the actual scroll.
    pub fn take_due_scroll(&mut self, anchor: Anchor, now: Instant) -> bool {
        match self.pending_scroll {
            Some(p) if p.anchor == anchor && now >= p.due => {
                self.pending_scroll = None;
                true
            }
            _ => false,
        }
    }

    /// End-of-frame sweep: a due request nobody claimed within the grace
    /// window means the anchor target is not on screen. Dropped silently.
    pub fn expire_scroll(&mut self, now: Instant) {
        if let Some(p) = self.pending_scroll {
            if now >= p.due + Duration::from_millis(SCROLL_GRACE_MS) {
                logd!("UI: Scroll to {:?} skipped (target absent)", p.anchor);
                self.pending_scroll = None;
            }
        }
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

pub static PAGES: &[&'static dyn Page] = &[
    &pages::home::PAGE,
    &pages::about::PAGE,
    &pages::mission::PAGE,
    &pages::candidates::PAGE,
    &pages::employers::PAGE,
    &pages::contact::PAGE,
    &pages::enquiry::PAGE,
];

pub fn page_for(view: View) -> &'static dyn Page {
    match view {
        View::Home => &pages::home::PAGE,
        View::About => &pages::about::PAGE,
        View::Mission => &pages::mission::PAGE,
        View::Candidates => &pages::candidates::PAGE,
        View::Employers => &pages::employers::PAGE,
        View::Contact => &pages::contact::PAGE,
        View::Enquiry => &pages::enquiry::PAGE,
    }
}
