// tests/hero_rotation.rs
//
// Hero slide rotation: interval-driven while Home draws, fully reset
// when the view is left.

use std::time::{Duration, Instant};

use ems_desk::config::consts::HERO_ROTATE_SECS;
use ems_desk::gui::pages::home::HomeState;

const SLIDES: usize = 3;

fn interval() -> Duration {
    Duration::from_secs(HERO_ROTATE_SECS)
}

#[test]
fn first_frame_arms_without_advancing() {
    let t0 = Instant::now();
    let mut hero = HomeState::new();
    assert_eq!(hero.tick(t0, SLIDES), 0);
    assert_eq!(hero.tick(t0 + interval() / 2, SLIDES), 0);
}

#[test]
fn advances_once_per_interval_and_wraps() {
    let t0 = Instant::now();
    let mut hero = HomeState::new();
    hero.tick(t0, SLIDES);

    assert_eq!(hero.tick(t0 + interval(), SLIDES), 1);
    assert_eq!(hero.tick(t0 + interval() * 2, SLIDES), 2);
    assert_eq!(hero.tick(t0 + interval() * 3, SLIDES), 0);
}

#[test]
fn leaving_home_resets_index_and_timer() {
    let t0 = Instant::now();
    let mut hero = HomeState::new();
    hero.tick(t0, SLIDES);
    hero.tick(t0 + interval(), SLIDES);
    assert_eq!(hero.hero_index(), 1);

    hero.stop();
    assert_eq!(hero.hero_index(), 0);

    // re-entry starts a fresh interval instead of firing immediately
    let t1 = t0 + interval() * 10;
    assert_eq!(hero.tick(t1, SLIDES), 0);
    assert_eq!(hero.tick(t1 + interval() / 2, SLIDES), 0);
    assert_eq!(hero.tick(t1 + interval(), SLIDES), 1);
}

#[test]
fn zero_slides_never_panics() {
    let mut hero = HomeState::new();
    assert_eq!(hero.tick(Instant::now(), 0), 0);
}
