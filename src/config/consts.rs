// src/config/consts.rs

// Net config
pub const SITE_BASE_URL: &str = "https://emsconsulting.in";
pub const VACANCY_FEED_PATH: &str = "/vacancies.json";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Vacancies section
pub const VACANCY_DISPLAY_CAP: usize = 6;
pub const NEW_BADGE_DAYS: i64 = 14;

// Home hero rotation
pub const HERO_ROTATE_SECS: u64 = 5;

// Anchor scroll: wait for the target view to settle before scrolling,
// and give up if nothing claims the request within the grace window.
pub const SCROLL_SETTLE_MS: u64 = 50;
pub const SCROLL_GRACE_MS: u64 = 1_000;

// Enquiry status banner
pub const STATUS_CLEAR_SECS: u64 = 5;

// View cross-fade
pub const VIEW_FADE_SECS: f32 = 0.4;

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 700.0;

// Contact details (footer + contact page)
pub const CONTACT_ADDRESS: &str = "18/484 | GF | DDA Flats Madangir | New Delhi- 110062, India";
pub const CONTACT_EMAIL: &str = "info@emsconsulting.in";
pub const CONTACT_PHONES: &str = "+919717274117, +919310452338";
