// src/gui/pages/home.rs
//
// Home view: rotating hero, the live-vacancies section (search box,
// employer call-out, error banner, capped card list), and the marketing
// sections below it. The vacancies heading is the scroll target for the
// "Vacancies" nav entry.

use std::time::{Duration, Instant};

use chrono::Utc;
use eframe::egui;

use crate::config::consts::HERO_ROTATE_SECS;
use crate::gui::app::App;
use crate::gui::components::vacancy_card;
use crate::gui::router::{Anchor, View};
use crate::search;

use super::Page;

const HERO_SLIDES: &[(&str, &str)] = &[
    (
        "Your One-Stop Engineering Workforce Solution",
        "Connecting Top-Tier Talent with Industry-Leading Opportunities",
    ),
    (
        "Projects Teams, Placed On Time",
        "18 years of hiring expertise across Construction, Infrastructure, Manufacturing and IT",
    ),
    (
        "Bulk Labour Mobilization",
        "Staffing projects of any scale, domestically and across the GCC region",
    ),
];

const INDUSTRIES: &[&str] = &[
    "Infrastructure",
    "Labour Mobilization",
    "Project Management",
    "Mining & Metals",
    "Construction",
    "Architecture & Design",
];

const CLIENTS: &[&str] =
    &["Simplex", "HMC", "Metro Buildtech", "Hospitech", "NCC", "Meinhardt", "RRW"];

const HERO_FILL: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
const BANNER_YELLOW: egui::Color32 = egui::Color32::from_rgb(180, 130, 20);

/// Hero rotation scratch. Lives on App; leaving Home resets both the
/// index and the timer, so nothing rotates while the view is unmounted.
pub struct HomeState {
    hero_index: usize,
    last_rotate: Option<Instant>,
}

impl HomeState {
    pub fn new() -> Self {
        Self { hero_index: 0, last_rotate: None }
    }

    /// Advance the slide once per interval while the view draws.
    /// The first frame after (re)entry arms the timer.
    pub fn tick(&mut self, now: Instant, slides: usize) -> usize {
        if slides == 0 {
            return 0;
        }
        match self.last_rotate {
            None => self.last_rotate = Some(now),
            Some(t) if now.duration_since(t) >= Duration::from_secs(HERO_ROTATE_SECS) => {
                self.hero_index = (self.hero_index + 1) % slides;
                self.last_rotate = Some(now);
            }
            _ => {}
        }
        self.hero_index % slides
    }

    pub fn stop(&mut self) {
        self.hero_index = 0;
        self.last_rotate = None;
    }

    pub fn hero_index(&self) -> usize {
        self.hero_index
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct HomePage;
pub static PAGE: HomePage = HomePage;

impl Page for HomePage {
    fn view(&self) -> View {
        View::Home
    }
    fn title(&self) -> &'static str {
        "Home"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        draw_hero(ui, app);
        ui.add_space(16.0);
        draw_vacancies(ui, app);
        ui.add_space(16.0);
        draw_welcome(ui);
        ui.add_space(16.0);
        draw_industries(ui);
        ui.add_space(16.0);
        draw_clients(ui);
    }
}

fn draw_hero(ui: &mut egui::Ui, app: &mut App) {
    let idx = app.home.tick(Instant::now(), HERO_SLIDES.len());
    let (headline, tagline) = HERO_SLIDES[idx];

    egui::Frame::new()
        .fill(HERO_FILL)
        .inner_margin(egui::Margin::same(24))
        .corner_radius(egui::CornerRadius::same(6))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new(headline).color(egui::Color32::WHITE).size(28.0));
                ui.label(egui::RichText::new(tagline).color(egui::Color32::LIGHT_GRAY));
            });
        });

    // keep the rotation ticking without a busy loop
    ui.ctx().request_repaint_after(Duration::from_millis(500));
}

fn draw_vacancies(ui: &mut egui::Ui, app: &mut App) {
    let heading = ui.heading("Live Vacancies");
    if app.router.take_due_scroll(Anchor::Vacancies, Instant::now()) {
        heading.scroll_to_me(Some(egui::Align::Min));
    }
    ui.label("Curated opportunities across Engineering, Construction and Infra");

    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::singleline(&mut app.vacancy_search)
            .hint_text("Search roles, companies, locations...")
            .desired_width(360.0),
    );

    ui.add_space(8.0);
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.strong("Are you an Employer?");
                ui.label("Share your requirements and we'll help you hire faster.");
            });
            if ui.button("Go to Employer Desk").clicked() {
                app.navigate(View::Employers);
            }
        });
    });

    if let Some(err) = &app.vacancy_error {
        ui.add_space(8.0);
        ui.colored_label(BANNER_YELLOW, err);
    }

    ui.add_space(8.0);
    if app.vacancies.is_empty() && app.vacancy_error.is_none() {
        ui.label("No vacancies available at the moment. Please check back later.");
        return;
    }

    let now = Utc::now();
    let visible = search::visible_vacancies(&app.vacancies, &app.vacancy_search);
    for v in visible {
        vacancy_card::draw(ui, v, search::is_new(&v.posted_at, now));
        ui.add_space(6.0);
    }
}

fn draw_welcome(ui: &mut egui::Ui) {
    ui.heading("Welcome to EMS Consulting");
    ui.label(
        "We are a group of HR Professionals & Engineers with 18 years of extensive \
         hiring expertise in Construction, Infrastructure, Manufacturing, and IT. We \
         specialize in placing \"PROJECTS TEAM\" and providing \"Bulk Labour \
         Mobilization\" for projects of any scale, both domestically and in the GCC \
         region.",
    );
}

fn draw_industries(ui: &mut egui::Ui) {
    ui.heading("Industries We Serve");
    ui.horizontal_wrapped(|ui| {
        for name in INDUSTRIES {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.strong(*name);
            });
        }
    });
}

fn draw_clients(ui: &mut egui::Ui) {
    ui.heading("Our Esteemed Clientele");
    ui.horizontal_wrapped(|ui| {
        for name in CLIENTS {
            ui.weak(*name);
            ui.add_space(12.0);
        }
    });
}
