// src/gui/app.rs
use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::{
    config::consts::{SCROLL_SETTLE_MS, SITE_BASE_URL, VACANCY_FEED_PATH, VIEW_FADE_SECS},
    enquiry::{EnquiryDesk, EnquirySink, LogSink},
    feed::{self, FeedShared, VacancyListing},
};

use super::{
    components,
    pages::home::HomeState,
    router::{self, Anchor, Router, View},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Engineering Manpower Solution",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub router: Router,

    // vacancy feed: worker delivers into `feed`, UI owns the copies below
    feed: Arc<FeedShared>,
    pub vacancies: Vec<VacancyListing>,
    pub vacancy_error: Option<String>,
    pub vacancy_search: String,

    // home view scratch (hero rotation)
    pub home: HomeState,

    // enquiry desk + its submission collaborator
    pub enquiry: EnquiryDesk,
    pub sink: Box<dyn EnquirySink>,

    // content cross-fade restarts on every view change
    view_entered: Instant,
}

impl App {
    pub fn new(egui_ctx: &egui::Context) -> Self {
        // The session's single feed fetch starts right away; the worker
        // pokes the event loop when the result lands.
        let shared = Arc::new(FeedShared::new());
        let url = join!(SITE_BASE_URL, VACANCY_FEED_PATH);
        let repaint_ctx = egui_ctx.clone();
        feed::spawn_fetch(url, shared.clone(), move || repaint_ctx.request_repaint());

        logf!("Init: start view={:?}", View::Home);

        Self {
            router: Router::new(),
            feed: shared,
            vacancies: Vec::new(),
            vacancy_error: None,
            vacancy_search: s!(),
            home: HomeState::new(),
            enquiry: EnquiryDesk::new(),
            sink: Box::new(LogSink),
            view_entered: Instant::now(),
        }
    }

    /* ---------- navigation ---------- */

    pub fn navigate(&mut self, view: View) {
        let prev = self.router.current();
        if self.router.navigate(view) {
            if prev == View::Home {
                // rotation timer must not outlive the home view
                self.home.stop();
            }
            self.view_entered = Instant::now();
            logf!("UI: Navigate {:?} → {:?}", prev, view);
        }
    }

    /// "Vacancies" nav entry: lands on Home, then scrolls to the section
    /// once the settle delay has passed.
    pub fn navigate_to_vacancies(&mut self) {
        let prev = self.router.current();
        if self.router.navigate_to_anchor(Anchor::Vacancies, Instant::now()) {
            self.view_entered = Instant::now();
            logf!("UI: Navigate {:?} → {:?} ({:?} anchor)", prev, View::Home, Anchor::Vacancies);
        }
    }

    /* ---------- per-frame upkeep ---------- */

    fn poll_feed(&mut self) {
        if let Some(outcome) = self.feed.take() {
            logf!(
                "Feed: Applied ({} vacancies, error={})",
                outcome.vacancies.len(),
                outcome.error.is_some()
            );
            self.vacancies = outcome.vacancies;
            self.vacancy_error = outcome.error;
        }
    }

    fn content_fade(&self) -> f32 {
        (self.view_entered.elapsed().as_secs_f32() / VIEW_FADE_SECS).clamp(0.0, 1.0)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Liveness guard: a fetch resolving after this point is discarded.
        self.feed.retire();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_feed();
        self.enquiry.tick(Instant::now());

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let fade = self.content_fade();
            if fade < 1.0 {
                ctx.request_repaint();
            }
            ui.multiply_opacity(fade);

            egui::ScrollArea::vertical()
                .id_salt("content_scroll")
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());

                    let page = router::page_for(self.router.current());
                    page.draw(ui, self);

                    ui.separator();
                    components::footer::draw(ui, self);
                });
        });

        // A due scroll request nobody claimed this frame (target absent)
        self.router.expire_scroll(Instant::now());
        if self.router.has_pending_scroll() {
            ctx.request_repaint_after(Duration::from_millis(SCROLL_SETTLE_MS));
        }

        // Keep ticking while a status banner waits to clear
        if self.enquiry.status().is_some() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
