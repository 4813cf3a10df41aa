// src/gui/components/footer.rs
use chrono::{Datelike, Utc};
use eframe::egui;

use crate::config::consts::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONES};
use crate::gui::app::App;
use crate::gui::router::View;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(8.0);

    ui.columns(3, |cols| {
        cols[0].strong("Engineering Manpower Solution");
        cols[0].label(
            "Your one-stop solution for engineering workforce needs. We connect \
             top talent with leading companies in the construction and \
             infrastructure sectors.",
        );

        cols[1].strong("Quick Links");
        if cols[1].link("Home").clicked() {
            app.navigate(View::Home);
        }
        if cols[1].link("Live Vacancies").clicked() {
            app.navigate_to_vacancies();
        }
        if cols[1].link("About Us").clicked() {
            app.navigate(View::About);
        }
        if cols[1].link("Mission & Vision").clicked() {
            app.navigate(View::Mission);
        }
        if cols[1].link("Candidate Desk").clicked() {
            app.navigate(View::Candidates);
        }
        if cols[1].link("Employer Desk").clicked() {
            app.navigate(View::Employers);
        }
        if cols[1].link("Contact Us").clicked() {
            app.navigate(View::Contact);
        }
        if cols[1].link("Enquiry").clicked() {
            app.navigate(View::Enquiry);
        }

        cols[2].strong("Contact Info");
        cols[2].label(CONTACT_ADDRESS);
        cols[2].hyperlink_to(CONTACT_EMAIL, join!("mailto:", CONTACT_EMAIL));
        cols[2].label(CONTACT_PHONES);
    });

    ui.add_space(8.0);
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.weak(format!(
            "Copyright © {} Engineering Manpower Solution. All Rights Reserved.",
            Utc::now().year()
        ));
    });
}
