// src/gui/pages/employers.rs
use eframe::egui;

use crate::config::consts::CONTACT_EMAIL;
use crate::gui::app::App;
use crate::gui::router::View;

use super::Page;

pub struct EmployersPage;
pub static PAGE: EmployersPage = EmployersPage;

impl Page for EmployersPage {
    fn view(&self) -> View {
        View::Employers
    }
    fn title(&self) -> &'static str {
        "Employer Desk"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Employer Desk");

        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            ui.label("Share your job description and timeline at");
            ui.hyperlink_to(
                CONTACT_EMAIL,
                join!("mailto:", CONTACT_EMAIL, "?subject=Employer%20Requirement"),
            );
            ui.label("or use the enquiry form and select Employer.");
        });

        ui.add_space(12.0);
        if ui.button("Open Enquiry Form").clicked() {
            app.navigate(View::Enquiry);
        }
    }
}
