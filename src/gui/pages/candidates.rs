// src/gui/pages/candidates.rs
use eframe::egui;

use crate::config::consts::CONTACT_EMAIL;
use crate::gui::app::App;
use crate::gui::router::View;

use super::Page;

pub struct CandidatesPage;
pub static PAGE: CandidatesPage = CandidatesPage;

impl Page for CandidatesPage {
    fn view(&self) -> View {
        View::Candidates
    }
    fn title(&self) -> &'static str {
        "Candidate Desk"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Candidate Desk");

        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            ui.label("Email your CV to");
            ui.hyperlink_to(
                CONTACT_EMAIL,
                join!("mailto:", CONTACT_EMAIL, "?subject=Candidate%20Submission"),
            );
            ui.label("or fill the enquiry form and select Candidate.");
        });

        ui.add_space(12.0);
        if ui.button("Open Enquiry Form").clicked() {
            app.navigate(View::Enquiry);
        }
    }
}
