// src/gui/pages/enquiry.rs
//
// Enquiry form view. Inputs bind straight to the form record; the
// submit button is gated on the required-field presence check, and the
// status banner above the form renders whatever the desk reports.

use std::time::Instant;

use eframe::egui;

use crate::enquiry::{Audience, StatusKind};
use crate::gui::app::App;
use crate::gui::router::View;

use super::Page;

const SUCCESS_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(185, 28, 28);

pub struct EnquiryPage;
pub static PAGE: EnquiryPage = EnquiryPage;

fn field(ui: &mut egui::Ui, label: &str, required: bool, value: &mut String) {
    ui.label(if required { join!(label, " *") } else { s!(label) });
    ui.add(egui::TextEdit::singleline(value).desired_width(320.0));
    ui.add_space(4.0);
}

impl Page for EnquiryPage {
    fn view(&self) -> View {
        View::Enquiry
    }
    fn title(&self) -> &'static str {
        "Enquiry"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Send an Enquiry");
        ui.label("We'll get back to you promptly.");

        if let Some(status) = app.enquiry.status() {
            let color = match status.kind {
                StatusKind::Success => SUCCESS_GREEN,
                StatusKind::Error => ERROR_RED,
            };
            ui.add_space(8.0);
            ui.colored_label(color, &status.message);
        }

        ui.add_space(12.0);
        {
            let form = &mut app.enquiry.form;

            field(ui, "Contact Person", true, &mut form.contact_person);
            field(ui, "Company Name", false, &mut form.company_name);
            field(ui, "Address", false, &mut form.address);

            ui.label("I am a *");
            egui::ComboBox::from_id_salt("enquiry_audience")
                .selected_text(form.audience.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut form.audience, Audience::Candidate, "Candidate");
                    ui.selectable_value(&mut form.audience, Audience::Employer, "Employer");
                });
            ui.add_space(4.0);

            field(ui, "Email", true, &mut form.email);
            field(ui, "Phone / Mobile No.", true, &mut form.phone);
            field(ui, "Country", true, &mut form.country);

            ui.label("Enquiry Details *");
            ui.add(
                egui::TextEdit::multiline(&mut form.details)
                    .desired_rows(4)
                    .desired_width(320.0),
            );
        }

        ui.add_space(8.0);
        let ready = app.enquiry.form.is_complete();
        if ui.add_enabled(ready, egui::Button::new("Submit Enquiry")).clicked() {
            app.enquiry.submit(app.sink.as_ref(), Instant::now());
        }
    }
}
