// src/gui/components/vacancy_card.rs
use eframe::egui;

use crate::feed::VacancyListing;

const NEW_BADGE_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);

/// One listing card. Missing fields render as blanks; the card never
/// fails to draw.
pub fn draw(ui: &mut egui::Ui, v: &VacancyListing, is_new: bool) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.strong(&v.title);
            if is_new {
                ui.colored_label(NEW_BADGE_GREEN, "New");
            }
        });

        ui.label(format!("{} • {}", v.company, v.location));

        if !v.description.is_empty() {
            ui.add_space(4.0);
            ui.label(&v.description);
        }

        if !v.tags.is_empty() {
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for tag in &v.tags {
                    ui.small(tag);
                }
            });
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.weak(&v.posted_at);
            if !v.apply_url.is_empty() {
                ui.hyperlink_to("Apply", &v.apply_url);
            }
        });
    });
}
