// src/gui/components/header.rs
//
// Top nav bar. Mirrors the tab-switch pattern: selectable labels per
// view, the brand label jumping Home, and the one special entry —
// "Vacancies" — which is an anchor into Home rather than a view.

use eframe::egui;

use crate::gui::app::App;
use crate::gui::router::View;

const NAV_LINKS: &[(&str, View)] = &[
    ("About Us", View::About),
    ("Mission & Vision", View::Mission),
    ("Candidates", View::Candidates),
    ("Employers", View::Employers),
    ("Contact Us", View::Contact),
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let brand = egui::RichText::new("Engineering Manpower Solution").strong();
        if ui.selectable_label(false, brand).clicked() {
            app.navigate(View::Home);
        }

        ui.separator();

        if ui.selectable_label(false, "Vacancies").clicked() {
            app.navigate_to_vacancies();
        }

        for &(label, view) in NAV_LINKS {
            let selected = app.router.current() == view;
            if ui.selectable_label(selected, label).clicked() && !selected {
                app.navigate(view);
            }
        }

        let enquiry_active = app.router.current() == View::Enquiry;
        if ui.selectable_label(enquiry_active, "Enquiry").clicked() && !enquiry_active {
            app.navigate(View::Enquiry);
        }
    });
}
