// src/gui/pages/contact.rs
use eframe::egui;

use crate::config::consts::{CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONES};
use crate::gui::app::App;
use crate::gui::router::View;

use super::Page;

pub struct ContactPage;
pub static PAGE: ContactPage = ContactPage;

impl Page for ContactPage {
    fn view(&self) -> View {
        View::Contact
    }
    fn title(&self) -> &'static str {
        "Contact Us"
    }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App) {
        ui.heading("Get In Touch");

        ui.add_space(12.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.strong("Contact Details");
            ui.add_space(4.0);

            ui.label("Address:");
            ui.label(CONTACT_ADDRESS);
            ui.add_space(4.0);

            ui.label("Email:");
            ui.hyperlink_to(CONTACT_EMAIL, join!("mailto:", CONTACT_EMAIL));
            ui.add_space(4.0);

            ui.label("Phone:");
            ui.label(CONTACT_PHONES);
        });

        ui.add_space(8.0);
        ui.hyperlink_to(
            "Find us on the map",
            "https://www.google.com/maps/search/?api=1&query=DDA+Flats+Madangir+New+Delhi+110062",
        );
    }
}
