// src/gui/pages/about.rs
use eframe::egui;

use crate::gui::app::App;
use crate::gui::router::View;

use super::Page;

const SECTORS: &[&str] = &[
    "Civil Construction (High Rise, Commercial, Residential, Industrial)",
    "Project Management Consultancy (PMC)",
    "Architecture & Structural Design",
    "Construction Equipment & Machinery",
    "Infrastructure (Roads, Highways, Mining, Power, Metro)",
    "Interior Design & Structural Works",
];

pub struct AboutPage;
pub static PAGE: AboutPage = AboutPage;

impl Page for AboutPage {
    fn view(&self) -> View {
        View::About
    }
    fn title(&self) -> &'static str {
        "About Us"
    }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App) {
        ui.heading("About Us");
        ui.label("Your Trusted Partner in Specialized Hiring Since 2006");

        ui.add_space(12.0);
        ui.strong("Who We Are");
        ui.label(
            "Engineering Manpower Solution (EMS) is a premier, specialized hiring \
             agency for the Construction and Infrastructure sectors. Based in the \
             heart of South Delhi, India, we are a dedicated group of seasoned HR \
             Professionals and retired Engineers bringing over 18 years of extensive \
             hiring expertise to the table.",
        );
        ui.add_space(6.0);
        ui.label(
            "We believe in building long-term partnerships. Our solutions are \
             meticulously customized to address the unique challenges and \
             requirements of each client, ensuring the best possible outcomes and \
             driving project success.",
        );

        ui.add_space(12.0);
        ui.strong("Our Core Sectors of Expertise");
        ui.label(
            "We provide reliable and tailored human resource services across a wide \
             spectrum of industries.",
        );
        ui.add_space(4.0);
        for sector in SECTORS {
            ui.label(join!("• ", sector));
        }
    }
}
