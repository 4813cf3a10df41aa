// src/gui/pages/mission.rs
use eframe::egui;

use crate::gui::app::App;
use crate::gui::router::View;

use super::Page;

const COMMITMENTS: &[&str] = &[
    "18 Years of specialized hiring expertise in Engineering Sectors.",
    "Strong pool of talent from top-to-lower management levels.",
    "Rigorous technical competency evaluation before client submission.",
    "Expertise in closing critical openings within tight time frames.",
];

pub struct MissionPage;
pub static PAGE: MissionPage = MissionPage;

impl Page for MissionPage {
    fn view(&self) -> View {
        View::Mission
    }
    fn title(&self) -> &'static str {
        "Mission & Vision"
    }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App) {
        ui.heading("Mission & Vision");

        ui.add_space(12.0);
        ui.strong("Our Mission");
        ui.label(
            "Our motto is – \"Successful completion of Projects on Time\". Our \
             mission is to deliver exceptional manpower solutions that drive \
             business success and enhance career growth for job seekers. We are \
             committed to excellence, integrity, and innovation in every aspect of \
             our service.",
        );

        ui.add_space(12.0);
        ui.strong("Our Vision");
        ui.label(
            "To continuously meet new challenges in hiring by introducing efficient \
             processes. We aim to provide competent technical teams with required \
             skill sets, building on our proven track record of successful \
             placements to be the most reliable and excellent manpower consultancy.",
        );

        ui.add_space(12.0);
        ui.strong("Our Commitments & Expertise");
        ui.label(
            "We are committed to building outstanding teams for our clients to \
             complete projects within the given time and with minimum manpower cost. \
             We provide the best solutions in human resources hierarchy. \"We are \
             for your prosperity & organizational development\".",
        );
        ui.add_space(4.0);
        for item in COMMITMENTS {
            ui.label(join!("✔ ", item));
        }
    }
}
