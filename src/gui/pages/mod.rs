// src/gui/pages/mod.rs
use eframe::egui;

use super::app::App;
use super::router::View;

pub mod about;
pub mod candidates;
pub mod contact;
pub mod employers;
pub mod enquiry;
pub mod home;
pub mod mission;

/// One full-page view. Pages are stateless statics; anything that must
/// persist between frames (hero index, form fields, search text) lives
/// on `App`.
pub trait Page: Send + Sync + 'static {
    fn view(&self) -> View;
    fn title(&self) -> &'static str;

    /// Draw the page body into the content scroll area.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
