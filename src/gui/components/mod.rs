// src/gui/components/mod.rs
pub mod footer;
pub mod header;
pub mod vacancy_card;
