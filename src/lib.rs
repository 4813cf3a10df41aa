// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;

pub mod enquiry;
pub mod feed;
pub mod gui;
pub mod net;
pub mod search;
