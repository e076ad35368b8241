//! User interface module - egui shell around the simulated desktop

mod app;
mod components;
mod dialogs;
mod panels;
mod theme;

pub use app::VmDeskApp;
