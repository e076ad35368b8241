//! Boot panel - Progress of the starting machine

use std::time::Instant;

use egui::Ui;

use crate::core::AppState;
use crate::ui::theme::{Icons, Theme};

pub fn render(ui: &mut Ui, state: &AppState, now: Instant) {
    let Some(progress) = state.session.boot_progress(now) else {
        return;
    };
    let name = state.active_machine().map(|m| m.name()).unwrap_or_default();

    egui::Frame::none()
        .fill(egui::Color32::BLACK)
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.vertical_centered(|ui| {
                ui.add_space((ui.available_height() / 2.0 - 90.0).max(0.0));
                ui.label(egui::RichText::new(Icons::APPLE).size(64.0).color(egui::Color32::WHITE));
                ui.add_space(24.0);
                ui.add(
                    egui::ProgressBar::new(progress.fraction())
                        .desired_width(240.0)
                        .desired_height(6.0)
                        .fill(egui::Color32::WHITE),
                );
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(progress.message)
                        .size(12.0)
                        .color(Theme::TEXT_SECONDARY),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("{} · {}%", name, progress.percent))
                        .size(11.0)
                        .color(Theme::TEXT_MUTED),
                );
            });
        });
}
