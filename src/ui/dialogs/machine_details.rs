//! Machine details dialog, also shown as "About This Mac"

use egui::Context;

use crate::core::{AppState, MachineId};
use crate::ui::dialogs::DialogState;
use crate::ui::theme::Theme;

fn row(ui: &mut egui::Ui, label: &str, value: impl Into<egui::WidgetText>) {
    ui.label(egui::RichText::new(label).color(Theme::TEXT_MUTED));
    ui.label(value);
    ui.end_row();
}

pub fn render(ctx: &Context, id: MachineId, state: &AppState, dialog: &mut DialogState) {
    let Some(machine) = state.machines.get(id) else {
        *dialog = DialogState::None;
        return;
    };
    let config = &machine.config;

    let mut open = true;

    egui::Window::new(format!("About {}", machine.name()))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(machine.status.label())
                        .size(18.0)
                        .color(Theme::status_color(machine.status)),
                );
                if machine.status.is_running() {
                    ui.label(
                        egui::RichText::new(format!("Uptime: {}", machine.uptime_string()))
                            .color(Theme::TEXT_SECONDARY),
                    );
                }
            });

            ui.add_space(12.0);

            egui::Frame::none()
                .fill(Theme::BG_SECONDARY)
                .rounding(egui::Rounding::same(8.0))
                .inner_margin(egui::Margin::same(12.0))
                .show(ui, |ui| {
                    egui::Grid::new("machine_details_grid")
                        .num_columns(2)
                        .spacing([16.0, 4.0])
                        .show(ui, |ui| {
                            row(ui, "Model", config.model.as_str());
                            row(ui, "macOS", config.os_version.as_str());
                            row(ui, "Processor", config.cpu.as_str());
                            row(ui, "Memory", format!("{} GB", config.ram_gb));
                            row(ui, "Display", format!("{} × {}", config.screen_width, config.screen_height));
                            row(ui, "Boot media", config.boot_media.label());
                            row(ui, "JIT", if config.jit_enabled { "Enabled" } else { "Disabled" });
                            row(
                                ui,
                                "MMU",
                                config
                                    .mmu_mode
                                    .map_or("Disabled".to_string(), |mode| mode.label().to_string()),
                            );
                            row(ui, "Created", machine.created_at.format("%Y-%m-%d %H:%M").to_string());
                            if let Some(started) = machine.started_at {
                                row(ui, "Last started", started.format("%Y-%m-%d %H:%M").to_string());
                            }
                            row(ui, "Boots", machine.boot_count.to_string());
                        });
                });

            ui.add_space(12.0);
            ui.label(egui::RichText::new("Storage").strong());
            for controller in &config.storage {
                ui.label(
                    egui::RichText::new(format!(
                        "{} ({}) · {} GB",
                        controller.name, controller.id, controller.size_gb
                    ))
                    .color(Theme::TEXT_SECONDARY),
                );
            }

            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(machine.id.to_string())
                    .small()
                    .color(Theme::TEXT_MUTED),
            );
        });

    if !open {
        *dialog = DialogState::None;
    }
}
