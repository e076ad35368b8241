//! Machine card component for the manager grid

use egui::{Color32, Ui};

use crate::core::VirtualMachine;
use crate::ui::theme::{Icons, Theme};

use super::status_badge::StatusBadge;

pub struct MachineCard;

impl MachineCard {
    fn action_button(ui: &mut Ui, icon: &str, tooltip: &str, color: Color32, enabled: bool) -> bool {
        let btn = egui::Button::new(egui::RichText::new(icon).size(13.0).color(color))
            .fill(Theme::BG_TERTIARY)
            .rounding(egui::Rounding::same(6.0))
            .min_size(egui::vec2(32.0, 28.0));

        ui.add_enabled(enabled, btn)
            .on_hover_text(tooltip)
            .on_disabled_hover_text(format!("{} (already running)", tooltip))
            .clicked()
    }

    fn detail_row(ui: &mut Ui, label: &str, value: &str) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(label).size(11.0).color(Theme::TEXT_MUTED));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(value).size(12.0).color(Theme::TEXT_SECONDARY));
            });
        });
    }

    pub fn grid(ui: &mut Ui, machine: &VirtualMachine) -> CardResponse {
        let mut response = CardResponse::default();
        let running = machine.status.is_running();
        let status_color = Theme::status_color(machine.status);
        let config = &machine.config;

        egui::Frame::none()
            .fill(Theme::BG_SECONDARY)
            .rounding(egui::Rounding::same(12.0))
            .stroke(egui::Stroke::new(
                1.0,
                if running {
                    status_color.linear_multiply(0.4)
                } else {
                    Theme::BORDER_LIGHT
                },
            ))
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_width(260.0);

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(Icons::MACHINE).size(28.0));
                    ui.add_space(6.0);
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(machine.name())
                                .strong()
                                .size(15.0)
                                .color(Theme::TEXT_PRIMARY),
                        );
                        ui.label(
                            egui::RichText::new(&config.model)
                                .size(12.0)
                                .color(Theme::TEXT_MUTED),
                        );
                    });
                });

                ui.add_space(10.0);
                StatusBadge::show(ui, machine.status);
                ui.add_space(10.0);

                Self::detail_row(ui, "OS", &config.os_version);
                Self::detail_row(ui, "CPU", &config.cpu);
                Self::detail_row(ui, "RAM", &format!("{} GB", config.ram_gb));
                Self::detail_row(ui, "Storage", &format!("{} GB", config.storage_gb));
                if running {
                    Self::detail_row(ui, "Uptime", &machine.uptime_string());
                }

                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if Self::action_button(ui, Icons::PLAY, "Start", Theme::SUCCESS, !running) {
                        response.action = Some(CardAction::Start);
                    }
                    ui.add_space(4.0);
                    if Self::action_button(ui, Icons::INFO, "Details", Theme::INFO, true) {
                        response.action = Some(CardAction::Details);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if Self::action_button(ui, Icons::TRASH, "Delete", Theme::ERROR_LIGHT, true) {
                            response.action = Some(CardAction::Delete);
                        }
                    });
                });
            });

        response
    }
}

/// Response from machine card interaction
#[derive(Default)]
pub struct CardResponse {
    pub action: Option<CardAction>,
}

/// Actions that can be triggered from a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Start,
    Details,
    Delete,
}
