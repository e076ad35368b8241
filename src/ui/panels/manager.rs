//! Manager panel - Grid of configured machines

use egui::Ui;
use tracing::error;

use crate::core::{AppState, MachineId};
use crate::ui::app::{Notification, NotificationLevel};
use crate::ui::components::{CardAction, MachineCard};
use crate::ui::dialogs::{ConfirmAction, DialogState};
use crate::ui::theme::{Icons, Theme};

pub fn render(
    ui: &mut Ui,
    state: &mut AppState,
    dialog: &mut DialogState,
    notifications: &mut Vec<Notification>,
) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "{} machines · {} running",
                state.total_count(),
                state.running_count()
            ))
            .color(Theme::TEXT_SECONDARY),
        );
    });

    ui.add_space(8.0);

    if state.machines.is_empty() {
        egui::Frame::none()
            .fill(Theme::BG_SECONDARY)
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(32.0))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(Icons::MACHINE).size(48.0));
                    ui.add_space(16.0);
                    ui.label(
                        egui::RichText::new("No virtual machines yet")
                            .size(16.0)
                            .color(Theme::TEXT_SECONDARY),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("Click '+ New Machine' to create one")
                            .color(Theme::TEXT_MUTED),
                    );
                });
            });
        return;
    }

    let mut pending = None;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for machine in state.machines.list() {
                    let response = MachineCard::grid(ui, machine);
                    if let Some(action) = response.action {
                        pending = Some((action, machine.id, machine.name().to_string()));
                    }
                }
            });
        });

    if let Some((action, id, name)) = pending {
        handle_card_action(action, id, &name, state, dialog, notifications);
    }
}

fn handle_card_action(
    action: CardAction,
    id: MachineId,
    name: &str,
    state: &mut AppState,
    dialog: &mut DialogState,
    notifications: &mut Vec<Notification>,
) {
    match action {
        CardAction::Start => {
            if let Err(e) = state.start_machine(id) {
                error!("{:#}", e);
                notifications.push(Notification::new(format!("{:#}", e), NotificationLevel::Error));
            }
        }
        CardAction::Details => {
            *dialog = DialogState::MachineDetails(id);
        }
        CardAction::Delete => {
            *dialog = DialogState::confirm(
                "Delete Machine",
                format!("Are you sure you want to delete '{}'? This cannot be undone.", name),
                ConfirmAction::DeleteMachine(id),
            );
        }
    }
}
