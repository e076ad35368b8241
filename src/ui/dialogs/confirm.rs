//! Confirmation dialog

use egui::Context;

use crate::ui::dialogs::{ConfirmAction, DialogState};
use crate::ui::theme::Theme;

/// Returns the action once the user confirms
pub fn render(
    ctx: &Context,
    title: &str,
    message: &str,
    action: ConfirmAction,
    dialog: &mut DialogState,
) -> Option<ConfirmAction> {
    let mut open = true;
    let mut confirmed = None;

    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(350.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let label = match action {
                    ConfirmAction::DeleteMachine(_) => "Delete",
                    ConfirmAction::ShutDown => "Shut Down",
                };
                if ui
                    .button(egui::RichText::new(label).color(Theme::ERROR))
                    .clicked()
                {
                    confirmed = Some(action);
                    *dialog = DialogState::None;
                }

                if ui.button("Cancel").clicked() {
                    *dialog = DialogState::None;
                }
            });
        });

    if !open {
        *dialog = DialogState::None;
    }
    confirmed
}
