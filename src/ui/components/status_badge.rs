//! Status badge component

use egui::{Color32, Response, Rounding, Ui, Vec2};

use crate::core::{MachineStatus, SessionState};
use crate::ui::theme::Theme;

pub struct StatusBadge;

impl StatusBadge {
    /// Pill with a dot and the machine status
    pub fn show(ui: &mut Ui, status: MachineStatus) -> Response {
        let color = Theme::status_color(status);
        let (rect, response) = ui.allocate_exact_size(Vec2::new(90.0, 24.0), egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, Rounding::same(12.0), color.linear_multiply(0.15));
            painter.rect_stroke(
                rect,
                Rounding::same(12.0),
                egui::Stroke::new(1.0, color.linear_multiply(0.3)),
            );

            let dot_center = rect.left_center() + Vec2::new(14.0, 0.0);
            if status.is_running() {
                painter.circle_filled(dot_center, 6.0, color.linear_multiply(0.3));
            }
            painter.circle_filled(dot_center, 4.0, color);

            painter.text(
                rect.center() + Vec2::new(8.0, 0.0),
                egui::Align2::CENTER_CENTER,
                status.label(),
                egui::FontId::proportional(12.0),
                color,
            );
        }

        response
    }

    /// Dot and label for the shell status bar
    pub fn session(ui: &mut Ui, state: SessionState) -> Response {
        let color = Theme::session_color(state);

        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::new(10.0, 10.0), egui::Sense::hover());
            if ui.is_rect_visible(rect) {
                if state != SessionState::Manager {
                    ui.painter()
                        .circle_filled(rect.center(), 5.0, color.linear_multiply(0.3));
                }
                ui.painter().circle_filled(rect.center(), 3.5, color);
                ui.painter().circle_filled(
                    rect.center() + Vec2::new(-1.0, -1.0),
                    1.0,
                    Color32::from_white_alpha(40),
                );
            }
            ui.label(egui::RichText::new(state.label()).size(12.0).color(color));
        })
        .response
    }
}
