//! Menu bar across the top of the simulated desktop

use egui::{Align, Layout, Rect, RichText, Ui, UiBuilder};

use crate::ui::theme::{Icons, Theme};

/// Commands issued from the menu bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AboutThisMac,
    SystemSettings,
    ShutDown,
    CloseWindow,
}

pub struct MenuBar;

impl MenuBar {
    /// `title` is the active application's name
    pub fn show(ui: &mut Ui, rect: Rect, title: &str, has_active_window: bool) -> Option<MenuAction> {
        let mut action = None;
        ui.painter().rect_filled(rect, 0.0, Theme::MENU_BAR);

        let mut bar = ui.new_child(
            UiBuilder::new()
                .max_rect(rect.shrink2(egui::vec2(10.0, 0.0)))
                .layout(Layout::left_to_right(Align::Center)),
        );
        bar.spacing_mut().button_padding = egui::vec2(8.0, 2.0);
        bar.visuals_mut().override_text_color = Some(Theme::TEXT_PRIMARY);

        bar.menu_button(RichText::new(Icons::APPLE).size(14.0), |ui| {
            if ui.button("About This Mac").clicked() {
                action = Some(MenuAction::AboutThisMac);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("System Settings...").clicked() {
                action = Some(MenuAction::SystemSettings);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Shut Down...").clicked() {
                action = Some(MenuAction::ShutDown);
                ui.close_menu();
            }
        });

        bar.label(RichText::new(title).size(13.0).strong());

        bar.menu_button(RichText::new("File").size(13.0), |ui| {
            if ui
                .add_enabled(has_active_window, egui::Button::new("Close Window"))
                .clicked()
            {
                action = Some(MenuAction::CloseWindow);
                ui.close_menu();
            }
        });
        for name in ["Edit", "View", "Window", "Help"] {
            bar.label(RichText::new(name).size(13.0).color(Theme::TEXT_SECONDARY));
        }

        bar.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let now = chrono::Local::now();
            ui.label(RichText::new(now.format("%a %b %-d  %-I:%M %p").to_string()).size(13.0));
        });

        action
    }
}
