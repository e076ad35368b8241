//! Window chrome painting
//!
//! Chrome is paint-only: pointer input on frames goes through the window
//! manager. The body hosts the window's application content.

use egui::{vec2, Align2, FontId, Rect, Rounding, Sense, Stroke, Ui, UiBuilder};

use crate::desktop::chrome::{self, WindowControl};
use crate::desktop::{AppContent, AppWindow};
use crate::ui::theme::Theme;

pub struct WindowFrame;

impl WindowFrame {
    /// Paint `window` into `frame` (screen coordinates). Control glyphs
    /// appear while the pointer is over the controls.
    pub fn paint(
        ui: &mut Ui,
        frame: Rect,
        window: &AppWindow,
        active: bool,
        show_glyphs: bool,
        content: Option<&mut AppContent>,
    ) {
        // Frame hit area covers widgets of lower windows
        ui.interact(frame, ui.id().with(window.id), Sense::click_and_drag());

        let rounding = if window.maximized {
            Rounding::ZERO
        } else {
            Rounding::same(10.0)
        };
        let painter = ui.painter().clone();

        painter.add(egui::Shadow {
            offset: vec2(0.0, if active { 12.0 } else { 6.0 }),
            blur: if active { 32.0 } else { 16.0 },
            spread: 0.0,
            color: egui::Color32::from_black_alpha(if active { 110 } else { 60 }),
        }
        .as_shape(frame, rounding));
        painter.rect_filled(frame, rounding, Theme::WINDOW_BODY);

        let title_bar = chrome::title_bar_rect(frame);
        painter.rect_filled(
            title_bar,
            Rounding {
                nw: rounding.nw,
                ne: rounding.ne,
                sw: 0.0,
                se: 0.0,
            },
            if active {
                Theme::WINDOW_TITLE
            } else {
                Theme::WINDOW_TITLE_INACTIVE
            },
        );
        painter.line_segment(
            [title_bar.left_bottom(), title_bar.right_bottom()],
            Stroke::new(1.0, egui::Color32::from_black_alpha(30)),
        );
        painter.text(
            title_bar.center(),
            Align2::CENTER_CENTER,
            &window.title,
            FontId::proportional(13.0),
            if active {
                Theme::WINDOW_TEXT
            } else {
                Theme::TEXT_MUTED
            },
        );

        for control in WindowControl::ALL {
            let rect = chrome::control_rect(frame, control);
            let fill = match (active, control) {
                (false, _) => Theme::CONTROL_INACTIVE,
                (true, WindowControl::Close) => Theme::CONTROL_CLOSE,
                (true, WindowControl::Minimize) => Theme::CONTROL_MINIMIZE,
                (true, WindowControl::Maximize) => Theme::CONTROL_MAXIMIZE,
            };
            painter.circle_filled(rect.center(), chrome::CONTROL_SIZE / 2.0, fill);
            if show_glyphs {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    control.glyph(),
                    FontId::proportional(10.0),
                    egui::Color32::from_black_alpha(150),
                );
            }
        }

        if !window.maximized {
            let handle = chrome::resize_handle_rect(frame);
            for i in 1..=3 {
                let inset = i as f32 * 4.0;
                painter.line_segment(
                    [
                        handle.right_bottom() - vec2(inset, 2.0),
                        handle.right_bottom() - vec2(2.0, inset),
                    ],
                    Stroke::new(1.0, egui::Color32::from_black_alpha(50)),
                );
            }
        }

        let body = chrome::content_rect(frame).shrink(8.0);
        if let Some(content) = content.filter(|_| body.is_positive()) {
            let mut child = ui.new_child(UiBuilder::new().id_salt(window.id).max_rect(body));
            child.set_clip_rect(body.intersect(ui.clip_rect()));
            *child.visuals_mut() = egui::Visuals::light();
            child.visuals_mut().override_text_color = Some(Theme::WINDOW_TEXT);
            content.show(&mut child);
        }
    }
}
