//! Dock strip along the bottom of the simulated desktop

use egui::{pos2, vec2, Align2, FontId, Rect, Rounding, Sense, Ui};

use crate::desktop::{AppId, DockController, DockItem};
use crate::ui::theme::Theme;

const ICON_SIZE: f32 = 44.0;
const ICON_GAP: f32 = 8.0;

pub struct Dock;

impl Dock {
    /// Paint the dock centred in `area` and return the clicked app, if any
    pub fn show(ui: &mut Ui, area: Rect, items: &[DockItem]) -> Option<AppId> {
        let mut clicked = None;
        let shelf = Self::shelf_rect(area, items.len());
        ui.painter().rect_filled(shelf, Rounding::same(16.0), Theme::DOCK);

        let pointer_x = ui
            .ctx()
            .pointer_hover_pos()
            .filter(|pos| area.contains(*pos))
            .map(|pos| pos.x);

        for (index, item) in items.iter().enumerate() {
            let center_x = shelf.left() + ICON_GAP + ICON_SIZE / 2.0 + index as f32 * (ICON_SIZE + ICON_GAP);
            let scale = DockController::magnification(center_x, pointer_x);
            let size = ICON_SIZE * scale;
            let icon = Rect::from_center_size(
                pos2(center_x, shelf.bottom() - 6.0 - size / 2.0),
                vec2(size, size),
            );

            let response = ui
                .interact(icon, ui.id().with(("dock", item.app.key())), Sense::click())
                .on_hover_text(item.label);
            if response.clicked() {
                clicked = Some(item.app);
            }

            let painter = ui.painter();
            painter.rect_filled(icon, Rounding::same(10.0 * scale), item.accent);
            painter.text(
                icon.center(),
                Align2::CENTER_CENTER,
                item.icon,
                FontId::proportional(20.0 * scale),
                egui::Color32::WHITE,
            );
            if item.running {
                painter.circle_filled(pos2(center_x, shelf.bottom() - 3.0), 2.0, Theme::TEXT_PRIMARY);
            }
        }

        clicked
    }

    /// Background shelf for `count` icons
    fn shelf_rect(area: Rect, count: usize) -> Rect {
        let width = count as f32 * (ICON_SIZE + ICON_GAP) + ICON_GAP;
        Rect::from_center_size(
            pos2(area.center().x, area.bottom() - 6.0 - (ICON_SIZE + 12.0) / 2.0),
            vec2(width, ICON_SIZE + 12.0),
        )
    }
}
