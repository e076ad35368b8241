//! Desktop panel - Menu bar, windows and dock of the running machine
//!
//! Pointer input is translated to desktop-local coordinates and fed to the
//! window manager. Presses over the menu bar, the dock strip, or any other
//! egui layer (menus, dialogs, toasts) never reach it.

use egui::{pos2, vec2, CursorIcon, Pos2, Rect, Ui};

use crate::core::AppState;
use crate::desktop::chrome::ChromeHit;
use crate::desktop::interaction::Gesture;
use crate::desktop::{AppId, AppWindow};
use crate::ui::components::{Dock, MenuAction, MenuBar, WindowFrame};
use crate::ui::dialogs::{ConfirmAction, DialogState};
use crate::ui::theme::Theme;

fn paint_wallpaper(ui: &Ui, rect: Rect) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), Theme::DESKTOP_TOP);
    mesh.colored_vertex(rect.right_top(), Theme::DESKTOP_TOP);
    mesh.colored_vertex(rect.left_bottom(), Theme::DESKTOP_BOTTOM);
    mesh.colored_vertex(rect.right_bottom(), Theme::DESKTOP_BOTTOM);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    ui.painter().add(egui::Shape::mesh(mesh));
}

pub fn render(ui: &mut Ui, state: &mut AppState, dialog: &mut DialogState) {
    let rect = ui.max_rect();
    let origin = rect.min.to_vec2();
    let layer = ui.layer_id();
    let to_local = |p: Pos2| p - origin;

    state.session.set_viewport(rect.size());
    let machine = state.active_machine().map(|m| (m.id, m.name().to_string()));
    let Some(desktop) = state.session.desktop_mut() else {
        return;
    };

    let layout = desktop.windows.layout().clone();
    let menu_rect = Rect::from_min_size(rect.min, vec2(rect.width(), layout.menu_bar_height));
    let dock_rect = Rect::from_min_max(pos2(rect.min.x, rect.max.y - layout.dock_height), rect.max);

    let (pressed, released, latest) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.latest_pos(),
        )
    });
    let popup_open = ui.ctx().memory(|m| m.any_popup_open());

    if let Some(pos) = latest {
        let on_desktop = ui.ctx().layer_id_at(pos) == Some(layer)
            && !menu_rect.contains(pos)
            && !dock_rect.contains(pos);
        if pressed && on_desktop && !popup_open {
            desktop.windows.pointer_pressed(to_local(pos));
        }
        if desktop.windows.wants_pointer_moves() {
            desktop.windows.pointer_moved(to_local(pos));
        }
    }
    if released {
        match latest {
            Some(pos) => desktop.windows.pointer_released(to_local(pos)),
            // pointer left the window: end the gesture without acting
            None => desktop.windows.pointer_cancelled(),
        }
    }

    let hovered = latest
        .filter(|pos| rect.contains(*pos))
        .and_then(|pos| desktop.windows.window_at(to_local(pos)));
    match (desktop.windows.gesture(), hovered) {
        (Gesture::Dragging { .. }, _) => ui.ctx().set_cursor_icon(CursorIcon::Grabbing),
        (Gesture::Resizing { .. }, _) | (_, Some((_, ChromeHit::ResizeHandle))) => {
            ui.ctx().set_cursor_icon(CursorIcon::ResizeNwSe)
        }
        _ => {}
    }

    paint_wallpaper(ui, rect);

    desktop.sync_contents();
    let active = desktop.windows.active_window_id();
    let visible: Vec<(AppWindow, Rect)> = desktop
        .windows
        .windows_by_z()
        .into_iter()
        .filter(|w| !w.minimized)
        .map(|w| (w.clone(), desktop.windows.frame_rect(w).translate(origin)))
        .collect();
    for (window, frame) in &visible {
        let show_glyphs = matches!(hovered, Some((id, hit)) if id == window.id && hit.is_control_region());
        WindowFrame::paint(
            ui,
            *frame,
            window,
            active == Some(window.id),
            show_glyphs,
            desktop.content_mut(window.id),
        );
    }

    let title = desktop.menu_title();
    match MenuBar::show(ui, menu_rect, &title, active.is_some()) {
        Some(MenuAction::AboutThisMac) => {
            if let Some((id, _)) = &machine {
                *dialog = DialogState::MachineDetails(*id);
            }
        }
        Some(MenuAction::SystemSettings) => {
            desktop.windows.open_application(AppId::Settings);
        }
        Some(MenuAction::ShutDown) => {
            let name = machine.as_ref().map(|(_, n)| n.as_str()).unwrap_or("this machine");
            *dialog = DialogState::confirm(
                "Shut Down",
                format!("Are you sure you want to shut down {}?", name),
                ConfirmAction::ShutDown,
            );
        }
        Some(MenuAction::CloseWindow) => {
            if let Some(id) = active {
                desktop.windows.close_window(id);
            }
        }
        None => {}
    }

    let items = desktop.dock_items();
    if let Some(app) = Dock::show(ui, dock_rect, &items) {
        desktop.click_dock(app);
    }
}
