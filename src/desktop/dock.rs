//! Dock controller - Running indicators and launch routing

use std::sync::Arc;

use egui::Color32;
use tracing::debug;

use super::apps::{AppId, ApplicationRegistry};
use super::manager::WindowManager;
use super::window::WindowId;

/// Pointer distance at which magnification falls back to 1.0
pub const MAGNIFICATION_RANGE: f32 = 100.0;
/// Extra scale applied directly under the pointer
pub const MAGNIFICATION_BOOST: f32 = 0.2;

/// One icon in the dock
#[derive(Debug, Clone, PartialEq)]
pub struct DockItem {
    pub app: AppId,
    pub label: &'static str,
    pub icon: &'static str,
    pub accent: Color32,
    pub running: bool,
}

#[derive(Debug)]
pub struct DockController {
    apps: Arc<ApplicationRegistry>,
}

impl DockController {
    pub fn new(apps: Arc<ApplicationRegistry>) -> Self {
        Self { apps }
    }

    /// Icons in dock order with their running indicator
    pub fn items(&self, windows: &WindowManager) -> Vec<DockItem> {
        self.apps
            .dock_order()
            .map(|entry| DockItem {
                app: entry.id,
                label: entry.dock_label,
                icon: entry.icon,
                accent: entry.accent,
                running: Self::is_running(windows, entry.id),
            })
            .collect()
    }

    /// An app is running while it has a window, minimized or not
    pub fn is_running(windows: &WindowManager, app: AppId) -> bool {
        windows.window_for_app(app).is_some()
    }

    pub fn on_icon_click(&self, windows: &mut WindowManager, app: AppId) -> WindowId {
        debug!("Dock click on {}", app);
        windows.open_application(app)
    }

    /// Icon scale for a pointer at `pointer_x`
    pub fn magnification(icon_center_x: f32, pointer_x: Option<f32>) -> f32 {
        let Some(pointer_x) = pointer_x else {
            return 1.0;
        };
        let distance = (icon_center_x - pointer_x).abs();
        1.0 + MAGNIFICATION_BOOST * (1.0 - distance / MAGNIFICATION_RANGE).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use egui::vec2;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::settings::DesktopLayout;

    fn setup() -> (DockController, WindowManager) {
        let apps = Arc::new(ApplicationRegistry::builtin());
        let wm = WindowManager::new(Arc::clone(&apps), DesktopLayout::default(), vec2(1280.0, 800.0));
        (DockController::new(apps), wm)
    }

    #[test]
    fn running_tracks_window_existence() {
        let (dock, mut wm) = setup();
        assert!(!DockController::is_running(&wm, AppId::Notes));

        let id = dock.on_icon_click(&mut wm, AppId::Notes);
        assert!(DockController::is_running(&wm, AppId::Notes));

        wm.minimize_window(id);
        assert!(DockController::is_running(&wm, AppId::Notes));

        wm.close_window(id);
        assert!(!DockController::is_running(&wm, AppId::Notes));
    }

    #[test]
    fn click_restores_minimized_window() {
        let (dock, mut wm) = setup();
        let id = dock.on_icon_click(&mut wm, AppId::Terminal);
        wm.minimize_window(id);

        assert_eq!(dock.on_icon_click(&mut wm, AppId::Terminal), id);
        assert_eq!(wm.active_window_id(), Some(id));
        assert_eq!(wm.len(), 1);
    }

    #[test]
    fn items_follow_dock_order() {
        let (dock, mut wm) = setup();
        dock.on_icon_click(&mut wm, AppId::Calculator);

        let items = dock.items(&wm);
        assert_eq!(items.len(), AppId::ALL.len());
        assert_eq!(items[0].app, AppId::Finder);
        let running: Vec<AppId> = items.iter().filter(|i| i.running).map(|i| i.app).collect();
        assert_eq!(running, vec![AppId::Calculator]);
    }

    #[test]
    fn magnification_peaks_under_pointer() {
        assert_eq!(DockController::magnification(50.0, None), 1.0);
        assert!((DockController::magnification(50.0, Some(50.0)) - 1.2).abs() < 1e-6);
        assert!((DockController::magnification(50.0, Some(100.0)) - 1.1).abs() < 1e-6);
        assert_eq!(DockController::magnification(50.0, Some(400.0)), 1.0);
    }

    #[test]
    fn hover_leaves_windows_untouched() {
        let (dock, mut wm) = setup();
        dock.on_icon_click(&mut wm, AppId::Notes);
        dock.on_icon_click(&mut wm, AppId::Finder);
        let before = wm.windows().to_vec();

        for item in dock.items(&wm) {
            let _ = DockController::magnification(10.0, Some(12.0));
            let _ = item.running;
        }

        assert_eq!(wm.windows(), before.as_slice());
    }
}
