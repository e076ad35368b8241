//! Desktop module - Windows, chrome, gestures and dock of a running machine

pub mod apps;
pub mod chrome;
pub mod dock;
pub mod interaction;
pub mod manager;
pub mod window;

use std::collections::HashMap;
use std::sync::Arc;

use egui::Vec2;
use tracing::debug;

pub use apps::{AppContent, AppId, ApplicationRegistry};
pub use dock::{DockController, DockItem};
pub use manager::WindowManager;
pub use window::{AppWindow, WindowId};

use crate::core::settings::DesktopLayout;

/// Everything mounted while a machine is running. Dropping it discards
/// all window state, application content included.
#[derive(Debug)]
pub struct Desktop {
    pub windows: WindowManager,
    pub dock: DockController,
    apps: Arc<ApplicationRegistry>,
    contents: HashMap<WindowId, AppContent>,
}

impl Desktop {
    pub fn new(apps: Arc<ApplicationRegistry>, layout: DesktopLayout, viewport: Vec2) -> Self {
        Self {
            windows: WindowManager::new(Arc::clone(&apps), layout, viewport),
            dock: DockController::new(Arc::clone(&apps)),
            apps,
            contents: HashMap::new(),
        }
    }

    /// Launch content for windows that have none yet and drop the content
    /// of windows that have closed. Minimized windows keep theirs.
    pub fn sync_contents(&mut self) {
        let windows = self.windows.windows();
        self.contents.retain(|id, _| {
            let open = windows.iter().any(|w| w.id == *id);
            if !open {
                debug!("Dropping content of closed window {}", id);
            }
            open
        });
        for window in windows {
            self.contents
                .entry(window.id)
                .or_insert_with(|| self.apps.launch(window.app));
        }
    }

    pub fn content_mut(&mut self, id: WindowId) -> Option<&mut AppContent> {
        self.contents.get_mut(&id)
    }

    pub fn dock_items(&self) -> Vec<DockItem> {
        self.dock.items(&self.windows)
    }

    pub fn click_dock(&mut self, app: AppId) -> WindowId {
        let id = self.dock.on_icon_click(&mut self.windows, app);
        self.sync_contents();
        id
    }

    /// Name shown in the menu bar: the active app, else Finder
    pub fn menu_title(&self) -> String {
        self.windows
            .active_window()
            .map(|w| w.title.clone())
            .unwrap_or_else(|| AppId::Finder.title())
    }
}

#[cfg(test)]
mod tests {
    use egui::vec2;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::desktop::apps::calculator::Key;

    fn desktop() -> Desktop {
        Desktop::new(
            Arc::new(ApplicationRegistry::builtin()),
            DesktopLayout::default(),
            vec2(1280.0, 800.0),
        )
    }

    fn calculator_display(desktop: &mut Desktop, id: WindowId) -> Option<String> {
        match desktop.content_mut(id)? {
            AppContent::Calculator(calc) => Some(calc.display().to_string()),
            _ => None,
        }
    }

    #[test]
    fn content_lives_as_long_as_its_window() {
        let mut desktop = desktop();
        let id = desktop.click_dock(AppId::Calculator);
        if let Some(AppContent::Calculator(calc)) = desktop.content_mut(id) {
            calc.press(Key::Digit('7'));
        }
        assert_eq!(calculator_display(&mut desktop, id).as_deref(), Some("7"));

        desktop.windows.minimize_window(id);
        desktop.sync_contents();
        assert_eq!(desktop.click_dock(AppId::Calculator), id);
        assert_eq!(calculator_display(&mut desktop, id).as_deref(), Some("7"));

        desktop.windows.close_window(id);
        desktop.sync_contents();
        assert!(desktop.contents.is_empty());

        let reopened = desktop.click_dock(AppId::Calculator);
        assert_ne!(reopened, id);
        assert_eq!(calculator_display(&mut desktop, reopened).as_deref(), Some("0"));
    }

    #[test]
    fn windows_opened_outside_the_dock_get_content_on_sync() {
        let mut desktop = desktop();
        let settings = desktop.windows.open_application(AppId::Settings);
        let mail = desktop.windows.open_application(AppId::Mail);
        assert!(desktop.content_mut(settings).is_none());

        desktop.sync_contents();
        assert!(matches!(desktop.content_mut(settings), Some(AppContent::Settings(_))));
        assert!(matches!(desktop.content_mut(mail), Some(AppContent::Unavailable)));
        assert_eq!(desktop.contents.len(), 2);
    }

    #[test]
    fn menu_title_follows_active_window() {
        let mut desktop = desktop();
        assert_eq!(desktop.menu_title(), "Finder");

        let id = desktop.click_dock(AppId::Terminal);
        assert_eq!(desktop.menu_title(), "Terminal");
        assert!(desktop.dock_items().iter().any(|i| i.app == AppId::Terminal && i.running));

        desktop.windows.minimize_window(id);
        assert_eq!(desktop.menu_title(), "Finder");
    }
}
