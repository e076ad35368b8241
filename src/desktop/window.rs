//! Application windows

use egui::{Pos2, Rect, Vec2};
use uuid::Uuid;

use super::apps::AppId;

/// Unique identifier for a window instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub Uuid);

impl WindowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An open application window
#[derive(Debug, Clone, PartialEq)]
pub struct AppWindow {
    pub id: WindowId,
    pub app: AppId,
    pub title: String,
    /// Stored top-left corner; ignored while maximized
    pub position: Pos2,
    /// Stored size; ignored while maximized
    pub size: Vec2,
    pub minimized: bool,
    pub maximized: bool,
    /// Stacking key, higher is in front
    pub z_index: u64,
}

impl AppWindow {
    pub fn new(app: AppId, position: Pos2, size: Vec2, z_index: u64) -> Self {
        Self {
            id: WindowId::new(),
            app,
            title: app.title(),
            position,
            size,
            minimized: false,
            maximized: false,
            z_index,
        }
    }

    /// Geometry when not maximized
    pub fn restored_rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }
}
