//! Window chrome geometry and hit testing

use egui::{pos2, vec2, Pos2, Rect};

pub const TITLE_BAR_HEIGHT: f32 = 28.0;
pub const CONTROL_SIZE: f32 = 12.0;
pub const CONTROL_GAP: f32 = 8.0;
pub const CONTROL_INSET: f32 = 12.0;
pub const RESIZE_HANDLE_SIZE: f32 = 16.0;

/// Traffic-light buttons, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowControl {
    Close,
    Minimize,
    Maximize,
}

impl WindowControl {
    pub const ALL: [WindowControl; 3] = [
        WindowControl::Close,
        WindowControl::Minimize,
        WindowControl::Maximize,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Close => "×",
            Self::Minimize => "−",
            Self::Maximize => "+",
        }
    }
}

/// Part of a window under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    Control(WindowControl),
    /// Inside the controls container but between buttons
    ControlGap,
    TitleBar,
    ResizeHandle,
    Content,
}

impl ChromeHit {
    /// Presses here must never start a drag
    pub fn is_control_region(&self) -> bool {
        matches!(self, Self::Control(_) | Self::ControlGap)
    }
}

pub fn title_bar_rect(frame: Rect) -> Rect {
    Rect::from_min_size(frame.min, vec2(frame.width(), TITLE_BAR_HEIGHT.min(frame.height())))
}

pub fn content_rect(frame: Rect) -> Rect {
    Rect::from_min_max(pos2(frame.min.x, title_bar_rect(frame).max.y), frame.max)
}

/// Rectangle holding all three controls
pub fn controls_rect(frame: Rect) -> Rect {
    let top = frame.min.y + (TITLE_BAR_HEIGHT - CONTROL_SIZE) / 2.0;
    let left = frame.min.x + CONTROL_INSET;
    let width = CONTROL_SIZE * 3.0 + CONTROL_GAP * 2.0;
    Rect::from_min_size(pos2(left, top), vec2(width, CONTROL_SIZE))
}

pub fn control_rect(frame: Rect, control: WindowControl) -> Rect {
    let index = match control {
        WindowControl::Close => 0.0,
        WindowControl::Minimize => 1.0,
        WindowControl::Maximize => 2.0,
    };
    let container = controls_rect(frame);
    Rect::from_min_size(
        pos2(container.min.x + index * (CONTROL_SIZE + CONTROL_GAP), container.min.y),
        vec2(CONTROL_SIZE, CONTROL_SIZE),
    )
}

pub fn resize_handle_rect(frame: Rect) -> Rect {
    Rect::from_min_max(frame.max - vec2(RESIZE_HANDLE_SIZE, RESIZE_HANDLE_SIZE), frame.max)
}

/// Classify `pos` against a window frame. `resizable` is false for
/// maximized windows, which have no resize handle.
pub fn hit_test(frame: Rect, pos: Pos2, resizable: bool) -> Option<ChromeHit> {
    if !frame.contains(pos) {
        return None;
    }
    if controls_rect(frame).contains(pos) {
        let control = WindowControl::ALL
            .into_iter()
            .find(|c| control_rect(frame, *c).contains(pos));
        return Some(control.map_or(ChromeHit::ControlGap, ChromeHit::Control));
    }
    if title_bar_rect(frame).contains(pos) {
        return Some(ChromeHit::TitleBar);
    }
    if resizable && resize_handle_rect(frame).contains(pos) {
        return Some(ChromeHit::ResizeHandle);
    }
    Some(ChromeHit::Content)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn frame() -> Rect {
        Rect::from_min_size(pos2(100.0, 50.0), vec2(400.0, 300.0))
    }

    #[test]
    fn controls_are_laid_out_left_to_right() {
        let f = frame();
        assert_eq!(hit_test(f, pos2(118.0, 64.0), true), Some(ChromeHit::Control(WindowControl::Close)));
        assert_eq!(hit_test(f, pos2(138.0, 64.0), true), Some(ChromeHit::Control(WindowControl::Minimize)));
        assert_eq!(hit_test(f, pos2(158.0, 64.0), true), Some(ChromeHit::Control(WindowControl::Maximize)));
    }

    #[test]
    fn gaps_between_controls_are_not_title_bar() {
        let hit = hit_test(frame(), pos2(128.0, 64.0), true).unwrap();
        assert_eq!(hit, ChromeHit::ControlGap);
        assert!(hit.is_control_region());
    }

    #[test]
    fn title_bar_content_and_handle() {
        let f = frame();
        assert_eq!(hit_test(f, pos2(300.0, 60.0), true), Some(ChromeHit::TitleBar));
        assert_eq!(hit_test(f, pos2(300.0, 200.0), true), Some(ChromeHit::Content));
        assert_eq!(hit_test(f, pos2(495.0, 345.0), true), Some(ChromeHit::ResizeHandle));
        assert_eq!(hit_test(f, pos2(495.0, 345.0), false), Some(ChromeHit::Content));
        assert_eq!(hit_test(f, pos2(10.0, 10.0), true), None);
    }
}
