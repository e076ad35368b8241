//! Drag and resize gestures
//!
//! A gesture owns a [`PointerSubscription`] for as long as it is active.
//! The presentation layer forwards pointer moves only while
//! [`PointerListeners::active`] is non-zero, so releasing the
//! subscription (pointer-up, window closed, window manager dropped)
//! detaches the move stream.

use std::cell::Cell;
use std::rc::Rc;

use egui::{Pos2, Vec2};

use super::chrome::WindowControl;
use super::window::WindowId;

/// Counts live pointer-move subscriptions
#[derive(Debug, Clone, Default)]
pub struct PointerListeners {
    active: Rc<Cell<usize>>,
}

impl PointerListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> PointerSubscription {
        self.active.set(self.active.get() + 1);
        PointerSubscription {
            active: Rc::clone(&self.active),
        }
    }

    /// Number of subscriptions currently held
    pub fn active(&self) -> usize {
        self.active.get()
    }
}

/// Scoped subscription to pointer moves, released on drop
#[derive(Debug)]
pub struct PointerSubscription {
    active: Rc<Cell<usize>>,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
    }
}

/// Pointer interaction state of the window manager
#[derive(Debug, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Title bar grabbed; `grab_offset` is pointer minus window origin
    Dragging {
        window: WindowId,
        grab_offset: Vec2,
        _subscription: PointerSubscription,
    },
    /// Resize handle grabbed
    Resizing {
        window: WindowId,
        start_pointer: Pos2,
        start_size: Vec2,
        _subscription: PointerSubscription,
    },
    /// A chrome control is pressed and fires if released over it
    ControlArmed {
        window: WindowId,
        control: WindowControl,
    },
}

impl Gesture {
    /// Window the gesture targets, if any
    pub fn window(&self) -> Option<WindowId> {
        match self {
            Self::Idle => None,
            Self::Dragging { window, .. }
            | Self::Resizing { window, .. }
            | Self::ControlArmed { window, .. } => Some(*window),
        }
    }

    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging { .. } => "dragging",
            Self::Resizing { .. } => "resizing",
            Self::ControlArmed { .. } => "control",
        }
    }
}

#[cfg(test)]
mod tests {
    use egui::vec2;

    use super::*;

    #[test]
    fn subscriptions_release_on_drop() {
        let listeners = PointerListeners::new();
        let first = listeners.subscribe();
        let second = listeners.subscribe();
        assert_eq!(listeners.active(), 2);

        drop(first);
        assert_eq!(listeners.active(), 1);
        drop(second);
        assert_eq!(listeners.active(), 0);
    }

    #[test]
    fn resetting_a_gesture_releases_its_subscription() {
        let listeners = PointerListeners::new();
        let window = WindowId::new();
        let mut gesture = Gesture::Dragging {
            window,
            grab_offset: vec2(5.0, 5.0),
            _subscription: listeners.subscribe(),
        };
        assert_eq!(gesture.window(), Some(window));
        assert_eq!(listeners.active(), 1);

        gesture = Gesture::Idle;
        assert!(gesture.is_idle());
        assert_eq!(listeners.active(), 0);
    }
}
