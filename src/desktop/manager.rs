//! Window manager - Owns every open window of a running session
//!
//! Coordinates are desktop-local: (0, 0) is the top-left corner of the
//! simulated screen, the menu bar occupies the top strip and the dock the
//! bottom strip. The active window is always the non-minimized window with
//! the highest z-index; z-indices come from a monotonically increasing
//! counter so ties cannot occur.

use std::sync::Arc;

use egui::{pos2, vec2, Pos2, Rect, Vec2};
use tracing::{debug, info, trace};

use super::apps::{AppId, ApplicationRegistry};
use super::chrome::{self, ChromeHit, WindowControl};
use super::interaction::{Gesture, PointerListeners};
use super::window::{AppWindow, WindowId};
use crate::core::settings::DesktopLayout;

/// First z-index handed out is `Z_BASE + 1`
pub const Z_BASE: u64 = 100;

pub struct WindowManager {
    windows: Vec<AppWindow>,
    /// Last z-index handed out
    z_counter: u64,
    apps: Arc<ApplicationRegistry>,
    layout: DesktopLayout,
    /// Size of the simulated screen
    viewport: Vec2,
    gesture: Gesture,
    listeners: PointerListeners,
}

impl WindowManager {
    pub fn new(apps: Arc<ApplicationRegistry>, layout: DesktopLayout, viewport: Vec2) -> Self {
        Self {
            windows: Vec::new(),
            z_counter: Z_BASE,
            apps,
            layout,
            viewport,
            gesture: Gesture::Idle,
            listeners: PointerListeners::new(),
        }
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        if self.viewport != viewport {
            trace!("Desktop viewport now {:?}", viewport);
            self.viewport = viewport;
        }
    }

    #[cfg(test)]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn layout(&self) -> &DesktopLayout {
        &self.layout
    }

    /// Area between the menu bar and the dock
    pub fn desktop_area(&self) -> Rect {
        let top = self.layout.menu_bar_height;
        let bottom = (self.viewport.y - self.layout.dock_height).max(top);
        Rect::from_min_max(pos2(0.0, top), pos2(self.viewport.x.max(0.0), bottom))
    }

    /// All windows in creation order, minimized ones included
    pub fn windows(&self) -> &[AppWindow] {
        &self.windows
    }

    /// Windows in ascending z-order (paint order)
    pub fn windows_by_z(&self) -> Vec<&AppWindow> {
        let mut sorted: Vec<&AppWindow> = self.windows.iter().collect();
        sorted.sort_by_key(|w| w.z_index);
        sorted
    }

    pub fn get(&self, id: WindowId) -> Option<&AppWindow> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut AppWindow> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    pub fn window_for_app(&self, app: AppId) -> Option<&AppWindow> {
        self.windows.iter().find(|w| w.app == app)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// The non-minimized window with the highest z-index
    pub fn active_window(&self) -> Option<&AppWindow> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.active_window().map(|w| w.id)
    }

    /// Rectangle the window occupies on screen
    pub fn frame_rect(&self, window: &AppWindow) -> Rect {
        if window.maximized {
            self.desktop_area()
        } else {
            window.restored_rect()
        }
    }

    fn next_z(&mut self) -> u64 {
        self.z_counter += 1;
        self.z_counter
    }

    /// Open an application, reusing its window if one exists
    pub fn open_application(&mut self, app: AppId) -> WindowId {
        if let Some(existing) = self.window_for_app(app) {
            let id = existing.id;
            debug!("{} already open, bringing {} to front", app, id);
            self.focus(id);
            return id;
        }

        let size = self.initial_size(app);
        let position = self.initial_position(size);
        let z_index = self.next_z();
        let window = AppWindow::new(app, position, size, z_index);
        let id = window.id;
        info!(
            "Opened {} window {} at {:?} ({}x{}, z={})",
            app, id, position, size.x, size.y, z_index
        );
        self.windows.push(window);
        id
    }

    fn initial_size(&self, app: AppId) -> Vec2 {
        let default = self.apps.default_size(app);
        let area = self.desktop_area();
        let fraction = self.layout.max_viewport_fraction;
        let max_w = (area.width() * fraction).max(self.layout.min_window_width);
        let max_h = (area.height() * fraction).max(self.layout.min_window_height);
        vec2(default.x.min(max_w), default.y.min(max_h))
    }

    fn initial_position(&self, size: Vec2) -> Pos2 {
        let n = self.windows.len() as f32;
        let step = self.layout.cascade_step;
        let (origin_x, origin_y) = self.layout.cascade_origin;
        let (wrap_x, wrap_y) = self.layout.cascade_wrap;
        let x = origin_x + (n * step) % wrap_x;
        let y = origin_y + (n * step) % wrap_y;

        let area = self.desktop_area();
        let max_x = (area.max.x - size.x).max(area.min.x);
        let max_y = (area.max.y - size.y).max(area.min.y);
        pos2(x.clamp(area.min.x, max_x), y.clamp(area.min.y, max_y))
    }

    /// Remove a window
    pub fn close_window(&mut self, id: WindowId) {
        let Some(index) = self.windows.iter().position(|w| w.id == id) else {
            debug!("Ignoring close of unknown window {}", id);
            return;
        };
        let window = self.windows.remove(index);
        self.release_gesture_for(id);
        info!("Closed {} window {}", window.app, id);
    }

    /// Hide a window without destroying it
    pub fn minimize_window(&mut self, id: WindowId) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.minimized = true;
        debug!("Minimized {}", id);
        self.release_gesture_for(id);
    }

    /// Flip between maximized and the stored geometry
    pub fn toggle_maximize(&mut self, id: WindowId) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.maximized = !window.maximized;
        let maximized = window.maximized;
        debug!("Window {} maximized={}", id, maximized);
        if maximized {
            self.release_gesture_for(id);
        }
    }

    /// Bring a window to the front, restoring it if minimized
    pub fn focus(&mut self, id: WindowId) {
        let Some(window) = self.get_mut(id) else {
            return;
        };
        window.minimized = false;
        let current = window.z_index;
        if self.windows.iter().all(|w| w.id == id || w.z_index < current) {
            return;
        }
        let z = self.next_z();
        if let Some(window) = self.get_mut(id) {
            window.z_index = z;
            trace!("Focused {} (z={})", id, z);
        }
    }

    /// Move a window, keeping it right of x=0 and below the menu bar
    pub fn move_window(&mut self, id: WindowId, x: f32, y: f32) {
        let min_y = self.layout.menu_bar_height;
        if let Some(window) = self.get_mut(id) {
            window.position = pos2(x.max(0.0), y.max(min_y));
        }
    }

    /// Resize a window, never below the minimum size
    pub fn resize_window(&mut self, id: WindowId, width: f32, height: f32) {
        let min = vec2(self.layout.min_window_width, self.layout.min_window_height);
        if let Some(window) = self.get_mut(id) {
            window.size = vec2(width.max(min.x), height.max(min.y));
        }
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Handle to the move-subscription counter
    #[cfg(test)]
    pub fn pointer_listeners(&self) -> PointerListeners {
        self.listeners.clone()
    }

    /// Whether pointer moves should be forwarded
    pub fn wants_pointer_moves(&self) -> bool {
        self.listeners.active() > 0
    }

    fn release_gesture_for(&mut self, id: WindowId) {
        if self.gesture.window() == Some(id) {
            debug!("Gesture {} on {} released", self.gesture.label(), id);
            self.gesture = Gesture::Idle;
        }
    }

    /// Topmost visible window under `pos` and the part that was hit
    pub fn window_at(&self, pos: Pos2) -> Option<(WindowId, ChromeHit)> {
        self.windows_by_z()
            .into_iter()
            .rev()
            .filter(|w| !w.minimized)
            .find_map(|w| {
                chrome::hit_test(self.frame_rect(w), pos, !w.maximized).map(|hit| (w.id, hit))
            })
    }

    /// Primary button pressed at `pos`
    pub fn pointer_pressed(&mut self, pos: Pos2) {
        self.gesture = Gesture::Idle;
        let Some((id, hit)) = self.window_at(pos) else {
            return;
        };

        match hit {
            ChromeHit::Control(control) => {
                self.gesture = Gesture::ControlArmed {
                    window: id,
                    control,
                };
            }
            ChromeHit::ControlGap => {}
            ChromeHit::TitleBar => {
                self.focus(id);
                let Some(origin) = self.get(id).filter(|w| !w.maximized).map(|w| w.position) else {
                    return;
                };
                self.gesture = Gesture::Dragging {
                    window: id,
                    grab_offset: pos - origin,
                    _subscription: self.listeners.subscribe(),
                };
                debug!("Drag started on {}", id);
            }
            ChromeHit::ResizeHandle => {
                self.focus(id);
                let Some(start_size) = self.get(id).map(|w| w.size) else {
                    return;
                };
                self.gesture = Gesture::Resizing {
                    window: id,
                    start_pointer: pos,
                    start_size,
                    _subscription: self.listeners.subscribe(),
                };
                debug!("Resize started on {}", id);
            }
            ChromeHit::Content => self.focus(id),
        }
    }

    /// Pointer moved to `pos`
    pub fn pointer_moved(&mut self, pos: Pos2) {
        match self.gesture {
            Gesture::Dragging {
                window,
                grab_offset,
                ..
            } => {
                let origin = pos - grab_offset;
                self.move_window(window, origin.x, origin.y);
            }
            Gesture::Resizing {
                window,
                start_pointer,
                start_size,
                ..
            } => {
                let size = start_size + (pos - start_pointer);
                self.resize_window(window, size.x, size.y);
            }
            Gesture::Idle | Gesture::ControlArmed { .. } => {}
        }
    }

    /// Primary button released at `pos`
    pub fn pointer_released(&mut self, pos: Pos2) {
        let gesture = std::mem::take(&mut self.gesture);
        match gesture {
            Gesture::ControlArmed { window, control } => {
                if self.window_at(pos) == Some((window, ChromeHit::Control(control))) {
                    self.apply_control(window, control);
                }
            }
            Gesture::Dragging { window, .. } | Gesture::Resizing { window, .. } => {
                debug!("Gesture {} on {} ended", gesture.label(), window);
            }
            Gesture::Idle => {}
        }
    }

    /// Primary button released with no known pointer position. The gesture
    /// ends and an armed control does not fire.
    pub fn pointer_cancelled(&mut self) {
        let gesture = std::mem::take(&mut self.gesture);
        if let Some(window) = gesture.window() {
            debug!("Gesture {} on {} cancelled", gesture.label(), window);
        }
    }

    pub fn apply_control(&mut self, id: WindowId, control: WindowControl) {
        match control {
            WindowControl::Close => self.close_window(id),
            WindowControl::Minimize => self.minimize_window(id),
            WindowControl::Maximize => self.toggle_maximize(id),
        }
    }
}

impl std::fmt::Debug for WindowManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManager")
            .field("windows", &self.windows)
            .field("z_counter", &self.z_counter)
            .field("viewport", &self.viewport)
            .field("gesture", &self.gesture.label())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn manager() -> WindowManager {
        WindowManager::new(
            Arc::new(ApplicationRegistry::builtin()),
            DesktopLayout::default(),
            vec2(1280.0, 800.0),
        )
    }

    fn z(wm: &WindowManager, id: WindowId) -> u64 {
        wm.get(id).unwrap().z_index
    }

    #[test]
    fn opening_twice_reuses_the_window() {
        let mut wm = manager();
        let first = wm.open_application(AppId::Calculator);
        let second = wm.open_application(AppId::Calculator);

        assert_eq!(first, second);
        assert_eq!(wm.len(), 1);
        assert_eq!(wm.active_window_id(), Some(first));
    }

    #[test]
    fn focus_assigns_next_z() {
        let mut wm = manager();
        let notes = wm.open_application(AppId::Notes);
        let terminal = wm.open_application(AppId::Terminal);
        assert_eq!(z(&wm, notes), 101);
        assert_eq!(z(&wm, terminal), 102);

        wm.focus(notes);
        assert_eq!(z(&wm, notes), 103);
        assert_eq!(wm.active_window_id(), Some(notes));

        wm.focus(notes);
        assert_eq!(z(&wm, notes), 103);
    }

    #[test]
    fn new_windows_cascade() {
        let mut wm = manager();
        let a = wm.open_application(AppId::Calculator);
        let b = wm.open_application(AppId::Notes);

        assert_eq!(wm.get(a).unwrap().position, pos2(100.0, 50.0));
        assert_eq!(wm.get(b).unwrap().position, pos2(130.0, 80.0));
        assert_eq!(wm.get(a).unwrap().size, vec2(240.0, 340.0));
        assert_eq!(wm.get(a).unwrap().title, "Calculator");
    }

    #[test]
    fn small_viewport_clamps_size_and_position() {
        let mut wm = manager();
        wm.set_viewport(vec2(640.0, 480.0));
        let id = wm.open_application(AppId::Safari);
        let window = wm.get(id).unwrap();
        let area = wm.desktop_area();

        assert_eq!(window.size, vec2(area.width() * 0.9, area.height() * 0.9));
        assert!(area.contains_rect(window.restored_rect()));
    }

    #[test]
    fn minimize_hands_focus_to_next_window() {
        let mut wm = manager();
        let notes = wm.open_application(AppId::Notes);
        let terminal = wm.open_application(AppId::Terminal);

        wm.minimize_window(terminal);
        assert_eq!(wm.active_window_id(), Some(notes));
        assert!(wm.get(terminal).unwrap().minimized);
        assert_eq!(wm.len(), 2);

        wm.minimize_window(notes);
        assert_eq!(wm.active_window_id(), None);
    }

    #[test]
    fn reopening_a_minimized_window_restores_it() {
        let mut wm = manager();
        let notes = wm.open_application(AppId::Notes);
        let _terminal = wm.open_application(AppId::Terminal);
        wm.minimize_window(notes);

        let reopened = wm.open_application(AppId::Notes);
        assert_eq!(reopened, notes);
        assert!(!wm.get(notes).unwrap().minimized);
        assert_eq!(wm.active_window_id(), Some(notes));
        assert_eq!(z(&wm, notes), 103);
    }

    #[test]
    fn closing_active_selects_highest_remaining() {
        let mut wm = manager();
        let finder = wm.open_application(AppId::Finder);
        let notes = wm.open_application(AppId::Notes);
        let terminal = wm.open_application(AppId::Terminal);
        wm.focus(finder);
        wm.minimize_window(terminal);

        wm.close_window(finder);
        assert_eq!(wm.active_window_id(), Some(notes));
        wm.close_window(notes);
        assert_eq!(wm.active_window_id(), None);
        assert_eq!(wm.len(), 1);
    }

    #[test]
    fn maximize_restores_prior_geometry() {
        let mut wm = manager();
        let id = wm.open_application(AppId::Notes);
        let before = wm.get(id).unwrap().restored_rect();

        wm.toggle_maximize(id);
        let window = wm.get(id).unwrap();
        assert_eq!(wm.frame_rect(window), wm.desktop_area());
        assert_eq!(wm.desktop_area(), Rect::from_min_max(pos2(0.0, 24.0), pos2(1280.0, 736.0)));

        wm.toggle_maximize(id);
        let window = wm.get(id).unwrap();
        assert_eq!(wm.frame_rect(window), before);
    }

    #[test]
    fn move_and_resize_clamp() {
        let mut wm = manager();
        let id = wm.open_application(AppId::Notes);

        wm.move_window(id, -40.0, 3.0);
        assert_eq!(wm.get(id).unwrap().position, pos2(0.0, 24.0));

        wm.resize_window(id, 10.0, 20.0);
        assert_eq!(wm.get(id).unwrap().size, vec2(200.0, 150.0));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut wm = manager();
        let id = wm.open_application(AppId::Notes);
        let stale = WindowId::new();

        wm.close_window(stale);
        wm.minimize_window(stale);
        wm.toggle_maximize(stale);
        wm.focus(stale);
        wm.move_window(stale, 1.0, 1.0);
        wm.resize_window(stale, 1.0, 1.0);

        assert_eq!(wm.len(), 1);
        assert_eq!(wm.active_window_id(), Some(id));
        assert_eq!(z(&wm, id), 101);
    }

    #[test]
    fn title_bar_drag_moves_window() {
        let mut wm = manager();
        let id = wm.open_application(AppId::Notes);
        let origin = wm.get(id).unwrap().position;
        let grab = origin + vec2(200.0, 10.0);

        wm.pointer_pressed(grab);
        assert_eq!(wm.gesture().label(), "dragging");
        assert!(wm.wants_pointer_moves());

        wm.pointer_moved(grab + vec2(50.0, 40.0));
        assert_eq!(wm.get(id).unwrap().position, origin + vec2(50.0, 40.0));

        wm.pointer_moved(pos2(0.0, 0.0));
        assert_eq!(wm.get(id).unwrap().position, pos2(0.0, 24.0));

        wm.pointer_released(pos2(0.0, 0.0));
        assert!(wm.gesture().is_idle());
        assert!(!wm.wants_pointer_moves());

        wm.pointer_moved(pos2(500.0, 500.0));
        assert_eq!(wm.get(id).unwrap().position, pos2(0.0, 24.0));
    }

    #[test]
    fn resize_handle_grows_from_start_size() {
        let mut wm = manager();
        let id = wm.open_application(AppId::Notes);
        let frame = wm.get(id).unwrap().restored_rect();
        let grab = frame.max - vec2(4.0, 4.0);

        wm.pointer_pressed(grab);
        assert_eq!(wm.gesture().label(), "resizing");
        wm.pointer_moved(grab + vec2(100.0, -50.0));
        assert_eq!(wm.get(id).unwrap().size, vec2(700.0, 400.0));
        wm.pointer_moved(grab - vec2(1000.0, 1000.0));
        assert_eq!(wm.get(id).unwrap().size, vec2(200.0, 150.0));
        wm.pointer_released(grab);
        assert!(!wm.wants_pointer_moves());
    }

    #[test]
    fn control_press_never_starts_drag_or_focus() {
        let mut wm = manager();
        let notes = wm.open_application(AppId::Notes);
        let terminal = wm.open_application(AppId::Terminal);
        wm.move_window(terminal, 900.0, 300.0);
        let close = chrome::control_rect(wm.get(notes).unwrap().restored_rect(), WindowControl::Close)
            .center();

        wm.pointer_pressed(close);
        assert_eq!(wm.gesture().label(), "control");
        assert!(!wm.wants_pointer_moves());
        assert_eq!(wm.active_window_id(), Some(terminal));

        wm.pointer_moved(close + vec2(100.0, 100.0));
        assert_eq!(wm.get(notes).unwrap().position, pos2(100.0, 50.0));

        wm.pointer_released(close);
        assert!(wm.get(notes).is_none());
    }

    #[test]
    fn control_fires_only_when_released_over_it() {
        let mut wm = manager();
        let id = wm.open_application(AppId::Notes);
        let frame = wm.get(id).unwrap().restored_rect();
        let minimize = chrome::control_rect(frame, WindowControl::Minimize).center();

        wm.pointer_pressed(minimize);
        wm.pointer_released(minimize + vec2(200.0, 0.0));
        assert!(!wm.get(id).unwrap().minimized);

        wm.pointer_pressed(minimize);
        wm.pointer_released(minimize);
        assert!(wm.get(id).unwrap().minimized);
    }

    #[test]
    fn cancelled_release_ends_gestures_without_firing() {
        let mut wm = manager();
        let id = wm.open_application(AppId::Notes);
        let frame = wm.get(id).unwrap().restored_rect();
        let close = chrome::control_rect(frame, WindowControl::Close).center();

        wm.pointer_pressed(close);
        wm.pointer_cancelled();
        assert!(wm.gesture().is_idle());
        assert!(wm.get(id).is_some());

        let listeners = wm.pointer_listeners();
        wm.pointer_pressed(frame.min + vec2(200.0, 10.0));
        assert_eq!(listeners.active(), 1);
        wm.pointer_cancelled();
        assert_eq!(listeners.active(), 0);
        assert!(!wm.wants_pointer_moves());
    }

    #[test]
    fn content_press_focuses_topmost_window_under_pointer() {
        let mut wm = manager();
        let finder = wm.open_application(AppId::Finder);
        let _notes = wm.open_application(AppId::Notes);

        // Finder spans further right than notes.
        wm.pointer_pressed(pos2(850.0, 300.0));
        assert_eq!(wm.active_window_id(), Some(finder));
        assert!(wm.gesture().is_idle());
    }

    #[test]
    fn maximized_title_bar_focuses_without_drag() {
        let mut wm = manager();
        let id = wm.open_application(AppId::Notes);
        wm.toggle_maximize(id);

        wm.pointer_pressed(pos2(600.0, 30.0));
        assert!(wm.gesture().is_idle());
        assert_eq!(wm.active_window_id(), Some(id));
    }

    #[test]
    fn closing_mid_drag_releases_subscription() {
        let mut wm = manager();
        let id = wm.open_application(AppId::Notes);
        let listeners = wm.pointer_listeners();
        wm.pointer_pressed(wm.get(id).unwrap().position + vec2(200.0, 10.0));
        assert_eq!(listeners.active(), 1);

        wm.close_window(id);
        assert_eq!(listeners.active(), 0);
        assert!(wm.gesture().is_idle());
    }

    #[test]
    fn dropping_manager_mid_resize_releases_subscription() {
        let mut wm = manager();
        let id = wm.open_application(AppId::Notes);
        let listeners = wm.pointer_listeners();
        wm.pointer_pressed(wm.get(id).unwrap().restored_rect().max - vec2(2.0, 2.0));
        assert_eq!(listeners.active(), 1);

        drop(wm);
        assert_eq!(listeners.active(), 0);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Open(usize),
        Close(usize),
        Minimize(usize),
        Maximize(usize),
        Focus(usize),
        Move(usize, f32, f32),
        Resize(usize, f32, f32),
        Press(f32, f32),
        Drag(f32, f32),
        Release(f32, f32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..10).prop_map(Op::Open),
            (0usize..10).prop_map(Op::Close),
            (0usize..10).prop_map(Op::Minimize),
            (0usize..10).prop_map(Op::Maximize),
            (0usize..10).prop_map(Op::Focus),
            (0usize..10, -2000f32..2000.0, -2000f32..2000.0).prop_map(|(i, x, y)| Op::Move(i, x, y)),
            (0usize..10, -2000f32..2000.0, -2000f32..2000.0)
                .prop_map(|(i, w, h)| Op::Resize(i, w, h)),
            (0f32..1280.0, 0f32..800.0).prop_map(|(x, y)| Op::Press(x, y)),
            (-500f32..2000.0, -500f32..2000.0).prop_map(|(x, y)| Op::Drag(x, y)),
            (0f32..1280.0, 0f32..800.0).prop_map(|(x, y)| Op::Release(x, y)),
        ]
    }

    fn target(wm: &WindowManager, index: usize) -> WindowId {
        wm.window_for_app(AppId::ALL[index])
            .map(|w| w.id)
            .unwrap_or_default()
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_sequence(ops in prop::collection::vec(op(), 1..60)) {
            let mut wm = manager();
            for op in ops {
                match op {
                    Op::Open(i) => { wm.open_application(AppId::ALL[i]); }
                    Op::Close(i) => { let id = target(&wm, i); wm.close_window(id); }
                    Op::Minimize(i) => { let id = target(&wm, i); wm.minimize_window(id); }
                    Op::Maximize(i) => { let id = target(&wm, i); wm.toggle_maximize(id); }
                    Op::Focus(i) => {
                        let id = target(&wm, i);
                        wm.focus(id);
                        if let Some(focused) = wm.get(id) {
                            let max_other = wm.windows().iter()
                                .filter(|w| w.id != id)
                                .map(|w| w.z_index)
                                .max()
                                .unwrap_or(0);
                            prop_assert!(focused.z_index > max_other);
                            prop_assert_eq!(wm.active_window_id(), Some(id));
                        }
                    }
                    Op::Move(i, x, y) => { let id = target(&wm, i); wm.move_window(id, x, y); }
                    Op::Resize(i, w, h) => { let id = target(&wm, i); wm.resize_window(id, w, h); }
                    Op::Press(x, y) => wm.pointer_pressed(pos2(x, y)),
                    Op::Drag(x, y) => wm.pointer_moved(pos2(x, y)),
                    Op::Release(x, y) => wm.pointer_released(pos2(x, y)),
                }

                let apps: HashSet<AppId> = wm.windows().iter().map(|w| w.app).collect();
                prop_assert_eq!(apps.len(), wm.len());

                let zs: HashSet<u64> = wm.windows().iter().map(|w| w.z_index).collect();
                prop_assert_eq!(zs.len(), wm.len());

                for window in wm.windows() {
                    prop_assert!(window.position.x >= 0.0);
                    prop_assert!(window.position.y >= 24.0);
                    prop_assert!(window.size.x >= 200.0);
                    prop_assert!(window.size.y >= 150.0);
                }

                let expected_active = wm.windows().iter()
                    .filter(|w| !w.minimized)
                    .max_by_key(|w| w.z_index)
                    .map(|w| w.id);
                prop_assert_eq!(wm.active_window_id(), expected_active);
                prop_assert!(wm.pointer_listeners().active() <= 1);
            }
        }
    }
}
