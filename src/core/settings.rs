//! Application settings - Read once at startup, never written back

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the settings file location
pub const CONFIG_ENV: &str = "VMDESK_CONFIG";

/// Application theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Geometry of the simulated desktop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopLayout {
    /// Height of the menu bar across the top of the desktop
    pub menu_bar_height: f32,
    /// Height reserved for the dock at the bottom
    pub dock_height: f32,
    /// Minimum window width
    pub min_window_width: f32,
    /// Minimum window height
    pub min_window_height: f32,
    /// Position of the first cascaded window
    pub cascade_origin: (f32, f32),
    /// Offset between successive cascaded windows
    pub cascade_step: f32,
    /// Cascade offsets wrap after this many pixels (x, y)
    pub cascade_wrap: (f32, f32),
    /// Largest share of the desktop area a new window may cover
    pub max_viewport_fraction: f32,
}

impl Default for DesktopLayout {
    fn default() -> Self {
        Self {
            menu_bar_height: 24.0,
            dock_height: 64.0,
            min_window_width: 200.0,
            min_window_height: 150.0,
            cascade_origin: (100.0, 50.0),
            cascade_step: 30.0,
            cascade_wrap: (200.0, 150.0),
            max_viewport_fraction: 0.9,
        }
    }
}

/// Timings of the simulated boot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootTimings {
    /// Interval between progress increments
    pub progress_interval_ms: u64,
    /// Percentage added per increment
    pub progress_step: u32,
    /// Interval between status messages
    pub message_interval_ms: u64,
    /// Total boot duration
    pub complete_after_ms: u64,
}

impl Default for BootTimings {
    fn default() -> Self {
        Self {
            progress_interval_ms: 80,
            progress_step: 2,
            message_interval_ms: 500,
            complete_after_ms: 4500,
        }
    }
}

impl BootTimings {
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }

    pub fn message_interval(&self) -> Duration {
        Duration::from_millis(self.message_interval_ms)
    }

    pub fn total(&self) -> Duration {
        Duration::from_millis(self.complete_after_ms)
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Application theme
    pub theme: Theme,
    /// Enable debug logging
    pub debug_logging: bool,
    /// Populate the registry with the stock machines
    pub seed_default_machines: bool,
    /// Native window size at launch
    pub initial_viewport: (f32, f32),
    /// Desktop geometry
    pub layout: DesktopLayout,
    /// Boot animation timings
    pub boot: BootTimings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            debug_logging: false,
            seed_default_machines: true,
            initial_viewport: (1280.0, 800.0),
            layout: DesktopLayout::default(),
            boot: BootTimings::default(),
        }
    }
}

impl Settings {
    /// Default location of the settings file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("VMDesk").join("settings.json"))
    }

    /// Resolve the settings path, preferring the environment override
    pub fn resolve_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(Self::default_path)
    }

    /// Load settings from the resolved path. A missing file yields defaults.
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        match Self::resolve_path() {
            Some(path) if path.exists() => {
                let settings = Self::load_from(&path)?;
                Ok((settings, Some(path)))
            }
            _ => Ok((Self::default(), None)),
        }
    }

    /// Load and validate settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let mut settings = Self::from_json(&json)
            .with_context(|| format!("Failed to parse settings in {:?}", path))?;
        settings.validate();
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate settings and fix any invalid values
    pub fn validate(&mut self) {
        let layout = &mut self.layout;
        layout.menu_bar_height = layout.menu_bar_height.max(0.0);
        layout.dock_height = layout.dock_height.max(0.0);
        layout.min_window_width = layout.min_window_width.max(50.0);
        layout.min_window_height = layout.min_window_height.max(50.0);
        layout.cascade_step = layout.cascade_step.max(0.0);
        layout.cascade_wrap.0 = layout.cascade_wrap.0.max(1.0);
        layout.cascade_wrap.1 = layout.cascade_wrap.1.max(1.0);
        if !(layout.max_viewport_fraction > 0.0 && layout.max_viewport_fraction <= 1.0) {
            layout.max_viewport_fraction = DesktopLayout::default().max_viewport_fraction;
        }

        let boot = &mut self.boot;
        boot.progress_interval_ms = boot.progress_interval_ms.max(1);
        boot.message_interval_ms = boot.message_interval_ms.max(1);
        boot.complete_after_ms = boot.complete_after_ms.max(1);
        boot.progress_step = boot.progress_step.clamp(1, 100);

        self.initial_viewport.0 = self.initial_viewport.0.max(640.0);
        self.initial_viewport.1 = self.initial_viewport.1.max(480.0);
    }

    /// Default tracing filter for these settings
    pub fn log_filter(&self) -> &'static str {
        if self.debug_logging {
            "vmdesk=debug,eframe=warn,egui=warn"
        } else {
            "vmdesk=info,eframe=warn,egui=warn"
        }
    }
}
