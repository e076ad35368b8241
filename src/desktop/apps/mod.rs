//! Application registry - Static capability records and per-window content
//!
//! Each open window owns one [`AppContent`], created by the registry when the
//! window first appears and dropped with the window.

pub mod calculator;
pub mod finder;
pub mod notes;
pub mod safari;
pub mod system_settings;
pub mod terminal;

use std::collections::HashMap;

use chrono::Local;
use egui::{Color32, RichText, Ui, Vec2};

use calculator::Calculator;
use finder::Finder;
use notes::Notes;
use safari::Safari;
use system_settings::SystemSettings;
use terminal::Terminal;

/// Applications that can be launched from the dock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppId {
    Finder,
    Safari,
    Mail,
    Messages,
    Music,
    Calendar,
    Notes,
    Calculator,
    Terminal,
    Settings,
}

impl AppId {
    /// Dock order
    pub const ALL: [AppId; 10] = [
        AppId::Finder,
        AppId::Safari,
        AppId::Mail,
        AppId::Messages,
        AppId::Music,
        AppId::Calendar,
        AppId::Notes,
        AppId::Calculator,
        AppId::Terminal,
        AppId::Settings,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Safari => "safari",
            Self::Mail => "mail",
            Self::Messages => "messages",
            Self::Music => "music",
            Self::Calendar => "calendar",
            Self::Notes => "notes",
            Self::Calculator => "calculator",
            Self::Terminal => "terminal",
            Self::Settings => "settings",
        }
    }

    /// Window title: the identifier with its first letter capitalised
    pub fn title(&self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Live state behind one application window
#[derive(Debug)]
pub enum AppContent {
    Finder(Finder),
    Safari(Safari),
    Notes(Notes),
    Calculator(Calculator),
    Terminal(Terminal),
    Settings(SystemSettings),
    Unavailable,
}

impl AppContent {
    /// Draw the window body and apply whatever the user did to it
    pub fn show(&mut self, ui: &mut Ui) {
        match self {
            Self::Finder(finder) => finder.show(ui),
            Self::Safari(safari) => safari.show(ui),
            Self::Notes(notes) => notes.show(ui),
            Self::Calculator(calculator) => calculator.show(ui),
            Self::Terminal(terminal) => terminal.show(ui),
            Self::Settings(settings) => settings.show(ui),
            Self::Unavailable => unavailable(ui),
        }
    }
}

fn unavailable(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new("Not available").size(16.0).strong());
        ui.add_space(6.0);
        ui.label(RichText::new("This application is not installed").size(12.0).weak());
    });
}

/// Creates the initial state of a freshly opened window
pub type LaunchContent = fn() -> AppContent;

/// Capability record of one application
#[derive(Clone)]
pub struct AppEntry {
    pub id: AppId,
    /// Long name used by the dock tooltip
    pub dock_label: &'static str,
    pub icon: &'static str,
    pub accent: Color32,
    pub default_size: Vec2,
    pub launch: LaunchContent,
}

impl std::fmt::Debug for AppEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppEntry")
            .field("id", &self.id)
            .field("default_size", &self.default_size)
            .finish_non_exhaustive()
    }
}

/// Size used for applications without a declared default
pub const FALLBACK_WINDOW_SIZE: Vec2 = Vec2::new(600.0, 400.0);

/// Lookup table resolved once at startup
#[derive(Debug)]
pub struct ApplicationRegistry {
    entries: HashMap<AppId, AppEntry>,
}

impl ApplicationRegistry {
    pub fn builtin() -> Self {
        let entries = AppId::ALL
            .into_iter()
            .map(|id| (id, builtin_entry(id)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, app: AppId) -> Option<&AppEntry> {
        self.entries.get(&app)
    }

    pub fn default_size(&self, app: AppId) -> Vec2 {
        self.get(app)
            .map(|entry| entry.default_size)
            .unwrap_or(FALLBACK_WINDOW_SIZE)
    }

    /// Specs in dock order
    pub fn dock_order(&self) -> impl Iterator<Item = &AppEntry> {
        AppId::ALL
            .into_iter()
            .filter_map(move |id| self.entries.get(&id))
    }

    /// Fresh content for a new window of `app`
    pub fn launch(&self, app: AppId) -> AppContent {
        self.get(app)
            .map(|entry| (entry.launch)())
            .unwrap_or(AppContent::Unavailable)
    }
}

fn builtin_entry(id: AppId) -> AppEntry {
    let (dock_label, icon, accent, default_size) = match id {
        AppId::Finder => ("Finder", "📁", Color32::from_rgb(59, 130, 246), Vec2::new(800.0, 500.0)),
        AppId::Safari => ("Safari", "🌐", Color32::from_rgb(14, 165, 233), Vec2::new(900.0, 600.0)),
        AppId::Mail => ("Mail", "✉", Color32::from_rgb(59, 130, 246), FALLBACK_WINDOW_SIZE),
        AppId::Messages => ("Messages", "💬", Color32::from_rgb(34, 197, 94), FALLBACK_WINDOW_SIZE),
        AppId::Music => ("Music", "♫", Color32::from_rgb(236, 72, 153), FALLBACK_WINDOW_SIZE),
        AppId::Calendar => ("Calendar", "📅", Color32::from_rgb(239, 68, 68), FALLBACK_WINDOW_SIZE),
        AppId::Notes => ("Notes", "📝", Color32::from_rgb(234, 179, 8), Vec2::new(600.0, 450.0)),
        AppId::Calculator => ("Calculator", "🖩", Color32::from_rgb(107, 114, 128), Vec2::new(240.0, 340.0)),
        AppId::Terminal => ("Terminal", ">_", Color32::from_rgb(31, 41, 55), Vec2::new(680.0, 420.0)),
        AppId::Settings => ("System Settings", "⚙", Color32::from_rgb(107, 114, 128), Vec2::new(720.0, 500.0)),
    };
    let launch: LaunchContent = match id {
        AppId::Finder => || AppContent::Finder(Finder::default()),
        AppId::Safari => || AppContent::Safari(Safari::default()),
        AppId::Notes => || AppContent::Notes(Notes::default()),
        AppId::Calculator => || AppContent::Calculator(Calculator::default()),
        AppId::Terminal => || AppContent::Terminal(Terminal::new(Local::now())),
        AppId::Settings => || AppContent::Settings(SystemSettings::default()),
        AppId::Mail | AppId::Messages | AppId::Music | AppId::Calendar => || AppContent::Unavailable,
    };
    AppEntry {
        id,
        dock_label,
        icon,
        accent,
        default_size,
        launch,
    }
}
