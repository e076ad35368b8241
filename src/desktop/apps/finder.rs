//! Finder - Sidebar places, a static home listing and back/forward history

use egui::{vec2, Color32, Grid, RichText, ScrollArea, Ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    Document,
    Image,
}

impl EntryKind {
    fn icon(self) -> &'static str {
        match self {
            Self::Folder => "📁",
            Self::Document => "📄",
            Self::Image => "🖼",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Folder => "Folder",
            Self::Document => "Document",
            Self::Image => "Image",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileEntry {
    pub name: &'static str,
    pub kind: EntryKind,
    pub modified: &'static str,
}

const fn entry(name: &'static str, kind: EntryKind, modified: &'static str) -> FileEntry {
    FileEntry {
        name,
        kind,
        modified,
    }
}

pub const FILES: [FileEntry; 10] = [
    entry("Documents", EntryKind::Folder, "Today"),
    entry("Downloads", EntryKind::Folder, "Today"),
    entry("Pictures", EntryKind::Folder, "Yesterday"),
    entry("Music", EntryKind::Folder, "Dec 1"),
    entry("Movies", EntryKind::Folder, "Nov 28"),
    entry("Desktop", EntryKind::Folder, "Today"),
    entry("README.md", EntryKind::Document, "Today"),
    entry("project.json", EntryKind::Document, "Yesterday"),
    entry("vacation.jpg", EntryKind::Image, "Nov 15"),
    entry("presentation.key", EntryKind::Document, "Nov 10"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    Header(&'static str),
    Place { label: &'static str, icon: &'static str },
}

pub const SIDEBAR: [SidebarItem; 11] = [
    SidebarItem::Header("Favorites"),
    SidebarItem::Place { label: "AirDrop", icon: "☁" },
    SidebarItem::Place { label: "Recents", icon: "🕒" },
    SidebarItem::Place { label: "Applications", icon: "🗂" },
    SidebarItem::Place { label: "Desktop", icon: "📁" },
    SidebarItem::Place { label: "Documents", icon: "📄" },
    SidebarItem::Place { label: "Downloads", icon: "⬇" },
    SidebarItem::Header("Locations"),
    SidebarItem::Place { label: "Macintosh HD", icon: "🖥" },
    SidebarItem::Place { label: "iCloud Drive", icon: "☁" },
    SidebarItem::Header("Tags"),
];

const FREE_SPACE: &str = "25.4 GB available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Grid,
    #[default]
    List,
    Columns,
}

#[derive(Debug)]
pub struct Finder {
    current_path: String,
    selected: Option<usize>,
    view_mode: ViewMode,
    back: Vec<String>,
    forward: Vec<String>,
}

impl Default for Finder {
    fn default() -> Self {
        Self {
            current_path: "Home".into(),
            selected: None,
            view_mode: ViewMode::default(),
            back: Vec::new(),
            forward: Vec::new(),
        }
    }
}

impl Finder {
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Open `place`, remembering the current one for Back
    pub fn navigate(&mut self, place: &str) {
        if place == self.current_path {
            return;
        }
        let previous = std::mem::replace(&mut self.current_path, place.to_string());
        self.back.push(previous);
        self.forward.clear();
        self.selected = None;
    }

    pub fn go_back(&mut self) {
        if let Some(place) = self.back.pop() {
            let current = std::mem::replace(&mut self.current_path, place);
            self.forward.push(current);
            self.selected = None;
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(place) = self.forward.pop() {
            let current = std::mem::replace(&mut self.current_path, place);
            self.back.push(current);
            self.selected = None;
        }
    }

    /// Select the entry at `index` in the listing
    pub fn select(&mut self, index: usize) {
        if index < FILES.len() {
            self.selected = Some(index);
        }
    }

    /// Activate the entry at `index`: folders are entered
    pub fn open(&mut self, index: usize) {
        if let Some(file) = FILES.get(index) {
            if file.kind == EntryKind::Folder {
                self.navigate(file.name);
            }
        }
    }

    pub fn status_line(&self) -> String {
        format!("{} items", FILES.len())
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let mut navigate_to = None;
        let mut clicked = None;
        let mut opened = None;

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(140.0);
                for item in SIDEBAR {
                    match item {
                        SidebarItem::Header(label) => {
                            ui.add_space(4.0);
                            ui.label(RichText::new(label.to_uppercase()).size(10.0).strong().color(Color32::GRAY));
                        }
                        SidebarItem::Place { label, icon } => {
                            let current = self.current_path == label;
                            if ui.selectable_label(current, format!("{icon}  {label}")).clicked() {
                                navigate_to = Some(label);
                            }
                        }
                    }
                }
            });
            ui.separator();
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    if ui.add_enabled(!self.back.is_empty(), egui::Button::new("◀")).clicked() {
                        self.go_back();
                    }
                    if ui.add_enabled(!self.forward.is_empty(), egui::Button::new("▶")).clicked() {
                        self.go_forward();
                    }
                    ui.label(RichText::new(self.current_path()).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.selectable_value(&mut self.view_mode, ViewMode::Columns, "Columns");
                        ui.selectable_value(&mut self.view_mode, ViewMode::List, "List");
                        ui.selectable_value(&mut self.view_mode, ViewMode::Grid, "Icons");
                    });
                });
                ui.separator();

                let listing_height = (ui.available_height() - 22.0).max(0.0);
                ScrollArea::vertical()
                    .id_salt("finder_listing")
                    .max_height(listing_height)
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.view_mode {
                        ViewMode::List => {
                            Grid::new("finder_list").striped(true).num_columns(3).show(ui, |ui| {
                                ui.label(RichText::new("Name").weak());
                                ui.label(RichText::new("Date Modified").weak());
                                ui.label(RichText::new("Kind").weak());
                                ui.end_row();
                                for (index, file) in FILES.iter().enumerate() {
                                    let response = ui.selectable_label(
                                        self.selected == Some(index),
                                        format!("{}  {}", file.kind.icon(), file.name),
                                    );
                                    if response.clicked() {
                                        clicked = Some(index);
                                    }
                                    if response.double_clicked() {
                                        opened = Some(index);
                                    }
                                    ui.label(file.modified);
                                    ui.label(file.kind.label());
                                    ui.end_row();
                                }
                            });
                        }
                        ViewMode::Grid => {
                            ui.horizontal_wrapped(|ui| {
                                for (index, file) in FILES.iter().enumerate() {
                                    let text = format!("{}\n{}", file.kind.icon(), file.name);
                                    let response = ui.add_sized(
                                        vec2(96.0, 64.0),
                                        egui::SelectableLabel::new(self.selected == Some(index), text),
                                    );
                                    if response.clicked() {
                                        clicked = Some(index);
                                    }
                                    if response.double_clicked() {
                                        opened = Some(index);
                                    }
                                }
                            });
                        }
                        ViewMode::Columns => {
                            for (index, file) in FILES.iter().enumerate() {
                                let marker = if file.kind == EntryKind::Folder { "›" } else { "" };
                                let response = ui.selectable_label(
                                    self.selected == Some(index),
                                    format!("{}  {}  {}", file.kind.icon(), file.name, marker),
                                );
                                if response.clicked() {
                                    clicked = Some(index);
                                }
                                if response.double_clicked() {
                                    opened = Some(index);
                                }
                            }
                        }
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.status_line()).size(10.0).weak());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(FREE_SPACE).size(10.0).weak());
                    });
                });
            });
        });

        if let Some(place) = navigate_to {
            self.navigate(place);
        }
        if let Some(index) = clicked {
            self.select(index);
        }
        if let Some(index) = opened {
            self.open(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_at_home_in_list_view() {
        let finder = Finder::default();
        assert_eq!(finder.current_path(), "Home");
        assert_eq!(finder.view_mode, ViewMode::List);
        assert_eq!(finder.status_line(), "10 items");
    }

    #[test]
    fn back_and_forward_walk_the_history() {
        let mut finder = Finder::default();
        finder.navigate("Documents");
        finder.navigate("Downloads");
        assert_eq!(finder.current_path(), "Downloads");

        finder.go_back();
        assert_eq!(finder.current_path(), "Documents");
        finder.go_back();
        assert_eq!(finder.current_path(), "Home");
        finder.go_back();
        assert_eq!(finder.current_path(), "Home");

        finder.go_forward();
        assert_eq!(finder.current_path(), "Documents");

        finder.navigate("AirDrop");
        finder.go_forward();
        assert_eq!(finder.current_path(), "AirDrop");
    }

    #[test]
    fn navigating_clears_the_selection_and_ignores_the_current_place() {
        let mut finder = Finder::default();
        finder.select(6);
        finder.navigate("Home");
        assert_eq!(finder.selected, Some(6));
        assert!(finder.back.is_empty());

        finder.navigate("Recents");
        assert_eq!(finder.selected, None);
    }

    #[test]
    fn opening_enters_folders_only() {
        let mut finder = Finder::default();
        finder.open(6);
        assert_eq!(finder.current_path(), "Home");
        finder.open(0);
        assert_eq!(finder.current_path(), "Documents");

        finder.select(99);
        assert_eq!(finder.selected, None);
    }

    #[test]
    fn sidebar_has_three_sections() {
        let headers: Vec<_> = SIDEBAR
            .iter()
            .filter_map(|item| match item {
                SidebarItem::Header(label) => Some(*label),
                SidebarItem::Place { .. } => None,
            })
            .collect();
        assert_eq!(headers, vec!["Favorites", "Locations", "Tags"]);
    }
}
