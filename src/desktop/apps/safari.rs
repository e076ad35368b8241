//! Safari - Tabs, bookmarks and an address bar over a page that never loads

use egui::{Color32, Key, RichText, TextEdit, Ui};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub favicon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bookmark {
    pub title: &'static str,
    pub url: &'static str,
    pub favicon: &'static str,
}

pub const BOOKMARKS: [Bookmark; 6] = [
    Bookmark { title: "Apple", url: "https://apple.com", favicon: "🍎" },
    Bookmark { title: "GitHub", url: "https://github.com", favicon: "🐙" },
    Bookmark { title: "YouTube", url: "https://youtube.com", favicon: "📺" },
    Bookmark { title: "Twitter", url: "https://twitter.com", favicon: "🐦" },
    Bookmark { title: "Reddit", url: "https://reddit.com", favicon: "🤖" },
    Bookmark { title: "Wikipedia", url: "https://wikipedia.org", favicon: "📚" },
];

/// Prefix `https://` unless the input already names a scheme
pub fn normalize_url(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if input.starts_with("http") {
        Some(input.to_string())
    } else {
        Some(format!("https://{input}"))
    }
}

/// Host of `url` without a leading `www.`, used as the tab title
pub fn host_title(url: &str) -> Option<String> {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    (!host.is_empty()).then(|| host.to_lowercase())
}

#[derive(Debug)]
pub struct Safari {
    tabs: Vec<Tab>,
    active: u64,
    next_id: u64,
    address: String,
}

impl Default for Safari {
    fn default() -> Self {
        let home = "https://www.apple.com";
        Self {
            tabs: vec![Tab {
                id: 1,
                title: "Apple".into(),
                url: home.into(),
                favicon: "🍎",
            }],
            active: 1,
            next_id: 2,
            address: home.into(),
        }
    }
}

impl Safari {
    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == self.active)
    }

    pub fn activate(&mut self, id: u64) {
        if let Some(tab) = self.tabs.iter().find(|t| t.id == id) {
            self.active = id;
            self.address = tab.url.clone();
        }
    }

    /// Open an empty tab and switch to it
    pub fn add_tab(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tabs.push(Tab {
            id,
            title: "New Tab".into(),
            url: String::new(),
            favicon: "🌐",
        });
        self.activate(id);
        id
    }

    /// Close a tab. The last tab never closes; closing the active tab
    /// activates the rightmost remaining one.
    pub fn close_tab(&mut self, id: u64) {
        if self.tabs.len() <= 1 {
            return;
        }
        self.tabs.retain(|t| t.id != id);
        if self.active == id {
            if let Some(last) = self.tabs.last().map(|t| t.id) {
                self.activate(last);
            }
        }
    }

    /// Point the active tab at `input`. Blank input is ignored.
    pub fn navigate(&mut self, input: &str) {
        let Some(url) = normalize_url(input) else {
            return;
        };
        let title = host_title(&url).unwrap_or_else(|| url.clone());
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == self.active) {
            tab.title = title;
            tab.url = url.clone();
        }
        self.address = url;
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let mut activate = None;
        let mut close = None;
        let mut add = false;
        let mut go_to = None;

        ui.horizontal_wrapped(|ui| {
            for tab in &self.tabs {
                let label = format!("{}  {}", tab.favicon, tab.title);
                if ui.selectable_label(tab.id == self.active, label).clicked() {
                    activate = Some(tab.id);
                }
                if self.tabs.len() > 1 && ui.small_button("×").clicked() {
                    close = Some(tab.id);
                }
            }
            if ui.button("+").on_hover_text("New Tab").clicked() {
                add = true;
            }
        });

        ui.horizontal(|ui| {
            let secure = self.address.starts_with("https://");
            ui.label(if secure { "🔒" } else { "🌐" });
            let response = ui.add(
                TextEdit::singleline(&mut self.address)
                    .hint_text("Search or enter website name")
                    .desired_width(f32::INFINITY),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                go_to = Some(self.address.clone());
            }
        });

        ui.horizontal_wrapped(|ui| {
            for bookmark in BOOKMARKS {
                if ui
                    .small_button(format!("{} {}", bookmark.favicon, bookmark.title))
                    .clicked()
                {
                    go_to = Some(bookmark.url.to_string());
                }
            }
        });
        ui.separator();

        match self.active_tab().filter(|t| !t.url.is_empty()) {
            Some(tab) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.label(RichText::new(tab.favicon).size(48.0));
                    ui.label(RichText::new(&tab.title).size(20.0).strong());
                    ui.label(RichText::new(&tab.url).color(Color32::GRAY));
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new("External websites cannot be displayed in this simulation")
                            .color(Color32::GRAY),
                    );
                });
            }
            None => {
                ui.add_space(16.0);
                ui.label(RichText::new("Favorites").size(18.0).strong());
                ui.horizontal_wrapped(|ui| {
                    for bookmark in BOOKMARKS {
                        let text = format!("{}\n{}", bookmark.favicon, bookmark.title);
                        if ui.add_sized([80.0, 64.0], egui::Button::new(text)).clicked() {
                            go_to = Some(bookmark.url.to_string());
                        }
                    }
                });
            }
        }

        if let Some(id) = activate {
            self.activate(id);
        }
        if let Some(id) = close {
            self.close_tab(id);
        }
        if add {
            self.add_tab();
        }
        if let Some(url) = go_to {
            self.navigate(&url);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_on_apple() {
        let safari = Safari::default();
        let tab = safari.active_tab().cloned();
        assert_eq!(tab.map(|t| (t.title, t.url)), Some(("Apple".to_string(), "https://www.apple.com".to_string())));
    }

    #[test]
    fn new_tab_is_blank_and_active() {
        let mut safari = Safari::default();
        let id = safari.add_tab();
        assert_eq!(safari.active_tab().map(|t| t.id), Some(id));
        assert_eq!(safari.active_tab().map(|t| t.url.as_str()), Some(""));
        assert_eq!(safari.address, "");
    }

    #[test]
    fn last_tab_cannot_close() {
        let mut safari = Safari::default();
        safari.close_tab(1);
        assert_eq!(safari.tabs.len(), 1);
    }

    #[test]
    fn closing_the_active_tab_activates_the_rightmost() {
        let mut safari = Safari::default();
        let second = safari.add_tab();
        let third = safari.add_tab();
        safari.activate(second);
        safari.close_tab(second);
        assert_eq!(safari.active_tab().map(|t| t.id), Some(third));

        safari.close_tab(1);
        assert_eq!(safari.active_tab().map(|t| t.id), Some(third));
    }

    #[test]
    fn navigation_normalizes_and_retitles() {
        let mut safari = Safari::default();
        safari.navigate("github.com/rust-lang");
        let tab = safari.active_tab().cloned();
        assert_eq!(
            tab.map(|t| (t.title, t.url)),
            Some(("github.com".to_string(), "https://github.com/rust-lang".to_string()))
        );
        assert_eq!(safari.address, "https://github.com/rust-lang");

        safari.navigate("   ");
        assert_eq!(safari.address, "https://github.com/rust-lang");
    }

    #[test]
    fn host_title_strips_www_port_and_path() {
        assert_eq!(host_title("https://www.apple.com/mac?x=1").as_deref(), Some("apple.com"));
        assert_eq!(host_title("http://user@Example.org:8080/").as_deref(), Some("example.org"));
        assert_eq!(host_title("https://"), None);
    }
}
