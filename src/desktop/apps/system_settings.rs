//! System Settings - Section sidebar with a handful of live toggles
//!
//! The values only live inside the window; nothing here changes the host.

use egui::{Color32, RichText, ScrollArea, Slider, Ui, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn section(id: &'static str, label: &'static str, icon: &'static str) -> Section {
    Section { id, label, icon }
}

pub const SECTIONS: [Section; 15] = [
    section("wifi", "Wi-Fi", "📶"),
    section("bluetooth", "Bluetooth", "ᛒ"),
    section("display", "Displays", "🖥"),
    section("sound", "Sound", "🔊"),
    section("appearance", "Appearance", "☀"),
    section("notifications", "Notifications", "🔔"),
    section("privacy", "Privacy & Security", "🛡"),
    section("storage", "Storage", "💾"),
    section("users", "Users & Groups", "👤"),
    section("keyboard", "Keyboard", "⌨"),
    section("trackpad", "Trackpad", "🖱"),
    section("battery", "Battery", "🔋"),
    section("datetime", "Date & Time", "🕒"),
    section("language", "Language & Region", "🌐"),
    section("accessibility", "Accessibility", "♿"),
];

const NETWORKS: [&str; 4] = ["MacEmu-Network", "Guest-WiFi", "Office-5G", "Neighbor's WiFi"];
const OUTPUT_DEVICES: [&str; 3] = ["MacBook Pro Speakers", "External Display", "AirPods Pro"];
const RESOLUTIONS: [&str; 3] = ["Default", "Scaled", "Custom"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
    Auto,
}

impl Appearance {
    const ALL: [Appearance; 3] = [Self::Light, Self::Dark, Self::Auto];

    fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Auto => "Auto",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemSettings {
    selected: &'static str,
    pub wifi: bool,
    pub bluetooth: bool,
    pub notifications: bool,
    pub appearance: Appearance,
    pub volume: u8,
    pub brightness: u8,
    pub true_tone: bool,
    pub night_shift: bool,
    pub volume_feedback: bool,
    pub resolution: usize,
    pub output_device: usize,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            selected: "wifi",
            wifi: true,
            bluetooth: true,
            notifications: true,
            appearance: Appearance::Light,
            volume: 75,
            brightness: 80,
            true_tone: true,
            night_shift: false,
            volume_feedback: true,
            resolution: 0,
            output_device: 0,
        }
    }
}

/// Toggle switch painted like the macOS control
fn toggle_switch(ui: &mut Ui, on: &mut bool) -> egui::Response {
    let desired_size = Vec2::new(36.0, 20.0);
    let (rect, mut response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool_responsive(response.id, *on);
        let track = if *on {
            Color32::from_rgb(52, 199, 89)
        } else {
            Color32::from_gray(200)
        };
        ui.painter()
            .rect_filled(rect, egui::Rounding::same(rect.height() / 2.0), track);

        let radius = rect.height() / 2.0 - 2.0;
        let x = egui::lerp((rect.left() + radius + 2.0)..=(rect.right() - radius - 2.0), how_on);
        ui.painter()
            .circle_filled(egui::pos2(x, rect.center().y), radius, Color32::WHITE);
    }

    response
}

fn toggle_row(ui: &mut Ui, title: &str, detail: Option<&str>, on: &mut bool) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(title).strong());
            if let Some(detail) = detail {
                ui.label(RichText::new(detail).size(11.0).color(Color32::GRAY));
            }
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            toggle_switch(ui, on);
        });
    });
}

fn heading(ui: &mut Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(text).size(11.0).strong().color(Color32::GRAY));
}

impl SystemSettings {
    pub fn selected_section(&self) -> Section {
        SECTIONS
            .into_iter()
            .find(|s| s.id == self.selected)
            .unwrap_or(SECTIONS[0])
    }

    /// Switch the right-hand pane. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) {
        if let Some(section) = SECTIONS.iter().find(|s| s.id == id) {
            self.selected = section.id;
        }
    }

    /// Subtitle of the Wi-Fi row
    pub fn wifi_status(&self) -> &'static str {
        if self.wifi {
            "Connected to MacEmu-Network"
        } else {
            "Off"
        }
    }

    pub fn show(&mut self, ui: &mut Ui) {
        let mut select = None;

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(170.0);
                ScrollArea::vertical().id_salt("settings_sections").show(ui, |ui| {
                    for section in SECTIONS {
                        let text = format!("{}  {}", section.icon, section.label);
                        if ui.selectable_label(self.selected == section.id, text).clicked() {
                            select = Some(section.id);
                        }
                    }
                });
            });
            ui.separator();
            ui.vertical(|ui| {
                let section = self.selected_section();
                ui.label(RichText::new(section.label).size(18.0).strong());
                ui.add_space(8.0);
                ScrollArea::vertical()
                    .id_salt("settings_pane")
                    .show(ui, |ui| self.section_pane(ui, section));
            });
        });

        if let Some(id) = select {
            self.select(id);
        }
    }

    fn section_pane(&mut self, ui: &mut Ui, section: Section) {
        match section.id {
            "wifi" => {
                let status = self.wifi_status();
                toggle_row(ui, "Wi-Fi", Some(status), &mut self.wifi);
                if self.wifi {
                    heading(ui, "AVAILABLE NETWORKS");
                    for (i, network) in NETWORKS.iter().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(format!("📶  {network}"));
                            if i == 0 {
                                ui.label(RichText::new("Connected").size(11.0).color(Color32::from_rgb(0, 122, 255)));
                            }
                        });
                    }
                }
            }
            "bluetooth" => {
                let status = if self.bluetooth { "On" } else { "Off" };
                toggle_row(ui, "Bluetooth", Some(status), &mut self.bluetooth);
            }
            "display" => {
                ui.label("Brightness");
                ui.add(Slider::new(&mut self.brightness, 0..=100).show_value(false));
                heading(ui, "RESOLUTION");
                ui.horizontal(|ui| {
                    for (i, name) in RESOLUTIONS.iter().enumerate() {
                        ui.selectable_value(&mut self.resolution, i, *name);
                    }
                });
                ui.add_space(8.0);
                toggle_row(ui, "True Tone", None, &mut self.true_tone);
                toggle_row(ui, "Night Shift", None, &mut self.night_shift);
            }
            "sound" => {
                ui.label("Output Volume");
                ui.add(Slider::new(&mut self.volume, 0..=100).show_value(false));
                heading(ui, "OUTPUT DEVICE");
                for (i, device) in OUTPUT_DEVICES.iter().enumerate() {
                    ui.radio_value(&mut self.output_device, i, *device);
                }
                ui.add_space(8.0);
                toggle_row(
                    ui,
                    "Play feedback when volume is changed",
                    None,
                    &mut self.volume_feedback,
                );
            }
            "appearance" => {
                heading(ui, "APPEARANCE");
                ui.horizontal(|ui| {
                    for mode in Appearance::ALL {
                        ui.selectable_value(&mut self.appearance, mode, mode.label());
                    }
                });
            }
            "notifications" => {
                toggle_row(
                    ui,
                    "Allow notifications",
                    Some("Show alerts from applications"),
                    &mut self.notifications,
                );
            }
            _ => {
                ui.label(
                    RichText::new(format!("Settings panel for {}", section.label)).color(Color32::GRAY),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_open_on_wifi() {
        let settings = SystemSettings::default();
        assert_eq!(settings.selected_section().label, "Wi-Fi");
        assert!(settings.wifi && settings.bluetooth && settings.notifications);
        assert_eq!((settings.volume, settings.brightness), (75, 80));
        assert_eq!(settings.appearance, Appearance::Light);
    }

    #[test]
    fn select_only_accepts_known_sections() {
        let mut settings = SystemSettings::default();
        settings.select("privacy");
        assert_eq!(settings.selected_section().label, "Privacy & Security");
        settings.select("kernel-extensions");
        assert_eq!(settings.selected_section().id, "privacy");
    }

    #[test]
    fn wifi_status_follows_the_toggle() {
        let mut settings = SystemSettings::default();
        assert_eq!(settings.wifi_status(), "Connected to MacEmu-Network");
        settings.wifi = false;
        assert_eq!(settings.wifi_status(), "Off");
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
    }
}
