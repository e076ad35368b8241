//! Theme and styling for the UI

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

use crate::core::settings::Theme as ThemeChoice;
use crate::core::{MachineStatus, SessionState};

/// Application color palette
pub struct Theme;

impl Theme {
    // Accent
    pub const PRIMARY: Color32 = Color32::from_rgb(10, 132, 255);
    pub const PRIMARY_DARK: Color32 = Color32::from_rgb(0, 96, 200);

    // Status
    pub const SUCCESS: Color32 = Color32::from_rgb(48, 209, 88);
    pub const WARNING: Color32 = Color32::from_rgb(255, 159, 10);
    pub const ERROR: Color32 = Color32::from_rgb(255, 69, 58);
    pub const ERROR_LIGHT: Color32 = Color32::from_rgb(255, 120, 110);
    pub const INFO: Color32 = Color32::from_rgb(100, 210, 255);

    // Shell surfaces
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(22, 22, 26);
    pub const BG_SECONDARY: Color32 = Color32::from_rgb(30, 30, 36);
    pub const BG_TERTIARY: Color32 = Color32::from_rgb(44, 44, 52);
    pub const BG_HOVER: Color32 = Color32::from_rgb(56, 56, 66);
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(38, 38, 46);

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(245, 245, 247);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(172, 172, 180);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 130);

    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 70);
    pub const BORDER_LIGHT: Color32 = Color32::from_rgb(46, 46, 54);

    // Simulated desktop
    pub const DESKTOP_TOP: Color32 = Color32::from_rgb(58, 45, 120);
    pub const DESKTOP_BOTTOM: Color32 = Color32::from_rgb(196, 92, 130);
    pub const MENU_BAR: Color32 = Color32::from_rgba_premultiplied(20, 20, 24, 200);
    pub const DOCK: Color32 = Color32::from_rgba_premultiplied(36, 36, 42, 190);
    pub const WINDOW_BODY: Color32 = Color32::from_rgb(246, 246, 248);
    pub const WINDOW_TITLE: Color32 = Color32::from_rgb(232, 232, 236);
    pub const WINDOW_TITLE_INACTIVE: Color32 = Color32::from_rgb(244, 244, 246);
    pub const WINDOW_TEXT: Color32 = Color32::from_rgb(30, 30, 34);

    // Traffic lights
    pub const CONTROL_CLOSE: Color32 = Color32::from_rgb(255, 95, 87);
    pub const CONTROL_MINIMIZE: Color32 = Color32::from_rgb(254, 188, 46);
    pub const CONTROL_MAXIMIZE: Color32 = Color32::from_rgb(40, 200, 64);
    pub const CONTROL_INACTIVE: Color32 = Color32::from_rgb(205, 205, 210);

    /// Apply the configured theme
    pub fn apply(ctx: &egui::Context, choice: ThemeChoice) {
        match choice {
            ThemeChoice::Dark => Self::apply_dark(ctx),
            ThemeChoice::Light => Self::apply_light(ctx),
        }
    }

    pub fn apply_dark(ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.panel_fill = Self::BG_PRIMARY;
        visuals.window_fill = Self::BG_ELEVATED;
        visuals.extreme_bg_color = Self::BG_PRIMARY;
        visuals.faint_bg_color = Self::BG_TERTIARY;

        visuals.widgets.noninteractive.bg_fill = Self::BG_SECONDARY;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.5, Self::BORDER_LIGHT);

        visuals.widgets.inactive.bg_fill = Self::BG_TERTIARY;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.bg_stroke = Stroke::new(0.5, Self::BORDER);

        visuals.widgets.hovered.bg_fill = Self::BG_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.6));
        visuals.widgets.hovered.expansion = 1.0;

        visuals.widgets.active.bg_fill = Self::PRIMARY;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, Self::PRIMARY_DARK);

        visuals.selection.bg_fill = Self::PRIMARY.linear_multiply(0.25);
        visuals.selection.stroke = Stroke::new(1.0, Self::PRIMARY);

        visuals.window_stroke = Stroke::new(0.5, Self::BORDER);
        visuals.window_shadow = egui::Shadow {
            offset: egui::vec2(0.0, 10.0),
            blur: 30.0,
            spread: 8.0,
            color: Color32::from_black_alpha(120),
        };

        Self::finish(ctx, visuals);
    }

    pub fn apply_light(ctx: &egui::Context) {
        let mut visuals = Visuals::light();
        let border = Color32::from_rgb(209, 209, 214);

        visuals.panel_fill = Color32::from_rgb(242, 242, 247);
        visuals.window_fill = Color32::WHITE;
        visuals.extreme_bg_color = Color32::WHITE;
        visuals.faint_bg_color = Color32::from_rgb(229, 229, 234);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.5, border);
        visuals.widgets.inactive.bg_stroke = Stroke::new(0.5, border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.7));
        visuals.widgets.hovered.expansion = 1.0;
        visuals.widgets.active.bg_fill = Self::PRIMARY;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);

        visuals.selection.bg_fill = Self::PRIMARY.linear_multiply(0.15);
        visuals.selection.stroke = Stroke::new(1.0, Self::PRIMARY);

        visuals.window_stroke = Stroke::new(0.5, border);
        visuals.window_shadow = egui::Shadow {
            offset: egui::vec2(0.0, 8.0),
            blur: 24.0,
            spread: 4.0,
            color: Color32::from_black_alpha(20),
        };

        Self::finish(ctx, visuals);
    }

    /// Rounding, text styles and spacing shared by both themes
    fn finish(ctx: &egui::Context, mut visuals: Visuals) {
        for widget in [
            &mut visuals.widgets.noninteractive,
            &mut visuals.widgets.inactive,
            &mut visuals.widgets.hovered,
            &mut visuals.widgets.active,
            &mut visuals.widgets.open,
        ] {
            widget.rounding = Rounding::same(6.0);
        }
        visuals.window_rounding = Rounding::same(10.0);
        visuals.menu_rounding = Rounding::same(8.0);

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.text_styles = [
            (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        ]
        .into();

        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.window_margin = egui::Margin::same(16.0);
        style.spacing.button_padding = egui::vec2(14.0, 8.0);
        style.spacing.slider_width = 200.0;
        style.interaction.tooltip_delay = 0.3;

        ctx.set_style(style);
    }

    pub fn status_color(status: MachineStatus) -> Color32 {
        match status {
            MachineStatus::Running => Self::SUCCESS,
            MachineStatus::Suspended => Self::WARNING,
            MachineStatus::Stopped => Self::TEXT_MUTED,
        }
    }

    pub fn session_color(state: SessionState) -> Color32 {
        match state {
            SessionState::Manager => Self::TEXT_MUTED,
            SessionState::Booting => Self::WARNING,
            SessionState::Running => Self::SUCCESS,
        }
    }
}

/// Icon characters (using Unicode symbols)
pub struct Icons;

impl Icons {
    pub const APPLE: &'static str = "🍎";
    pub const LOGO: &'static str = "◈";
    pub const PLAY: &'static str = "▶";
    pub const POWER: &'static str = "⏻";
    pub const INFO: &'static str = "ℹ";
    pub const TRASH: &'static str = "🗑";
    pub const ADD: &'static str = "+";
    pub const SUCCESS: &'static str = "✓";
    pub const ERROR: &'static str = "✕";
    pub const MACHINE: &'static str = "🖥";
}
