//! Main application UI

use std::time::{Duration, Instant};

use egui::{CentralPanel, Context, TopBottomPanel};
use tracing::info;

use super::components::StatusBadge;
use super::dialogs::{self, ConfirmAction, DialogState};
use super::panels;
use super::theme::{Icons, Theme};
use crate::core::{AppState, MachineDraft, SessionState};

/// Frame interval while the boot animation runs
const BOOT_REPAINT: Duration = Duration::from_millis(40);
/// Frame interval otherwise, enough for the menu bar clock and toasts
const IDLE_REPAINT: Duration = Duration::from_millis(500);
const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Main application struct
pub struct VmDeskApp {
    state: AppState,
    dialog: DialogState,
    /// Form backing the "New Machine" dialog
    new_machine: Option<MachineDraft>,
    notifications: Vec<Notification>,
    first_frame: bool,
}

/// Notification message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl VmDeskApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        Theme::apply(&cc.egui_ctx, state.settings.theme);

        Self {
            state,
            dialog: DialogState::None,
            new_machine: None,
            notifications: Vec::new(),
            first_frame: true,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, level: NotificationLevel) {
        self.notifications.push(Notification::new(message, level));
    }

    fn cleanup_notifications(&mut self) {
        self.notifications
            .retain(|n| n.created_at.elapsed() < NOTIFICATION_TIMEOUT);
    }

    /// Advance the boot sequence and schedule the next frame
    fn drive_session(&mut self, ctx: &Context) {
        let now = Instant::now();
        if self.state.tick(now) {
            if let Some(machine) = self.state.active_machine() {
                let message = format!("{} is ready", machine.name());
                self.notify(message, NotificationLevel::Info);
            }
        }

        let next = match self.state.session.boot_remaining(now) {
            Some(remaining) => BOOT_REPAINT.min(remaining.max(Duration::from_millis(1))),
            None => IDLE_REPAINT,
        };
        ctx.request_repaint_after(next);
    }

    fn render_top_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::none()
                    .fill(Theme::BG_PRIMARY)
                    .stroke(egui::Stroke::new(1.0, Theme::BORDER_LIGHT))
                    .inner_margin(egui::Margin::symmetric(20.0, 10.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(Icons::LOGO).size(22.0).color(Theme::PRIMARY));
                    ui.label(
                        egui::RichText::new(crate::APP_NAME)
                            .size(20.0)
                            .strong()
                            .color(Theme::TEXT_PRIMARY),
                    );
                    if let Some(machine) = self.state.active_machine() {
                        ui.add_space(12.0);
                        ui.label(
                            egui::RichText::new(format!("· {}", machine.name()))
                                .size(16.0)
                                .color(Theme::TEXT_SECONDARY),
                        );
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.state.session_state() != SessionState::Manager {
                            return;
                        }
                        let new_btn = egui::Button::new(
                            egui::RichText::new(format!("{} New Machine", Icons::ADD))
                                .color(egui::Color32::WHITE),
                        )
                        .fill(Theme::PRIMARY)
                        .rounding(egui::Rounding::same(8.0))
                        .min_size(egui::vec2(130.0, 32.0));

                        if ui.add(new_btn).clicked() {
                            self.new_machine = Some(MachineDraft::default());
                            self.dialog = DialogState::NewMachine;
                        }
                    });
                });
            });
    }

    fn render_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::none()
                    .fill(Theme::BG_SECONDARY)
                    .stroke(egui::Stroke::new(1.0, Theme::BORDER_LIGHT))
                    .inner_margin(egui::Margin::symmetric(16.0, 6.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let session = self.state.session_state();
                    StatusBadge::session(ui, session);

                    if let Some(machine) = self.state.active_machine() {
                        ui.separator();
                        ui.label(
                            egui::RichText::new(machine.config.summary())
                                .size(12.0)
                                .color(Theme::TEXT_SECONDARY),
                        );
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if session != SessionState::Manager {
                            let btn = egui::Button::new(
                                egui::RichText::new(format!("{} Shutdown", Icons::POWER))
                                    .size(12.0)
                                    .color(Theme::ERROR_LIGHT),
                            )
                            .fill(Theme::BG_TERTIARY)
                            .rounding(egui::Rounding::same(6.0));
                            if ui.add(btn).clicked() {
                                self.state.shutdown();
                                self.notify("Machine shut down", NotificationLevel::Info);
                            }
                        } else {
                            ui.label(
                                egui::RichText::new(format!("v{}", crate::APP_VERSION))
                                    .size(11.0)
                                    .color(Theme::TEXT_MUTED),
                            );
                        }
                    });
                });
            });
    }

    fn render_main_content(&mut self, ctx: &Context) {
        match self.state.session_state() {
            SessionState::Manager => {
                CentralPanel::default().show(ctx, |ui| {
                    panels::manager::render(
                        ui,
                        &mut self.state,
                        &mut self.dialog,
                        &mut self.notifications,
                    );
                });
            }
            SessionState::Booting => {
                CentralPanel::default()
                    .frame(egui::Frame::none())
                    .show(ctx, |ui| {
                        panels::boot::render(ui, &self.state, Instant::now());
                    });
            }
            SessionState::Running => {
                CentralPanel::default()
                    .frame(egui::Frame::none())
                    .show(ctx, |ui| {
                        panels::desktop::render(ui, &mut self.state, &mut self.dialog);
                    });
            }
        }
    }

    fn render_notifications(&mut self, ctx: &Context) {
        if self.notifications.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("notifications"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(ctx.screen_rect().width() - 360.0, 72.0))
            .show(ctx, |ui| {
                for notification in &self.notifications {
                    let (icon, color) = match notification.level {
                        NotificationLevel::Info => (Icons::INFO, Theme::INFO),
                        NotificationLevel::Success => (Icons::SUCCESS, Theme::SUCCESS),
                        NotificationLevel::Error => (Icons::ERROR, Theme::ERROR),
                    };

                    egui::Frame::none()
                        .fill(Theme::BG_ELEVATED)
                        .rounding(egui::Rounding::same(10.0))
                        .stroke(egui::Stroke::new(1.0, color.linear_multiply(0.5)))
                        .inner_margin(egui::Margin::same(14.0))
                        .show(ui, |ui| {
                            ui.set_width(320.0);
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(icon).size(14.0).color(color));
                                ui.add_space(8.0);
                                ui.label(
                                    egui::RichText::new(&notification.message)
                                        .size(13.0)
                                        .color(Theme::TEXT_PRIMARY),
                                );
                            });
                        });

                    ui.add_space(8.0);
                }
            });
    }

    fn render_dialogs(&mut self, ctx: &Context) {
        match self.dialog.clone() {
            DialogState::None => {}
            DialogState::NewMachine => {
                dialogs::new_machine::render(
                    ctx,
                    &mut self.new_machine,
                    &mut self.state,
                    &mut self.dialog,
                    &mut self.notifications,
                );
            }
            DialogState::MachineDetails(id) => {
                dialogs::machine_details::render(ctx, id, &self.state, &mut self.dialog);
            }
            DialogState::Confirm {
                title,
                message,
                action,
            } => {
                if let Some(action) =
                    dialogs::confirm::render(ctx, &title, &message, action, &mut self.dialog)
                {
                    self.apply_confirmed(action);
                }
            }
        }
    }

    fn apply_confirmed(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeleteMachine(id) => {
                if self.state.delete_machine(id) {
                    self.notify("Machine deleted", NotificationLevel::Success);
                }
            }
            ConfirmAction::ShutDown => {
                self.state.shutdown();
                self.notify("Machine shut down", NotificationLevel::Info);
            }
        }
    }
}

impl eframe::App for VmDeskApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            self.first_frame = false;
            info!("First frame rendered");
        }

        self.drive_session(ctx);
        self.cleanup_notifications();

        self.render_top_bar(ctx);
        self.render_status_bar(ctx);
        self.render_main_content(ctx);
        self.render_notifications(ctx);
        self.render_dialogs(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.state.session_state() != SessionState::Manager {
            self.state.shutdown();
        }
        info!("Application exiting");
    }
}
