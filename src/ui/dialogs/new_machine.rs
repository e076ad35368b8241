//! New machine dialog

use egui::{Color32, Context};

use crate::core::machine::{
    BootMedia, MmuMode, CPUS, MODELS, OS_VERSIONS, RAM_RANGE_GB, RAM_STEP_GB, STORAGE_RANGE_GB,
    STORAGE_STEP_GB,
};
use crate::core::{AppState, MachineDraft};
use crate::ui::app::{Notification, NotificationLevel};
use crate::ui::dialogs::DialogState;
use crate::ui::theme::Theme;

fn field_label(ui: &mut egui::Ui, label: &str) {
    ui.label(egui::RichText::new(label).size(12.0).color(Theme::TEXT_MUTED));
    ui.add_space(4.0);
}

fn section_header(ui: &mut egui::Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(title)
            .size(15.0)
            .strong()
            .color(Theme::TEXT_PRIMARY),
    );
    ui.add_space(8.0);
}

fn combo(ui: &mut egui::Ui, id: &str, value: &mut String, options: &[(&str, &str)]) {
    let selected = options
        .iter()
        .find(|(key, _)| *key == value.as_str())
        .map(|(_, label)| *label)
        .unwrap_or(value.as_str())
        .to_string();
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for (key, label) in options {
                ui.selectable_value(value, key.to_string(), *label);
            }
        });
}

pub fn render(
    ctx: &Context,
    draft: &mut Option<MachineDraft>,
    state: &mut AppState,
    dialog: &mut DialogState,
    notifications: &mut Vec<Notification>,
) {
    let Some(form) = draft else {
        *dialog = DialogState::None;
        return;
    };

    let mut open = true;

    egui::Window::new("New Machine")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(480.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(Theme::BG_ELEVATED)
                .rounding(egui::Rounding::same(12.0))
                .stroke(egui::Stroke::new(1.0, Theme::BORDER))
                .inner_margin(egui::Margin::same(24.0)),
        )
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Create Virtual Machine")
                    .size(20.0)
                    .strong()
                    .color(Theme::TEXT_PRIMARY),
            );
            ui.add_space(16.0);

            egui::ScrollArea::vertical().max_height(460.0).show(ui, |ui| {
                section_header(ui, "General");
                field_label(ui, "Name");
                ui.add(
                    egui::TextEdit::singleline(&mut form.name)
                        .hint_text("My Mac")
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(10.0);

                let models: Vec<(&str, &str)> = MODELS.iter().map(|m| (*m, *m)).collect();
                field_label(ui, "Model");
                combo(ui, "new_machine_model", &mut form.model, &models);
                ui.add_space(10.0);

                field_label(ui, "macOS Version");
                combo(ui, "new_machine_os", &mut form.os_version, OS_VERSIONS);

                section_header(ui, "Hardware");
                let cpus: Vec<(&str, &str)> = CPUS.iter().map(|c| (*c, *c)).collect();
                field_label(ui, "Processor");
                combo(ui, "new_machine_cpu", &mut form.cpu, &cpus);
                ui.add_space(10.0);

                field_label(ui, "Memory");
                ui.add(
                    egui::Slider::new(&mut form.ram_gb, RAM_RANGE_GB)
                        .step_by(RAM_STEP_GB as f64)
                        .suffix(" GB"),
                );
                ui.add_space(10.0);

                field_label(ui, "Storage");
                ui.add(
                    egui::Slider::new(&mut form.storage_gb, STORAGE_RANGE_GB)
                        .step_by(STORAGE_STEP_GB as f64)
                        .suffix(" GB"),
                );
                ui.add_space(10.0);

                field_label(ui, "Display");
                ui.horizontal(|ui| {
                    ui.add(egui::DragValue::new(&mut form.screen_width).range(640..=5120));
                    ui.label("×");
                    ui.add(egui::DragValue::new(&mut form.screen_height).range(480..=2880));
                });

                section_header(ui, "Boot");
                ui.horizontal(|ui| {
                    for media in BootMedia::all() {
                        ui.radio_value(&mut form.boot_media, *media, media.label());
                    }
                });
                ui.add_space(6.0);
                ui.checkbox(&mut form.jit_enabled, "Enable JIT compilation");
                ui.checkbox(&mut form.mmu_enabled, "Enable MMU");
                ui.add_enabled_ui(form.mmu_enabled, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("MMU mode").size(12.0).color(Theme::TEXT_MUTED));
                        for mode in [MmuMode::Flat, MmuMode::Paged] {
                            ui.radio_value(&mut form.mmu_mode, mode, mode.label());
                        }
                    });
                });
            });

            ui.add_space(16.0);
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 0.0, Theme::BORDER_LIGHT);
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let can_create = !form.name.trim().is_empty();

                let create_btn =
                    egui::Button::new(egui::RichText::new("Create").color(Color32::WHITE))
                        .fill(if can_create {
                            Theme::PRIMARY
                        } else {
                            Theme::BG_TERTIARY
                        })
                        .rounding(egui::Rounding::same(8.0))
                        .min_size(egui::vec2(100.0, 36.0));
                let create_clicked = ui.add_enabled(can_create, create_btn).clicked();

                let start_btn = egui::Button::new("Create & Start")
                    .fill(Theme::BG_TERTIARY)
                    .rounding(egui::Rounding::same(8.0))
                    .min_size(egui::vec2(120.0, 36.0));
                let start_clicked = ui.add_enabled(can_create, start_btn).clicked();

                if create_clicked || start_clicked {
                    match state.create_machine(form) {
                        Ok(id) => {
                            notifications.push(Notification::new(
                                format!("Machine '{}' created", form.name.trim()),
                                NotificationLevel::Success,
                            ));
                            *dialog = DialogState::None;
                            if start_clicked {
                                if let Err(e) = state.start_machine(id) {
                                    notifications.push(Notification::new(
                                        format!("{:#}", e),
                                        NotificationLevel::Error,
                                    ));
                                }
                            }
                        }
                        Err(e) => {
                            notifications.push(Notification::new(
                                format!("{:#}", e),
                                NotificationLevel::Error,
                            ));
                        }
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let cancel_btn = egui::Button::new(
                        egui::RichText::new("Cancel").color(Theme::TEXT_SECONDARY),
                    )
                    .fill(Color32::TRANSPARENT)
                    .rounding(egui::Rounding::same(8.0))
                    .min_size(egui::vec2(80.0, 36.0));

                    if ui.add(cancel_btn).clicked() {
                        *dialog = DialogState::None;
                    }
                });
            });
        });

    if !open {
        *dialog = DialogState::None;
    }
}
