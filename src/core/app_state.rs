//! Application state - Central state shared by every view of VMDesk

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use egui::vec2;
use tracing::{debug, info, warn};

use super::boot::BootSequencer;
use super::machine::{MachineDraft, MachineId, MachineStatus, VirtualMachine};
use super::registry::MachineRegistry;
use super::session::{SessionController, SessionState};
use super::settings::Settings;
use crate::desktop::ApplicationRegistry;

/// Central application state, owned by the UI and lent to panels
pub struct AppState {
    /// Settings the app was launched with
    pub settings: Settings,
    /// Configured machines
    pub machines: MachineRegistry,
    /// Manager / booting / running state machine
    pub session: SessionController,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let machines = if settings.seed_default_machines {
            MachineRegistry::with_defaults()
        } else {
            MachineRegistry::new()
        };
        let (width, height) = settings.initial_viewport;
        let session = SessionController::new(
            BootSequencer::new(settings.boot.clone()),
            Arc::new(ApplicationRegistry::builtin()),
            settings.layout.clone(),
            vec2(width, height),
        );
        info!("{} machines registered", machines.len());

        Self {
            settings,
            machines,
            session,
        }
    }

    /// Validate a form and register the machine it describes
    pub fn create_machine(&mut self, draft: &MachineDraft) -> Result<MachineId> {
        let config = draft.validate().context("Failed to create machine")?;
        Ok(self.machines.create(config))
    }

    /// Delete a machine, shutting its session down first if it is active.
    /// Returns whether anything was removed; unknown ids are ignored.
    pub fn delete_machine(&mut self, id: MachineId) -> bool {
        if self.session.active_machine() == Some(id) {
            warn!("Deleting active machine {}, shutting down first", id);
            self.session.shutdown(&mut self.machines);
        }
        let removed = self.machines.remove(id).is_some();
        if !removed {
            debug!("Ignoring delete of unknown machine {}", id);
        }
        removed
    }

    pub fn start_machine(&mut self, id: MachineId) -> Result<()> {
        self.start_machine_at(id, Instant::now())
    }

    pub fn start_machine_at(&mut self, id: MachineId, now: Instant) -> Result<()> {
        self.session
            .start_machine(&mut self.machines, id, now)
            .with_context(|| format!("Failed to start machine {}", self.machine_label(id)))
    }

    pub fn shutdown(&mut self) {
        self.session.shutdown(&mut self.machines);
    }

    /// Drive time-based work from the frame loop
    pub fn tick(&mut self, now: Instant) -> bool {
        self.session.tick(now)
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// The machine currently booting or running
    pub fn active_machine(&self) -> Option<&VirtualMachine> {
        self.session
            .active_machine()
            .and_then(|id| self.machines.get(id))
    }

    pub fn running_count(&self) -> usize {
        self.machines.count_with_status(MachineStatus::Running)
    }

    pub fn total_count(&self) -> usize {
        self.machines.len()
    }

    fn machine_label(&self, id: MachineId) -> String {
        self.machines
            .get(id)
            .map(|m| m.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::error::DesktopError;
    use crate::desktop::AppId;

    fn state() -> AppState {
        AppState::new(Settings::default())
    }

    fn draft(name: &str) -> MachineDraft {
        MachineDraft {
            name: name.to_string(),
            ..MachineDraft::default()
        }
    }

    #[test]
    fn seeds_stock_machines_unless_disabled() {
        assert_eq!(state().total_count(), 3);

        let settings = Settings {
            seed_default_machines: false,
            ..Settings::default()
        };
        assert_eq!(AppState::new(settings).total_count(), 0);
    }

    #[test]
    fn invalid_draft_never_reaches_registry() {
        let mut app = state();
        let err = app.create_machine(&draft("   ")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DesktopError>(),
            Some(DesktopError::InvalidMachine(_))
        ));
        assert_eq!(app.total_count(), 3);
    }

    #[test]
    fn created_machine_boots_into_desktop() {
        let mut app = state();
        let id = app.create_machine(&draft("M1")).unwrap();
        let t0 = Instant::now();

        app.start_machine_at(id, t0).unwrap();
        assert_eq!(app.session_state(), SessionState::Booting);
        assert_eq!(app.active_machine().map(|m| m.name()), Some("M1"));
        assert_eq!(app.running_count(), 1);

        assert!(app.tick(t0 + Duration::from_millis(4500)));
        assert_eq!(app.session_state(), SessionState::Running);

        app.shutdown();
        assert_eq!(app.session_state(), SessionState::Manager);
        assert!(app.active_machine().is_none());
        assert_eq!(app.running_count(), 0);
    }

    #[test]
    fn second_start_reports_busy_session() {
        let mut app = state();
        let ids: Vec<MachineId> = app.machines.list().iter().map(|m| m.id).collect();
        app.start_machine(ids[0]).unwrap();

        let err = app.start_machine(ids[1]).unwrap_err();
        assert_eq!(err.downcast_ref::<DesktopError>(), Some(&DesktopError::SessionBusy));
        assert!(err.to_string().contains("macOS Ventura"));
    }

    #[test]
    fn deleting_active_machine_shuts_session_down() {
        let mut app = state();
        let id = app.machines.list()[0].id;
        app.start_machine(id).unwrap();
        app.session.complete_boot();
        app.session
            .desktop_mut()
            .unwrap()
            .click_dock(AppId::Finder);

        assert!(app.delete_machine(id));
        assert_eq!(app.session_state(), SessionState::Manager);
        assert!(app.machines.get(id).is_none());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut app = state();
        let missing = MachineId::new();

        assert!(!app.delete_machine(missing));
        assert_eq!(app.total_count(), 3);

        app.start_machine(missing).unwrap();
        assert_eq!(app.session_state(), SessionState::Manager);
        assert_eq!(app.running_count(), 0);
    }
}
