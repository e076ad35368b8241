//! Session controller - Manager → booting → running state machine
//!
//! Each phase owns the resources that only exist in that phase, so the
//! "active machine is set iff booting or running" rule cannot be broken
//! and tearing a phase down releases its boot task or desktop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use egui::Vec2;
use tracing::{debug, info, warn};

use super::boot::{BootPoll, BootProgress, BootSequencer, BootTask};
use super::error::DesktopError;
use super::machine::{MachineId, MachineStatus};
use super::registry::MachineRegistry;
use super::settings::DesktopLayout;
use crate::desktop::{ApplicationRegistry, Desktop};

/// Observable session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Manager,
    Booting,
    Running,
}

impl SessionState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Manager => "Idle",
            Self::Booting => "Booting",
            Self::Running => "Running",
        }
    }
}

#[derive(Debug, Default)]
enum Phase {
    #[default]
    Manager,
    Booting {
        machine: MachineId,
        boot: BootTask,
    },
    Running {
        machine: MachineId,
        desktop: Desktop,
    },
}

pub struct SessionController {
    phase: Phase,
    sequencer: BootSequencer,
    apps: Arc<ApplicationRegistry>,
    layout: DesktopLayout,
    viewport: Vec2,
}

impl SessionController {
    pub fn new(
        sequencer: BootSequencer,
        apps: Arc<ApplicationRegistry>,
        layout: DesktopLayout,
        viewport: Vec2,
    ) -> Self {
        Self {
            phase: Phase::Manager,
            sequencer,
            apps,
            layout,
            viewport,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::Manager => SessionState::Manager,
            Phase::Booting { .. } => SessionState::Booting,
            Phase::Running { .. } => SessionState::Running,
        }
    }

    pub fn active_machine(&self) -> Option<MachineId> {
        match &self.phase {
            Phase::Manager => None,
            Phase::Booting { machine, .. } | Phase::Running { machine, .. } => Some(*machine),
        }
    }

    #[cfg(test)]
    pub fn desktop(&self) -> Option<&Desktop> {
        match &self.phase {
            Phase::Running { desktop, .. } => Some(desktop),
            _ => None,
        }
    }

    pub fn desktop_mut(&mut self) -> Option<&mut Desktop> {
        match &mut self.phase {
            Phase::Running { desktop, .. } => Some(desktop),
            _ => None,
        }
    }

    pub fn boot_progress(&self, now: Instant) -> Option<BootProgress> {
        match &self.phase {
            Phase::Booting { boot, .. } => Some(boot.progress(now)),
            _ => None,
        }
    }

    /// Time until the boot completes, while booting
    pub fn boot_remaining(&self, now: Instant) -> Option<Duration> {
        match &self.phase {
            Phase::Booting { boot, .. } => Some(boot.remaining(now)),
            _ => None,
        }
    }

    /// Size of the simulated screen used for new and running desktops
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        if let Some(desktop) = self.desktop_mut() {
            desktop.windows.set_viewport(viewport);
        }
    }

    /// Begin booting `id`. An unknown id is ignored.
    pub fn start_machine(
        &mut self,
        registry: &mut MachineRegistry,
        id: MachineId,
        now: Instant,
    ) -> Result<(), DesktopError> {
        let Some(machine) = registry.get(id) else {
            debug!("Ignoring start of unknown machine {}", id);
            return Ok(());
        };
        if !matches!(self.phase, Phase::Manager) {
            return Err(DesktopError::SessionBusy);
        }
        if machine.status.is_running() {
            return Err(DesktopError::MachineAlreadyRunning(id));
        }

        let media = machine.config.boot_media;
        info!("Starting {} ({})", machine.name(), id);
        registry.set_status(id, MachineStatus::Running);
        self.phase = Phase::Booting {
            machine: id,
            boot: self.sequencer.start(media, now),
        };
        Ok(())
    }

    /// Finish booting and mount a fresh desktop. No-op unless booting.
    pub fn complete_boot(&mut self) {
        match std::mem::take(&mut self.phase) {
            Phase::Booting { machine, mut boot } => {
                boot.cancel();
                info!("Machine {} booted", machine);
                self.phase = Phase::Running {
                    machine,
                    desktop: Desktop::new(Arc::clone(&self.apps), self.layout.clone(), self.viewport),
                };
            }
            other => {
                debug!("Ignoring boot completion outside booting");
                self.phase = other;
            }
        }
    }

    /// Stop the active machine and return to the manager. No-op in the manager.
    pub fn shutdown(&mut self, registry: &mut MachineRegistry) {
        match std::mem::take(&mut self.phase) {
            Phase::Manager => debug!("Ignoring shutdown with no active session"),
            Phase::Booting { machine, mut boot } => {
                boot.cancel();
                registry.set_status(machine, MachineStatus::Stopped);
                warn!("Machine {} shut down during boot", machine);
            }
            Phase::Running { machine, desktop } => {
                let windows = desktop.windows.len();
                drop(desktop);
                registry.set_status(machine, MachineStatus::Stopped);
                info!("Machine {} shut down, {} windows discarded", machine, windows);
            }
        }
    }

    /// Advance the boot task. Returns true when the boot completed on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Phase::Booting { boot, .. } = &mut self.phase else {
            return false;
        };
        match boot.poll(now) {
            BootPoll::Complete => {
                self.complete_boot();
                true
            }
            BootPoll::Pending | BootPoll::Inactive => false,
        }
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("state", &self.state())
            .field("active_machine", &self.active_machine())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use egui::vec2;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::machine::MachineConfig;
    use crate::core::settings::BootTimings;
    use crate::desktop::AppId;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn setup() -> (SessionController, MachineRegistry, MachineId) {
        let mut registry = MachineRegistry::new();
        let id = registry.create(MachineConfig::new(
            "M1",
            "Mac mini",
            "macOS 14.0",
            "Apple M2",
            16,
            512,
        ));
        let session = SessionController::new(
            BootSequencer::new(BootTimings::default()),
            Arc::new(ApplicationRegistry::builtin()),
            DesktopLayout::default(),
            vec2(1280.0, 800.0),
        );
        (session, registry, id)
    }

    #[test]
    fn start_boots_then_runs() {
        let (mut session, mut registry, id) = setup();
        let t0 = Instant::now();

        session.start_machine(&mut registry, id, t0).unwrap();
        assert_eq!(session.state(), SessionState::Booting);
        assert_eq!(session.active_machine(), Some(id));
        assert_eq!(registry.get(id).unwrap().status, MachineStatus::Running);
        assert_eq!(session.boot_progress(t0 + ms(2000)).unwrap().percent, 50);

        assert!(!session.tick(t0 + ms(4000)));
        assert!(session.tick(t0 + ms(4500)));
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.desktop().map(|d| d.windows.len()), Some(0));
        assert!(!session.tick(t0 + ms(9000)));
    }

    #[test]
    fn start_is_rejected_while_busy() {
        let (mut session, mut registry, id) = setup();
        let other = registry.create(MachineConfig::new("M2", "iMac 24\"", "macOS 13.0", "Apple M1", 8, 256));
        let t0 = Instant::now();

        session.start_machine(&mut registry, id, t0).unwrap();
        assert_eq!(
            session.start_machine(&mut registry, other, t0),
            Err(DesktopError::SessionBusy)
        );
        assert_eq!(registry.get(other).unwrap().status, MachineStatus::Stopped);
    }

    #[test]
    fn start_ignores_unknown_and_rejects_running_machines() {
        let (mut session, mut registry, id) = setup();
        let missing = MachineId::new();
        assert_eq!(
            session.start_machine(&mut registry, missing, Instant::now()),
            Ok(())
        );
        assert_eq!(session.state(), SessionState::Manager);
        assert_eq!(registry.len(), 1);

        registry.set_status(id, MachineStatus::Running);
        assert_eq!(
            session.start_machine(&mut registry, id, Instant::now()),
            Err(DesktopError::MachineAlreadyRunning(id))
        );
        assert_eq!(session.state(), SessionState::Manager);
    }

    #[test]
    fn shutdown_during_boot_stays_in_manager() {
        let (mut session, mut registry, id) = setup();
        let t0 = Instant::now();
        session.start_machine(&mut registry, id, t0).unwrap();

        session.shutdown(&mut registry);
        assert_eq!(session.state(), SessionState::Manager);
        assert_eq!(session.active_machine(), None);
        assert_eq!(registry.get(id).unwrap().status, MachineStatus::Stopped);

        assert!(!session.tick(t0 + ms(60_000)));
        session.complete_boot();
        assert_eq!(session.state(), SessionState::Manager);
    }

    #[test]
    fn shutdown_discards_windows_and_gestures() {
        let (mut session, mut registry, id) = setup();
        let t0 = Instant::now();
        session.start_machine(&mut registry, id, t0).unwrap();
        session.complete_boot();

        let desktop = session.desktop_mut().unwrap();
        let window = desktop.click_dock(AppId::Notes);
        desktop.click_dock(AppId::Terminal);
        let listeners = desktop.windows.pointer_listeners();
        let grab = desktop.windows.get(window).unwrap().position + vec2(200.0, 10.0);
        desktop.windows.pointer_pressed(grab);
        assert_eq!(listeners.active(), 1);

        session.shutdown(&mut registry);
        assert_eq!(session.state(), SessionState::Manager);
        assert!(session.desktop().is_none());
        assert_eq!(listeners.active(), 0);

        session.start_machine(&mut registry, id, t0).unwrap();
        session.complete_boot();
        assert_eq!(session.desktop().map(|d| d.windows.len()), Some(0));
        assert_eq!(registry.get(id).unwrap().boot_count, 2);
    }

    #[test]
    fn manager_ignores_shutdown_and_completion() {
        let (mut session, mut registry, id) = setup();
        session.shutdown(&mut registry);
        session.complete_boot();
        assert_eq!(session.state(), SessionState::Manager);
        assert_eq!(registry.get(id).unwrap().status, MachineStatus::Stopped);
        assert_eq!(registry.get(id).unwrap().boot_count, 0);
    }

    #[test]
    fn viewport_reaches_running_desktop() {
        let (mut session, mut registry, id) = setup();
        session.start_machine(&mut registry, id, Instant::now()).unwrap();
        session.complete_boot();

        session.set_viewport(vec2(800.0, 600.0));
        assert_eq!(
            session.desktop().unwrap().windows.viewport(),
            vec2(800.0, 600.0)
        );
    }
}
