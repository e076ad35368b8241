//! Error types for the machine registry and session controller

use thiserror::Error;

use super::machine::MachineId;

/// Recoverable failures surfaced to the UI as notifications
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesktopError {
    /// A machine form failed validation before reaching the registry
    #[error("invalid machine configuration: {0}")]
    InvalidMachine(String),
    /// The machine is already running and cannot be started again
    #[error("machine {0} is already running")]
    MachineAlreadyRunning(MachineId),
    /// A session is already booting or running
    #[error("a machine session is already active")]
    SessionBusy,
}
