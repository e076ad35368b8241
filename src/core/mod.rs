//! Core module - Application state, machine registry, boot and session control

mod app_state;
pub mod boot;
pub mod error;
pub mod machine;
pub mod registry;
pub mod session;
pub mod settings;

pub use app_state::AppState;
pub use machine::{MachineDraft, MachineId, MachineStatus, VirtualMachine};
pub use session::SessionState;
pub use settings::Settings;
