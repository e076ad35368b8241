//! Dialog windows

pub mod confirm;
pub mod machine_details;
pub mod new_machine;

use crate::core::MachineId;

/// Action carried out when a confirmation dialog is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteMachine(MachineId),
    ShutDown,
}

/// State for dialog windows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DialogState {
    #[default]
    None,
    NewMachine,
    MachineDetails(MachineId),
    Confirm {
        title: String,
        message: String,
        action: ConfirmAction,
    },
}

impl DialogState {
    pub fn confirm(title: impl Into<String>, message: impl Into<String>, action: ConfirmAction) -> Self {
        Self::Confirm {
            title: title.into(),
            message: message.into(),
            action,
        }
    }
}
