//! Reusable UI components

pub mod dock;
pub mod machine_card;
pub mod menu_bar;
mod status_badge;
pub mod window_frame;

pub use dock::Dock;
pub use machine_card::{CardAction, MachineCard};
pub use menu_bar::{MenuAction, MenuBar};
pub use status_badge::StatusBadge;
pub use window_frame::WindowFrame;
