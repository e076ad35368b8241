//! Central views, one per session state

pub mod boot;
pub mod desktop;
pub mod manager;
