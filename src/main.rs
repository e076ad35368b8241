//! VMDesk - Simulated desktop environment with a virtual machine launcher
//!
//! Machines are described, started through a scripted boot sequence and
//! then presented as a windowed desktop with a menu bar and dock. Nothing
//! is emulated; all state lives in memory for the lifetime of the process.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod core;
mod desktop;
mod ui;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::{AppState, Settings};
use crate::ui::VmDeskApp;

/// Application name constant
pub const APP_NAME: &str = "VMDesk";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let loaded = Settings::load();
    let filter = loaded
        .as_ref()
        .map(|(settings, _)| settings.log_filter())
        .unwrap_or_else(|_| Settings::default().log_filter());
    init_logging(filter);

    info!("{} v{} starting...", APP_NAME, APP_VERSION);

    let settings = match loaded {
        Ok((settings, Some(path))) => {
            info!("Settings loaded from {:?}", path);
            settings
        }
        Ok((settings, None)) => {
            info!("No settings file found, using defaults");
            settings
        }
        Err(e) => {
            warn!("{:#}; using default settings", e);
            Settings::default()
        }
    };

    let (width, height) = settings.initial_viewport;
    let app_state = AppState::new(settings);
    info!("Application state initialized");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([800.0, 600.0])
            .with_icon(load_app_icon()),
        ..Default::default()
    };

    info!("Starting GUI...");
    eframe::run_native(
        &format!("{} v{}", APP_NAME, APP_VERSION),
        native_options,
        Box::new(|cc| Ok(Box::new(VmDeskApp::new(cc, app_state)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    info!("{} shutting down", APP_NAME);
    Ok(())
}

/// Initialize the logging system. `RUST_LOG` overrides the default filter.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Window icon: a rounded screen glyph
fn load_app_icon() -> egui::IconData {
    let size = 64usize;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let inside_screen = (6..58).contains(&x) && (10..46).contains(&y);
            let inside_stand = (26..38).contains(&x) && (46..54).contains(&y);
            if inside_screen {
                let t = y as f32 / size as f32;
                rgba[idx] = (58.0 + t * 138.0) as u8;
                rgba[idx + 1] = (45.0 + t * 47.0) as u8;
                rgba[idx + 2] = (120.0 + t * 10.0) as u8;
                rgba[idx + 3] = 255;
            } else if inside_stand {
                rgba[idx..idx + 4].copy_from_slice(&[180, 180, 190, 255]);
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
