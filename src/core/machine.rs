//! Virtual machine profiles - Descriptive metadata and run status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::DesktopError;

/// Unique identifier for a virtual machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineId(pub Uuid);

impl MachineId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MachineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MachineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Run status of a machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MachineStatus {
    #[default]
    Stopped,
    Running,
    Suspended,
}

impl MachineStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
            Self::Suspended => "suspended",
        }
    }
}

/// Which media the machine boots from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BootMedia {
    #[default]
    Os,
    Installer,
}

impl BootMedia {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Os => "Operating System",
            Self::Installer => "Installer",
        }
    }

    pub fn all() -> &'static [BootMedia] {
        &[BootMedia::Os, BootMedia::Installer]
    }
}

/// Memory management mode shown in the machine details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MmuMode {
    Flat,
    #[default]
    Paged,
}

impl MmuMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Paged => "Paged",
        }
    }
}

/// A storage controller attached to a machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageController {
    pub id: String,
    pub name: String,
    pub size_gb: u32,
}

/// Hardware models offered by the creation form
pub const MODELS: &[&str] = &[
    "MacBook Pro 14\"",
    "MacBook Pro 16\"",
    "MacBook Air",
    "iMac 24\"",
    "Mac mini",
    "Mac Studio",
    "Mac Pro",
];

/// OS versions offered by the creation form, with their display names
pub const OS_VERSIONS: &[(&str, &str)] = &[
    ("macOS 14.0", "macOS 14 Sonoma"),
    ("macOS 13.0", "macOS 13 Ventura"),
    ("macOS 12.0", "macOS 12 Monterey"),
    ("macOS 11.0", "macOS 11 Big Sur"),
];

/// CPU tags offered by the creation form
pub const CPUS: &[&str] = &[
    "Apple M3 Pro",
    "Apple M3 Max",
    "Apple M2 Pro",
    "Apple M1",
    "Intel Core i7",
    "Intel Core i9",
];

pub const RAM_RANGE_GB: std::ops::RangeInclusive<u32> = 8..=128;
pub const RAM_STEP_GB: u32 = 8;
pub const STORAGE_RANGE_GB: std::ops::RangeInclusive<u32> = 128..=2048;
pub const STORAGE_STEP_GB: u32 = 128;

/// Descriptive configuration of a machine. None of these values are
/// interpreted; they are displayed as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Display name
    pub name: String,
    /// Hardware model tag
    pub model: String,
    /// OS version tag
    pub os_version: String,
    /// CPU tag
    pub cpu: String,
    /// RAM size in GB
    pub ram_gb: u32,
    /// Aggregate storage in GB
    pub storage_gb: u32,
    /// Attached storage controllers
    pub storage: Vec<StorageController>,
    pub screen_width: u32,
    pub screen_height: u32,
    pub boot_media: BootMedia,
    pub jit_enabled: bool,
    pub mmu_enabled: bool,
    pub mmu_mode: Option<MmuMode>,
}

impl MachineConfig {
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        os_version: impl Into<String>,
        cpu: impl Into<String>,
        ram_gb: u32,
        storage_gb: u32,
    ) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            os_version: os_version.into(),
            cpu: cpu.into(),
            ram_gb,
            storage_gb,
            storage: vec![primary_controller(storage_gb)],
            screen_width: 1280,
            screen_height: 800,
            boot_media: BootMedia::Os,
            jit_enabled: true,
            mmu_enabled: true,
            mmu_mode: Some(MmuMode::Paged),
        }
    }

    pub fn with_boot_media(mut self, media: BootMedia) -> Self {
        self.boot_media = media;
        self
    }

    pub fn with_storage(mut self, storage: Vec<StorageController>) -> Self {
        self.storage_gb = storage.iter().map(|c| c.size_gb).sum();
        self.storage = storage;
        self
    }

    /// Short hardware summary for cards and the status bar
    pub fn summary(&self) -> String {
        format!("{} · {}GB RAM · {}GB", self.cpu, self.ram_gb, self.storage_gb)
    }
}

fn primary_controller(size_gb: u32) -> StorageController {
    StorageController {
        id: "nvme0".to_string(),
        name: "NVMe Controller 0".to_string(),
        size_gb,
    }
}

/// Editable state of the "New Machine" form.
///
/// The registry only ever receives configurations that passed
/// [`MachineDraft::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct MachineDraft {
    pub name: String,
    pub model: String,
    pub os_version: String,
    pub cpu: String,
    pub ram_gb: u32,
    pub storage_gb: u32,
    pub screen_width: u32,
    pub screen_height: u32,
    pub boot_media: BootMedia,
    pub jit_enabled: bool,
    pub mmu_enabled: bool,
    pub mmu_mode: MmuMode,
}

impl Default for MachineDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            model: MODELS[0].to_string(),
            os_version: OS_VERSIONS[0].0.to_string(),
            cpu: CPUS[0].to_string(),
            ram_gb: 16,
            storage_gb: 512,
            screen_width: 1280,
            screen_height: 800,
            boot_media: BootMedia::Os,
            jit_enabled: true,
            mmu_enabled: true,
            mmu_mode: MmuMode::Paged,
        }
    }
}

impl MachineDraft {
    /// Check the form and produce a configuration for the registry
    pub fn validate(&self) -> Result<MachineConfig, DesktopError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DesktopError::InvalidMachine(
                "machine name must not be empty".to_string(),
            ));
        }
        if !on_grid(self.ram_gb, &RAM_RANGE_GB, RAM_STEP_GB) {
            return Err(DesktopError::InvalidMachine(format!(
                "RAM must be {}-{}GB in steps of {}GB",
                RAM_RANGE_GB.start(),
                RAM_RANGE_GB.end(),
                RAM_STEP_GB
            )));
        }
        if !on_grid(self.storage_gb, &STORAGE_RANGE_GB, STORAGE_STEP_GB) {
            return Err(DesktopError::InvalidMachine(format!(
                "storage must be {}-{}GB in steps of {}GB",
                STORAGE_RANGE_GB.start(),
                STORAGE_RANGE_GB.end(),
                STORAGE_STEP_GB
            )));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(DesktopError::InvalidMachine(
                "screen dimensions must be non-zero".to_string(),
            ));
        }

        let mut config = MachineConfig::new(
            name,
            self.model.clone(),
            self.os_version.clone(),
            self.cpu.clone(),
            self.ram_gb,
            self.storage_gb,
        )
        .with_boot_media(self.boot_media);
        config.screen_width = self.screen_width;
        config.screen_height = self.screen_height;
        config.jit_enabled = self.jit_enabled;
        config.mmu_enabled = self.mmu_enabled;
        config.mmu_mode = self.mmu_enabled.then_some(self.mmu_mode);
        Ok(config)
    }
}

fn on_grid(value: u32, range: &std::ops::RangeInclusive<u32>, step: u32) -> bool {
    range.contains(&value) && (value - range.start()) % step == 0
}

/// A configured virtual machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualMachine {
    /// Unique identifier
    pub id: MachineId,
    /// Descriptive configuration
    pub config: MachineConfig,
    /// Current status
    pub status: MachineStatus,
    /// When the machine was created
    pub created_at: DateTime<Utc>,
    /// When the machine was last started
    pub started_at: Option<DateTime<Utc>>,
    /// When the machine last stopped
    pub stopped_at: Option<DateTime<Utc>>,
    /// Number of sessions started on this machine
    pub boot_count: u32,
}

impl VirtualMachine {
    pub fn new(config: MachineConfig) -> Self {
        Self {
            id: MachineId::new(),
            config,
            status: MachineStatus::Stopped,
            created_at: Utc::now(),
            started_at: None,
            stopped_at: None,
            boot_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Get uptime duration if running
    pub fn uptime(&self) -> Option<chrono::Duration> {
        if !self.status.is_running() {
            return None;
        }
        self.started_at.map(|started| Utc::now() - started)
    }

    /// Format uptime as human-readable string
    pub fn uptime_string(&self) -> String {
        match self.uptime() {
            Some(duration) => {
                let secs = duration.num_seconds();
                if secs < 60 {
                    format!("{}s", secs)
                } else if secs < 3600 {
                    format!("{}m {}s", secs / 60, secs % 60)
                } else {
                    format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
                }
            }
            None => "-".to_string(),
        }
    }

    /// Mark machine as running
    pub fn mark_running(&mut self) {
        self.status = MachineStatus::Running;
        self.started_at = Some(Utc::now());
        self.stopped_at = None;
        self.boot_count += 1;
    }

    /// Mark machine as stopped
    pub fn mark_stopped(&mut self) {
        self.status = MachineStatus::Stopped;
        self.stopped_at = Some(Utc::now());
    }
}
