//! Machine registry - Owns every configured virtual machine

use tracing::{debug, info};

use super::machine::{MachineConfig, MachineId, MachineStatus, StorageController, VirtualMachine};

/// Ordered collection of configured machines
#[derive(Debug, Default)]
pub struct MachineRegistry {
    machines: Vec<VirtualMachine>,
}

impl MachineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the stock machines
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for config in default_machines() {
            registry.create(config);
        }
        registry
    }

    /// Register a new machine in the `stopped` state
    pub fn create(&mut self, config: MachineConfig) -> MachineId {
        let machine = VirtualMachine::new(config);
        let id = machine.id;
        info!("Created machine {} ({})", machine.name(), id);
        self.machines.push(machine);
        id
    }

    /// Remove a machine, returning it if it existed
    pub fn remove(&mut self, id: MachineId) -> Option<VirtualMachine> {
        let index = self.machines.iter().position(|m| m.id == id)?;
        let machine = self.machines.remove(index);
        info!("Deleted machine {} ({})", machine.name(), id);
        Some(machine)
    }

    pub fn get(&self, id: MachineId) -> Option<&VirtualMachine> {
        self.machines.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: MachineId) -> Option<&mut VirtualMachine> {
        self.machines.iter_mut().find(|m| m.id == id)
    }

    /// All machines in creation order
    pub fn list(&self) -> &[VirtualMachine] {
        &self.machines
    }

    /// Update a machine's status. Unknown ids are ignored.
    pub fn set_status(&mut self, id: MachineId, status: MachineStatus) {
        let Some(machine) = self.get_mut(id) else {
            debug!("Ignoring status change for unknown machine {}", id);
            return;
        };
        match status {
            MachineStatus::Running => machine.mark_running(),
            MachineStatus::Stopped => machine.mark_stopped(),
            MachineStatus::Suspended => machine.status = MachineStatus::Suspended,
        }
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }

    pub fn count_with_status(&self, status: MachineStatus) -> usize {
        self.machines.iter().filter(|m| m.status == status).count()
    }
}

fn default_machines() -> Vec<MachineConfig> {
    vec![
        MachineConfig::new(
            "macOS Sonoma",
            "MacBook Pro 14\"",
            "macOS 14.0",
            "Apple M3 Pro",
            16,
            512,
        ),
        MachineConfig::new("macOS Ventura", "iMac 24\"", "macOS 13.0", "Apple M1", 8, 256),
        MachineConfig::new(
            "macOS Monterey",
            "Mac mini",
            "macOS 12.0",
            "Intel Core i7",
            32,
            1024,
        )
        .with_storage(vec![
            StorageController {
                id: "nvme0".to_string(),
                name: "NVMe Controller 0".to_string(),
                size_gb: 512,
            },
            StorageController {
                id: "sata0".to_string(),
                name: "SATA Controller 0".to_string(),
                size_gb: 512,
            },
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(name: &str) -> MachineConfig {
        MachineConfig::new(name, "Mac mini", "macOS 14.0", "Apple M1", 16, 512)
    }

    #[test]
    fn defaults_are_seeded_in_order() {
        let registry = MachineRegistry::with_defaults();
        let names: Vec<_> = registry.list().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["macOS Sonoma", "macOS Ventura", "macOS Monterey"]);
        assert_eq!(registry.count_with_status(MachineStatus::Stopped), 3);

        let monterey = &registry.list()[2].config;
        assert_eq!(monterey.storage.len(), 2);
        assert_eq!(monterey.storage_gb, 1024);
    }

    #[test]
    fn create_assigns_unique_ids_and_stopped_status() {
        let mut registry = MachineRegistry::new();
        let a = registry.create(config("A"));
        let b = registry.create(config("B"));

        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(a).unwrap().status, MachineStatus::Stopped);
    }

    #[test]
    fn remove_unknown_is_none() {
        let mut registry = MachineRegistry::new();
        let id = registry.create(config("A"));
        assert!(registry.remove(MachineId::new()).is_none());
        assert_eq!(registry.remove(id).map(|m| m.id), Some(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn set_status_flips_and_ignores_unknown() {
        let mut registry = MachineRegistry::new();
        let id = registry.create(config("A"));

        registry.set_status(id, MachineStatus::Running);
        assert_eq!(registry.get(id).unwrap().status, MachineStatus::Running);
        assert_eq!(registry.count_with_status(MachineStatus::Running), 1);

        registry.set_status(MachineId::new(), MachineStatus::Running);
        assert_eq!(registry.count_with_status(MachineStatus::Running), 1);

        registry.set_status(id, MachineStatus::Stopped);
        assert_eq!(registry.get(id).unwrap().status, MachineStatus::Stopped);
    }
}
