use crate::facility::engine::AllocationEngine;
use crate::facility::store::InMemorySlotStore;
use crate::facility::vehicles::Vehicle;

/// An engine with a freshly created facility of the given capacity.
pub fn create_facility(capacity: u32) -> AllocationEngine<InMemorySlotStore> {
    let mut engine = AllocationEngine::new();
    engine.create(capacity).expect("failed to create facility");
    engine
}

pub fn vehicle(registration: &str, color: &str) -> Vehicle {
    Vehicle::new(registration, color).expect("invalid test vehicle")
}
