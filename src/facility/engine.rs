use crate::facility::errors::FacilityError;
use crate::facility::events::{
    EventsManager, FacilityCreatedEventBuilder, VehicleLeftEventBuilder, VehicleParkedEventBuilder,
};
use crate::facility::index::VehicleIndex;
use crate::facility::store::{InMemorySlotStore, SlotStore};
use crate::facility::vehicles::{canonical_color, Vehicle};

/// One row of the occupancy report, already in display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotStatus {
    pub slot_number: u32,
    pub registration: String,
    pub color: String,
}

/// The allocation engine. Owns the authoritative slot table behind the
/// [`SlotStore`] seam plus the derived [`VehicleIndex`], and keeps both in
/// sync around every park/leave. All operations run to completion before the
/// next one is accepted; there is no interior locking.
#[derive(Debug, Default)]
pub struct AllocationEngine<S: SlotStore> {
    store: S,
    index: VehicleIndex,
    events: EventsManager,
}

impl AllocationEngine<InMemorySlotStore> {
    pub fn new() -> Self {
        Self::with_store(InMemorySlotStore::new())
    }
}

impl<S: SlotStore> AllocationEngine<S> {
    pub fn with_store(store: S) -> Self {
        AllocationEngine {
            store,
            index: VehicleIndex::new(),
            events: EventsManager::new(),
        }
    }

    pub fn events_mut(&mut self) -> &mut EventsManager {
        &mut self.events
    }

    /// Allocates the facility with `capacity` empty slots and returns the
    /// capacity. Fails with `InvalidCapacity` for capacity 0 and with
    /// `AlreadyCreated` on a second call.
    pub fn create(&mut self, capacity: u32) -> Result<u32, FacilityError> {
        self.store.create(capacity)?;
        self.events.publish_event(
            &FacilityCreatedEventBuilder::default()
                .capacity(capacity)
                .build()
                .unwrap(),
        );
        Ok(capacity)
    }

    /// Parks a vehicle in the lowest-numbered empty slot (first-fit) and
    /// returns its 1-based slot number. Input validation happens before any
    /// state is touched; the slot write is authoritative and is rolled back
    /// if the index rejects the matching entries.
    pub fn park(&mut self, registration: &str, color: &str) -> Result<u32, FacilityError> {
        let vehicle = Vehicle::new(registration, color)?;
        let slots = self.store.slots()?;

        if self
            .index
            .slot_for_registration(vehicle.registration())
            .is_some()
        {
            return Err(FacilityError::DuplicateRegistration(
                vehicle.registration().to_string(),
            ));
        }

        let free_index = slots
            .iter()
            .position(|slot| slot.is_none())
            .ok_or(FacilityError::FacilityFull)?;
        let slot_number = free_index as u32 + 1;

        self.store.put(free_index, Some(vehicle.clone()))?;
        if let Err(e) = self.index.insert(slot_number, &vehicle) {
            // table and index must not diverge past this operation
            self.store.put(free_index, None)?;
            return Err(e);
        }

        self.events.publish_event(
            &VehicleParkedEventBuilder::default()
                .slot(slot_number)
                .registration(vehicle.registration().to_string())
                .color(vehicle.color().to_string())
                .build()
                .unwrap(),
        );
        Ok(slot_number)
    }

    /// Frees the given 1-based slot. Index entries are removed using the
    /// vehicle record read from the slot, then the slot is cleared.
    pub fn leave(&mut self, slot_number: u32) -> Result<(), FacilityError> {
        let capacity = self
            .store
            .capacity()
            .ok_or(FacilityError::InvalidSlot(slot_number))?;
        if slot_number == 0 || slot_number > capacity {
            return Err(FacilityError::InvalidSlot(slot_number));
        }

        let index = (slot_number - 1) as usize;
        let vehicle = self
            .store
            .get(index)?
            .cloned()
            .ok_or(FacilityError::SlotNotOccupied(slot_number))?;

        self.index.remove(slot_number, &vehicle)?;
        self.store.put(index, None)?;

        self.events.publish_event(
            &VehicleLeftEventBuilder::default()
                .slot(slot_number)
                .registration(vehicle.registration().to_string())
                .color(vehicle.color().to_string())
                .build()
                .unwrap(),
        );
        Ok(())
    }

    /// Occupancy report in ascending slot-number order, empty slots omitted.
    /// Colors are rendered with the first character upper-cased.
    pub fn status(&self) -> Result<Vec<SlotStatus>, FacilityError> {
        let slots = self.store.slots()?;
        Ok(slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| {
                slot.as_ref().map(|vehicle| SlotStatus {
                    slot_number: idx as u32 + 1,
                    registration: vehicle.registration().to_string(),
                    color: vehicle.display_color(),
                })
            })
            .collect())
    }

    /// Registration numbers of all vehicles currently parked with the given
    /// color, in unspecified order. `NotFound` when zero vehicles match,
    /// which includes a color whose last vehicle has left.
    pub fn vehicles_by_color(&self, color: &str) -> Result<Vec<String>, FacilityError> {
        let color = canonical_color(color)?;
        let registrations = self.index.registrations_for_color(&color);
        if registrations.is_empty() {
            return Err(FacilityError::NotFound);
        }
        Ok(registrations)
    }

    /// Same contract as [`Self::vehicles_by_color`], returning 1-based slot
    /// numbers instead of registrations.
    pub fn slots_by_color(&self, color: &str) -> Result<Vec<u32>, FacilityError> {
        let color = canonical_color(color)?;
        let slots = self.index.slots_for_color(&color);
        if slots.is_empty() {
            return Err(FacilityError::NotFound);
        }
        Ok(slots)
    }

    /// 1-based slot number of the vehicle with the given registration.
    pub fn slot_by_registration(&self, registration: &str) -> Result<u32, FacilityError> {
        let registration = registration.trim();
        if registration.is_empty() {
            return Err(FacilityError::EmptyRegistration);
        }
        self.index
            .slot_for_registration(registration)
            .ok_or(FacilityError::NotFound)
    }

    /// Asserts that the slot table and the three indexes exactly match.
    #[cfg(any(test, feature = "test_util"))]
    pub fn check_consistency(&self) {
        let slots = self.store.slots().expect("facility is not created");
        self.index.assert_consistent_with(slots);
    }
}
