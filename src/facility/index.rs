use ahash::{HashMap, HashSet};
use nohash_hasher::IntSet;

use crate::facility::errors::FacilityError;
use crate::facility::vehicles::Vehicle;

/// The three derived lookup structures that accelerate by-color and
/// by-registration queries. They are rebuildable from the slot table and
/// never authoritative; the engine is the only caller of the two mutation
/// entry points, so table and index can only diverge inside a single
/// park/leave operation.
///
/// Slot numbers are stored 1-based, i.e. as display numbers.
#[derive(Debug, Default)]
pub struct VehicleIndex {
    registrations_by_color: HashMap<String, HashSet<String>>,
    slots_by_color: HashMap<String, IntSet<u32>>,
    slot_by_registration: HashMap<String, u32>,
}

impl VehicleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a parked vehicle under all three indexes. Arguments are
    /// validated before any map is touched, so a rejected insert leaves the
    /// index unchanged.
    pub fn insert(&mut self, slot_number: u32, vehicle: &Vehicle) -> Result<(), FacilityError> {
        self.validate(slot_number, vehicle)?;
        if self.slot_by_registration.contains_key(vehicle.registration()) {
            return Err(FacilityError::DuplicateRegistration(
                vehicle.registration().to_string(),
            ));
        }

        self.registrations_by_color
            .entry(vehicle.color().to_string())
            .or_default()
            .insert(vehicle.registration().to_string());
        self.slots_by_color
            .entry(vehicle.color().to_string())
            .or_default()
            .insert(slot_number);
        self.slot_by_registration
            .insert(vehicle.registration().to_string(), slot_number);
        Ok(())
    }

    /// Removes a departing vehicle from all three indexes. Empty color
    /// buckets are kept; queries treat them the same as absent keys.
    pub fn remove(&mut self, slot_number: u32, vehicle: &Vehicle) -> Result<(), FacilityError> {
        self.validate(slot_number, vehicle)?;

        if let Some(registrations) = self.registrations_by_color.get_mut(vehicle.color()) {
            registrations.remove(vehicle.registration());
        }
        if let Some(slots) = self.slots_by_color.get_mut(vehicle.color()) {
            slots.remove(&slot_number);
        }
        self.slot_by_registration.remove(vehicle.registration());
        Ok(())
    }

    /// Registration numbers currently parked with the given canonical color.
    /// The order is unspecified, the entries come out of a hash set.
    pub fn registrations_for_color(&self, color: &str) -> Vec<String> {
        self.registrations_by_color
            .get(color)
            .map(|registrations| registrations.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Slot numbers (1-based) currently holding a vehicle of the given
    /// canonical color, in unspecified order.
    pub fn slots_for_color(&self, color: &str) -> Vec<u32> {
        self.slots_by_color
            .get(color)
            .map(|slots| slots.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn slot_for_registration(&self, registration: &str) -> Option<u32> {
        self.slot_by_registration.get(registration).copied()
    }

    fn validate(&self, slot_number: u32, vehicle: &Vehicle) -> Result<(), FacilityError> {
        if slot_number == 0 {
            return Err(FacilityError::InvalidSlot(slot_number));
        }
        if vehicle.registration().is_empty() {
            return Err(FacilityError::EmptyRegistration);
        }
        if vehicle.color().is_empty() {
            return Err(FacilityError::EmptyColor);
        }
        Ok(())
    }

    /// Asserts that the index entries exactly match the occupied slots of
    /// the given slot table, in both directions.
    #[cfg(any(test, feature = "test_util"))]
    pub fn assert_consistent_with(&self, slots: &[Option<Vehicle>]) {
        let occupied: Vec<(u32, &Vehicle)> = slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|vehicle| (idx as u32 + 1, vehicle)))
            .collect();

        assert_eq!(
            occupied.len(),
            self.slot_by_registration.len(),
            "registration index size does not match the number of occupied slots"
        );
        let color_registrations: usize = self
            .registrations_by_color
            .values()
            .map(|registrations| registrations.len())
            .sum();
        assert_eq!(
            occupied.len(),
            color_registrations,
            "color index size does not match the number of occupied slots"
        );
        let color_slots: usize = self.slots_by_color.values().map(|slots| slots.len()).sum();
        assert_eq!(
            occupied.len(),
            color_slots,
            "slot-color index size does not match the number of occupied slots"
        );

        for (slot_number, vehicle) in occupied {
            assert_eq!(
                Some(slot_number),
                self.slot_for_registration(vehicle.registration()),
                "registration {} is not indexed at slot {}",
                vehicle.registration(),
                slot_number
            );
            assert!(
                self.registrations_by_color
                    .get(vehicle.color())
                    .is_some_and(|registrations| registrations.contains(vehicle.registration())),
                "registration {} is missing from the {} color bucket",
                vehicle.registration(),
                vehicle.color()
            );
            assert!(
                self.slots_by_color
                    .get(vehicle.color())
                    .is_some_and(|slots| slots.contains(&slot_number)),
                "slot {} is missing from the {} slot-color bucket",
                slot_number,
                vehicle.color()
            );
        }
    }
}
