use crate::facility::errors::FacilityError;
use crate::facility::vehicles::Vehicle;

/// Narrow capability interface over the authoritative slot table. The engine
/// only ever talks to this trait, so the array-backed store below could be
/// swapped for a persistent one without the engine noticing.
pub trait SlotStore {
    /// Allocates `capacity` empty slots. A store can be created exactly once.
    fn create(&mut self, capacity: u32) -> Result<(), FacilityError>;

    /// Capacity of the facility, `None` until `create` was called.
    fn capacity(&self) -> Option<u32>;

    /// All slots in storage order (0-based index = slot number - 1).
    fn slots(&self) -> Result<&[Option<Vehicle>], FacilityError>;

    /// One slot by 0-based index.
    fn get(&self, index: usize) -> Result<Option<&Vehicle>, FacilityError>;

    /// Overwrites one slot. `None` clears it.
    fn put(&mut self, index: usize, vehicle: Option<Vehicle>) -> Result<(), FacilityError>;
}

#[derive(Debug, Default)]
pub struct InMemorySlotStore {
    slots: Option<Vec<Option<Vehicle>>>,
}

impl InMemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn created_slots(&self) -> Result<&Vec<Option<Vehicle>>, FacilityError> {
        self.slots.as_ref().ok_or(FacilityError::NotCreated)
    }
}

impl SlotStore for InMemorySlotStore {
    fn create(&mut self, capacity: u32) -> Result<(), FacilityError> {
        if capacity < 1 {
            return Err(FacilityError::InvalidCapacity);
        }
        if self.slots.is_some() {
            return Err(FacilityError::AlreadyCreated);
        }
        self.slots = Some(vec![None; capacity as usize]);
        Ok(())
    }

    fn capacity(&self) -> Option<u32> {
        self.slots.as_ref().map(|slots| slots.len() as u32)
    }

    fn slots(&self) -> Result<&[Option<Vehicle>], FacilityError> {
        Ok(self.created_slots()?.as_slice())
    }

    fn get(&self, index: usize) -> Result<Option<&Vehicle>, FacilityError> {
        let slots = self.created_slots()?;
        match slots.get(index) {
            Some(slot) => Ok(slot.as_ref()),
            None => Err(FacilityError::InvalidSlot(index as u32 + 1)),
        }
    }

    fn put(&mut self, index: usize, vehicle: Option<Vehicle>) -> Result<(), FacilityError> {
        let slots = self.slots.as_mut().ok_or(FacilityError::NotCreated)?;
        match slots.get_mut(index) {
            Some(slot) => {
                *slot = vehicle;
                Ok(())
            }
            None => Err(FacilityError::InvalidSlot(index as u32 + 1)),
        }
    }
}
