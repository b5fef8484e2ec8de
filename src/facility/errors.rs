use thiserror::Error;

/// Errors produced by the allocation engine and the slot store. All of them
/// are reported synchronously to the caller; none are fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FacilityError {
    #[error("slot amount must be greater than 0")]
    InvalidCapacity,
    #[error("parking lot was already created")]
    AlreadyCreated,
    #[error("parking lot is not created yet")]
    NotCreated,
    #[error("car's registration number is empty")]
    EmptyRegistration,
    #[error("car's colour is empty")]
    EmptyColor,
    #[error("parking lot is full")]
    FacilityFull,
    #[error("car with registration number {0} is already parked")]
    DuplicateRegistration(String),
    #[error("slot number {0} is invalid")]
    InvalidSlot(u32),
    #[error("slot number {0} is not occupied")]
    SlotNotOccupied(u32),
    #[error("not found")]
    NotFound,
}

/// Errors raised by the command front end before the engine is invoked.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("invalid format")]
    InvalidFormat,
    #[error("command not found")]
    CommandNotFound,
    #[error("invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}
