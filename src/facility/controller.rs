use crate::facility::commands::Command;
use crate::facility::config::Config;
use crate::facility::engine::{AllocationEngine, SlotStatus};
use crate::facility::events::{FacilityCreatedEvent, VehicleLeftEvent, VehicleParkedEvent};
use crate::facility::store::InMemorySlotStore;
use derive_builder::Builder;
use derive_more::Debug;
use itertools::Itertools;
use std::io;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::info;

/// The command front end. Reads lines from any `BufRead`, translates them
/// into engine calls and renders the results to any `Write`, so tests can
/// drive a full session with in-memory buffers. Every engine error is
/// printed and the loop continues; only `exit` (or end of input) ends it.
#[derive(Debug, Builder)]
#[builder(pattern = "owned", build_fn(skip))]
pub struct FacilityController {
    #[builder(default)]
    config: Arc<Config>,
    #[builder(default)]
    #[debug(skip)]
    engine: AllocationEngine<InMemorySlotStore>,
}

impl FacilityControllerBuilder {
    // Custom build function so that the event log subscribers are attached exactly once.
    pub fn build(self) -> Result<FacilityController, String> {
        let config = self.config.unwrap_or_default();
        let mut engine = self.engine.unwrap_or_default();

        engine.events_mut().on::<FacilityCreatedEvent, _>(|event| {
            info!(capacity = event.capacity, "facility created");
        });
        engine.events_mut().on::<VehicleParkedEvent, _>(|event| {
            info!(
                slot = event.slot,
                registration = %event.registration,
                color = %event.color,
                "vehicle parked"
            );
        });
        engine.events_mut().on::<VehicleLeftEvent, _>(|event| {
            info!(
                slot = event.slot,
                registration = %event.registration,
                color = %event.color,
                "vehicle left"
            );
        });

        Ok(FacilityController { config, engine })
    }
}

impl FacilityController {
    /// Runs the command loop to completion. When the config carries a
    /// capacity preset, the facility is created before the first line is
    /// read.
    pub fn run<R: BufRead, W: Write>(mut self, reader: R, writer: &mut W) -> io::Result<()> {
        if let Some(capacity) = self.config.facility().and_then(|facility| facility.capacity) {
            self.dispatch(&Command::Create(capacity), writer)?;
        }

        for line in reader.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(Command::Exit)) => break,
                Ok(Some(command)) => self.dispatch(&command, writer)?,
                Err(e) => writeln!(writer, "{}", e)?,
            }
        }

        self.engine.events_mut().finish();
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, command: &Command, writer: &mut W) -> io::Result<()> {
        let outcome = match command {
            Command::Create(capacity) => self
                .engine
                .create(*capacity)
                .map(|capacity| format!("Created a parking lot with {} slots", capacity)),
            Command::Park {
                registration,
                color,
            } => self
                .engine
                .park(registration, color)
                .map(|slot| format!("Allocated slot number: {}", slot)),
            Command::Leave(slot) => self
                .engine
                .leave(*slot)
                .map(|_| format!("Slot number {} is free", slot)),
            Command::Status => self.engine.status().map(render_status),
            Command::RegistrationsByColor(color) => self
                .engine
                .vehicles_by_color(color)
                .map(|registrations| registrations.iter().join(", ")),
            Command::SlotsByColor(color) => self
                .engine
                .slots_by_color(color)
                .map(|slots| slots.iter().join(", ")),
            Command::SlotByRegistration(registration) => self
                .engine
                .slot_by_registration(registration)
                .map(|slot| slot.to_string()),
            // handled by the read loop
            Command::Exit => return Ok(()),
        };

        match outcome {
            Ok(output) => writeln!(writer, "{}", output),
            Err(e) => writeln!(writer, "{}", e),
        }
    }
}

fn render_status(entries: Vec<SlotStatus>) -> String {
    let mut out = String::from("Slot No.\tRegistration No\t\tColour");
    for entry in entries {
        out.push_str(&format!(
            "\n{}\t\t{}\t\t{}",
            entry.slot_number, entry.registration, entry.color
        ));
    }
    out
}
