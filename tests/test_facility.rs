use rust_parking::facility::engine::{AllocationEngine, SlotStatus};
use rust_parking::facility::errors::FacilityError;
use rust_parking::test_utils::create_facility;

#[test]
fn fills_to_capacity_then_rejects() {
    for capacity in 1..=5 {
        let mut engine = create_facility(capacity);

        for i in 0..capacity {
            let registration = format!("KA-01-HH-{:04}", i);
            assert_eq!(Ok(i + 1), engine.park(&registration, "white"));
        }
        assert_eq!(
            Err(FacilityError::FacilityFull),
            engine.park("KA-01-HH-9999", "white")
        );
        engine.check_consistency();
    }
}

#[test]
fn reuses_freed_slots_first_fit() {
    let mut engine = create_facility(6);
    assert_eq!(Ok(1), engine.park("KA-01-HH-2701", "blue"));
    assert_eq!(Ok(2), engine.park("KA-01-HH-7777", "red"));

    engine.leave(1).unwrap();
    assert_eq!(Ok(1), engine.park("KA-01-HH-9999", "white"));

    let status = engine.status().unwrap();
    assert_eq!(
        vec![
            SlotStatus {
                slot_number: 1,
                registration: "KA-01-HH-9999".to_string(),
                color: "White".to_string(),
            },
            SlotStatus {
                slot_number: 2,
                registration: "KA-01-HH-7777".to_string(),
                color: "Red".to_string(),
            },
        ],
        status
    );
    engine.check_consistency();
}

#[test]
fn indexes_stay_consistent_over_interleaved_operations() {
    let mut engine = create_facility(8);

    for i in 0..8 {
        let registration = format!("KA-02-BB-{:04}", i);
        let color = if i % 2 == 0 { "blue" } else { "green" };
        engine.park(&registration, color).unwrap();
    }
    engine.check_consistency();

    // free every second slot, then refill with fresh vehicles
    for slot in [2, 4, 6, 8] {
        engine.leave(slot).unwrap();
        engine.check_consistency();
    }
    for i in 0..4 {
        let registration = format!("KA-03-CC-{:04}", i);
        engine.park(&registration, "black").unwrap();
        engine.check_consistency();
    }

    let mut black_slots = engine.slots_by_color("black").unwrap();
    black_slots.sort_unstable();
    assert_eq!(vec![2, 4, 6, 8], black_slots);
}

#[test]
fn query_results_track_departures() {
    let mut engine = create_facility(4);
    engine.park("KA-01-HH-0001", "silver").unwrap();
    engine.park("KA-01-HH-0002", "silver").unwrap();

    let mut registrations = engine.vehicles_by_color("silver").unwrap();
    registrations.sort();
    assert_eq!(
        vec!["KA-01-HH-0001".to_string(), "KA-01-HH-0002".to_string()],
        registrations
    );

    engine.leave(1).unwrap();
    assert_eq!(
        Ok(vec!["KA-01-HH-0002".to_string()]),
        engine.vehicles_by_color("silver")
    );

    engine.leave(2).unwrap();
    assert_eq!(
        Err(FacilityError::NotFound),
        engine.vehicles_by_color("silver").map(|_| ())
    );
    engine.check_consistency();
}

#[test]
fn rejected_input_leaves_no_trace() {
    let mut engine = create_facility(2);
    engine.park("KA-01-HH-2701", "white").unwrap();

    assert!(engine.park(" ", "red").is_err());
    assert!(engine.park("KA-01-HH-7777", "\t").is_err());
    assert!(engine.leave(5).is_err());

    assert_eq!(1, engine.status().unwrap().len());
    engine.check_consistency();
}

#[test]
fn uncreated_facility_reports_errors() {
    let mut engine = AllocationEngine::new();

    assert_eq!(
        Err(FacilityError::NotCreated),
        engine.park("KA-01-HH-2701", "white").map(|_| ())
    );
    assert_eq!(Err(FacilityError::NotCreated), engine.status().map(|_| ()));
    assert_eq!(Err(FacilityError::InvalidSlot(1)), engine.leave(1));
}
