//! Tests for SimClock
//!
//! The clock only ever jumps forward to the next event's timestamp.

use bank_simulator_core_rs::SimClock;

#[test]
fn test_clock_new() {
    let clock = SimClock::new();
    assert_eq!(clock.now(), None);
    assert_eq!(clock.events_processed(), 0);
}

#[test]
fn test_advance_to_event_time() {
    let mut clock = SimClock::new();

    clock.advance_to(20);
    assert_eq!(clock.now(), Some(20));
    assert_eq!(clock.events_processed(), 1);

    clock.advance_to(26);
    assert_eq!(clock.now(), Some(26));
    assert_eq!(clock.events_processed(), 2);
}

#[test]
fn test_equal_timestamps_allowed() {
    let mut clock = SimClock::new();

    // Several events can share a timestamp
    clock.advance_to(30);
    clock.advance_to(30);
    clock.advance_to(30);

    assert_eq!(clock.now(), Some(30));
    assert_eq!(clock.events_processed(), 3);
}

#[test]
fn test_first_event_may_be_any_time() {
    let mut clock = SimClock::new();
    clock.advance_to(-5);
    assert_eq!(clock.now(), Some(-5));
}

#[test]
#[should_panic(expected = "simulation time moved backwards: 26 -> 22")]
fn test_backwards_jump_panics() {
    let mut clock = SimClock::new();
    clock.advance_to(26);
    clock.advance_to(22);
}
