//! Teller Tests - busy/idle state and busy-time accounting
//!
//! Critical invariants tested:
//! - busy_since is set iff the teller is serving
//! - Accumulated busy time only grows, and only when a period closes
//! - Stopping an idle teller is a no-op

use bank_simulator_core_rs::Teller;

#[test]
fn test_new_teller_is_idle() {
    let teller = Teller::new();
    assert!(teller.is_available());
    assert_eq!(teller.busy_since(), None);
    assert_eq!(teller.elapsed_time_working(), 0);
    assert_eq!(teller.customers_started(), 0);
}

#[test]
fn test_start_work_marks_busy() {
    let mut teller = Teller::new();
    teller.start_work(20);

    assert!(!teller.is_available());
    assert_eq!(teller.busy_since(), Some(20));
    assert_eq!(teller.customers_started(), 1);
}

#[test]
fn test_open_period_not_counted() {
    let mut teller = Teller::new();
    teller.start_work(20);

    // Busy time only moves when the period is closed
    assert_eq!(teller.elapsed_time_working(), 0);
}

#[test]
fn test_busy_time_accumulates_across_periods() {
    let mut teller = Teller::new();

    teller.start_work(20);
    teller.stop_work(26);
    teller.start_work(30);
    teller.stop_work(33);

    assert_eq!(teller.elapsed_time_working(), 9);
    assert_eq!(teller.customers_started(), 2);
    assert!(teller.is_available());
}

#[test]
fn test_back_to_back_service_at_same_instant() {
    let mut teller = Teller::new();

    teller.start_work(20);
    teller.stop_work(26);
    teller.start_work(26);
    teller.stop_work(30);

    assert_eq!(teller.elapsed_time_working(), 10);
}

#[test]
fn test_double_stop_is_idempotent() {
    let mut teller = Teller::new();

    teller.start_work(5);
    teller.stop_work(8);
    teller.stop_work(50);

    assert_eq!(teller.elapsed_time_working(), 3);
}

#[test]
fn test_zero_length_service() {
    let mut teller = Teller::new();

    teller.start_work(12);
    teller.stop_work(12);

    assert_eq!(teller.elapsed_time_working(), 0);
    assert!(teller.is_available());
}
