//! Teller model
//!
//! A teller is a service resource that is either idle or serving exactly one
//! customer. It keeps the start of the current service period and the total
//! busy time of all closed periods.
//!
//! # Invariants
//!
//! - `busy_since` is set iff the teller is serving a customer
//! - `accumulated_busy_time` never decreases and only changes when a service
//!   period is closed by `stop_work`

use crate::core::time::Time;
use serde::{Deserialize, Serialize};

/// Position of a teller in the pool; a plain handle, not a reference
pub type TellerIndex = usize;

/// Busy/idle state of one teller
///
/// # Example
/// ```
/// use bank_simulator_core_rs::Teller;
///
/// let mut teller = Teller::new();
/// assert!(teller.is_available());
///
/// teller.start_work(20);
/// assert!(!teller.is_available());
///
/// teller.stop_work(26);
/// assert!(teller.is_available());
/// assert_eq!(teller.elapsed_time_working(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teller {
    /// Start of the current service period (None when idle)
    busy_since: Option<Time>,

    /// Sum of all closed service periods
    accumulated_busy_time: Time,

    /// Number of customers this teller has started serving
    customers_started: usize,
}

impl Teller {
    /// Create an idle teller with no busy time
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the teller is not serving anyone
    pub fn is_available(&self) -> bool {
        self.busy_since.is_none()
    }

    /// Start of the current service period
    pub fn busy_since(&self) -> Option<Time> {
        self.busy_since
    }

    /// Begin serving a customer at `current_time`
    ///
    /// # Panics
    /// Panics if the teller is already busy. The engine only starts tellers
    /// it has just found available or just stopped.
    pub fn start_work(&mut self, current_time: Time) {
        assert!(
            self.busy_since.is_none(),
            "start_work at {} on a teller busy since {:?}",
            current_time,
            self.busy_since
        );
        self.busy_since = Some(current_time);
        self.customers_started += 1;
    }

    /// Close the current service period at `current_time`
    ///
    /// Adds the length of the period to the accumulated busy time. Calling
    /// this on an idle teller does nothing.
    ///
    /// # Panics
    /// Panics if `current_time` precedes the start of the period.
    pub fn stop_work(&mut self, current_time: Time) {
        if let Some(started) = self.busy_since.take() {
            assert!(
                current_time >= started,
                "stop_work at {} precedes start of service at {}",
                current_time,
                started
            );
            self.accumulated_busy_time += current_time - started;
        }
    }

    /// Total busy time of all closed service periods
    ///
    /// A period still open is not counted. Every period the engine opens is
    /// paired with a scheduled departure, so none remain open after a run.
    pub fn elapsed_time_working(&self) -> Time {
        self.accumulated_busy_time
    }

    /// Number of customers this teller has started serving
    pub fn customers_started(&self) -> usize {
        self.customers_started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_on_idle_teller_is_noop() {
        let mut teller = Teller::new();
        teller.stop_work(10);
        assert_eq!(teller.elapsed_time_working(), 0);

        teller.start_work(10);
        teller.stop_work(14);
        teller.stop_work(20);
        assert_eq!(teller.elapsed_time_working(), 4);
    }

    #[test]
    #[should_panic(expected = "start_work at 12 on a teller busy since Some(10)")]
    fn test_start_on_busy_teller_panics() {
        let mut teller = Teller::new();
        teller.start_work(10);
        teller.start_work(12);
    }

    #[test]
    #[should_panic(expected = "precedes start of service")]
    fn test_stop_before_start_panics() {
        let mut teller = Teller::new();
        teller.start_work(10);
        teller.stop_work(9);
    }
}
