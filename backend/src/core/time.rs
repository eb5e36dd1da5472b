//! Simulated time for a single run
//!
//! The simulation clock is an integer count of time units. It is advanced
//! only by the timestamps of processed events, never by wall time.

use serde::{Deserialize, Serialize};

/// Integer unit of simulated time
pub type Time = i64;

/// Tracks the logical clock of one simulation run
///
/// The clock starts unset and jumps to the timestamp of each processed event.
/// It never moves backwards.
///
/// # Example
/// ```
/// use bank_simulator_core_rs::SimClock;
///
/// let mut clock = SimClock::new();
/// assert_eq!(clock.now(), None);
///
/// clock.advance_to(20);
/// clock.advance_to(20);
/// clock.advance_to(26);
/// assert_eq!(clock.now(), Some(26));
/// assert_eq!(clock.events_processed(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimClock {
    /// Timestamp of the most recently processed event
    now: Option<Time>,
    /// Number of events the clock has been advanced for
    events_processed: usize,
}

impl SimClock {
    /// Create a clock that has not processed any event yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock to the timestamp of the next processed event
    ///
    /// # Panics
    /// Panics if `time` is earlier than the current time. The event queue
    /// always yields the earliest pending event, so this only fires on an
    /// engine defect.
    pub fn advance_to(&mut self, time: Time) {
        if let Some(now) = self.now {
            assert!(
                time >= now,
                "simulation time moved backwards: {} -> {}",
                now,
                time
            );
        }
        self.now = Some(time);
        self.events_processed += 1;
    }

    /// Current simulated time, `None` before the first event
    pub fn now(&self) -> Option<Time> {
        self.now
    }

    /// Number of events processed so far
    pub fn events_processed(&self) -> usize {
        self.events_processed
    }

    /// Return the clock to its initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
