//! Run event log for replay and auditing.
//!
//! Every state change a run makes is recorded as a [`RunEvent`]. The log lets
//! callers and tests inspect exactly what happened and when:
//! - **CustomerArrived**: an arrival was processed
//! - **CustomerQueued**: the arrival found every teller busy and joined the line
//! - **ServiceStarted**: a teller picked up a customer
//! - **ServiceCompleted**: a teller finished a customer
//!
//! # Example
//!
//! ```rust
//! use bank_simulator_core_rs::models::{EventLog, RunEvent};
//!
//! let mut log = EventLog::new();
//! log.log(RunEvent::ServiceStarted {
//!     time: 20,
//!     teller_index: 0,
//!     arrival_time: 20,
//!     wait_time: 0,
//! });
//!
//! assert_eq!(log.events_for_teller(0).len(), 1);
//! ```

use crate::core::time::Time;
use crate::models::teller::TellerIndex;
use serde::{Deserialize, Serialize};

/// A state change recorded during a run
///
/// Events are logged in processing order, so their times never decrease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RunEvent {
    /// An arrival event was dispatched
    CustomerArrived { time: Time, transaction_time: Time },

    /// No teller was free; the customer joined the back of the line
    CustomerQueued { time: Time, line_length: usize },

    /// A teller began serving a customer
    ServiceStarted {
        time: Time,
        teller_index: TellerIndex,
        arrival_time: Time,
        wait_time: Time,
    },

    /// A teller finished serving its customer
    ServiceCompleted {
        time: Time,
        teller_index: TellerIndex,
    },
}

impl RunEvent {
    /// Simulated time at which the event happened
    pub fn time(&self) -> Time {
        match self {
            RunEvent::CustomerArrived { time, .. } => *time,
            RunEvent::CustomerQueued { time, .. } => *time,
            RunEvent::ServiceStarted { time, .. } => *time,
            RunEvent::ServiceCompleted { time, .. } => *time,
        }
    }

    /// Short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            RunEvent::CustomerArrived { .. } => "CustomerArrived",
            RunEvent::CustomerQueued { .. } => "CustomerQueued",
            RunEvent::ServiceStarted { .. } => "ServiceStarted",
            RunEvent::ServiceCompleted { .. } => "ServiceCompleted",
        }
    }

    /// Teller involved, if any
    pub fn teller_index(&self) -> Option<TellerIndex> {
        match self {
            RunEvent::ServiceStarted { teller_index, .. } => Some(*teller_index),
            RunEvent::ServiceCompleted { teller_index, .. } => Some(*teller_index),
            _ => None,
        }
    }
}

/// Event log for storing and querying run events.
///
/// A thin wrapper around `Vec<RunEvent>` with query helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<RunEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event
    pub fn log(&mut self, event: RunEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in processing order
    pub fn events(&self) -> &[RunEvent] {
        &self.events
    }

    /// Events that happened at `time`
    pub fn events_at(&self, time: Time) -> Vec<&RunEvent> {
        self.events.iter().filter(|e| e.time() == time).collect()
    }

    /// Events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&RunEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Events involving a specific teller
    pub fn events_for_teller(&self, teller_index: TellerIndex) -> Vec<&RunEvent> {
        self.events
            .iter()
            .filter(|e| e.teller_index() == Some(teller_index))
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
