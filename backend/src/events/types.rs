//! Schedulable event types
//!
//! The simulation is driven by two kinds of events:
//! - **Arrival**: a customer walks in and needs `transaction_time` units of service
//! - **Departure**: a teller finishes serving its current customer
//!
//! Both are wrapped in the [`Event`] sum type so a single queue can hold them.
//! Events are ordered for scheduling purposes by their time alone.

use crate::core::time::Time;
use crate::models::teller::TellerIndex;
use serde::{Deserialize, Serialize};

/// A customer arrival
///
/// Immutable once created. The input of a simulation is a list of these.
///
/// # Example
/// ```
/// use bank_simulator_core_rs::ArrivalEvent;
///
/// let arrival = ArrivalEvent::new(20, 6);
/// assert_eq!(arrival.arrival_time, 20);
/// assert_eq!(arrival.transaction_time, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrivalEvent {
    /// Instant the customer arrives at the bank
    pub arrival_time: Time,
    /// Service duration the customer needs once a teller picks them up
    pub transaction_time: Time,
}

impl ArrivalEvent {
    pub fn new(arrival_time: Time, transaction_time: Time) -> Self {
        Self {
            arrival_time,
            transaction_time,
        }
    }
}

/// Scheduled completion of a teller's current service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartureEvent {
    /// Instant the service ends
    pub departure_time: Time,
    /// Teller that is serving the departing customer
    pub teller_index: TellerIndex,
}

impl DepartureEvent {
    pub fn new(departure_time: Time, teller_index: TellerIndex) -> Self {
        Self {
            departure_time,
            teller_index,
        }
    }
}

/// Either an arrival or a departure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Arrival(ArrivalEvent),
    Departure(DepartureEvent),
}

impl Event {
    /// Time at which the event fires
    pub fn time(&self) -> Time {
        match self {
            Event::Arrival(arrival) => arrival.arrival_time,
            Event::Departure(departure) => departure.departure_time,
        }
    }

    /// Short name of the event kind
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Arrival(_) => "Arrival",
            Event::Departure(_) => "Departure",
        }
    }
}

impl From<ArrivalEvent> for Event {
    fn from(arrival: ArrivalEvent) -> Self {
        Event::Arrival(arrival)
    }
}

impl From<DepartureEvent> for Event {
    fn from(departure: DepartureEvent) -> Self {
        Event::Departure(departure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_time_uses_variant_timestamp() {
        let arrival: Event = ArrivalEvent::new(22, 4).into();
        let departure: Event = DepartureEvent::new(26, 1).into();

        assert_eq!(arrival.time(), 22);
        assert_eq!(departure.time(), 26);
        assert_eq!(arrival.event_type(), "Arrival");
        assert_eq!(departure.event_type(), "Departure");
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event: Event = DepartureEvent::new(30, 2).into();
        let json = serde_json::to_value(event).unwrap();

        assert_eq!(json["type"], "departure");
        assert_eq!(json["departure_time"], 30);
        assert_eq!(json["teller_index"], 2);
    }
}
