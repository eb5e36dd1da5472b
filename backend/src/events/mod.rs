//! Schedulable events and the queue that orders them

pub mod queue;
pub mod types;

pub use queue::EventQueue;
pub use types::{ArrivalEvent, DepartureEvent, Event};
