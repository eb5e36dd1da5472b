//! Domain models for the bank simulator

pub mod customer;
pub mod event;
pub mod input;
pub mod teller;

// Re-exports
pub use customer::{Customer, WaitingLine};
pub use event::{EventLog, RunEvent};
pub use input::{InputError, SimulationInput};
pub use teller::{Teller, TellerIndex};
