//! Bank Simulator Core - Rust Engine
//!
//! Discrete-event bank teller simulation with deterministic execution.
//! Given a fixed list of customer arrivals, it answers how busy the busiest
//! teller would be for each candidate staffing level.
//!
//! # Architecture
//!
//! - **core**: Simulated time
//! - **events**: Arrival/departure events and the time-ordered event queue
//! - **models**: Domain types (Teller, Customer, WaitingLine, SimulationInput, EventLog)
//! - **orchestrator**: Simulation runs, results and staffing reports
//!
//! # Critical Invariants
//!
//! 1. Time is an integer clock that never moves backwards within a run
//! 2. Same input + same teller count = identical result
//! 3. Every customer is served exactly once; busy time is conserved
//!
//! # Example
//!
//! ```rust
//! use bank_simulator_core_rs::{BankSim, SimulationInput};
//!
//! let sim = BankSim::new(SimulationInput::sample());
//! let report = sim.evaluate_staffing(1..=5).unwrap();
//!
//! assert_eq!(report.rows()[0].to_string(), "Time waiting with 1 teller: 15");
//! assert_eq!(report.recommended(), Some(3));
//! ```

// Module declarations
pub mod core;
pub mod events;
pub mod models;
pub mod orchestrator;

// Re-exports for convenience
pub use crate::core::time::{SimClock, Time};
pub use events::{ArrivalEvent, DepartureEvent, Event, EventQueue};
pub use models::{
    customer::{Customer, WaitingLine},
    event::{EventLog, RunEvent},
    input::{InputError, SimulationInput},
    teller::{Teller, TellerIndex},
};
pub use orchestrator::{
    BankSim, RunPhase, SimConfig, SimulationError, SimulationResult, SimulationRun,
    StaffingReport, StaffingRow, MAX_TELLERS, MIN_TELLERS,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn bank_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::bank_sim::PyBankSim>()?;
    Ok(())
}
