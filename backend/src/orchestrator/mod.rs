//! Orchestrator - discrete-event simulation loop
//!
//! See `engine.rs` for the run lifecycle and `results.rs` for the metrics
//! derived from a finished run.

pub mod engine;
pub mod results;

// Re-export main types for convenience
pub use engine::{
    BankSim, RunPhase, SimConfig, SimulationError, SimulationRun, MAX_TELLERS, MIN_TELLERS,
};
pub use results::{SimulationResult, StaffingReport, StaffingRow};
