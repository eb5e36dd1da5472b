//! Python bindings (PyO3)
//!
//! Thin wrapper exposing [`BankSim`](crate::BankSim) to Python. Only built
//! with the `pyo3` feature.

pub mod bank_sim;
pub mod types;
