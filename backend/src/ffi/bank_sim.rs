//! PyO3 wrapper for BankSim
//!
//! # Example (from Python)
//!
//! ```python
//! from bank_simulator_core_rs import BankSim
//!
//! sim = BankSim([(20, 6), (22, 4), (23, 2), (30, 3)])
//! for count, busy in sim.evaluate_staffing():
//!     print(f"Time waiting with {count} tellers: {busy}")
//! ```

use pyo3::prelude::*;

use super::types::{input_error_to_py, input_from_pairs, simulation_error_to_py};
use crate::core::time::Time;
use crate::orchestrator::{BankSim, SimConfig, MAX_TELLERS, MIN_TELLERS};

/// Python wrapper for the Rust simulator
#[pyclass(name = "BankSim")]
pub struct PyBankSim {
    inner: BankSim,
}

#[pymethods]
impl PyBankSim {
    /// Create a simulator over a list of `(arrival_time, transaction_time)` pairs
    ///
    /// # Errors
    ///
    /// Raises ValueError if a time is negative or the bounds are invalid.
    #[new]
    #[pyo3(signature = (arrivals, min_tellers = MIN_TELLERS, max_tellers = MAX_TELLERS))]
    fn new(arrivals: Vec<(Time, Time)>, min_tellers: usize, max_tellers: usize) -> PyResult<Self> {
        let input = input_from_pairs(arrivals)?;
        let config = SimConfig {
            min_tellers,
            max_tellers,
        };
        let inner = BankSim::with_config(input, config).map_err(simulation_error_to_py)?;
        Ok(PyBankSim { inner })
    }

    /// Maximum per-teller busy time for `teller_count` tellers
    fn max_teller_busy_time(&self, teller_count: usize) -> PyResult<Time> {
        self.inner
            .max_teller_busy_time(teller_count)
            .map_err(simulation_error_to_py)
    }

    /// Busy time of every teller, in index order
    fn per_teller_busy_time(&self, teller_count: usize) -> PyResult<Vec<Time>> {
        self.inner
            .simulate(teller_count)
            .map(|result| result.per_teller_busy_time)
            .map_err(simulation_error_to_py)
    }

    /// `(teller_count, max_teller_busy_time)` for each count
    ///
    /// Defaults to every count the simulator accepts.
    #[pyo3(signature = (teller_counts = None))]
    fn evaluate_staffing(&self, teller_counts: Option<Vec<usize>>) -> PyResult<Vec<(usize, Time)>> {
        let counts =
            teller_counts.unwrap_or_else(|| self.inner.config().teller_counts().collect());
        let report = self
            .inner
            .evaluate_staffing(counts)
            .map_err(simulation_error_to_py)?;
        Ok(report
            .rows()
            .iter()
            .map(|row| (row.teller_count, row.max_teller_busy_time))
            .collect())
    }

    /// SHA-256 of the arrival list
    fn input_digest(&self) -> PyResult<String> {
        self.inner.input().digest().map_err(input_error_to_py)
    }
}
