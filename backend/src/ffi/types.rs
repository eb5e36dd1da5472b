//! Conversions between Python values and simulator types

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::time::Time;
use crate::events::types::ArrivalEvent;
use crate::models::input::{InputError, SimulationInput};
use crate::orchestrator::SimulationError;

/// Build a validated input from `(arrival_time, transaction_time)` pairs
pub fn input_from_pairs(pairs: Vec<(Time, Time)>) -> PyResult<SimulationInput> {
    let input = SimulationInput::new(
        pairs
            .into_iter()
            .map(|(arrival_time, transaction_time)| ArrivalEvent::new(arrival_time, transaction_time))
            .collect(),
    );
    input.validate().map_err(input_error_to_py)?;
    Ok(input)
}

pub fn simulation_error_to_py(err: SimulationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn input_error_to_py(err: InputError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
