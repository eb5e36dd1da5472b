//! Simulation input
//!
//! The arrival list every run replays. It is fixed for the lifetime of a
//! [`BankSim`](crate::BankSim) and only ever borrowed by runs, so every teller
//! count is evaluated against identical arrivals. The list need not be sorted;
//! the event queue orders it.

use crate::core::time::Time;
use crate::events::types::ArrivalEvent;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors raised while loading an arrival list
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid input JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Arrival {index} has negative arrival_time {time}")]
    NegativeArrivalTime { index: usize, time: Time },

    #[error("Arrival {index} has negative transaction_time {time}")]
    NegativeTransactionTime { index: usize, time: Time },

    #[error("Arrival {index} pushes simulated time past the i64 range")]
    TimeOverflow { index: usize },

    #[error("Accumulated wait time of the input overflows i64")]
    HorizonOverflow,
}

/// Ordered list of arrivals fed to every simulation run
///
/// Serializes as a plain JSON array of arrivals.
///
/// # Example
/// ```
/// use bank_simulator_core_rs::SimulationInput;
///
/// let input = SimulationInput::from_json(
///     r#"[{"arrival_time": 20, "transaction_time": 6},
///         {"arrival_time": 22, "transaction_time": 4}]"#,
/// ).unwrap();
/// assert_eq!(input.len(), 2);
/// assert_eq!(input.total_transaction_time(), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationInput {
    arrivals: Vec<ArrivalEvent>,
}

impl SimulationInput {
    pub fn new(arrivals: Vec<ArrivalEvent>) -> Self {
        Self { arrivals }
    }

    /// Reference workload: four customers arriving at 20, 22, 23 and 30
    pub fn sample() -> Self {
        Self::new(vec![
            ArrivalEvent::new(20, 6),
            ArrivalEvent::new(22, 4),
            ArrivalEvent::new(23, 2),
            ArrivalEvent::new(30, 3),
        ])
    }

    /// Parse and validate a JSON array of arrivals
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        let input: Self = serde_json::from_str(json)?;
        input.validate()?;
        Ok(input)
    }

    /// Check that the input can be simulated without overflow
    ///
    /// Every timestamp and duration must be non-negative. Every departure ends
    /// by the latest arrival plus the sum of all service time, and each wait is
    /// bounded by that horizon, so the horizon times the customer count must
    /// fit in a `Time`.
    pub fn validate(&self) -> Result<(), InputError> {
        let mut total_transaction_time: Time = 0;
        let mut latest_arrival: Time = 0;
        for (index, arrival) in self.arrivals.iter().enumerate() {
            if arrival.arrival_time < 0 {
                return Err(InputError::NegativeArrivalTime {
                    index,
                    time: arrival.arrival_time,
                });
            }
            if arrival.transaction_time < 0 {
                return Err(InputError::NegativeTransactionTime {
                    index,
                    time: arrival.transaction_time,
                });
            }
            if arrival
                .arrival_time
                .checked_add(arrival.transaction_time)
                .is_none()
            {
                return Err(InputError::TimeOverflow { index });
            }
            total_transaction_time = total_transaction_time
                .checked_add(arrival.transaction_time)
                .ok_or(InputError::TimeOverflow { index })?;
            latest_arrival = latest_arrival.max(arrival.arrival_time);
        }

        let horizon = latest_arrival
            .checked_add(total_transaction_time)
            .ok_or(InputError::HorizonOverflow)?;
        let customers =
            Time::try_from(self.arrivals.len()).map_err(|_| InputError::HorizonOverflow)?;
        horizon
            .checked_mul(customers)
            .ok_or(InputError::HorizonOverflow)?;
        Ok(())
    }

    pub fn arrivals(&self) -> &[ArrivalEvent] {
        &self.arrivals
    }

    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }

    /// Sum of all service durations requested by the input
    pub fn total_transaction_time(&self) -> Time {
        self.arrivals.iter().map(|a| a.transaction_time).sum()
    }

    /// SHA-256 of the canonical JSON of the arrival list, hex encoded
    ///
    /// The JSON is the compact array form `from_json` reads, fields in
    /// declaration order, so equal lists always hash equal.
    pub fn digest(&self) -> Result<String, InputError> {
        let json = serde_json::to_string(self)?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        let result = hasher.finalize();

        Ok(format!("{:x}", result))
    }
}

impl From<Vec<ArrivalEvent>> for SimulationInput {
    fn from(arrivals: Vec<ArrivalEvent>) -> Self {
        Self::new(arrivals)
    }
}
