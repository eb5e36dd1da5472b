//! Simulation Engine
//!
//! Discrete-event loop integrating all components:
//! - Event queue (earliest event first, insertion order on ties)
//! - Teller pool (busy/idle state and busy-time accounting)
//! - Waiting line (FIFO of customers nobody could serve yet)
//! - Event log (complete run history)
//!
//! # Architecture
//!
//! ```text
//! setup(n):  validate n, reset n idle tellers, clear line, seed queue from input
//! run():     while queue not empty:
//!              pop earliest event, advance clock
//!              Arrival   -> first free teller (lowest index) starts work and
//!                           schedules a departure, else customer joins line
//!              Departure -> teller stops work; if line not empty it starts
//!                           on the front customer and schedules a departure
//! gather_results(): busy time of every teller in index order
//! ```
//!
//! Run phases: `Uninitialized -> Seeded -> Running -> Finished`, and
//! `Finished -> Seeded` again on the next `setup`.
//!
//! # Example
//!
//! ```rust
//! use bank_simulator_core_rs::{BankSim, SimulationInput};
//!
//! let sim = BankSim::new(SimulationInput::sample());
//!
//! assert_eq!(sim.max_teller_busy_time(1).unwrap(), 15);
//! assert_eq!(sim.max_teller_busy_time(2).unwrap(), 11);
//! assert!(sim.max_teller_busy_time(6).is_err());
//! ```

use crate::core::time::{SimClock, Time};
use crate::events::queue::EventQueue;
use crate::events::types::{ArrivalEvent, DepartureEvent, Event};
use crate::models::customer::{Customer, WaitingLine};
use crate::models::event::{EventLog, RunEvent};
use crate::models::input::SimulationInput;
use crate::models::teller::{Teller, TellerIndex};
use crate::orchestrator::results::{SimulationResult, StaffingReport};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// Default smallest supported teller count
pub const MIN_TELLERS: usize = 1;

/// Default largest supported teller count
pub const MAX_TELLERS: usize = 5;

/// Bounds on the teller counts a simulator accepts
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Smallest accepted teller count (must be at least 1)
    pub min_tellers: usize,

    /// Largest accepted teller count
    pub max_tellers: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            min_tellers: MIN_TELLERS,
            max_tellers: MAX_TELLERS,
        }
    }
}

impl SimConfig {
    /// Check that the bounds describe a non-empty range of at least one teller
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.min_tellers == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "min_tellers must be >= 1".to_string(),
            ));
        }
        if self.min_tellers > self.max_tellers {
            return Err(SimulationError::InvalidConfiguration(format!(
                "min_tellers ({}) must be <= max_tellers ({})",
                self.min_tellers, self.max_tellers
            )));
        }
        Ok(())
    }

    /// Check a requested teller count against the bounds
    pub fn check_teller_count(&self, teller_count: usize) -> Result<(), SimulationError> {
        if teller_count < self.min_tellers {
            return Err(SimulationError::InvalidConfiguration(format!(
                "Teller count must be >= {}, got {}",
                self.min_tellers, teller_count
            )));
        }
        if teller_count > self.max_tellers {
            return Err(SimulationError::InvalidConfiguration(format!(
                "Teller count must be <= {}, got {}",
                self.max_tellers, teller_count
            )));
        }
        Ok(())
    }

    /// Every accepted teller count, ascending
    pub fn teller_counts(&self) -> RangeInclusive<usize> {
        self.min_tellers..=self.max_tellers
    }
}

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Teller count or configured bounds out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Input could not be serialized for hashing
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Simulation Run
// ============================================================================

/// Lifecycle of a [`SimulationRun`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Created, never set up
    Uninitialized,
    /// Tellers reset and event queue loaded from the input
    Seeded,
    /// Events are being processed
    Running,
    /// Event queue exhausted
    Finished,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunPhase::Uninitialized => "uninitialized",
            RunPhase::Seeded => "seeded",
            RunPhase::Running => "running",
            RunPhase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// State of one simulation over a borrowed input
///
/// The run exclusively owns its event queue, waiting line and teller pool.
/// The input is only borrowed, so runs can never alter the arrivals another
/// run sees. A run can be set up again after it finishes; every `setup`
/// starts from scratch.
#[derive(Debug)]
pub struct SimulationRun<'a> {
    /// Arrivals replayed by every setup
    input: &'a SimulationInput,

    /// Accepted teller count bounds
    config: SimConfig,

    phase: RunPhase,

    clock: SimClock,

    /// Pending arrivals and departures
    event_queue: EventQueue,

    /// Customers nobody could serve yet
    waiting_line: WaitingLine,

    /// One entry per teller; `TellerIndex` indexes into this
    tellers: Vec<Teller>,

    /// Everything that happened this run
    event_log: EventLog,

    customers_served: usize,

    total_wait_time: Time,
}

impl<'a> SimulationRun<'a> {
    /// Create an uninitialized run over `input`
    pub fn new(input: &'a SimulationInput, config: SimConfig) -> Self {
        Self {
            input,
            config,
            phase: RunPhase::Uninitialized,
            clock: SimClock::new(),
            event_queue: EventQueue::new(),
            waiting_line: WaitingLine::new(),
            tellers: Vec::new(),
            event_log: EventLog::new(),
            customers_served: 0,
            total_wait_time: 0,
        }
    }

    /// Prepare a fresh run with `teller_count` tellers
    ///
    /// Validates the count before touching any state, so on error the run is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// * `SimulationError::InvalidConfiguration` - count outside the configured bounds
    pub fn setup(&mut self, teller_count: usize) -> Result<(), SimulationError> {
        self.config.check_teller_count(teller_count)?;

        self.reset_tellers(teller_count);
        self.waiting_line.clear();
        self.setup_event_queue();
        self.clock.reset();
        self.event_log.clear();
        self.customers_served = 0;
        self.total_wait_time = 0;
        self.phase = RunPhase::Seeded;

        log::debug!(
            "Seeded run: {} tellers, {} arrivals",
            teller_count,
            self.event_queue.len()
        );
        Ok(())
    }

    fn reset_tellers(&mut self, teller_count: usize) {
        self.tellers.clear();
        self.tellers.resize_with(teller_count, Teller::new);
    }

    fn setup_event_queue(&mut self) {
        self.event_queue.clear();
        self.event_queue
            .extend(self.input.arrivals().iter().copied().map(Event::from));
    }

    /// Process events until the queue is empty
    ///
    /// Calling this again on a finished run does nothing.
    ///
    /// # Panics
    ///
    /// Panics if the run was never set up, or on an internal invariant
    /// violation (time moving backwards, a departure for an idle or unknown
    /// teller, customers left in line when the queue empties).
    pub fn run(&mut self) {
        assert!(
            self.phase != RunPhase::Uninitialized,
            "run() called before setup()"
        );
        if self.phase == RunPhase::Finished {
            return;
        }
        self.phase = RunPhase::Running;

        while let Some(event) = self.event_queue.pop() {
            let now = event.time();
            self.clock.advance_to(now);
            log::trace!("t={} processing {:?}", now, event);

            match event {
                Event::Arrival(arrival) => self.process_arrival(now, arrival),
                Event::Departure(departure) => self.process_departure(now, departure),
            }
        }

        assert!(
            self.waiting_line.is_empty(),
            "event queue drained with {} customers still waiting",
            self.waiting_line.len()
        );
        self.phase = RunPhase::Finished;

        log::debug!(
            "Run finished: {} events processed, {} customers served, max line length {}",
            self.clock.events_processed(),
            self.customers_served,
            self.waiting_line.max_len()
        );
    }

    /// Lowest-index teller that is free
    fn search_available_tellers(&self) -> Option<TellerIndex> {
        self.tellers.iter().position(Teller::is_available)
    }

    fn process_arrival(&mut self, now: Time, arrival: ArrivalEvent) {
        self.event_log.log(RunEvent::CustomerArrived {
            time: now,
            transaction_time: arrival.transaction_time,
        });

        let customer = Customer::new(arrival);
        match self.search_available_tellers() {
            Some(teller_index) => self.begin_service(now, teller_index, customer),
            None => {
                self.waiting_line.push_back(customer);
                self.event_log.log(RunEvent::CustomerQueued {
                    time: now,
                    line_length: self.waiting_line.len(),
                });
            }
        }
    }

    fn process_departure(&mut self, now: Time, departure: DepartureEvent) {
        let teller_index = departure.teller_index;
        let teller_count = self.tellers.len();
        let Some(teller) = self.tellers.get_mut(teller_index) else {
            panic!(
                "departure at {} references teller {} but only {} exist",
                now, teller_index, teller_count
            );
        };
        assert!(
            !teller.is_available(),
            "departure at {} for idle teller {}",
            now,
            teller_index
        );

        teller.stop_work(now);
        self.customers_served += 1;
        self.event_log.log(RunEvent::ServiceCompleted {
            time: now,
            teller_index,
        });

        if let Some(next) = self.waiting_line.pop_front() {
            self.begin_service(now, teller_index, next);
        }
    }

    /// Put `teller_index` to work on `customer` and schedule the departure
    fn begin_service(&mut self, now: Time, teller_index: TellerIndex, customer: Customer) {
        self.tellers[teller_index].start_work(now);

        let wait_time = now - customer.arrival_time();
        self.total_wait_time += wait_time;
        self.event_log.log(RunEvent::ServiceStarted {
            time: now,
            teller_index,
            arrival_time: customer.arrival_time(),
            wait_time,
        });

        let departure_time = now + customer.transaction_time();
        self.event_queue
            .push(DepartureEvent::new(departure_time, teller_index).into());
    }

    /// Summarize the tellers' busy time in index order
    pub fn gather_results(&self) -> SimulationResult {
        SimulationResult {
            per_teller_busy_time: self
                .tellers
                .iter()
                .map(Teller::elapsed_time_working)
                .collect(),
            per_teller_customers: self
                .tellers
                .iter()
                .map(Teller::customers_started)
                .collect(),
            customers_served: self.customers_served,
            max_line_length: self.waiting_line.max_len(),
            total_wait_time: self.total_wait_time,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn tellers(&self) -> &[Teller] {
        &self.tellers
    }

    pub fn waiting_line(&self) -> &WaitingLine {
        &self.waiting_line
    }

    /// Number of events still queued
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }
}

// ============================================================================
// BankSim
// ============================================================================

/// Bank teller simulator over a fixed arrival list
///
/// Each query is an independent run against the same input, so results for
/// different teller counts are directly comparable.
///
/// # Determinism
///
/// Same input + same teller count = identical results. Ties in event time are
/// broken by insertion order and free tellers are always searched from index
/// zero up.
#[derive(Debug, Clone)]
pub struct BankSim {
    input: SimulationInput,
    config: SimConfig,
}

impl BankSim {
    /// Create a simulator with the default bounds (1 to 5 tellers)
    ///
    /// The input is taken as given and must satisfy
    /// [`SimulationInput::validate`]. Loading through
    /// [`SimulationInput::from_json`] guarantees that.
    ///
    /// # Panics
    ///
    /// In debug builds, if the input fails validation. Release builds skip the
    /// check and an invalid input panics later inside a run.
    pub fn new(input: impl Into<SimulationInput>) -> Self {
        let input = input.into();
        debug_assert_valid(&input);
        Self {
            input,
            config: SimConfig::default(),
        }
    }

    /// Create a simulator with custom teller count bounds
    ///
    /// # Errors
    ///
    /// * `SimulationError::InvalidConfiguration` - bounds are empty or start at 0
    ///
    /// # Panics
    ///
    /// Same input precondition as [`BankSim::new`].
    pub fn with_config(
        input: impl Into<SimulationInput>,
        config: SimConfig,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        let input = input.into();
        debug_assert_valid(&input);
        Ok(Self { input, config })
    }

    pub fn input(&self) -> &SimulationInput {
        &self.input
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Start an uninitialized run over this simulator's input
    pub fn new_run(&self) -> SimulationRun<'_> {
        SimulationRun::new(&self.input, self.config)
    }

    /// Run the simulation once with `teller_count` tellers
    pub fn simulate(&self, teller_count: usize) -> Result<SimulationResult, SimulationError> {
        let mut run = self.new_run();
        run.setup(teller_count)?;
        run.run();
        Ok(run.gather_results())
    }

    /// Maximum per-teller busy time with `teller_count` tellers
    ///
    /// # Errors
    ///
    /// * `SimulationError::InvalidConfiguration` - count outside the configured bounds
    pub fn max_teller_busy_time(&self, teller_count: usize) -> Result<Time, SimulationError> {
        Ok(self.simulate(teller_count)?.max_teller_busy_time())
    }

    /// Evaluate several teller counts, in the order given
    ///
    /// All counts are validated before any run starts. A single run is
    /// reused and set up again for every count.
    pub fn evaluate_staffing<I>(&self, teller_counts: I) -> Result<StaffingReport, SimulationError>
    where
        I: IntoIterator<Item = usize>,
    {
        let teller_counts: Vec<usize> = teller_counts.into_iter().collect();
        for &count in &teller_counts {
            self.config.check_teller_count(count)?;
        }

        let digest = self.input.digest().map_err(|e| {
            SimulationError::SerializationError(format!("Input hashing failed: {}", e))
        })?;
        let mut report = StaffingReport::new(digest);
        let mut run = self.new_run();
        for count in teller_counts {
            run.setup(count)?;
            run.run();
            report.push(count, run.gather_results());
        }
        Ok(report)
    }
}

fn debug_assert_valid(input: &SimulationInput) {
    if cfg!(debug_assertions) {
        if let Err(e) = input.validate() {
            panic!("invalid simulation input: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(SimConfig::default().validate().is_ok());
        assert!(SimConfig {
            min_tellers: 0,
            max_tellers: 3
        }
        .validate()
        .is_err());
        assert!(SimConfig {
            min_tellers: 4,
            max_tellers: 3
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{"max_tellers": 8}"#).unwrap();
        assert_eq!(config.min_tellers, MIN_TELLERS);
        assert_eq!(config.max_tellers, 8);
    }

    #[test]
    fn test_failed_setup_leaves_run_untouched() {
        let input = SimulationInput::sample();
        let mut run = SimulationRun::new(&input, SimConfig::default());

        assert!(run.setup(0).is_err());
        assert_eq!(run.phase(), RunPhase::Uninitialized);
        assert_eq!(run.pending_events(), 0);
    }

    #[test]
    #[should_panic(expected = "run() called before setup()")]
    fn test_run_before_setup_panics() {
        let input = SimulationInput::sample();
        let mut run = SimulationRun::new(&input, SimConfig::default());
        run.run();
    }

    #[test]
    #[should_panic(expected = "departure at 5 for idle teller 0")]
    fn test_departure_for_idle_teller_panics() {
        let input = SimulationInput::default();
        let mut run = SimulationRun::new(&input, SimConfig::default());
        run.setup(1).unwrap();
        run.event_queue.push(DepartureEvent::new(5, 0).into());
        run.run();
    }

    #[test]
    #[should_panic(expected = "references teller 3 but only 2 exist")]
    fn test_departure_for_unknown_teller_panics() {
        let input = SimulationInput::default();
        let mut run = SimulationRun::new(&input, SimConfig::default());
        run.setup(2).unwrap();
        run.event_queue.push(DepartureEvent::new(5, 3).into());
        run.run();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid simulation input: Arrival 1 has negative transaction_time -3")]
    fn test_invalid_input_rejected_in_debug_builds() {
        BankSim::new(vec![ArrivalEvent::new(0, 2), ArrivalEvent::new(1, -3)]);
    }
}
