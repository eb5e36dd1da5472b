//! Property Tests - simulation invariants over random arrival lists
//!
//! Critical invariants tested:
//! - Determinism: same input + same teller count = same result
//! - Conservation: total busy time equals total transaction time served
//! - Every customer is served exactly once
//! - Busy time per teller stays within the simulated span
//! - Enough tellers means nobody waits
//! - Service starts in arrival order (FIFO line)

use bank_simulator_core_rs::{ArrivalEvent, BankSim, RunEvent, SimulationInput};
use proptest::prelude::*;

fn arrivals(max_len: usize) -> impl Strategy<Value = Vec<ArrivalEvent>> {
    prop::collection::vec(
        (0i64..200, 0i64..25).prop_map(|(a, t)| ArrivalEvent::new(a, t)),
        0..max_len,
    )
}

proptest! {
    #[test]
    fn prop_deterministic(input in arrivals(40), tellers in 1usize..=5) {
        let sim = BankSim::new(input);
        prop_assert_eq!(sim.simulate(tellers).unwrap(), sim.simulate(tellers).unwrap());
    }

    #[test]
    fn prop_busy_time_conserved(input in arrivals(40), tellers in 1usize..=5) {
        let input = SimulationInput::new(input);
        let sim = BankSim::new(input.clone());
        let result = sim.simulate(tellers).unwrap();

        prop_assert_eq!(result.total_busy_time(), input.total_transaction_time());
        prop_assert_eq!(result.customers_served, input.len());
        prop_assert_eq!(result.teller_count(), tellers);
    }

    #[test]
    fn prop_busy_time_within_span(input in arrivals(40), tellers in 1usize..=5) {
        let input = SimulationInput::new(input);
        let sim = BankSim::new(input.clone());
        let mut run = sim.new_run();
        run.setup(tellers).unwrap();
        run.run();
        let result = run.gather_results();

        let span = match (input.arrivals().iter().map(|a| a.arrival_time).min(), run.clock().now()) {
            (Some(start), Some(end)) => end - start,
            _ => 0,
        };
        for busy in result.per_teller_busy_time {
            prop_assert!(busy >= 0);
            prop_assert!(busy <= span);
        }
    }

    #[test]
    fn prop_enough_tellers_means_no_waiting(input in arrivals(6)) {
        let sim = BankSim::new(input);
        let result = sim.simulate(5).unwrap();

        prop_assert!(result.is_contention_free());
        prop_assert_eq!(result.total_wait_time, 0);
    }

    #[test]
    fn prop_service_starts_in_arrival_order(input in arrivals(40), tellers in 1usize..=5) {
        let sim = BankSim::new(input);
        let mut run = sim.new_run();
        run.setup(tellers).unwrap();
        run.run();

        let log = run.event_log();
        let times: Vec<i64> = log.events().iter().map(RunEvent::time).collect();
        prop_assert!(times.windows(2).all(|w| w[0] <= w[1]));

        let arrival_times: Vec<i64> = log
            .events()
            .iter()
            .filter_map(|e| match e {
                RunEvent::ServiceStarted { arrival_time, .. } => Some(*arrival_time),
                _ => None,
            })
            .collect();
        prop_assert!(arrival_times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_staffing_report_matches_independent_runs(input in arrivals(30)) {
        let sim = BankSim::new(input);
        let report = sim.evaluate_staffing(1..=5).unwrap();

        for row in report.rows() {
            prop_assert_eq!(
                row.max_teller_busy_time,
                sim.max_teller_busy_time(row.teller_count).unwrap()
            );
        }
    }

    #[test]
    fn prop_empty_input_is_zero(tellers in 1usize..=5) {
        let sim = BankSim::new(SimulationInput::default());
        prop_assert_eq!(sim.max_teller_busy_time(tellers).unwrap(), 0);
    }
}
