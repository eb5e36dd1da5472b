//! Run results and staffing comparison
//!
//! A [`SimulationResult`] summarizes one finished run. The decision metric is
//! the maximum busy time over all tellers. A [`StaffingReport`] collects one
//! result per candidate teller count, all evaluated against the same input.

use crate::core::time::Time;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of one finished simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Accumulated busy time of each teller, in teller index order
    pub per_teller_busy_time: Vec<Time>,

    /// Customers each teller started serving, in teller index order
    pub per_teller_customers: Vec<usize>,

    /// Customers whose service completed
    pub customers_served: usize,

    /// Longest the waiting line got during the run
    pub max_line_length: usize,

    /// Sum over served customers of (service start - arrival)
    pub total_wait_time: Time,
}

impl SimulationResult {
    /// Result with the given busy times and no other activity recorded
    pub fn from_busy_times(per_teller_busy_time: Vec<Time>) -> Self {
        Self {
            per_teller_customers: vec![0; per_teller_busy_time.len()],
            per_teller_busy_time,
            customers_served: 0,
            max_line_length: 0,
            total_wait_time: 0,
        }
    }

    pub fn teller_count(&self) -> usize {
        self.per_teller_busy_time.len()
    }

    /// Largest per-teller busy time; 0 when there are no tellers
    ///
    /// # Example
    /// ```
    /// use bank_simulator_core_rs::SimulationResult;
    ///
    /// assert_eq!(SimulationResult::from_busy_times(vec![9, 4, 2]).max_teller_busy_time(), 9);
    /// assert_eq!(SimulationResult::from_busy_times(vec![]).max_teller_busy_time(), 0);
    /// ```
    pub fn max_teller_busy_time(&self) -> Time {
        self.per_teller_busy_time.iter().copied().max().unwrap_or(0)
    }

    /// Busy time summed over all tellers
    pub fn total_busy_time(&self) -> Time {
        self.per_teller_busy_time.iter().sum()
    }

    /// Mean wait per served customer; 0.0 when nobody was served
    pub fn average_wait_time(&self) -> f64 {
        if self.customers_served == 0 {
            return 0.0;
        }
        self.total_wait_time as f64 / self.customers_served as f64
    }

    /// True if no customer ever had to join the line
    pub fn is_contention_free(&self) -> bool {
        self.max_line_length == 0
    }
}

/// Outcome for one candidate teller count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingRow {
    pub teller_count: usize,
    pub max_teller_busy_time: Time,
    pub result: SimulationResult,
}

impl StaffingRow {
    pub fn new(teller_count: usize, result: SimulationResult) -> Self {
        Self {
            teller_count,
            max_teller_busy_time: result.max_teller_busy_time(),
            result,
        }
    }
}

impl fmt::Display for StaffingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.teller_count == 1 {
            "teller"
        } else {
            "tellers"
        };
        write!(
            f,
            "Time waiting with {} {}: {}",
            self.teller_count, noun, self.max_teller_busy_time
        )
    }
}

/// Results for several teller counts over one input
///
/// `input_digest` identifies the arrival list every row was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingReport {
    input_digest: String,
    rows: Vec<StaffingRow>,
}

impl StaffingReport {
    pub fn new(input_digest: String) -> Self {
        Self {
            input_digest,
            rows: Vec::new(),
        }
    }

    /// Append the result of one run
    pub fn push(&mut self, teller_count: usize, result: SimulationResult) {
        self.rows.push(StaffingRow::new(teller_count, result));
    }

    pub fn input_digest(&self) -> &str {
        &self.input_digest
    }

    pub fn rows(&self) -> &[StaffingRow] {
        &self.rows
    }

    /// Row for a given teller count, if it was evaluated
    pub fn row(&self, teller_count: usize) -> Option<&StaffingRow> {
        self.rows.iter().find(|r| r.teller_count == teller_count)
    }

    /// Smallest teller count that reaches the lowest max busy time
    pub fn recommended(&self) -> Option<usize> {
        let best = self.rows.iter().map(|r| r.max_teller_busy_time).min()?;
        self.rows
            .iter()
            .filter(|r| r.max_teller_busy_time == best)
            .map(|r| r.teller_count)
            .min()
    }

    /// Pretty-printed JSON rendering of the report
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for StaffingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_wait_time() {
        let mut result = SimulationResult::from_busy_times(vec![15]);
        assert_eq!(result.average_wait_time(), 0.0);

        result.customers_served = 4;
        result.total_wait_time = 13;
        assert_eq!(result.average_wait_time(), 3.25);
    }

    #[test]
    fn test_row_display_pluralizes() {
        let one = StaffingRow::new(1, SimulationResult::from_busy_times(vec![15]));
        let two = StaffingRow::new(2, SimulationResult::from_busy_times(vec![11, 4]));

        assert_eq!(one.to_string(), "Time waiting with 1 teller: 15");
        assert_eq!(two.to_string(), "Time waiting with 2 tellers: 11");
    }

    #[test]
    fn test_recommended_prefers_fewest_tellers_on_tie() {
        let mut report = StaffingReport::new("digest".to_string());
        report.push(1, SimulationResult::from_busy_times(vec![15]));
        report.push(3, SimulationResult::from_busy_times(vec![9, 4, 2]));
        report.push(4, SimulationResult::from_busy_times(vec![9, 4, 2, 0]));

        assert_eq!(report.recommended(), Some(3));
        assert_eq!(report.row(4).map(|r| r.max_teller_busy_time), Some(9));
        assert!(report.row(2).is_none());
    }

    #[test]
    fn test_empty_report_has_no_recommendation() {
        let report = StaffingReport::new(String::new());
        assert_eq!(report.recommended(), None);
        assert_eq!(report.to_string(), "");
    }
}
