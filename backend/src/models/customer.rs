//! Customers and the waiting line
//!
//! A customer exists only while waiting: it is created when an arrival finds
//! every teller busy and consumed when a departing teller picks it up. The
//! line is strictly first-in-first-out with no capacity limit.

use crate::core::time::Time;
use crate::events::types::ArrivalEvent;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A customer waiting for a teller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    arrival: ArrivalEvent,
}

impl Customer {
    pub fn new(arrival: ArrivalEvent) -> Self {
        Self { arrival }
    }

    pub fn arrival(&self) -> &ArrivalEvent {
        &self.arrival
    }

    pub fn arrival_time(&self) -> Time {
        self.arrival.arrival_time
    }

    pub fn transaction_time(&self) -> Time {
        self.arrival.transaction_time
    }
}

/// FIFO line of customers not yet assigned a teller
///
/// Also remembers the longest the line has been since the last `clear`.
///
/// # Example
/// ```
/// use bank_simulator_core_rs::{ArrivalEvent, Customer, WaitingLine};
///
/// let mut line = WaitingLine::new();
/// line.push_back(Customer::new(ArrivalEvent::new(22, 4)));
/// line.push_back(Customer::new(ArrivalEvent::new(23, 2)));
///
/// assert_eq!(line.pop_front().map(|c| c.arrival_time()), Some(22));
/// assert_eq!(line.len(), 1);
/// assert_eq!(line.max_len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WaitingLine {
    customers: VecDeque<Customer>,
    max_len: usize,
}

impl WaitingLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a customer to the back of the line
    pub fn push_back(&mut self, customer: Customer) {
        self.customers.push_back(customer);
        self.max_len = self.max_len.max(self.customers.len());
    }

    /// Take the customer at the front of the line
    pub fn pop_front(&mut self) -> Option<Customer> {
        self.customers.pop_front()
    }

    pub fn front(&self) -> Option<&Customer> {
        self.customers.front()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Longest the line has been since it was last cleared
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn clear(&mut self) {
        self.customers.clear();
        self.max_len = 0;
    }
}
