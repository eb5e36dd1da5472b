//! Time-ordered event queue
//!
//! A min-heap over pending events keyed by `(time, sequence)`. The sequence
//! number is assigned on insertion and increases monotonically, so events that
//! share a timestamp come out in the order they were pushed. Two events with
//! different times are never reordered.

use crate::core::time::Time;
use crate::events::types::Event;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Event tagged with its scheduling key
#[derive(Debug, Clone, Copy)]
struct Scheduled {
    time: Time,
    sequence: u64,
    event: Event,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Priority queue that always yields the chronologically earliest event
///
/// # Example
/// ```
/// use bank_simulator_core_rs::{ArrivalEvent, DepartureEvent, EventQueue};
///
/// let mut queue = EventQueue::new();
/// queue.push(ArrivalEvent::new(30, 3).into());
/// queue.push(DepartureEvent::new(26, 0).into());
/// queue.push(ArrivalEvent::new(26, 1).into());
///
/// assert_eq!(queue.pop().map(|e| e.time()), Some(26));
/// assert_eq!(queue.pop().map(|e| e.event_type()), Some("Arrival"));
/// assert_eq!(queue.pop().map(|e| e.time()), Some(30));
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<Scheduled>>,
    next_sequence: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event in O(log n)
    pub fn push(&mut self, event: Event) {
        let scheduled = Scheduled {
            time: event.time(),
            sequence: self.next_sequence,
            event,
        };
        self.next_sequence += 1;
        self.heap.push(Reverse(scheduled));
    }

    /// Remove and return the earliest event
    ///
    /// Among events with equal times, the one pushed first is returned first.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|Reverse(scheduled)| scheduled.event)
    }

    /// Earliest event without removing it
    pub fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|Reverse(scheduled)| &scheduled.event)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop all pending events and restart the insertion sequence
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }
}

impl Extend<Event> for EventQueue {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        for event in iter {
            self.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::{ArrivalEvent, DepartureEvent};

    #[test]
    fn test_equal_times_pop_in_insertion_order() {
        let mut queue = EventQueue::new();
        queue.push(DepartureEvent::new(10, 2).into());
        queue.push(DepartureEvent::new(10, 0).into());
        queue.push(ArrivalEvent::new(10, 7).into());

        assert_eq!(queue.pop(), Some(DepartureEvent::new(10, 2).into()));
        assert_eq!(queue.pop(), Some(DepartureEvent::new(10, 0).into()));
        assert_eq!(queue.pop(), Some(ArrivalEvent::new(10, 7).into()));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_clear_resets_sequence() {
        let mut queue = EventQueue::new();
        queue.push(ArrivalEvent::new(1, 1).into());
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.next_sequence, 0);
    }
}
