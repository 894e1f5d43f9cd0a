//! Mock Timer implementation for testing

use super::{EventLog, MockEvent};
use crate::platform::traits::TimerInterface;
use std::vec::Vec;

/// Mock Timer implementation
///
/// Uses simulated time: delays return immediately and advance the clock. Every
/// millisecond delay is also logged so tests can check a driver's timing sequence.
#[derive(Debug, Default)]
pub struct MockTimer {
    now_us: u64,
    delays_ms: Vec<u32>,
    events: Option<EventLog>,
}

impl MockTimer {
    /// Create a new mock timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Millisecond delays requested so far, in order
    pub fn delays_ms(&self) -> &[u32] {
        &self.delays_ms
    }

    /// Also record millisecond delays into a shared event log
    pub fn attach_event_log(&mut self, log: &EventLog) {
        self.events = Some(log.clone());
    }

    /// Clear the delay log (the clock keeps running)
    pub fn clear_delays(&mut self) {
        self.delays_ms.clear();
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) {
        self.now_us = self.now_us.wrapping_add(us as u64);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
        if let Some(events) = &self.events {
            events.push(MockEvent::DelayMs(ms));
        }
        self.delay_us(ms.saturating_mul(1000));
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}
