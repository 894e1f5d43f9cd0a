//! Event log shared between mock peripherals
//!
//! Each mock keeps its own log; attaching the same [`EventLog`] to several mocks
//! additionally records their activity in one interleaved sequence, so a test can
//! check the order of delays relative to bus transactions.

use super::I2cTransaction;
use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

/// One recorded mock event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEvent {
    /// Millisecond delay requested from a `MockTimer`
    DelayMs(u32),
    /// Transaction attempted on a `MockI2c` (acknowledged or not)
    I2c(I2cTransaction),
}

/// Cloneable handle to one shared event sequence
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<MockEvent>>>);

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in order
    pub fn events(&self) -> Vec<MockEvent> {
        self.0.borrow().clone()
    }

    /// Forget all recorded events
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub(crate) fn push(&self, event: MockEvent) {
        self.0.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_shared_between_clones() {
        let log = EventLog::new();
        let other = log.clone();

        log.push(MockEvent::DelayMs(5));
        other.push(MockEvent::I2c(I2cTransaction::Read { addr: 0x68, len: 1 }));

        assert_eq!(
            log.events(),
            vec![
                MockEvent::DelayMs(5),
                MockEvent::I2c(I2cTransaction::Read { addr: 0x68, len: 1 }),
            ]
        );

        other.clear();
        assert!(log.events().is_empty());
    }
}
