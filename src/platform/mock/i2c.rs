//! Mock I2C implementation for testing

use super::{EventLog, MockEvent};
use crate::platform::{
    error::{I2cError, PlatformError},
    traits::{I2cConfig, I2cInterface},
    Result,
};
use std::vec::Vec;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8> },
    /// Read transaction
    Read { addr: u8, len: usize },
    /// Write-Read transaction
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

/// Mock I2C implementation
///
/// Records every attempted transaction (including failed ones) for test
/// verification, replays pre-programmed read data in FIFO order, and can make
/// transactions fail with a NACK.
#[derive(Debug)]
pub struct MockI2c {
    config: I2cConfig,
    transactions: Vec<I2cTransaction>,
    read_data: Vec<u8>,
    pending_nacks: usize,
    /// Transactions left before each scheduled NACK fires
    scheduled_nacks: Vec<usize>,
    absent: Vec<u8>,
    events: Option<EventLog>,
}

impl MockI2c {
    /// Create a new mock I2C
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            transactions: Vec::new(),
            read_data: Vec::new(),
            pending_nacks: 0,
            scheduled_nacks: Vec::new(),
            absent: Vec::new(),
            events: None,
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.transactions.clone()
    }

    /// Clear transaction log
    ///
    /// Scheduled NACKs keep counting from where they were.
    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Also record transactions into a shared event log
    pub fn attach_event_log(&mut self, log: &EventLog) {
        self.events = Some(log.clone());
    }

    /// Set data to return for read operations
    pub fn set_read_data(&mut self, data: &[u8]) {
        self.read_data = data.to_vec();
    }

    /// Append data to return for read operations
    pub fn queue_read_data(&mut self, data: &[u8]) {
        self.read_data.extend_from_slice(data);
    }

    /// Fail the next `count` transactions with a NACK
    ///
    /// A NACKed transaction consumes no read data.
    pub fn nack_next(&mut self, count: usize) {
        self.pending_nacks = count;
    }

    /// Fail only the `n`-th transaction from now (0 = the next one) with a NACK
    pub fn nack_nth(&mut self, n: usize) {
        self.scheduled_nacks.push(n);
    }

    /// Make every transaction to `addr` fail with a NACK
    pub fn set_absent(&mut self, addr: u8) {
        if !self.absent.contains(&addr) {
            self.absent.push(addr);
        }
    }

    /// Get current frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }

    /// Log a transaction and decide its outcome
    fn record(&mut self, transaction: I2cTransaction) -> Result<()> {
        let addr = match &transaction {
            I2cTransaction::Write { addr, .. }
            | I2cTransaction::Read { addr, .. }
            | I2cTransaction::WriteRead { addr, .. } => *addr,
        };
        if let Some(events) = &self.events {
            events.push(MockEvent::I2c(transaction.clone()));
        }
        self.transactions.push(transaction);

        let mut scheduled = false;
        self.scheduled_nacks.retain_mut(|remaining| {
            if *remaining == 0 {
                scheduled = true;
                false
            } else {
                *remaining -= 1;
                true
            }
        });

        if scheduled || self.absent.contains(&addr) {
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        if self.pending_nacks > 0 {
            self.pending_nacks -= 1;
            return Err(PlatformError::I2c(I2cError::Nack));
        }
        Ok(())
    }

    fn fill(&mut self, buffer: &mut [u8]) {
        let to_read = core::cmp::min(buffer.len(), self.read_data.len());
        buffer[..to_read].copy_from_slice(&self.read_data[..to_read]);
        self.read_data.drain(..to_read);
    }
}

impl I2cInterface for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.record(I2cTransaction::Write {
            addr,
            data: data.to_vec(),
        })
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.record(I2cTransaction::Read {
            addr,
            len: buffer.len(),
        })?;
        self.fill(buffer);
        Ok(())
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.record(I2cTransaction::WriteRead {
            addr,
            write_data: write_data.to_vec(),
            read_len: read_buffer.len(),
        })?;
        self.fill(read_buffer);
        Ok(())
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        if frequency == 0 {
            return Err(PlatformError::InvalidConfig);
        }
        self.config.frequency = frequency;
        Ok(())
    }
}
