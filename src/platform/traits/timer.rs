//! Timer interface trait
//!
//! Blocking delays and a microsecond clock. Sensor drivers use it for the
//! power-up and settle delays their datasheets require.

/// Timer interface trait
pub trait TimerInterface {
    /// Block for `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        self.delay_us(ms.saturating_mul(1000));
    }

    /// Microseconds since the timer started
    fn now_us(&self) -> u64;

    /// Milliseconds since the timer started
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
