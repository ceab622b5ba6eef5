//! Millisecond delay adapter

use charlcd_hal::DelayMs;
use embedded_hal::delay::DelayNs;

/// [`DelayMs`] over any embedded-hal blocking delay
///
/// With `embassy_time::Delay` the wait is driven by the embassy time
/// driver tick rather than the cycle counter.
pub struct HalDelay<D> {
    delay: D,
}

impl<D: DelayNs> HalDelay<D> {
    /// Wrap an embedded-hal delay provider
    pub fn new(delay: D) -> Self {
        Self { delay }
    }
}

impl<D: DelayNs> DelayMs for HalDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
