//! Timing abstractions
//!
//! The HD44780 needs two kinds of waits: millisecond power-up delays that
//! can come from any tick service, and microsecond strobe/settle delays
//! that must be measured on a free-running cycle counter.

/// Free-running hardware cycle counter (e.g. the Cortex-M DWT CYCCNT)
///
/// The counter is expected to wrap at `u32::MAX`.
pub trait CycleCounter {
    /// Enable the counter and reset it to zero
    ///
    /// Called once before the first measurement. Nothing else may reset
    /// the counter while a wait is in progress.
    fn enable(&mut self);

    /// Current counter value in core clock cycles
    fn now(&self) -> u32;

    /// Core clock frequency in Hz
    fn frequency(&self) -> u32;
}

/// Coarse blocking delay with millisecond granularity
pub trait DelayMs {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// Timing service consumed by the display driver
///
/// Every method blocks the caller. Test implementations can record the
/// requested durations instead of waiting.
pub trait Timer {
    /// Prepare the underlying counter; called once before any sleep
    fn start(&mut self);

    /// Block for at least `ms` milliseconds
    fn sleep_ms(&mut self, ms: u32);

    /// Block for at least `us` microseconds
    fn sleep_us(&mut self, us: u32);
}

impl<T: Timer + ?Sized> Timer for &mut T {
    fn start(&mut self) {
        (**self).start()
    }

    fn sleep_ms(&mut self, ms: u32) {
        (**self).sleep_ms(ms)
    }

    fn sleep_us(&mut self, us: u32) {
        (**self).sleep_us(us)
    }
}

/// Number of core cycles covering `us` microseconds at `frequency` Hz
///
/// Uses whole cycles-per-microsecond, so clocks below 1 MHz yield zero.
pub const fn cycles_for_us(frequency: u32, us: u32) -> u32 {
    (frequency / 1_000_000).saturating_mul(us)
}

/// [`Timer`] built from a cycle counter and a millisecond delay
///
/// Microsecond sleeps busy-poll the counter; millisecond sleeps are
/// forwarded to the delay, which may yield if the platform supports it.
pub struct CycleTimer<C, M> {
    counter: C,
    millis: M,
}

impl<C: CycleCounter, M: DelayMs> CycleTimer<C, M> {
    /// Create a new timer; the counter is not touched until [`Timer::start`]
    pub fn new(counter: C, millis: M) -> Self {
        Self { counter, millis }
    }

    /// Access the underlying counter
    pub fn counter(&self) -> &C {
        &self.counter
    }

    /// Split back into counter and delay
    pub fn release(self) -> (C, M) {
        (self.counter, self.millis)
    }
}

impl<C: CycleCounter, M: DelayMs> Timer for CycleTimer<C, M> {
    fn start(&mut self) {
        self.counter.enable();
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.millis.delay_ms(ms);
    }

    fn sleep_us(&mut self, us: u32) {
        let cycles = cycles_for_us(self.counter.frequency(), us);
        let start = self.counter.now();
        // Wrapping subtraction keeps the elapsed count correct across roll-over
        while self.counter.now().wrapping_sub(start) < cycles {}
    }
}
