//! DWT cycle counter
//!
//! The Cortex-M Data Watchpoint and Trace unit carries a free-running
//! 32-bit cycle counter (CYCCNT) clocked by the core. Trace must be
//! enabled in the DCB before the counter runs.

use charlcd_hal::CycleCounter;
use cortex_m::peripheral::{DCB, DWT};

/// [`CycleCounter`] backed by DWT CYCCNT
pub struct DwtCounter {
    dcb: DCB,
    dwt: DWT,
    /// Core clock in Hz, as configured by RCC
    core_clock_hz: u32,
}

impl DwtCounter {
    /// Take ownership of the trace peripherals
    ///
    /// `core_clock_hz` must match the clock the core actually runs at,
    /// otherwise every microsecond wait scales with the error.
    pub fn new(dcb: DCB, dwt: DWT, core_clock_hz: u32) -> Self {
        Self {
            dcb,
            dwt,
            core_clock_hz,
        }
    }

    /// Give the trace peripherals back
    pub fn free(self) -> (DCB, DWT) {
        (self.dcb, self.dwt)
    }
}

impl CycleCounter for DwtCounter {
    fn enable(&mut self) {
        self.dcb.disable_trace();
        self.dcb.enable_trace();

        self.dwt.disable_cycle_counter();
        self.dwt.enable_cycle_counter();
        self.dwt.set_cycle_count(0);

        // Counter needs a few cycles before the first read is meaningful
        cortex_m::asm::nop();
        cortex_m::asm::nop();
        cortex_m::asm::nop();
    }

    fn now(&self) -> u32 {
        DWT::cycle_count()
    }

    fn frequency(&self) -> u32 {
        self.core_clock_hz
    }
}
