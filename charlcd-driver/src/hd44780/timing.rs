//! Controller timing
//!
//! All values are lower bounds. Shortening any of them risks the
//! controller dropping commands.

/// Wait after power-on before touching the bus, in ms
pub const POWER_ON_DELAY_MS: u32 = 50;

/// Settle time after the expander idle level is set, in ms
///
/// The datasheet minimum is far smaller; the margin covers noisy supplies.
pub const SETTLE_DELAY_MS: u32 = 1000;

/// Gap after each of the three blind 8-bit reset nibbles, in us
pub const RESET_NIBBLE_DELAY_US: u32 = 4500;

/// Settle after switching to 4-bit mode, in us
pub const FOUR_BIT_SETTLE_US: u32 = 100;

/// Hold time on each Enable edge, in us
pub const ENABLE_PULSE_US: u32 = 20;

/// Execution time of CLEAR DISPLAY and RETURN HOME, in us
pub const CLEAR_HOME_DELAY_US: u32 = 2000;

/// Wait after the initial ENTRY MODE SET, in us
pub const ENTRY_MODE_DELAY_US: u32 = 4500;
