//! I2C bus transport for STM32
//!
//! The firmware creates a blocking embassy I2C master and hands it to
//! [`HalI2c`], which exposes it as a `charlcd_hal::I2cBus`.

use charlcd_hal::{I2cBus, I2cConfig};
use embassy_stm32::i2c::Config;
use embassy_stm32::time::Hertz;
use embassy_time::Duration;
use embedded_hal::i2c::{Error as _, ErrorKind};

/// Build an embassy I2C configuration from the shared bus settings
pub fn i2c_config(config: &I2cConfig) -> Config {
    let mut i2c_config = Config::default();
    i2c_config.frequency = Hertz(config.frequency);
    i2c_config.timeout = Duration::from_millis(config.timeout_ms as u64);
    i2c_config
}

/// Error from I2C operations
///
/// Built from the embedded-hal [`ErrorKind`] of whatever master
/// [`HalI2c`] wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for I2cBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => I2cBusError::Bus,
            ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
            ErrorKind::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}

/// [`I2cBus`] over an embedded-hal blocking I2C master
///
/// The transaction timeout is whatever the wrapped master was configured
/// with; use [`i2c_config`] when building an embassy master.
pub struct HalI2c<I> {
    i2c: I,
}

impl<I: embedded_hal::i2c::I2c> HalI2c<I> {
    /// Wrap an I2C master
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Unwrap the I2C master
    pub fn free(self) -> I {
        self.i2c
    }
}

impl<I: embedded_hal::i2c::I2c> I2cBus for HalI2c<I> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c
            .write(address, data)
            .map_err(|e| I2cBusError::from(e.kind()))
    }
}
