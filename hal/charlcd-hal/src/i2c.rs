//! I2C bus abstractions
//!
//! Provides the write-only I2C master trait the LCD driver transmits
//! through, plus the bus configuration shared by chip HALs.

/// Timeout applied to every bus transaction, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u32 = 10;

/// I2C bus master
///
/// The display hardware has no read-back wiring, so only writes are
/// required of the transport.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a single byte to a device at the given address
    fn write_byte(&mut self, address: u8, byte: u8) -> Result<(), Self::Error> {
        self.write(address, &[byte])
    }
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Per-transaction timeout in milliseconds
    pub timeout_ms: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self {
        frequency: 100_000,
        timeout_ms: DEFAULT_TIMEOUT_MS,
    };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self {
        frequency: 400_000,
        timeout_ms: DEFAULT_TIMEOUT_MS,
    };

    /// Same configuration with a different timeout
    pub const fn with_timeout_ms(self, timeout_ms: u32) -> Self {
        Self {
            frequency: self.frequency,
            timeout_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingBus {
        writes: usize,
        last: Option<(u8, u8)>,
    }

    impl I2cBus for CountingBus {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            self.writes += 1;
            self.last = data.last().map(|&b| (address, b));
            Ok(())
        }
    }

    #[test]
    fn test_default_config() {
        let config = I2cConfig::default();
        assert_eq!(config.frequency, 100_000);
        assert_eq!(config.timeout_ms, 10);
        assert_eq!(I2cConfig::FAST.with_timeout_ms(25).timeout_ms, 25);
    }

    #[test]
    fn test_write_byte_forwards_single_byte() {
        let mut bus = CountingBus {
            writes: 0,
            last: None,
        };
        bus.write_byte(0x27, 0x08).unwrap();
        {
            let mut borrowed = &mut bus;
            borrowed.write_byte(0x27, 0x0C).unwrap();
        }
        assert_eq!(bus.writes, 2);
        assert_eq!(bus.last, Some((0x27, 0x0C)));
    }
}
