//! Display configuration
//!
//! Geometry and bus address are fixed for the lifetime of a driver and
//! must match the physical panel.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::command::ROW_OFFSETS;
use super::flags::FunctionFlags;

/// Character cell height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Font {
    /// 5x8 dots, the only font available in two-line mode
    Dots5x8,
    /// 5x10 dots, honoured on one-line panels only
    Dots5x10,
}

/// LCD configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LcdConfig {
    /// Characters per row
    pub columns: u8,
    /// Number of rows (1-4)
    pub rows: u8,
    /// Expander 8-bit write address (7-bit address shifted left)
    pub address: u8,
    /// Cell height
    pub font: Font,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self::LCD_16X2
    }
}

impl LcdConfig {
    /// 8-bit write address of a PCF8574 backpack with A0..A2 pulled high
    pub const DEFAULT_ADDRESS: u8 = 0x4E;

    /// Maximum rows covered by the DDRAM row table
    pub const MAX_ROWS: u8 = ROW_OFFSETS.len() as u8;

    /// 16 columns, 2 rows
    pub const LCD_16X2: Self = Self::new(16, 2);

    /// 20 columns, 4 rows
    pub const LCD_20X4: Self = Self::new(20, 4);

    /// Create a config for the given geometry at the default address
    ///
    /// One-row panels get the 5x10 font, everything else 5x8.
    pub const fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            address: Self::DEFAULT_ADDRESS,
            font: if rows > 1 { Font::Dots5x8 } else { Font::Dots5x10 },
        }
    }

    /// Same config at a different 8-bit write address
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Same config with a different font
    pub const fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// 7-bit address handed to the I2C transport
    pub const fn bus_address(&self) -> u8 {
        self.address >> 1
    }

    /// Clamp geometry into what the controller can address
    ///
    /// Rows are limited to `1..=4`, columns to at least one.
    pub const fn normalized(mut self) -> Self {
        if self.columns == 0 {
            self.columns = 1;
        }
        if self.rows == 0 {
            self.rows = 1;
        } else if self.rows > Self::MAX_ROWS {
            self.rows = Self::MAX_ROWS;
        }
        self
    }

    /// FUNCTION SET flags for this geometry, always in 4-bit mode
    pub fn function_flags(&self) -> FunctionFlags {
        if self.rows > 1 {
            FunctionFlags::TWO_LINE
        } else if self.font == Font::Dots5x10 {
            FunctionFlags::FONT_5X10
        } else {
            FunctionFlags::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LcdConfig::default();
        assert_eq!(config.columns, 16);
        assert_eq!(config.rows, 2);
        assert_eq!(config.address, 0x4E);
        assert_eq!(config.bus_address(), 0x27);
        assert_eq!(config.font, Font::Dots5x8);
    }

    #[test]
    fn test_function_flags() {
        assert_eq!(LcdConfig::LCD_16X2.function_flags().bits(), 0x08);
        assert_eq!(LcdConfig::LCD_20X4.function_flags().bits(), 0x08);
        assert_eq!(LcdConfig::new(16, 1).function_flags().bits(), 0x04);
        assert_eq!(
            LcdConfig::new(16, 1)
                .with_font(Font::Dots5x8)
                .function_flags()
                .bits(),
            0x00
        );
        // 5x10 is not available in two-line mode
        assert_eq!(
            LcdConfig::LCD_16X2
                .with_font(Font::Dots5x10)
                .function_flags()
                .bits(),
            0x08
        );
    }

    #[test]
    fn test_normalized() {
        let config = LcdConfig::new(0, 9).normalized();
        assert_eq!(config.columns, 1);
        assert_eq!(config.rows, 4);

        let config = LcdConfig::new(20, 0).normalized();
        assert_eq!(config.rows, 1);

        assert_eq!(LcdConfig::LCD_20X4.normalized(), LcdConfig::LCD_20X4);
    }

    #[test]
    fn test_with_address() {
        let config = LcdConfig::LCD_16X2.with_address(0x7E);
        assert_eq!(config.bus_address(), 0x3F);
    }
}
