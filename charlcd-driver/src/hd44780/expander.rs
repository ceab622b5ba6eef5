//! PCF8574 backpack pin layout
//!
//! ```text
//! P7  P6  P5  P4  P3  P2  P1  P0
//! D7  D6  D5  D4  BL  EN  RW  RS
//! ```
//!
//! Data travels on the upper nibble; the lower nibble carries the
//! control lines. RW is wired but never driven high since the driver
//! does not read from the controller.

/// Register select: 0 = instruction, 1 = data
pub const RS: u8 = 0x01;

/// Read/write select, always left low
pub const RW: u8 = 0x02;

/// Enable strobe; the controller latches on the falling edge
pub const EN: u8 = 0x04;

/// Backlight transistor
pub const BACKLIGHT: u8 = 0x08;

/// Upper nibble carrying D4..D7
pub const DATA_MASK: u8 = 0xF0;

/// Split a byte into the two expander nibbles, high nibble first
pub const fn nibbles(value: u8) -> [u8; 2] {
    [value & DATA_MASK, (value << 4) & DATA_MASK]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibbles_high_first() {
        assert_eq!(nibbles(0xA5), [0xA0, 0x50]);
        assert_eq!(nibbles(0x28), [0x20, 0x80]);
        assert_eq!(nibbles(0x0F), [0x00, 0xF0]);
    }

    #[test]
    fn test_control_lines_stay_in_low_nibble() {
        assert_eq!((RS | RW | EN | BACKLIGHT) & DATA_MASK, 0);
    }
}
