//! HD44780 instruction set

/// Instruction opcodes, OR'd with their argument bits
pub mod cmd {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const RETURN_HOME: u8 = 0x02;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const CURSOR_SHIFT: u8 = 0x10;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_CGRAM_ADDR: u8 = 0x40;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// CURSOR SHIFT argument bits
pub mod shift {
    pub const DISPLAY_MOVE: u8 = 0x08;
    pub const CURSOR_MOVE: u8 = 0x00;
    pub const MOVE_RIGHT: u8 = 0x04;
    pub const MOVE_LEFT: u8 = 0x00;
}

/// DDRAM address of column 0 for each row
///
/// Fixed by the controller's internal RAM layout for up to four lines.
pub const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Number of programmable CGRAM glyph slots
pub const CGRAM_SLOTS: u8 = 8;

/// Register selected for a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Instruction register (RS low)
    Command,
    /// Data register (RS high)
    Data,
}

impl Mode {
    /// Expander pin mask for this register
    pub const fn mask(self) -> u8 {
        match self {
            Mode::Command => 0x00,
            Mode::Data => super::expander::RS,
        }
    }
}

/// SET DDRAM ADDRESS command for a cell that is already in range
pub const fn ddram_address(column: u8, row: u8) -> u8 {
    cmd::SET_DDRAM_ADDR | column.wrapping_add(ROW_OFFSETS[row as usize & 0x3])
}

/// SET CGRAM ADDRESS command for the first scan-line of a glyph slot
///
/// Out-of-range slots wrap into the eight available ones.
pub const fn cgram_address(slot: u8) -> u8 {
    cmd::SET_CGRAM_ADDR | ((slot & (CGRAM_SLOTS - 1)) << 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ddram_address() {
        assert_eq!(ddram_address(0, 0), 0x80);
        assert_eq!(ddram_address(5, 1), 0xC5);
        assert_eq!(ddram_address(19, 2), 0x80 | (20 + 19));
        assert_eq!(ddram_address(19, 3), 0x80 | (84 + 19));
    }

    #[test]
    fn test_cgram_address_wraps() {
        assert_eq!(cgram_address(0), 0x40);
        assert_eq!(cgram_address(1), 0x48);
        assert_eq!(cgram_address(7), 0x78);
        assert_eq!(cgram_address(8), 0x40);
        assert_eq!(cgram_address(0xFF), 0x78);
    }
}
