//! Flag bytes mirrored from the controller
//!
//! The HD44780 keeps no state the driver can read back, so the driver
//! holds a local copy of every flag byte and re-sends the whole byte
//! whenever a single bit changes.

use core::ops::BitOr;

macro_rules! flag_byte {
    ($(#[$meta:meta])* $name:ident { $($(#[$flag_meta:meta])* $flag:ident = $bits:expr;)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[repr(transparent)]
        pub struct $name(u8);

        impl $name {
            $(
                $(#[$flag_meta])*
                pub const $flag: Self = Self($bits);
            )*

            /// No bits set
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Raw byte, ready to be OR'd into a command
            pub const fn bits(self) -> u8 {
                self.0
            }

            /// True when every bit of `other` is set
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Set the bits of `other`
            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }

            /// Clear the bits of `other`
            pub fn remove(&mut self, other: Self) {
                self.0 &= !other.0;
            }

            /// Set or clear the bits of `other`
            pub fn set(&mut self, other: Self, on: bool) {
                if on {
                    self.insert(other);
                } else {
                    self.remove(other);
                }
            }
        }

        impl BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }
    };
}

flag_byte! {
    /// FUNCTION SET flags
    ///
    /// Empty means 4-bit bus, one line, 5x8 font.
    FunctionFlags {
        /// 8-bit data bus
        EIGHT_BIT_MODE = 0x10;
        /// Two display lines (also used for 4-line panels)
        TWO_LINE = 0x08;
        /// 5x10 dot font, one-line mode only
        FONT_5X10 = 0x04;
    }
}

flag_byte! {
    /// DISPLAY CONTROL flags
    ControlFlags {
        /// Display visible
        DISPLAY_ON = 0x04;
        /// Underline cursor visible
        CURSOR_ON = 0x02;
        /// Block cursor blinking
        BLINK_ON = 0x01;
    }
}

flag_byte! {
    /// ENTRY MODE SET flags
    ///
    /// Empty means right-to-left with the display fixed.
    EntryFlags {
        /// Address counter increments (text runs left to right)
        LEFT_TO_RIGHT = 0x02;
        /// Shift the whole display on every write
        AUTOSCROLL = 0x01;
    }
}

/// Backlight state, OR'd into every byte sent to the expander
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Backlight {
    On,
    #[default]
    Off,
}

impl Backlight {
    /// Expander pin mask for this state
    pub const fn mask(self) -> u8 {
        match self {
            Backlight::On => super::expander::BACKLIGHT,
            Backlight::Off => 0x00,
        }
    }
}

impl From<bool> for Backlight {
    fn from(on: bool) -> Self {
        if on {
            Backlight::On
        } else {
            Backlight::Off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut control = ControlFlags::empty();
        control.insert(ControlFlags::DISPLAY_ON);
        control.insert(ControlFlags::CURSOR_ON);
        assert_eq!(control.bits(), 0x06);

        control.remove(ControlFlags::DISPLAY_ON);
        assert_eq!(control, ControlFlags::CURSOR_ON);
        assert!(!control.contains(ControlFlags::DISPLAY_ON));
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut entry = EntryFlags::LEFT_TO_RIGHT;
        entry.set(EntryFlags::AUTOSCROLL, true);
        entry.set(EntryFlags::AUTOSCROLL, true);
        assert_eq!(entry.bits(), 0x03);

        entry.set(EntryFlags::AUTOSCROLL, false);
        assert_eq!(entry, EntryFlags::LEFT_TO_RIGHT);
    }

    #[test]
    fn test_bitor() {
        let function = FunctionFlags::TWO_LINE | FunctionFlags::FONT_5X10;
        assert_eq!(function.bits(), 0x0C);
        assert!(function.contains(FunctionFlags::TWO_LINE));
        assert!(!function.contains(FunctionFlags::EIGHT_BIT_MODE));
    }

    #[test]
    fn test_backlight_mask() {
        assert_eq!(Backlight::On.mask(), 0x08);
        assert_eq!(Backlight::Off.mask(), 0x00);
        assert_eq!(Backlight::from(true), Backlight::On);
        assert_eq!(Backlight::default(), Backlight::Off);
    }
}
