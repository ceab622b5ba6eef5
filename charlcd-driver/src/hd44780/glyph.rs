//! Built-in custom glyphs
//!
//! Each glyph is eight scan-lines, top to bottom; only the lower five
//! bits of every line are displayed.

/// A CGRAM glyph bitmap
pub type Glyph = [u8; 8];

/// Percent-style status mark, uploaded to slot 0 by `init`
pub const STATUS_MARK: Glyph = [
    0b00000,
    0b11001,
    0b11011,
    0b00110,
    0b01100,
    0b11011,
    0b10011,
    0b00000,
];

/// Degrees-Celsius sign, uploaded to slot 1 by `init`
pub const DEGREE_CELSIUS: Glyph = [
    0b11000,
    0b11000,
    0b00110,
    0b01001,
    0b01000,
    0b01001,
    0b00110,
    0b00000,
];

/// Glyphs uploaded during initialization, indexed by CGRAM slot
pub const BUILTIN: [Glyph; 2] = [STATUS_MARK, DEGREE_CELSIUS];
