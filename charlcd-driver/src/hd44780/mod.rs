//! HD44780 character LCD over a PCF8574 I2C expander
//!
//! The controller runs in 4-bit mode: every byte goes out as two nibbles
//! on the upper half of the expander port, each latched by a pulse on the
//! Enable line. The backpack offers no read-back, so the driver mirrors
//! all controller flags locally and waits out every execution time
//! instead of polling the busy flag.
//!
//! # Example
//!
//! ```ignore
//! let mut lcd = Lcd::new(i2c, timer, LcdConfig::LCD_16X2);
//! lcd.init();
//! lcd.print("Temp 21").write_byte(1);
//! lcd.set_cursor(0, 1);
//! write!(lcd, "{} rpm", rpm).ok();
//! ```

pub mod command;
pub mod config;
pub mod expander;
pub mod flags;
pub mod glyph;
pub mod timing;


use core::fmt;

use charlcd_hal::{I2cBus, Timer};

use command::{cgram_address, cmd, ddram_address, shift, Mode};
pub use config::{Font, LcdConfig};
pub use flags::{Backlight, ControlFlags, EntryFlags, FunctionFlags};
use glyph::Glyph;

/// HD44780 display driver
///
/// Owns the bus transport and the timing service. Every method blocks
/// until the controller has finished executing the command.
///
/// `init` must be called once before anything else; the controller's
/// state is unknown until then.
pub struct Lcd<I2C, T> {
    i2c: I2C,
    timer: T,
    config: LcdConfig,
    function: FunctionFlags,
    control: ControlFlags,
    entry: EntryFlags,
    backlight: Backlight,
    /// Bus writes the transport reported as failed
    bus_errors: u32,
}

impl<I2C, T> Lcd<I2C, T>
where
    I2C: I2cBus,
    T: Timer,
{
    /// Create a driver for the given panel
    ///
    /// Nothing is sent until [`Lcd::init`]. Out-of-range geometry is
    /// clamped, see [`LcdConfig::normalized`].
    pub fn new(i2c: I2C, timer: T, config: LcdConfig) -> Self {
        let config = config.normalized();
        Self {
            i2c,
            timer,
            function: config.function_flags(),
            config,
            control: ControlFlags::empty(),
            entry: EntryFlags::empty(),
            backlight: Backlight::Off,
            bus_errors: 0,
        }
    }

    /// Give back the bus and the timer
    pub fn release(self) -> (I2C, T) {
        (self.i2c, self.timer)
    }

    /// Bring the controller from an unknown state into 4-bit mode
    ///
    /// Replays the datasheet's "initialization by instruction" sequence,
    /// then turns the display on with cursor and blink off, clears it,
    /// selects left-to-right entry, uploads the built-in glyphs and
    /// homes the cursor. Takes a little over one second.
    pub fn init(&mut self) {
        debug!(
            "lcd init: {=u8}x{=u8} at {=u8:#x}",
            self.config.columns,
            self.config.rows,
            self.config.bus_address()
        );
        self.timer.start();
        self.function = self.config.function_flags();

        self.timer.sleep_ms(timing::POWER_ON_DELAY_MS);
        self.backlight = Backlight::On;
        self.expander_write(0);
        self.timer.sleep_ms(timing::SETTLE_DELAY_MS);

        // Three blind 8-bit function sets leave the controller in 8-bit
        // mode whatever state it was in, then 0x2 switches to 4-bit
        for _ in 0..3 {
            self.write_nibble(0x03 << 4);
            self.timer.sleep_us(timing::RESET_NIBBLE_DELAY_US);
        }
        self.write_nibble(0x02 << 4);
        self.timer.sleep_us(timing::FOUR_BIT_SETTLE_US);

        self.command(cmd::FUNCTION_SET | self.function.bits());

        self.control = ControlFlags::DISPLAY_ON;
        self.display_on();
        self.clear();

        self.entry = EntryFlags::LEFT_TO_RIGHT;
        self.command(cmd::ENTRY_MODE_SET | self.entry.bits());
        self.timer.sleep_us(timing::ENTRY_MODE_DELAY_US);

        for (slot, glyph) in glyph::BUILTIN.iter().enumerate() {
            self.create_char(slot as u8, glyph);
        }

        self.home();
        debug!("lcd init done");
    }

    /// Clear the display and move the cursor to the first position
    pub fn clear(&mut self) {
        self.command(cmd::CLEAR_DISPLAY);
        self.timer.sleep_us(timing::CLEAR_HOME_DELAY_US);
    }

    /// Move the cursor to the first position and undo any display shift
    pub fn home(&mut self) {
        self.command(cmd::RETURN_HOME);
        self.timer.sleep_us(timing::CLEAR_HOME_DELAY_US);
    }

    /// Move the cursor to `column`, `row`
    ///
    /// Both are clamped to the panel: values past the last column or row
    /// land on the last one.
    pub fn set_cursor(&mut self, column: u8, row: u8) {
        let column = column.min(self.config.columns - 1);
        let row = row.min(self.config.rows - 1);
        self.command(ddram_address(column, row));
    }

    /// Show the display contents
    pub fn display_on(&mut self) {
        self.update_control(ControlFlags::DISPLAY_ON, true);
    }

    /// Blank the display; DDRAM and backlight are left untouched
    pub fn display_off(&mut self) {
        self.update_control(ControlFlags::DISPLAY_ON, false);
    }

    /// Show the underline cursor
    pub fn cursor_on(&mut self) {
        self.update_control(ControlFlags::CURSOR_ON, true);
    }

    /// Hide the underline cursor
    pub fn cursor_off(&mut self) {
        self.update_control(ControlFlags::CURSOR_ON, false);
    }

    /// Blink the cursor cell
    pub fn blink_on(&mut self) {
        self.update_control(ControlFlags::BLINK_ON, true);
    }

    /// Stop blinking the cursor cell
    pub fn blink_off(&mut self) {
        self.update_control(ControlFlags::BLINK_ON, false);
    }

    pub fn backlight_on(&mut self) {
        self.set_backlight(true);
    }

    pub fn backlight_off(&mut self) {
        self.set_backlight(false);
    }

    /// Switch the backlight and push the new level to the expander
    ///
    /// Every later transfer carries the same level.
    pub fn set_backlight(&mut self, on: bool) {
        self.backlight = Backlight::from(on);
        self.expander_write(0);
    }

    /// Shift the display on every character write
    pub fn autoscroll_on(&mut self) {
        self.update_entry(EntryFlags::AUTOSCROLL, true);
    }

    /// Keep the display fixed while writing
    pub fn autoscroll_off(&mut self) {
        self.update_entry(EntryFlags::AUTOSCROLL, false);
    }

    /// Shift the whole display one cell to the left
    pub fn scroll_display_left(&mut self) {
        self.command(cmd::CURSOR_SHIFT | shift::DISPLAY_MOVE | shift::MOVE_LEFT);
    }

    /// Shift the whole display one cell to the right
    pub fn scroll_display_right(&mut self) {
        self.command(cmd::CURSOR_SHIFT | shift::DISPLAY_MOVE | shift::MOVE_RIGHT);
    }

    /// Move the cursor one cell to the left without writing
    pub fn move_cursor_left(&mut self) {
        self.command(cmd::CURSOR_SHIFT | shift::CURSOR_MOVE | shift::MOVE_LEFT);
    }

    /// Move the cursor one cell to the right without writing
    pub fn move_cursor_right(&mut self) {
        self.command(cmd::CURSOR_SHIFT | shift::CURSOR_MOVE | shift::MOVE_RIGHT);
    }

    /// Text flows left to right from the cursor
    pub fn left_to_right(&mut self) {
        self.update_entry(EntryFlags::LEFT_TO_RIGHT, true);
    }

    /// Text flows right to left from the cursor
    pub fn right_to_left(&mut self) {
        self.update_entry(EntryFlags::LEFT_TO_RIGHT, false);
    }

    /// Write a string at the cursor
    ///
    /// Characters are mapped as in [`Lcd::print_char`].
    pub fn print(&mut self, text: &str) -> &mut Self {
        for ch in text.chars() {
            self.print_char(ch);
        }
        self
    }

    /// Write a single character at the cursor
    ///
    /// Code points up to `0xFF` are sent as their character code; the
    /// controller ROM decides what they look like. Anything wider is
    /// sent as `?`.
    pub fn print_char(&mut self, ch: char) -> &mut Self {
        let code = u8::try_from(ch).unwrap_or(b'?');
        self.write_byte(code)
    }

    /// Write a raw character code at the cursor
    ///
    /// Codes 0-7 display the CGRAM glyphs.
    pub fn write_byte(&mut self, code: u8) -> &mut Self {
        self.send(code, Mode::Data);
        self
    }

    /// Upload a glyph bitmap into a CGRAM slot
    ///
    /// Only eight slots exist; `slot` is masked with `0x7`. Leaves the
    /// address counter in CGRAM, so follow with [`Lcd::set_cursor`] or
    /// [`Lcd::home`] before printing.
    pub fn create_char(&mut self, slot: u8, bitmap: &Glyph) {
        trace!("cgram slot {=u8}", slot & 0x7);
        self.command(cgram_address(slot));
        for &line in bitmap {
            self.send(line, Mode::Data);
        }
    }

    /// Current FUNCTION SET flags
    pub fn function(&self) -> FunctionFlags {
        self.function
    }

    /// Current DISPLAY CONTROL flags
    pub fn control(&self) -> ControlFlags {
        self.control
    }

    /// Current ENTRY MODE flags
    pub fn entry_mode(&self) -> EntryFlags {
        self.entry
    }

    pub fn is_backlight_on(&self) -> bool {
        self.backlight == Backlight::On
    }

    pub fn columns(&self) -> u8 {
        self.config.columns
    }

    pub fn rows(&self) -> u8 {
        self.config.rows
    }

    /// Expander 8-bit write address
    pub fn address(&self) -> u8 {
        self.config.address
    }

    /// Number of bus writes that failed since construction
    ///
    /// Failures never interrupt an operation; this is the only place
    /// they show up.
    pub fn bus_errors(&self) -> u32 {
        self.bus_errors
    }

    fn update_control(&mut self, flag: ControlFlags, on: bool) {
        self.control.set(flag, on);
        self.command(cmd::DISPLAY_CONTROL | self.control.bits());
    }

    fn update_entry(&mut self, flag: EntryFlags, on: bool) {
        self.entry.set(flag, on);
        self.command(cmd::ENTRY_MODE_SET | self.entry.bits());
    }

    fn command(&mut self, value: u8) {
        self.send(value, Mode::Command);
    }

    /// Send a full byte as two nibbles, high nibble first
    fn send(&mut self, value: u8, mode: Mode) {
        trace!("send {=u8:#x} {}", value, mode == Mode::Data);
        for nibble in expander::nibbles(value) {
            self.write_nibble(nibble | mode.mask());
        }
    }

    fn write_nibble(&mut self, value: u8) {
        self.expander_write(value);
        self.pulse_enable(value);
    }

    /// Latch the nibble on the falling edge of Enable
    fn pulse_enable(&mut self, value: u8) {
        self.expander_write(value | expander::EN);
        self.timer.sleep_us(timing::ENABLE_PULSE_US);

        self.expander_write(value & !expander::EN);
        self.timer.sleep_us(timing::ENABLE_PULSE_US);
    }

    fn expander_write(&mut self, data: u8) {
        let byte = data | self.backlight.mask();
        if self
            .i2c
            .write_byte(self.config.bus_address(), byte)
            .is_err()
        {
            self.bus_errors = self.bus_errors.saturating_add(1);
            warn!("lcd: expander write {=u8:#x} failed", byte);
        }
    }
}

/// Formatting support, e.g. `write!(lcd, "{}%", level)`
impl<I2C, T> fmt::Write for Lcd<I2C, T>
where
    I2C: I2cBus,
    T: Timer,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.print_char(c);
        Ok(())
    }
}
