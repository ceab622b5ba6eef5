//! charlcd demo firmware
//!
//! Drives a 16x2 HD44780 panel behind a PCF8574 backpack on I2C1
//! (PB6=SCL, PB7=SDA) of an STM32F411 "black pill" and steps through the
//! driver's display features once every [`STEP_MS`].

#![no_std]
#![no_main]

use core::fmt::Write;

use charlcd_driver::{Lcd, LcdConfig};
use charlcd_hal::{CycleTimer, I2cConfig};
use charlcd_hal_stm32::{i2c_config, DwtCounter, DwtTimer, HalDelay, HalI2c};
use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::i2c::I2c;
use embassy_time::{Delay, Instant, Timer};
use heapless::String;
use {defmt_rtt as _, panic_probe as _};

/// Pause between demo steps
const STEP_MS: u64 = 1500;

/// CGRAM slot of the built-in degree-Celsius glyph
const DEGREE_CELSIUS: u8 = 1;

/// Demo steps, run in order and repeated forever
#[derive(Debug, Clone, Copy, Format)]
enum Step {
    CursorOn,
    BlinkOn,
    CursorOff,
    BacklightOff,
    BacklightOn,
    ScrollLeft,
    ScrollRight,
    Uptime,
}

impl Step {
    const ALL: [Step; 8] = [
        Step::CursorOn,
        Step::BlinkOn,
        Step::CursorOff,
        Step::BacklightOff,
        Step::BacklightOn,
        Step::ScrollLeft,
        Step::ScrollRight,
        Step::Uptime,
    ];
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("charlcd demo starting...");

    let p = embassy_stm32::init(Default::default());
    let core = unwrap!(cortex_m::Peripherals::take());

    // DWT counts core (AHB) cycles, so read back what RCC actually set up
    let core_clock = unwrap!(embassy_stm32::rcc::clocks(&p.RCC).hclk1.to_hertz());
    info!("core clock {} Hz", core_clock.0);

    // I2C1 in blocking mode; the expander only ever gets single-byte writes
    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, i2c_config(&I2cConfig::STANDARD));

    let counter = DwtCounter::new(core.DCB, core.DWT, core_clock.0);
    let timer: DwtTimer<Delay> = CycleTimer::new(counter, HalDelay::new(Delay));

    let mut lcd = Lcd::new(HalI2c::new(i2c), timer, LcdConfig::LCD_16X2);
    lcd.init();
    if lcd.bus_errors() > 0 {
        warn!("LCD init saw {} bus errors, check wiring and address", lcd.bus_errors());
    } else {
        info!("LCD initialized");
    }

    lcd.print("charlcd demo");
    lcd.set_cursor(0, 1);
    lcd.print("21.5").write_byte(DEGREE_CELSIUS);

    let mut errors = lcd.bus_errors();
    for step in Step::ALL.iter().cycle() {
        Timer::after_millis(STEP_MS).await;
        debug!("demo step {}", step);

        match step {
            Step::CursorOn => lcd.cursor_on(),
            Step::BlinkOn => lcd.blink_on(),
            Step::CursorOff => {
                lcd.blink_off();
                lcd.cursor_off();
            }
            Step::BacklightOff => lcd.backlight_off(),
            Step::BacklightOn => lcd.backlight_on(),
            Step::ScrollLeft => lcd.scroll_display_left(),
            Step::ScrollRight => lcd.scroll_display_right(),
            Step::Uptime => {
                let mut line: String<16> = String::new();
                // Truncation on overflow is fine here
                let _ = write!(line, "up {}s", Instant::now().as_secs());
                while line.push(' ').is_ok() {}

                lcd.set_cursor(0, 1);
                lcd.print(&line);
            }
        }

        if lcd.bus_errors() != errors {
            warn!("{} new bus errors", lcd.bus_errors() - errors);
            errors = lcd.bus_errors();
        }
    }
}
