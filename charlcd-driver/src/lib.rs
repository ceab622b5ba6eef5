//! Character LCD driver implementations
//!
//! This crate drives HD44780-compatible character displays through the
//! traits defined in `charlcd-hal`:
//!
//! - [`hd44780::Lcd`] - 4-bit HD44780 behind a PCF8574 I2C backpack
//!
//! The driver is write-only and fully blocking. Every operation returns
//! after the controller's execution time has elapsed.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod hd44780;

pub use hd44780::{Lcd, LcdConfig};
