//! STM32-specific HAL for the charlcd driver
//!
//! This crate provides STM32 implementations of the `charlcd-hal` traits:
//!
//! - [`dwt::DwtCounter`] - DWT cycle counter for microsecond busy-waits
//! - [`delay::HalDelay`] - millisecond delay over any embedded-hal delay
//! - [`i2c::HalI2c`] - bus transport over any embedded-hal I2C master
//!
//! # Features
//!
//! - `stm32f411ce` - STM32F411CE ("black pill")
//! - `stm32f103c8` - STM32F103C8 ("blue pill")
//! - `defmt` - Enable debug formatting support
//!
//! The DWT unit is absent on Cortex-M0/M0+ parts, so only M3 and up are
//! supported.

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod dwt;
pub mod i2c;

pub use delay::HalDelay;
pub use dwt::DwtCounter;
pub use i2c::{i2c_config, HalI2c, I2cBusError};

/// Timer used by the firmware: DWT for microseconds, embedded-hal delay for milliseconds
pub type DwtTimer<D> = charlcd_hal::CycleTimer<DwtCounter, HalDelay<D>>;
