//! charlcd Hardware Abstraction Layer
//!
//! This crate defines the collaborator traits the character LCD driver
//! calls into. Chip-specific HALs implement them for real peripherals and
//! tests implement them with mocks, so the driver never touches a register.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmware (charlcd-demo-fw, etc.)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  charlcd-driver (HD44780 over PCF8574)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  charlcd-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ charlcd-hal-  │
//!             │    stm32      │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - Bus transport to the GPIO expander
//! - [`delay::CycleCounter`] - Free-running hardware cycle counter
//! - [`delay::DelayMs`] - Coarse millisecond delay
//! - [`delay::Timer`] - Combined timing service used by the driver

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use delay::{CycleCounter, CycleTimer, DelayMs, Timer};
pub use i2c::{I2cBus, I2cConfig};
