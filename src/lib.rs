//! # stepper-drv8825
//!
//! Driver for the TI DRV8825 bipolar stepper motor controller, built on
//! embedded-hal 1.0.
//!
//! ## Features
//!
//! - **embedded-hal 1.0**: `OutputPin` for control lines, `InputPin` for
//!   nFAULT, `DelayNs` for the wake-up time
//! - **Optional pins**: every control line may be left unassigned
//! - **Cached state**: direction, microstep mode, enable and sleep flags
//! - **Configuration-driven**: driver settings from TOML files
//! - **no_std compatible**: core library works without standard library
//!
//! The driver does not generate step timing; call [`Drv8825::step`] at the
//! rate you need.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_drv8825::{Direction, Drv8825, StepMode};
//!
//! let mut driver = Drv8825::builder()
//!     .step_pin(step_pin)
//!     .dir_pin(dir_pin)
//!     .enable_pin(enable_pin)
//!     .fault_pin(fault_pin)
//!     .mode_pins(m0, m1, m2)
//!     .mode(StepMode::Sixteenth)
//!     .delay(delay)
//!     .build()?;
//!
//! if driver.step(Direction::Clockwise)?.is_fault() {
//!     driver.disable()?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables logging through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible to later modules
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod driver;
pub mod error;

// Re-exports for ergonomic API
pub use config::{validate_config, Direction, DriverConfig, StepMode, SystemConfig};
pub use driver::{DriverState, Drv8825, Drv8825Builder, NoPin, Pins, StepOutcome};
pub use error::{ConfigError, DriverError, Error, PinRole, Result};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
