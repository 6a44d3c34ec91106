//! Configuration module for the DRV8825 driver.
//!
//! Provides the step mode and direction types, and driver configurations
//! loaded from TOML files (with `std` feature) or built in code.

mod driver;
#[cfg(feature = "std")]
mod loader;
mod system;
pub mod units;
mod validation;

pub use driver::DriverConfig;
pub use system::SystemConfig;
pub use validation::{validate_config, validate_driver, MAX_STEP_PULSE_NS};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

pub use units::{Direction, StepMode};
