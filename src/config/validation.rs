//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{DriverConfig, SystemConfig};

/// Longest accepted STEP high time (1 ms).
pub const MAX_STEP_PULSE_NS: u32 = 1_000_000;

/// Validate a system configuration.
///
/// Checks:
/// - Driver names are not empty
/// - Step pulse widths are at most [`MAX_STEP_PULSE_NS`]
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, driver) in config.drivers.iter() {
        validate_driver(driver)?;
    }

    Ok(())
}

/// Validate a single driver configuration.
pub fn validate_driver(config: &DriverConfig) -> Result<()> {
    if config.name.is_empty() {
        return Err(Error::Config(ConfigError::EmptyName));
    }

    if config.step_pulse_ns > MAX_STEP_PULSE_NS {
        return Err(Error::Config(ConfigError::InvalidPulseWidth(
            config.step_pulse_ns,
        )));
    }

    Ok(())
}
