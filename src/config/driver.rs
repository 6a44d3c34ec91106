//! Driver configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::StepMode;

/// Configuration of one DRV8825 channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DriverConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Microstep setting applied at construction (1, 2, 4, 8, 16 or 32).
    #[serde(default)]
    pub microsteps: StepMode,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// STEP high time in nanoseconds; 0 issues back-to-back writes.
    #[serde(default)]
    pub step_pulse_ns: u32,
}

impl DriverConfig {
    /// Create a configuration with defaults for everything but the name.
    pub fn new(name: &str) -> Self {
        Self {
            name: String::try_from(name).unwrap_or_default(),
            microsteps: StepMode::default(),
            invert_direction: false,
            step_pulse_ns: 0,
        }
    }
}
