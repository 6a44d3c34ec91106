//! Error types for the DRV8825 driver.
//!
//! Provides unified error handling across configuration and pin control.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all driver operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Driver operation error
    Driver(DriverError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid microstep value (DRV8825 supports 1, 2, 4, 8, 16, 32)
    InvalidMicrosteps(u16),
    /// Driver name not found in configuration
    DriverNotFound(heapless::String<32>),
    /// Driver name is empty
    EmptyName,
    /// Step pulse width out of range (max 1 ms)
    InvalidPulseWidth(u32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Logical pin of the DRV8825 interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    /// DIR input of the IC
    Direction,
    /// STEP input of the IC
    Step,
    /// nENBL input of the IC
    Enable,
    /// nRESET input of the IC
    Reset,
    /// nSLEEP input of the IC
    Sleep,
    /// nFAULT output of the IC
    Fault,
    /// MODE0 input of the IC
    Mode0,
    /// MODE1 input of the IC
    Mode1,
    /// MODE2 input of the IC
    Mode2,
}

/// Driver operation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// Pin read or write failed
    Pin(PinRole),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Driver(e) => write!(f, "Driver error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidMicrosteps(v) => {
                write!(f, "Invalid microsteps: {}. Valid values: 1, 2, 4, 8, 16, 32", v)
            }
            ConfigError::DriverNotFound(name) => write!(f, "Driver '{}' not found", name),
            ConfigError::EmptyName => write!(f, "Driver name must not be empty"),
            ConfigError::InvalidPulseWidth(ns) => {
                write!(f, "Invalid step pulse width: {} ns. Must be <= 1000000", ns)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PinRole::Direction => "DIR",
            PinRole::Step => "STEP",
            PinRole::Enable => "nENBL",
            PinRole::Reset => "nRESET",
            PinRole::Sleep => "nSLEEP",
            PinRole::Fault => "nFAULT",
            PinRole::Mode0 => "MODE0",
            PinRole::Mode1 => "MODE1",
            PinRole::Mode2 => "MODE2",
        };
        f.write_str(name)
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Pin(role) => write!(f, "GPIO operation on {} pin failed", role),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriverError> for Error {
    fn from(e: DriverError) -> Self {
        Error::Driver(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DriverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_error_display() {
        let err: Error = DriverError::Pin(PinRole::Sleep).into();
        assert_eq!(
            format!("{}", err),
            "Driver error: GPIO operation on nSLEEP pin failed"
        );
    }
}
