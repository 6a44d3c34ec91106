//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_drv8825::load_config;
///
/// let config = load_config("drivers.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let mut msg = heapless::String::new();
        // Truncate long toml diagnostics to the buffer size
        for c in e.message().chars() {
            if msg.push(c).is_err() {
                break;
            }
        }
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StepMode;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[drivers.x_axis]
name = "X-Axis"
"#;

        let config = parse_config(toml).unwrap();
        let driver = config.driver("x_axis").unwrap();
        assert_eq!(driver.microsteps, StepMode::Full);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[drivers.x_axis]
name = "X-Axis"
microsteps = 32
invert_direction = true
step_pulse_ns = 2000
"#;

        let config = parse_config(toml).unwrap();
        let driver = config.driver("x_axis").unwrap();
        assert_eq!(driver.microsteps, StepMode::ThirtySecond);
        assert!(driver.invert_direction);
        assert_eq!(driver.step_pulse_ns, 2000);
    }

    #[test]
    fn test_parse_rejects_bad_microsteps() {
        let toml = r#"
[drivers.x_axis]
name = "X-Axis"
microsteps = 64
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/drivers.toml"),
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }
}
