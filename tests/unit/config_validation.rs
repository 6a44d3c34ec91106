//! Unit tests for configuration validation.

use stepper_drv8825::config::{parse_config, validate_config, SystemConfig, MAX_STEP_PULSE_NS};
use stepper_drv8825::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[drivers.x_axis]
name = "X"
microsteps = 32
step_pulse_ns = 2000
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test that an oversized pulse width is rejected.
#[test]
fn test_pulse_width_too_long() {
    let toml_str = format!(
        r#"
[drivers.x_axis]
name = "X"
step_pulse_ns = {}
"#,
        MAX_STEP_PULSE_NS + 1
    );

    let result = parse_config(&toml_str);
    assert_eq!(
        result.unwrap_err(),
        Error::Config(ConfigError::InvalidPulseWidth(MAX_STEP_PULSE_NS + 1))
    );
}

/// Test that an empty driver name is rejected.
#[test]
fn test_empty_name_rejected() {
    let toml_str = r#"
[drivers.x_axis]
name = ""
"#;

    let result = parse_config(toml_str);
    assert!(matches!(result, Err(Error::Config(ConfigError::EmptyName))));
}

/// Test that malformed TOML is reported as a parse error.
#[test]
fn test_malformed_toml() {
    let result = parse_config("[drivers.x_axis\nname = ");
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that an empty configuration is valid.
#[test]
fn test_empty_config() {
    assert!(validate_config(&SystemConfig::default()).is_ok());
}
