//! Unit tests for TOML configuration parsing.

use stepper_drv8825::config::{Direction, StepMode, SystemConfig};

/// Test parsing a valid driver configuration from TOML.
#[test]
fn test_parse_driver_config() {
    let toml_str = r#"
[drivers.x_axis]
name = "X"
microsteps = 16
invert_direction = true
step_pulse_ns = 1900
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let driver = config.driver("x_axis").expect("Driver not found");

    assert_eq!(driver.name.as_str(), "X");
    assert_eq!(driver.microsteps, StepMode::Sixteenth);
    assert_eq!(driver.microsteps.microsteps(), 16);
    assert!(driver.invert_direction);
    assert_eq!(driver.step_pulse_ns, 1900);
}

/// Test that every DRV8825 resolution parses.
#[test]
fn test_parse_all_microstep_values() {
    for mode in StepMode::ALL {
        let toml_str = format!(
            r#"
[drivers.m]
name = "m"
microsteps = {}
"#,
            mode.microsteps()
        );

        let config: SystemConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");
        assert_eq!(config.driver("m").unwrap().microsteps, mode);
    }
}

/// Test that resolutions the DRV8825 cannot select are rejected.
#[test]
fn test_invalid_microsteps_rejected() {
    let toml_str = r#"
[drivers.x_axis]
name = "X"
microsteps = 64
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "DRV8825 has no 1/64 mode");
}

/// Test parsing several drivers and listing their names.
#[test]
fn test_parse_multiple_drivers() {
    let toml_str = r#"
[drivers.x_axis]
name = "X"

[drivers.y_axis]
name = "Y"
microsteps = 4
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let names: Vec<_> = config.driver_names().collect();

    assert_eq!(names, vec!["x_axis", "y_axis"]);
    assert_eq!(config.driver("y_axis").unwrap().microsteps, StepMode::Quarter);
    assert!(config.driver("z_axis").is_none());
}

/// Test the textual direction names.
#[test]
fn test_parse_direction() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        direction: Direction,
    }

    let cw: Wrapper = toml::from_str(r#"direction = "cw""#).unwrap();
    let ccw: Wrapper = toml::from_str(r#"direction = "ccw""#).unwrap();

    assert_eq!(cw.direction, Direction::Clockwise);
    assert_eq!(ccw.direction, Direction::CounterClockwise);
}
