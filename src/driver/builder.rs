//! Builder pattern for Drv8825.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::units::StepMode;
use crate::config::{DriverConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};

use super::drv8825::Drv8825;
use super::pins::{NoPin, Pins};

/// Builder for creating Drv8825 instances.
///
/// Each pin setter changes the corresponding type parameter, so pins that are
/// never set stay [`NoPin`]. The delay provider is required; `build` is only
/// available once [`delay`](Self::delay) has been called.
pub struct Drv8825Builder<
    STEP = NoPin,
    DIR = NoPin,
    EN = NoPin,
    RST = NoPin,
    SLP = NoPin,
    FLT = NoPin,
    M0 = NoPin,
    M1 = NoPin,
    M2 = NoPin,
    DELAY = (),
> {
    pins: Pins<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2>,
    delay: DELAY,
    mode: StepMode,
    invert_direction: bool,
    step_pulse_ns: u32,
}

impl Default for Drv8825Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Drv8825Builder {
    /// Create a new builder with no pins and full-step mode.
    pub fn new() -> Self {
        Self {
            pins: Pins::new(),
            delay: (),
            mode: StepMode::Full,
            invert_direction: false,
            step_pulse_ns: 0,
        }
    }
}

impl<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2, DELAY>
    Drv8825Builder<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2, DELAY>
{
    fn map_pins<S, D, E, R, L, F, P0, P1, P2>(
        self,
        f: impl FnOnce(
            Pins<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2>,
        ) -> Pins<S, D, E, R, L, F, P0, P1, P2>,
    ) -> Drv8825Builder<S, D, E, R, L, F, P0, P1, P2, DELAY> {
        Drv8825Builder {
            pins: f(self.pins),
            delay: self.delay,
            mode: self.mode,
            invert_direction: self.invert_direction,
            step_pulse_ns: self.step_pulse_ns,
        }
    }

    /// Replace the whole pin set.
    pub fn pins<S, D, E, R, L, F, P0, P1, P2>(
        self,
        pins: Pins<S, D, E, R, L, F, P0, P1, P2>,
    ) -> Drv8825Builder<S, D, E, R, L, F, P0, P1, P2, DELAY> {
        self.map_pins(|_| pins)
    }

    /// Set the STEP pin.
    pub fn step_pin<P: OutputPin>(
        self,
        pin: P,
    ) -> Drv8825Builder<P, DIR, EN, RST, SLP, FLT, M0, M1, M2, DELAY> {
        self.map_pins(|pins| pins.with_step(pin))
    }

    /// Set the DIR pin.
    pub fn dir_pin<P: OutputPin>(
        self,
        pin: P,
    ) -> Drv8825Builder<STEP, P, EN, RST, SLP, FLT, M0, M1, M2, DELAY> {
        self.map_pins(|pins| pins.with_dir(pin))
    }

    /// Set the nENBL pin.
    pub fn enable_pin<P: OutputPin>(
        self,
        pin: P,
    ) -> Drv8825Builder<STEP, DIR, P, RST, SLP, FLT, M0, M1, M2, DELAY> {
        self.map_pins(|pins| pins.with_enable(pin))
    }

    /// Set the nRESET pin.
    pub fn reset_pin<P: OutputPin>(
        self,
        pin: P,
    ) -> Drv8825Builder<STEP, DIR, EN, P, SLP, FLT, M0, M1, M2, DELAY> {
        self.map_pins(|pins| pins.with_reset(pin))
    }

    /// Set the nSLEEP pin.
    pub fn sleep_pin<P: OutputPin>(
        self,
        pin: P,
    ) -> Drv8825Builder<STEP, DIR, EN, RST, P, FLT, M0, M1, M2, DELAY> {
        self.map_pins(|pins| pins.with_sleep(pin))
    }

    /// Set the nFAULT input.
    pub fn fault_pin<P: InputPin>(
        self,
        pin: P,
    ) -> Drv8825Builder<STEP, DIR, EN, RST, SLP, P, M0, M1, M2, DELAY> {
        self.map_pins(|pins| pins.with_fault(pin))
    }

    /// Set the MODE0..MODE2 pins.
    pub fn mode_pins<P0, P1, P2>(
        self,
        mode0: P0,
        mode1: P1,
        mode2: P2,
    ) -> Drv8825Builder<STEP, DIR, EN, RST, SLP, FLT, P0, P1, P2, DELAY>
    where
        P0: OutputPin,
        P1: OutputPin,
        P2: OutputPin,
    {
        self.map_pins(|pins| pins.with_mode(mode0, mode1, mode2))
    }

    /// Set the delay provider.
    pub fn delay<D: DelayNs>(
        self,
        delay: D,
    ) -> Drv8825Builder<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2, D> {
        Drv8825Builder {
            pins: self.pins,
            delay,
            mode: self.mode,
            invert_direction: self.invert_direction,
            step_pulse_ns: self.step_pulse_ns,
        }
    }

    /// Set the microstep mode applied at construction.
    pub fn mode(mut self, mode: StepMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Set the STEP high time in nanoseconds.
    ///
    /// The DRV8825 needs at least 1.9 µs; 0 relies on GPIO write latency.
    pub fn step_pulse_ns(mut self, ns: u32) -> Self {
        self.step_pulse_ns = ns;
        self
    }

    /// Configure from a DriverConfig.
    pub fn from_driver_config(mut self, config: &DriverConfig) -> Self {
        self.mode = config.microsteps;
        self.invert_direction = config.invert_direction;
        self.step_pulse_ns = config.step_pulse_ns;
        self
    }

    /// Configure from SystemConfig by driver name.
    pub fn from_config(self, config: &SystemConfig, driver_name: &str) -> Result<Self> {
        let driver_config = config.driver(driver_name).ok_or_else(|| {
            Error::Config(ConfigError::DriverNotFound(
                heapless::String::try_from(driver_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_driver_config(driver_config))
    }
}

impl<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2, DELAY>
    Drv8825Builder<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    RST: OutputPin,
    SLP: OutputPin,
    FLT: InputPin,
    M0: OutputPin,
    M1: OutputPin,
    M2: OutputPin,
    DELAY: DelayNs,
{
    /// Build the Drv8825, driving every assigned pin to its power-on level.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin write fails. The pins are dropped in that
    /// case.
    pub fn build(self) -> Result<Drv8825<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2, DELAY>> {
        Drv8825::new(
            self.pins,
            self.delay,
            self.mode,
            self.invert_direction,
            self.step_pulse_ns,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;

    const CONFIG: &str = r#"
[drivers.x_axis]
name = "X"
microsteps = 8
invert_direction = true
step_pulse_ns = 2000
"#;

    #[test]
    fn test_from_config() {
        let config = crate::config::parse_config(CONFIG).unwrap();
        let driver = Drv8825::builder()
            .from_config(&config, "x_axis")
            .unwrap()
            .delay(NoopDelay::new())
            .build()
            .unwrap();

        assert_eq!(driver.mode(), StepMode::Eighth);
    }

    #[test]
    fn test_from_config_unknown_driver() {
        let config = crate::config::parse_config(CONFIG).unwrap();
        let result = Drv8825::builder().from_config(&config, "y_axis");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::DriverNotFound(_)))
        ));
    }
}
