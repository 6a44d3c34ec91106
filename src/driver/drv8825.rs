//! DRV8825 driver state machine.
//!
//! Generic over embedded-hal 1.0 pin types. Every pin is optional; operations
//! whose pin is unassigned only update the cached state.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::units::{Direction, StepMode};
use crate::error::{DriverError, PinRole, Result};

use super::builder::Drv8825Builder;
use super::pins::{drive, sample, NoPin, Pins};
use super::state::{DriverState, StepOutcome};

/// Maximum nSLEEP-high to STEP-accepted latency (datasheet t_WAKE, 1.7 ms).
pub const WAKE_DELAY_US: u32 = 1_700;

/// DRV8825 stepper driver.
///
/// Generic over:
/// - `STEP`, `DIR`, `EN`, `RST`, `SLP`, `M0`..`M2`: output pins (`OutputPin`)
/// - `FLT`: nFAULT input pin (`InputPin`)
/// - `DELAY`: delay provider (`DelayNs`)
///
/// Create it with [`Drv8825::builder`].
pub struct Drv8825<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2, DELAY> {
    pins: Pins<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2>,

    /// Delay provider for wake-up and pulse width.
    delay: DELAY,

    /// Cached mode, direction, enabled and sleeping flags.
    state: DriverState,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// STEP high time in nanoseconds (0 = none).
    step_pulse_ns: u32,
}

impl Drv8825<NoPin, NoPin, NoPin, NoPin, NoPin, NoPin, NoPin, NoPin, NoPin, ()> {
    /// Start building a driver with every pin unassigned.
    pub fn builder() -> Drv8825Builder {
        Drv8825Builder::new()
    }
}

impl<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2, DELAY>
    Drv8825<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2, DELAY>
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
    /// Take ownership of the pins and drive them to the power-on levels.
    ///
    /// DIR is set for clockwise, STEP low, nENBL low (enabled), nRESET high
    /// and nSLEEP high (awake), then `mode` is applied to MODE0..MODE2.
    pub(crate) fn new(
        pins: Pins<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2>,
        delay: DELAY,
        mode: StepMode,
        invert_direction: bool,
        step_pulse_ns: u32,
    ) -> Result<Self> {
        let mut driver = Self {
            pins,
            delay,
            state: DriverState::new(mode),
            invert_direction,
            step_pulse_ns,
        };

        let dir_level = driver.state.direction.dir_level(invert_direction);
        drive(driver.pins.dir.as_mut(), dir_level, PinRole::Direction)?;
        drive(driver.pins.step.as_mut(), false, PinRole::Step)?;
        drive(driver.pins.enable.as_mut(), false, PinRole::Enable)?;
        drive(driver.pins.reset.as_mut(), true, PinRole::Reset)?;
        drive(driver.pins.sleep.as_mut(), true, PinRole::Sleep)?;
        driver.set_mode(mode)?;

        debug!("drv8825: initialized, mode {:?}", mode);
        Ok(driver)
    }

    /// Issue one step in `direction`.
    ///
    /// Nothing is written while the driver is disabled or asleep. Otherwise
    /// nFAULT is checked first and the pulse is suppressed if it is asserted.
    /// A direction change writes DIR before the pulse; a software GPIO write
    /// is far slower than the 650 ns DIR setup time.
    pub fn step(&mut self, direction: Direction) -> Result<StepOutcome> {
        if !self.state.accepts_steps() {
            trace!(
                "drv8825: step inhibited (enabled {}, sleeping {})",
                self.state.enabled,
                self.state.sleeping
            );
            return Ok(StepOutcome::Inhibited);
        }

        if self.has_fault()? {
            warn!("drv8825: fault reported, step suppressed");
            return Ok(StepOutcome::Fault);
        }

        if self.state.direction != direction {
            self.state.direction = direction;
            debug!("drv8825: direction {:?}", direction);
            drive(
                self.pins.dir.as_mut(),
                direction.dir_level(self.invert_direction),
                PinRole::Direction,
            )?;
        }

        // The indexer advances on the rising edge
        if let Some(step) = self.pins.step.as_mut() {
            step.set_high()
                .map_err(|_| DriverError::Pin(PinRole::Step))?;
            if self.step_pulse_ns > 0 {
                self.delay.delay_ns(self.step_pulse_ns);
            }
            step.set_low()
                .map_err(|_| DriverError::Pin(PinRole::Step))?;
        }

        Ok(StepOutcome::Stepped)
    }

    /// Enable the output stage (nENBL low). No-op if already enabled.
    pub fn enable(&mut self) -> Result<()> {
        if self.state.enabled {
            return Ok(());
        }
        self.state.enabled = true;
        debug!("drv8825: enable");
        drive(self.pins.enable.as_mut(), false, PinRole::Enable)?;
        Ok(())
    }

    /// Disable the output stage (nENBL high), de-energizing the coils.
    /// No-op if already disabled.
    pub fn disable(&mut self) -> Result<()> {
        if !self.state.enabled {
            return Ok(());
        }
        self.state.enabled = false;
        debug!("drv8825: disable");
        drive(self.pins.enable.as_mut(), true, PinRole::Enable)?;
        Ok(())
    }

    /// Enter low-power sleep (nSLEEP low). No-op if already sleeping.
    pub fn sleep(&mut self) -> Result<()> {
        if self.state.sleeping {
            return Ok(());
        }
        self.state.sleeping = true;
        debug!("drv8825: sleep");
        drive(self.pins.sleep.as_mut(), false, PinRole::Sleep)?;
        Ok(())
    }

    /// Leave sleep (nSLEEP high) and block for [`WAKE_DELAY_US`].
    ///
    /// No-op if already awake. The delay is only taken when nSLEEP is
    /// assigned.
    pub fn wake(&mut self) -> Result<()> {
        if !self.state.sleeping {
            return Ok(());
        }
        self.state.sleeping = false;
        debug!("drv8825: wake");
        if let Some(sleep) = self.pins.sleep.as_mut() {
            sleep
                .set_high()
                .map_err(|_| DriverError::Pin(PinRole::Sleep))?;
            self.delay.delay_us(WAKE_DELAY_US);
        }
        Ok(())
    }

    /// Pulse nRESET, returning the indexer to its home position.
    ///
    /// Cached state is unchanged.
    pub fn reset(&mut self) -> Result<()> {
        if let Some(reset) = self.pins.reset.as_mut() {
            debug!("drv8825: reset");
            reset
                .set_low()
                .map_err(|_| DriverError::Pin(PinRole::Reset))?;
            reset
                .set_high()
                .map_err(|_| DriverError::Pin(PinRole::Reset))?;
        }
        Ok(())
    }

    /// Whether nFAULT is asserted (low).
    ///
    /// Always `false` when the fault pin is unassigned.
    pub fn has_fault(&mut self) -> Result<bool> {
        let level = sample(self.pins.fault.as_mut(), PinRole::Fault)?;
        Ok(level == Some(false))
    }

    /// Apply a microstep resolution to MODE0..MODE2.
    ///
    /// Unlike enable/sleep this always writes, even if `mode` is unchanged.
    pub fn set_mode(&mut self, mode: StepMode) -> Result<()> {
        self.state.mode = mode;
        debug!("drv8825: mode {:?}", mode);

        let [m0, m1, m2] = mode.select_bits();
        drive(self.pins.mode0.as_mut(), m0, PinRole::Mode0)?;
        drive(self.pins.mode1.as_mut(), m1, PinRole::Mode1)?;
        drive(self.pins.mode2.as_mut(), m2, PinRole::Mode2)?;
        Ok(())
    }
}

impl<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2, DELAY>
    Drv8825<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2, DELAY>
{
    /// Current microstep resolution.
    #[inline]
    pub fn mode(&self) -> StepMode {
        self.state.mode
    }

    /// Current rotation direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    /// Whether the output stage is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    /// Whether the IC is in sleep mode.
    #[inline]
    pub fn is_sleeping(&self) -> bool {
        self.state.sleeping
    }

    /// Snapshot of the cached state.
    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Release the pins and delay provider.
    ///
    /// The IC is left in its last state.
    pub fn release(self) -> (Pins<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2>, DELAY) {
        (self.pins, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    #[test]
    fn test_step_only_driver() {
        let mut step = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);

        let mut driver = Drv8825::builder()
            .step_pin(step.clone())
            .delay(NoopDelay::new())
            .build()
            .unwrap();

        assert_eq!(driver.step(Direction::Clockwise), Ok(StepOutcome::Stepped));
        assert_eq!(driver.state(), DriverState::new(StepMode::Full));

        step.done();
    }

    #[test]
    fn test_has_fault_without_pin() {
        let mut driver = Drv8825::builder()
            .delay(NoopDelay::new())
            .build()
            .unwrap();

        assert_eq!(driver.has_fault(), Ok(false));
        driver.disable().unwrap();
        driver.sleep().unwrap();
        assert_eq!(driver.has_fault(), Ok(false));
    }
}
