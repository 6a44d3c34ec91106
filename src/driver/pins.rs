//! Pin set of a DRV8825 channel.
//!
//! Every pin is optional. Unassigned pins are `None` and their type parameter
//! defaults to [`NoPin`].

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::error::{DriverError, PinRole};

/// Placeholder type for an unassigned pin.
///
/// Never driven or read by the driver; the trait impls only satisfy bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl InputPin for NoPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

/// The nine logical pins of a DRV8825 channel.
///
/// `fault` is an input (nFAULT, open drain, active low); all others are
/// outputs driven by the MCU.
#[derive(Debug)]
pub struct Pins<
    STEP = NoPin,
    DIR = NoPin,
    EN = NoPin,
    RST = NoPin,
    SLP = NoPin,
    FLT = NoPin,
    M0 = NoPin,
    M1 = NoPin,
    M2 = NoPin,
> {
    /// STEP, rising edge advances the indexer.
    pub step: Option<STEP>,
    /// DIR.
    pub dir: Option<DIR>,
    /// nENBL, active low.
    pub enable: Option<EN>,
    /// nRESET, active low.
    pub reset: Option<RST>,
    /// nSLEEP, active low.
    pub sleep: Option<SLP>,
    /// nFAULT, active low input.
    pub fault: Option<FLT>,
    /// MODE0.
    pub mode0: Option<M0>,
    /// MODE1.
    pub mode1: Option<M1>,
    /// MODE2.
    pub mode2: Option<M2>,
}

impl Pins {
    /// An empty pin set with every pin unassigned.
    pub const fn new() -> Self {
        Self {
            step: None,
            dir: None,
            enable: None,
            reset: None,
            sleep: None,
            fault: None,
            mode0: None,
            mode1: None,
            mode2: None,
        }
    }
}

impl Default for Pins {
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2> Pins<STEP, DIR, EN, RST, SLP, FLT, M0, M1, M2> {
    /// Assign the STEP pin.
    pub fn with_step<P: OutputPin>(self, pin: P) -> Pins<P, DIR, EN, RST, SLP, FLT, M0, M1, M2> {
        Pins {
            step: Some(pin),
            dir: self.dir,
            enable: self.enable,
            reset: self.reset,
            sleep: self.sleep,
            fault: self.fault,
            mode0: self.mode0,
            mode1: self.mode1,
            mode2: self.mode2,
        }
    }

    /// Assign the DIR pin.
    pub fn with_dir<P: OutputPin>(self, pin: P) -> Pins<STEP, P, EN, RST, SLP, FLT, M0, M1, M2> {
        Pins {
            step: self.step,
            dir: Some(pin),
            enable: self.enable,
            reset: self.reset,
            sleep: self.sleep,
            fault: self.fault,
            mode0: self.mode0,
            mode1: self.mode1,
            mode2: self.mode2,
        }
    }

    /// Assign the nENBL pin.
    pub fn with_enable<P: OutputPin>(
        self,
        pin: P,
    ) -> Pins<STEP, DIR, P, RST, SLP, FLT, M0, M1, M2> {
        Pins {
            step: self.step,
            dir: self.dir,
            enable: Some(pin),
            reset: self.reset,
            sleep: self.sleep,
            fault: self.fault,
            mode0: self.mode0,
            mode1: self.mode1,
            mode2: self.mode2,
        }
    }

    /// Assign the nRESET pin.
    pub fn with_reset<P: OutputPin>(self, pin: P) -> Pins<STEP, DIR, EN, P, SLP, FLT, M0, M1, M2> {
        Pins {
            step: self.step,
            dir: self.dir,
            enable: self.enable,
            reset: Some(pin),
            sleep: self.sleep,
            fault: self.fault,
            mode0: self.mode0,
            mode1: self.mode1,
            mode2: self.mode2,
        }
    }

    /// Assign the nSLEEP pin.
    pub fn with_sleep<P: OutputPin>(self, pin: P) -> Pins<STEP, DIR, EN, RST, P, FLT, M0, M1, M2> {
        Pins {
            step: self.step,
            dir: self.dir,
            enable: self.enable,
            reset: self.reset,
            sleep: Some(pin),
            fault: self.fault,
            mode0: self.mode0,
            mode1: self.mode1,
            mode2: self.mode2,
        }
    }

    /// Assign the nFAULT input.
    pub fn with_fault<P: InputPin>(self, pin: P) -> Pins<STEP, DIR, EN, RST, SLP, P, M0, M1, M2> {
        Pins {
            step: self.step,
            dir: self.dir,
            enable: self.enable,
            reset: self.reset,
            sleep: self.sleep,
            fault: Some(pin),
            mode0: self.mode0,
            mode1: self.mode1,
            mode2: self.mode2,
        }
    }

    /// Assign the MODE0..MODE2 pins.
    pub fn with_mode<P0, P1, P2>(
        self,
        mode0: P0,
        mode1: P1,
        mode2: P2,
    ) -> Pins<STEP, DIR, EN, RST, SLP, FLT, P0, P1, P2>
    where
        P0: OutputPin,
        P1: OutputPin,
        P2: OutputPin,
    {
        Pins {
            step: self.step,
            dir: self.dir,
            enable: self.enable,
            reset: self.reset,
            sleep: self.sleep,
            fault: self.fault,
            mode0: Some(mode0),
            mode1: Some(mode1),
            mode2: Some(mode2),
        }
    }
}

/// Drive an optional output pin; unassigned pins are skipped.
pub(crate) fn drive<P: OutputPin>(
    pin: Option<&mut P>,
    high: bool,
    role: PinRole,
) -> Result<(), DriverError> {
    if let Some(pin) = pin {
        let result = if high { pin.set_high() } else { pin.set_low() };
        result.map_err(|_| DriverError::Pin(role))?;
    }
    Ok(())
}

/// Read an optional input pin; unassigned pins read as `None`.
pub(crate) fn sample<P: InputPin>(
    pin: Option<&mut P>,
    role: PinRole,
) -> Result<Option<bool>, DriverError> {
    match pin {
        Some(pin) => pin
            .is_high()
            .map(Some)
            .map_err(|_| DriverError::Pin(role)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_pins_are_skipped() {
        let mut pins = Pins::new();
        assert!(drive(pins.step.as_mut(), true, PinRole::Step).is_ok());
        assert_eq!(sample(pins.fault.as_mut(), PinRole::Fault), Ok(None));
    }

    #[test]
    fn test_with_step_assigns_only_step() {
        let pins = Pins::new().with_step(NoPin);
        assert!(pins.step.is_some());
        assert!(pins.dir.is_none());
        assert!(pins.fault.is_none());
    }
}
