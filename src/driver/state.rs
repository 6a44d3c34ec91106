//! Cached driver state.

use crate::config::units::{Direction, StepMode};

/// Last values the driver wrote (or attempted to write) to the IC.
///
/// This is a cache, not a readback: the DRV8825 offers no way to query these
/// settings. Only the fault line is read live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverState {
    /// Microstep resolution.
    pub mode: StepMode,
    /// Rotation direction.
    pub direction: Direction,
    /// Output stage enabled (nENBL low).
    pub enabled: bool,
    /// Low-power sleep (nSLEEP low).
    pub sleeping: bool,
}

impl DriverState {
    /// Power-on state: clockwise, enabled and awake.
    pub const fn new(mode: StepMode) -> Self {
        Self {
            mode,
            direction: Direction::Clockwise,
            enabled: true,
            sleeping: false,
        }
    }

    /// Whether step pulses are honored (enabled and awake).
    #[inline]
    pub const fn accepts_steps(&self) -> bool {
        self.enabled && !self.sleeping
    }
}

/// Result of a step request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// A rising edge was issued on STEP (if assigned).
    Stepped,
    /// Driver disabled or asleep, nothing was written.
    Inhibited,
    /// nFAULT asserted, the pulse was suppressed.
    Fault,
}

impl StepOutcome {
    /// Whether the IC reported a fault.
    #[inline]
    pub const fn is_fault(self) -> bool {
        matches!(self, StepOutcome::Fault)
    }
}
