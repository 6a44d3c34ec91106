//! Step resolution and rotation direction.
//!
//! Type-safe representations of the DRV8825 indexer settings, deserializable
//! from configuration files.

use serde::Deserialize;

use crate::error::ConfigError;

/// Microstep resolution of the DRV8825 indexer.
///
/// Selected in hardware through the MODE0..MODE2 inputs, see
/// [`StepMode::select_bits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepMode {
    /// Full step (2-phase excitation).
    #[default]
    Full,
    /// Half step.
    Half,
    /// 1/4 step.
    Quarter,
    /// 8 microsteps per step.
    Eighth,
    /// 16 microsteps per step.
    Sixteenth,
    /// 32 microsteps per step.
    ThirtySecond,
}

/// MODE0..MODE2 levels per step mode, LSB first.
///
/// Indexed by the `StepMode` discriminant. Values from the DRV8825 datasheet;
/// MODE2..MODE0 = 101, 110 and 111 all select 1/32, 101 is used here.
const MODE_SELECT: [[bool; 3]; 6] = [
    [false, false, false], // Full
    [true, false, false],  // Half
    [false, true, false],  // Quarter
    [true, true, false],   // Eighth
    [false, false, true],  // Sixteenth
    [true, false, true],   // ThirtySecond
];

impl StepMode {
    /// All step modes, coarsest first.
    pub const ALL: [StepMode; 6] = [
        StepMode::Full,
        StepMode::Half,
        StepMode::Quarter,
        StepMode::Eighth,
        StepMode::Sixteenth,
        StepMode::ThirtySecond,
    ];

    /// Create a step mode from a microstep divisor (1, 2, 4, 8, 16 or 32).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMicrosteps` for any other value.
    pub fn from_microsteps(value: u16) -> Result<Self, ConfigError> {
        match value {
            1 => Ok(StepMode::Full),
            2 => Ok(StepMode::Half),
            4 => Ok(StepMode::Quarter),
            8 => Ok(StepMode::Eighth),
            16 => Ok(StepMode::Sixteenth),
            32 => Ok(StepMode::ThirtySecond),
            other => Err(ConfigError::InvalidMicrosteps(other)),
        }
    }

    /// Microsteps per full step.
    #[inline]
    pub const fn microsteps(self) -> u16 {
        1 << (self as u16)
    }

    /// Levels for MODE0, MODE1 and MODE2 (`true` = high).
    #[inline]
    pub const fn select_bits(self) -> [bool; 3] {
        MODE_SELECT[self as usize]
    }
}

impl TryFrom<u16> for StepMode {
    type Error = ConfigError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_microsteps(value)
    }
}

impl<'de> Deserialize<'de> for StepMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u16::deserialize(deserializer)?;
        StepMode::from_microsteps(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}

/// Rotation direction.
///
/// With default wiring the DIR pin is high for clockwise and low for
/// counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise.
    #[default]
    #[serde(rename = "cw")]
    Clockwise,
    /// Counter-clockwise.
    #[serde(rename = "ccw")]
    CounterClockwise,
}

impl Direction {
    /// The opposite direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// DIR pin level for this direction (`true` = high).
    #[inline]
    pub(crate) const fn dir_level(self, inverted: bool) -> bool {
        match self {
            Direction::Clockwise => !inverted,
            Direction::CounterClockwise => inverted,
        }
    }
}
