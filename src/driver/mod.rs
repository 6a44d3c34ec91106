//! Driver module.
//!
//! Provides the DRV8825 state machine, its pin set and builder.

mod builder;
mod drv8825;
mod pins;
mod state;

pub use builder::Drv8825Builder;
pub use drv8825::{Drv8825, WAKE_DELAY_US};
pub use pins::{NoPin, Pins};
pub use state::{DriverState, StepOutcome};
