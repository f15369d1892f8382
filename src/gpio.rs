//! GPIO pin abstraction.
//!
//! Small trait seam between the control logic and whatever actually drives
//! the pins: rppal on a real Pi, scripted pins in [`crate::sim`] during
//! development and tests. BCM pin addressing is configured once by the
//! process entry point when the backend is constructed, never lazily inside
//! an adapter.

use thiserror::Error;

/// Digital logic level of a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Error from the GPIO subsystem during a pin read or write.
#[derive(Error, Debug)]
#[error("GPIO error: {0}")]
pub struct GpioError(pub String);

/// A pin configured as a digital input.
pub trait InputPin {
    fn read(&mut self) -> Result<Level, GpioError>;
}

/// A pin configured as a digital output.
pub trait OutputPin {
    fn set_high(&mut self) -> Result<(), GpioError>;
    fn set_low(&mut self) -> Result<(), GpioError>;
}
