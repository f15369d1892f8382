//! # Pump Actuator
//!
//! Drives the water pump through a relay on a GPIO output pin. The relay is
//! wired active-low: driving the pin LOW energizes the relay and turns the
//! pump on, driving it HIGH turns the pump off. This inverted polarity is a
//! hardware fact and must not be "corrected" in software.
//!
//! One watering event is fully synchronous: pin low, block for the watering
//! duration, pin high. The scheduler tolerates this because a few seconds of
//! pumping is negligible against a 15-minute check interval.

use crate::gpio::{GpioError, OutputPin};
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Errors from one watering attempt.
#[derive(Error, Debug)]
pub enum PumpError {
    /// Watering configuration failed validation; no pin was driven
    #[error("invalid watering configuration: {0}")]
    Config(String),

    /// Pin write failed mid-actuation
    #[error(transparent)]
    Gpio(#[from] GpioError),
}

/// Relay-driven pump on a single GPIO output pin.
///
/// The pin must already be configured as an output and sitting at its
/// inactive (high) level when handed over, so the pump stays off between
/// watering events. Pin resources are released when the pump is dropped.
pub struct Pump<P: OutputPin> {
    pin: P,
    /// Default watering duration in seconds, from configuration
    default_duration_secs: f64,
}

impl<P: OutputPin> Pump<P> {
    pub fn new(pin: P, default_duration_secs: f64) -> Self {
        Self {
            pin,
            default_duration_secs,
        }
    }

    /// Run the pump for `duration` seconds, or the configured default when
    /// `None`.
    ///
    /// Validation runs before any pin I/O: the configured duration (and the
    /// override, if supplied) must be a positive finite number, otherwise
    /// [`PumpError::Config`] is returned with the relay untouched. On the
    /// happy path the relay pin goes low (pump on), the call blocks for the
    /// full duration, then the pin goes high (pump off).
    pub fn activate(&mut self, duration: Option<f64>) -> Result<(), PumpError> {
        check_duration(self.default_duration_secs)?;
        let secs = match duration {
            Some(d) => {
                check_duration(d)?;
                d
            }
            None => self.default_duration_secs,
        };

        self.pin.set_low()?; // active-low relay: low = pump on
        thread::sleep(Duration::from_secs_f64(secs));
        self.pin.set_high()?;
        Ok(())
    }
}

fn check_duration(secs: f64) -> Result<(), PumpError> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(PumpError::Config(format!(
            "water duration must be a positive number of seconds, got {}",
            secs
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpio::Level;

    /// Output pin that records every level written to it.
    #[derive(Default)]
    struct RecordingPin {
        writes: Vec<Level>,
    }

    impl OutputPin for RecordingPin {
        fn set_high(&mut self) -> Result<(), GpioError> {
            self.writes.push(Level::High);
            Ok(())
        }
        fn set_low(&mut self) -> Result<(), GpioError> {
            self.writes.push(Level::Low);
            Ok(())
        }
    }

    #[test]
    fn activation_is_active_low() {
        let mut pump = Pump::new(RecordingPin::default(), 0.01);
        pump.activate(None).unwrap();
        // On = low, off = high. Exactly one on/off pair per watering.
        assert_eq!(pump.pin.writes, vec![Level::Low, Level::High]);
    }

    #[test]
    fn explicit_duration_overrides_default() {
        let mut pump = Pump::new(RecordingPin::default(), 5.0);
        pump.activate(Some(0.01)).unwrap();
        assert_eq!(pump.pin.writes, vec![Level::Low, Level::High]);
    }

    #[test]
    fn negative_duration_fails_without_pin_writes() {
        let mut pump = Pump::new(RecordingPin::default(), -1.0);
        let err = pump.activate(None).unwrap_err();
        assert!(matches!(err, PumpError::Config(_)));
        assert!(pump.pin.writes.is_empty());
    }

    #[test]
    fn zero_duration_fails_without_pin_writes() {
        let mut pump = Pump::new(RecordingPin::default(), 0.0);
        assert!(matches!(pump.activate(None), Err(PumpError::Config(_))));
        assert!(pump.pin.writes.is_empty());
    }

    #[test]
    fn nan_duration_fails_without_pin_writes() {
        let mut pump = Pump::new(RecordingPin::default(), f64::NAN);
        assert!(matches!(pump.activate(None), Err(PumpError::Config(_))));
        assert!(pump.pin.writes.is_empty());
    }

    #[test]
    fn invalid_override_fails_even_with_valid_default() {
        let mut pump = Pump::new(RecordingPin::default(), 5.0);
        assert!(matches!(
            pump.activate(Some(-3.0)),
            Err(PumpError::Config(_))
        ));
        assert!(pump.pin.writes.is_empty());
    }
}
