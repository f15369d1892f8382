//! # Soil-Moisture Sensor Adapter
//!
//! Wraps the sensor's digital input pin and turns line levels into
//! [`MoistureReading`]s. The stock probe is a binary wet/dry sensor: the pin
//! reads high when the soil is dry (level 1) and low when it is wet
//! (level 0). Which physical condition maps to which level is fixed by the
//! wiring of the comparator board, not by this code.
//!
//! The [`MoistureProbe`] trait is the seam the scheduler sees. An analog
//! probe behind an ADC can implement it and report the full `u16` range;
//! the scheduler's numeric threshold comparison works unchanged.

use crate::gpio::{GpioError, InputPin, Level};
use crate::MoistureReading;

/// Source of moisture readings, one per scheduler cycle.
pub trait MoistureProbe {
    fn read(&mut self) -> Result<MoistureReading, GpioError>;
}

/// Digital wet/dry probe on a single GPIO input pin.
///
/// Construction is the "initialize sensor" step: the caller hands over a pin
/// already configured as an input. Pin resources are released when the
/// sensor is dropped, which is safe whether or not it was ever read.
pub struct DigitalMoistureSensor<P: InputPin> {
    pin: P,
}

impl<P: InputPin> DigitalMoistureSensor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> MoistureProbe for DigitalMoistureSensor<P> {
    /// Read the instantaneous line level: 1 if dry (high), 0 if wet (low).
    fn read(&mut self) -> Result<MoistureReading, GpioError> {
        let level = match self.pin.read()? {
            Level::High => 1,
            Level::Low => 0,
        };
        Ok(MoistureReading { level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPin(Level);

    impl InputPin for FixedPin {
        fn read(&mut self) -> Result<Level, GpioError> {
            Ok(self.0)
        }
    }

    #[test]
    fn high_line_reads_as_dry() {
        let mut sensor = DigitalMoistureSensor::new(FixedPin(Level::High));
        assert_eq!(sensor.read().unwrap(), MoistureReading { level: 1 });
    }

    #[test]
    fn low_line_reads_as_wet() {
        let mut sensor = DigitalMoistureSensor::new(FixedPin(Level::Low));
        assert_eq!(sensor.read().unwrap(), MoistureReading { level: 0 });
    }

    #[test]
    fn pin_fault_propagates() {
        struct BrokenPin;
        impl InputPin for BrokenPin {
            fn read(&mut self) -> Result<Level, GpioError> {
                Err(GpioError("sensor line stuck".into()))
            }
        }

        let mut sensor = DigitalMoistureSensor::new(BrokenPin);
        assert!(sensor.read().is_err());
    }
}
