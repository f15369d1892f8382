//! # Plant Waterer Core Library
//!
//! This library provides the building blocks for an automated plant-watering
//! controller targeting small embedded Linux boards like the Raspberry Pi
//! Zero W: a soil-moisture sensor adapter, a relay-driven pump actuator, an
//! append-only event log, and the scheduler loop that ties them together.
//!
//! ## Design Philosophy
//!
//! ### One loop, no surprises
//! The whole system is a single synchronous control loop: read the sensor,
//! compare against a threshold, maybe run the pump, write one log line, sleep.
//! There is no concurrency and no shared mutable state beyond the two GPIO
//! pins, each owned exclusively by one adapter. Watering blocks the loop for
//! a few seconds out of a 15-minute period, which is fine by design.
//!
//! ### Hardware behind traits
//! The core never touches GPIO libraries directly. The [`gpio`] module
//! defines small [`gpio::InputPin`] / [`gpio::OutputPin`] traits; the binary
//! crate provides an rppal-backed implementation on real hardware and the
//! [`sim`] module provides a scripted backend for development and tests.
//!
//! ### Failure means: log it and try again
//! Any error inside one iteration - sensor fault, bad configuration, pin I/O -
//! is logged and the loop sleeps its normal interval and retries. Nothing is
//! fatal. This is the right trade-off for a hobby device sitting next to a
//! plant; it is explicitly not a safety-critical control policy.
//!
//! ### Data Flow
//! 1. **Read**: scheduler asks the moisture probe for a reading
//! 2. **Decide**: reading below threshold means the soil is dry
//! 3. **Actuate**: dry soil runs the pump via the active-low relay
//! 4. **Log**: exactly one timestamped line per cycle, success or error
//! 5. **Sleep**: fixed check interval, then repeat forever

// Module declarations
pub mod config;
pub mod gpio;
pub mod logger;
pub mod pump;
pub mod scheduler;
pub mod sensor;
pub mod sim;

/// A single soil-moisture measurement taken at the top of one scheduler cycle.
///
/// The stock sensor is a digital wet/dry probe, so `level` is 0 (wet) or
/// 1 (dry) there. The field is deliberately wider than one bit: the watering
/// threshold is numeric, and an analog probe behind an ADC can produce the
/// full `u16` range without the scheduler changing at all.
///
/// Readings are consumed within the cycle that produced them; nothing is
/// persisted except the log line they lead to.
///
/// # Example
/// ```
/// use waterer_lib::MoistureReading;
///
/// let bone_dry = MoistureReading { level: 1 };
/// let from_adc = MoistureReading { level: 412 };
/// assert!(bone_dry.level < from_adc.level);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoistureReading {
    /// Raw sensor level. Polarity is a property of the wiring, not of the
    /// software; the scheduler only compares this number against the
    /// configured threshold.
    pub level: u16,
}
