//! # Scheduler Loop
//!
//! The one piece of real control flow in the system: an infinite loop that
//! reads the moisture probe, waters when the reading is below the threshold,
//! writes exactly one log line per cycle, sleeps the check interval, and
//! repeats. It never terminates on its own; stopping the device means
//! killing the process.
//!
//! ## Error policy
//!
//! Every failure inside one cycle - sensor fault, bad watering configuration,
//! pin I/O - is handled identically: the cycle's single log line becomes
//! `Error occurred: <message>` and the loop sleeps its normal interval and
//! retries. The error kinds are typed so the policy could differentiate
//! later, but today it deliberately does not: fixed backoff, no retry limit,
//! nothing fatal. Blunt, and appropriate for a hobby device; do not reuse
//! this policy anywhere safety-critical.
//!
//! A failed log write is the one exception to "everything goes in the log":
//! it is reported to stderr and otherwise ignored, so a full or read-only
//! filesystem cannot stop the watering itself.

use crate::config::Config;
use crate::gpio::{GpioError, OutputPin};
use crate::logger::EventLog;
use crate::pump::{Pump, PumpError};
use crate::sensor::MoistureProbe;
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Failure inside one scheduler cycle. The loop only uses this for the log
/// message text; recovery is the same for every variant.
#[derive(Error, Debug)]
pub enum CycleError {
    #[error("{0}")]
    Sensor(GpioError),

    #[error("{0}")]
    Pump(#[from] PumpError),
}

/// The watering control loop: probe, pump, log, policy.
pub struct Scheduler<S: MoistureProbe, O: OutputPin> {
    sensor: S,
    pump: Pump<O>,
    log: EventLog,
    moisture_threshold: u16,
    check_interval: Duration,
}

impl<S: MoistureProbe, O: OutputPin> Scheduler<S, O> {
    pub fn new(sensor: S, pump: Pump<O>, log: EventLog, config: &Config) -> Self {
        Self {
            sensor,
            pump,
            log,
            moisture_threshold: config.watering.moisture_threshold,
            check_interval: Duration::from_secs(config.watering.check_interval_secs),
        }
    }

    /// Run cycles forever, sleeping exactly what each cycle asks for.
    pub fn run(mut self) -> ! {
        loop {
            let pause = self.run_once();
            thread::sleep(pause);
        }
    }

    /// One cycle: read, decide, maybe water, then write exactly one log line.
    ///
    /// Returns the pause to take before the next cycle. It is always the full
    /// check interval - watered, skipped, or failed makes no difference.
    pub fn run_once(&mut self) -> Duration {
        let line = match self.check_and_water() {
            Ok(line) => line,
            Err(e) => format!("Error occurred: {}", e),
        };
        if let Err(e) = self.log.log_event(&line) {
            // Last-resort channel; the loop keeps going regardless.
            eprintln!("Warning: failed to write watering log: {}", e);
        }
        self.check_interval
    }

    /// Read the probe, water if the soil is dry, and report what happened.
    fn check_and_water(&mut self) -> Result<String, CycleError> {
        let reading = self.sensor.read().map_err(CycleError::Sensor)?;
        if reading.level < self.moisture_threshold {
            self.pump.activate(None)?;
            Ok(format!("Moisture low ({}). Watering plant.", reading.level))
        } else {
            Ok(format!(
                "Moisture sufficient ({}). No watering.",
                reading.level
            ))
        }
    }
}
