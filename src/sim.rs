//! Simulated GPIO backend for development without hardware.
//!
//! Lets the full scheduler loop run on a desktop: a scripted probe replays a
//! fixed sequence of readings and the relay pin narrates its transitions to
//! stderr instead of switching anything. The same types double as the test
//! backend, with [`PinTrace`] exposing the exact level writes for assertions.

use crate::gpio::{GpioError, Level, OutputPin};
use crate::sensor::MoistureProbe;
use crate::MoistureReading;
use std::sync::{Arc, Mutex};

/// Probe that replays a fixed sequence of readings, repeating from the start
/// once exhausted.
pub struct ScriptedProbe {
    readings: Vec<u16>,
    next: usize,
}

impl ScriptedProbe {
    pub fn new(readings: Vec<u16>) -> Self {
        Self { readings, next: 0 }
    }
}

impl MoistureProbe for ScriptedProbe {
    /// An empty script reads as a sensor fault rather than panicking, which
    /// also makes it a handy stand-in for a dead probe.
    fn read(&mut self) -> Result<MoistureReading, GpioError> {
        if self.readings.is_empty() {
            return Err(GpioError("scripted probe has no readings".into()));
        }
        let level = self.readings[self.next % self.readings.len()];
        self.next += 1;
        Ok(MoistureReading { level })
    }
}

/// Shared record of every level written to a simulated pin, in order.
#[derive(Clone, Default)]
pub struct PinTrace(Arc<Mutex<Vec<Level>>>);

impl PinTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn levels(&self) -> Vec<Level> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, level: Level) {
        self.0.lock().unwrap().push(level);
    }
}

/// Relay output pin that records transitions instead of switching hardware.
pub struct SimRelayPin {
    trace: PinTrace,
    /// Narrate transitions to stderr (wanted in dev mode, noisy in tests)
    verbose: bool,
}

impl SimRelayPin {
    pub fn new(trace: PinTrace, verbose: bool) -> Self {
        Self { trace, verbose }
    }
}

impl OutputPin for SimRelayPin {
    fn set_high(&mut self) -> Result<(), GpioError> {
        if self.verbose {
            eprintln!("[sim] relay pin -> high (pump off)");
        }
        self.trace.push(Level::High);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), GpioError> {
        if self.verbose {
            eprintln!("[sim] relay pin -> low (pump on)");
        }
        self.trace.push(Level::Low);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_probe_wraps_around() {
        let mut probe = ScriptedProbe::new(vec![250, 350]);
        assert_eq!(probe.read().unwrap().level, 250);
        assert_eq!(probe.read().unwrap().level, 350);
        assert_eq!(probe.read().unwrap().level, 250);
    }

    #[test]
    fn empty_script_reads_as_fault() {
        let mut probe = ScriptedProbe::new(vec![]);
        assert!(probe.read().is_err());
    }

    #[test]
    fn trace_records_writes_in_order() {
        let trace = PinTrace::new();
        let mut pin = SimRelayPin::new(trace.clone(), false);
        pin.set_low().unwrap();
        pin.set_high().unwrap();
        assert_eq!(trace.levels(), vec![Level::Low, Level::High]);
    }
}
