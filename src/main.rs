//! # Plant Waterer Application Entry Point
//!
//! This binary crate wires the library's control loop to a concrete GPIO
//! backend. On a Raspberry Pi (built with `--features hardware`) it drives
//! the real sensor and relay pins via rppal; everywhere else it falls back
//! to the simulated backend so the loop can be exercised on a desktop.
//!
//! The only externally triggered action is starting the loop. `--once` runs
//! a single check-and-water cycle and exits, which is handy for smoke-testing
//! a fresh deployment without waiting out the check interval; `--write-config`
//! writes the active configuration out as a starter waterer-config.toml and
//! exits.

// Test modules
#[cfg(test)]
mod tests;

#[cfg(all(target_os = "linux", feature = "hardware"))]
mod hw_gpio;

use std::env;
use waterer_lib::config::Config;
use waterer_lib::logger::EventLog;
use waterer_lib::pump::Pump;
use waterer_lib::scheduler::Scheduler;

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    // Single-cycle mode: check once, water if needed, exit
    let once = env::args().any(|arg| arg == "--once");

    let config = Config::load();

    // Write the active configuration out as an editable starter file
    if env::args().any(|arg| arg == "--write-config") {
        config
            .save()
            .map_err(|e| anyhow::anyhow!("write config: {}", e))?;
        eprintln!("Wrote waterer-config.toml");
        return Ok(());
    }

    let log = EventLog::new(&config.log.path);

    #[cfg(all(target_os = "linux", feature = "hardware"))]
    {
        run_hardware(config, log, once)?;
    }

    #[cfg(not(all(target_os = "linux", feature = "hardware")))]
    {
        eprintln!("Hardware support not enabled. Rebuild with --features hardware on a Raspberry Pi.");
        eprintln!("Running against the simulated GPIO backend instead.");
        run_simulated(config, log, once);
    }

    Ok(())
}

/// Build the rppal-backed sensor and relay pins and hand them to the loop.
///
/// The GPIO subsystem (BCM pin addressing) is opened exactly once here; both
/// adapters derive their pin from it rather than each opening their own
/// handle. rppal resets pins to their default state on drop, which covers
/// cleanup for the single-cycle mode.
#[cfg(all(target_os = "linux", feature = "hardware"))]
fn run_hardware(config: Config, log: EventLog, once: bool) -> anyhow::Result<()> {
    use anyhow::Context;
    use hw_gpio::{RelayOutputPin, SensorInputPin};
    use rppal::gpio::Gpio;
    use waterer_lib::sensor::DigitalMoistureSensor;

    let gpio = Gpio::new().context("open GPIO subsystem")?;

    eprintln!("GPIO pin configuration (BCM numbering):");
    eprintln!("   moisture sensor: GPIO {}", config.pins.moisture_sensor);
    eprintln!("   relay:           GPIO {} (active-low)", config.pins.relay);

    let sensor_pin = SensorInputPin::new(&gpio, config.pins.moisture_sensor)
        .context("configure moisture sensor pin")?;
    // Requested already-high so the pump stays off until the first watering
    let relay_pin =
        RelayOutputPin::new(&gpio, config.pins.relay).context("configure relay pin")?;

    let sensor = DigitalMoistureSensor::new(sensor_pin);
    let pump = Pump::new(relay_pin, config.watering.water_duration_secs);
    let mut scheduler = Scheduler::new(sensor, pump, log, &config);

    if once {
        scheduler.run_once();
        return Ok(());
    }
    scheduler.run();
}

/// Run the loop against scripted readings, narrating relay transitions to
/// stderr. The script alternates dry and wet so both branches show up.
#[cfg(not(all(target_os = "linux", feature = "hardware")))]
fn run_simulated(config: Config, log: EventLog, once: bool) {
    use waterer_lib::sim::{PinTrace, ScriptedProbe, SimRelayPin};

    let probe = ScriptedProbe::new(vec![250, 350]);
    let relay = SimRelayPin::new(PinTrace::new(), true);
    let pump = Pump::new(relay, config.watering.water_duration_secs);
    let mut scheduler = Scheduler::new(probe, pump, log, &config);

    if once {
        scheduler.run_once();
        return;
    }
    scheduler.run();
}
