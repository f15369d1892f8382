// rppal-backed pin adapters; only built on Linux with --features hardware.
use rppal::gpio::Gpio;
use waterer_lib::gpio::{GpioError, InputPin, Level, OutputPin};

pub struct SensorInputPin {
    pin: rppal::gpio::InputPin,
}

pub struct RelayOutputPin {
    pin: rppal::gpio::OutputPin,
}

impl SensorInputPin {
    pub fn new(gpio: &Gpio, bcm_pin: u8) -> Result<Self, GpioError> {
        let pin = gpio
            .get(bcm_pin)
            .map_err(|e| GpioError(e.to_string()))?
            .into_input();
        Ok(Self { pin })
    }
}

impl RelayOutputPin {
    pub fn new(gpio: &Gpio, bcm_pin: u8) -> Result<Self, GpioError> {
        // into_output_high: relay is active-low, start with the pump off
        let pin = gpio
            .get(bcm_pin)
            .map_err(|e| GpioError(e.to_string()))?
            .into_output_high();
        Ok(Self { pin })
    }
}

impl InputPin for SensorInputPin {
    fn read(&mut self) -> Result<Level, GpioError> {
        Ok(match self.pin.read() {
            rppal::gpio::Level::High => Level::High,
            rppal::gpio::Level::Low => Level::Low,
        })
    }
}

impl OutputPin for RelayOutputPin {
    fn set_high(&mut self) -> Result<(), GpioError> {
        self.pin.set_high();
        Ok(())
    }
    fn set_low(&mut self) -> Result<(), GpioError> {
        self.pin.set_low();
        Ok(())
    }
}
