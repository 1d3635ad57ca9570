use embedded_hal::i2c::I2c;
use log::{debug, error, info, warn};
use veml7700::{FaultCount, Veml7700};

use crate::component::{SetupError, Veml7700Component, DEVICE_ADDRESS};
use crate::resolver::ResolvedComponent;

impl<I2C, H> Veml7700Component<I2C, H>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, resolved: ResolvedComponent<H>) -> Self {
        Self::from_parts(Veml7700::new(i2c), resolved)
    }

    /// Gives the bus back.
    pub fn release(self) -> I2C {
        self.device.destroy()
    }

    /// Applies the configured parameters and powers the device on.
    pub fn setup(&mut self) -> Result<(), SetupError<I2C::Error>> {
        info!("Setting up VEML7700");

        let address = self.params.address();
        if address != DEVICE_ADDRESS {
            error!("No VEML7700 can be reached on 0x{address:02X}");
            self.failed = true;
            return Err(SetupError::UnsupportedAddress(address));
        }

        if let Err(e) = self.configure() {
            warn!("Sensor configuration failed: {e:?}");
            self.failed = true;
            return Err(SetupError::Device(e));
        }
        Ok(())
    }

    fn configure(&mut self) -> Result<(), veml7700::Error<I2C::Error>> {
        debug!("Configure");
        let gain = self.params.gain_code();
        let it = self.params.integration_time_code();

        // Persistence 1, interrupts and power saving off, thresholds untouched
        self.device.set_gain(gain.to_device())?;
        self.device.set_integration_time(it.to_device())?;
        self.device.set_fault_count(FaultCount::One)?;
        self.device.disable_power_saving()?;
        self.device.enable()?;

        debug!(
            "ALS_CONF_0 gain bits 0b{:02b}, integration time bits 0b{:04b}",
            gain.register_bits(),
            it.register_bits()
        );
        Ok(())
    }

    pub fn dump_config(&self) {
        info!("VEML7700:");
        if let Some(id) = &self.id {
            info!("  Id: {id}");
        }
        self.params.log_config();

        if self.failed {
            error!("Communication with I2C VEML-7700 failed!");
        }
    }
}
