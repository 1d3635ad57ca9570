mod device_impl;

use core::fmt;

use veml7700::Veml7700;

use crate::resolver::{DeviceParameterRecord, ResolvedComponent};

pub use crate::helpers::i2c_address::DEVICE_ADDRESS;

/// All possible errors while bringing up the device
#[derive(Debug)]
pub enum SetupError<E> {
    /// The configured address is not the one the device answers on.
    UnsupportedAddress(u8),
    /// I²C bus error
    Device(veml7700::Error<E>),
}

impl<E: fmt::Debug> fmt::Display for SetupError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::UnsupportedAddress(address) => write!(
                f,
                "VEML7700 only answers on 0x{DEVICE_ADDRESS:02X}, configured 0x{address:02X}"
            ),
            SetupError::Device(e) => write!(f, "communication with VEML7700 failed: {e:?}"),
        }
    }
}

impl<E: fmt::Debug> std::error::Error for SetupError<E> {}

/// VEML7700 component: the device driver together with its validated
/// parameters and the sub-sensors it publishes to.
pub struct Veml7700Component<I2C, H> {
    /// The concrete driver, which owns the I²C bus.
    device: Veml7700<I2C>,
    id: Option<String>,
    params: DeviceParameterRecord,
    ambient_light_sensor: Option<H>,
    white_sensor: Option<H>,
    failed: bool,
}

impl<I2C, H> Veml7700Component<I2C, H> {
    pub fn params(&self) -> &DeviceParameterRecord {
        &self.params
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn ambient_light_sensor(&self) -> Option<&H> {
        self.ambient_light_sensor.as_ref()
    }

    pub fn white_sensor(&self) -> Option<&H> {
        self.white_sensor.as_ref()
    }

    /// Whether setup failed. A failed component must not be polled.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    fn from_parts(device: Veml7700<I2C>, resolved: ResolvedComponent<H>) -> Self {
        Veml7700Component {
            device,
            id: resolved.id,
            params: resolved.params,
            ambient_light_sensor: resolved.ambient_light_sensor,
            white_sensor: resolved.white_sensor,
            failed: false,
        }
    }
}
