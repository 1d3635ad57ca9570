//! Sub-sensors of the VEML7700 component and the registry they are handed to.
//!
//! Both channels publish illuminance in lux, so they share one set of
//! [`SensorTraits`]. Registering a sensor is the host framework's job; this
//! module only defines the seam ([`SensorRegistry`]) and a small fixed-capacity
//! implementation that is good enough for tools and tests.

use core::fmt;

use heapless::Vec as HVec;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which channel of the device a sub-sensor reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// ALS high resolution channel, visible light
    AmbientLight,
    /// White channel, wide range
    White,
}

impl Channel {
    pub fn key(&self) -> &'static str {
        match self {
            Channel::AmbientLight => "ambient_light",
            Channel::White => "white",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::AmbientLight => f.write_str("ALS full spectrum channel"),
            Channel::White => f.write_str("White channel"),
        }
    }
}

/// Fixed presentation of a light sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SensorTraits {
    pub unit_of_measurement: &'static str,
    pub icon: &'static str,
    pub accuracy_decimals: u8,
    pub device_class: &'static str,
    pub state_class: &'static str,
}

pub const ILLUMINANCE: SensorTraits = SensorTraits {
    unit_of_measurement: "lx",
    icon: "mdi:brightness-6",
    accuracy_decimals: 1,
    device_class: "illuminance",
    state_class: "measurement",
};

/// User part of a sub-sensor configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SensorConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub internal: bool,
}

impl SensorConfig {
    pub fn named(name: &str) -> Self {
        SensorConfig {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

/// Registers sub-sensors with the host and hands back a handle for each.
pub trait SensorRegistry {
    type Handle;
    type Error;

    fn new_sensor(
        &mut self,
        channel: Channel,
        config: &SensorConfig,
    ) -> Result<Self::Handle, Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SensorHandle(pub usize);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("sensor registry is full ({capacity} sensors)")]
    Full { capacity: usize },
    #[error("sensor id `{0}` is already registered")]
    DuplicateId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredSensor {
    pub channel: Channel,
    pub config: SensorConfig,
    pub traits: SensorTraits,
}

/// Fixed-capacity registry kept in memory.
#[derive(Debug, Default)]
pub struct LocalRegistry<const N: usize> {
    sensors: HVec<RegisteredSensor, N>,
}

impl<const N: usize> LocalRegistry<N> {
    pub fn new() -> Self {
        Self { sensors: HVec::new() }
    }

    pub fn get(&self, handle: SensorHandle) -> Option<&RegisteredSensor> {
        self.sensors.get(handle.0)
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredSensor> {
        self.sensors.iter()
    }
}

impl<const N: usize> SensorRegistry for LocalRegistry<N> {
    type Handle = SensorHandle;
    type Error = RegistryError;

    fn new_sensor(
        &mut self,
        channel: Channel,
        config: &SensorConfig,
    ) -> Result<SensorHandle, RegistryError> {
        if let Some(id) = &config.id {
            if self.sensors.iter().any(|s| s.config.id.as_ref() == Some(id)) {
                return Err(RegistryError::DuplicateId(id.clone()));
            }
        }

        let handle = SensorHandle(self.sensors.len());
        self.sensors
            .push(RegisteredSensor {
                channel,
                config: config.clone(),
                traits: ILLUMINANCE,
            })
            .map_err(|_| RegistryError::Full { capacity: N })?;
        debug!("Registered {channel} as sensor #{}", handle.0);
        if let Some(name) = &config.name {
            info!("Sensor '{name}' ({})", channel.key());
        }
        Ok(handle)
    }
}
