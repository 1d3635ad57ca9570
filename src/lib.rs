//! Configuration binding for the VEML7700 ambient light sensor.
//!
//! A [`RawConfig`] as written by the user is validated by [`resolve`] into a
//! [`DeviceParameterRecord`]. [`build`] additionally registers the
//! `ambient_light` and `white` sub-sensors, and [`Veml7700Component`] applies the
//! record to the device at startup.

pub mod codes;
pub mod component;
pub mod config;
pub mod error;
pub mod helpers;
pub mod resolver;
pub mod sensor;

pub use codes::{GainCode, IntegrationTimeCode};
pub use component::{SetupError, Veml7700Component};
pub use config::RawConfig;
pub use error::{ConfigError, ResolveError};
pub use helpers::time_period::{TimePeriodValue, UpdateInterval};
pub use resolver::{build, resolve, DeviceParameterRecord, ResolvedComponent};
pub use sensor::{Channel, LocalRegistry, SensorConfig, SensorHandle, SensorRegistry};
