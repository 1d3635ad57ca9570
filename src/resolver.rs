//! Turns a [`RawConfig`] into a [`DeviceParameterRecord`].
//!
//! Checks run in a fixed order and the first failure is returned. A record is
//! only ever built once every field has been validated.

use log::{debug, info};
use serde::Serialize;

use crate::codes::{GainCode, IntegrationTimeCode};
use crate::config::RawConfig;
use crate::error::{ConfigError, ResolveError};
use crate::helpers::{i2c_address, time_period};
use crate::helpers::time_period::UpdateInterval;
use crate::sensor::{Channel, SensorRegistry};

const SENSOR_KEYS: &[&str] = &["ambient_light", "white"];
const MIN_ATTENUATION_FACTOR: f64 = 1.0;

/// Validated device parameters, ready to be handed to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceParameterRecord {
    gain_code: GainCode,
    integration_time_code: IntegrationTimeCode,
    attenuation_factor: f32,
    has_ambient_light: bool,
    has_white: bool,
    address: u8,
    update_interval: UpdateInterval,
}

impl DeviceParameterRecord {
    pub fn gain_code(&self) -> GainCode {
        self.gain_code
    }

    pub fn integration_time_code(&self) -> IntegrationTimeCode {
        self.integration_time_code
    }

    /// Always `>= 1.0`.
    pub fn attenuation_factor(&self) -> f32 {
        self.attenuation_factor
    }

    pub fn has_ambient_light(&self) -> bool {
        self.has_ambient_light
    }

    pub fn has_white(&self) -> bool {
        self.has_white
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn update_interval(&self) -> UpdateInterval {
        self.update_interval
    }

    pub fn has_channel(&self, channel: Channel) -> bool {
        match channel {
            Channel::AmbientLight => self.has_ambient_light,
            Channel::White => self.has_white,
        }
    }

    /// Lines of the configuration dump, indented for nesting under a header.
    pub fn config_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("  Address: 0x{:02X}", self.address),
            format!("  Gain: {}", self.gain_code),
            format!(
                "  Integration time: {} ms",
                self.integration_time_code.as_ms()
            ),
            format!("  Attenuation factor: {:.6}", self.attenuation_factor),
            format!("  Update Interval: {}", self.update_interval),
        ];
        for channel in [Channel::AmbientLight, Channel::White] {
            if self.has_channel(channel) {
                lines.push(format!("  Sensor: {channel}"));
            }
        }
        lines
    }

    pub fn log_config(&self) {
        for line in self.config_lines() {
            info!("{line}");
        }
    }
}

/// Validates `raw` and derives the device parameters from it.
pub fn resolve(raw: &RawConfig) -> Result<DeviceParameterRecord, ConfigError> {
    let has_ambient_light = raw.ambient_light.is_some();
    let has_white = raw.white.is_some();
    if !has_ambient_light && !has_white {
        return Err(ConfigError::MissingRequiredField { fields: SENSOR_KEYS });
    }

    let gain_code = resolve_gain(raw.gain())?;
    let integration_time_code = resolve_integration_time(&raw.integration_time())?;
    let attenuation_factor = resolve_attenuation_factor(raw.glass_attenuation_factor())?;
    let address = i2c_address::validate(raw.address())?;
    let update_interval = resolve_update_interval(&raw.update_interval())?;

    debug!(
        "Resolved gain={}, integration_time={}ms, attenuation={attenuation_factor}, address=0x{address:02X}",
        gain_code.label(),
        integration_time_code.as_ms()
    );

    Ok(DeviceParameterRecord {
        gain_code,
        integration_time_code,
        attenuation_factor,
        has_ambient_light,
        has_white,
        address,
        update_interval,
    })
}

fn resolve_gain(label: &str) -> Result<GainCode, ConfigError> {
    GainCode::from_label(label).ok_or_else(|| ConfigError::InvalidEnumValue {
        field: "gain",
        value: label.to_string(),
        expected: GainCode::LABELS.join(", "),
    })
}

fn resolve_integration_time(
    value: &time_period::TimePeriodValue,
) -> Result<IntegrationTimeCode, ConfigError> {
    let invalid_duration = || ConfigError::InvalidDuration {
        field: "integration_time",
        value: value.to_string(),
    };
    let duration = value.to_duration().ok_or_else(invalid_duration)?;
    let ms = time_period::whole_millis(duration)
        .filter(|ms| *ms > 0)
        .ok_or_else(invalid_duration)?;

    IntegrationTimeCode::from_ms(ms).ok_or_else(|| ConfigError::InvalidEnumValue {
        field: "integration_time",
        value: format!("{ms}ms"),
        expected: IntegrationTimeCode::MILLIS
            .iter()
            .map(|ms| format!("{ms}ms"))
            .collect::<Vec<_>>()
            .join(", "),
    })
}

fn resolve_attenuation_factor(value: f64) -> Result<f32, ConfigError> {
    // Checked after narrowing: finite f64 values past f32::MAX become infinite
    let factor = value as f32;
    if !factor.is_finite() || value < MIN_ATTENUATION_FACTOR {
        return Err(ConfigError::OutOfRange {
            field: "glass_attenuation_factor",
            value: value.to_string(),
            min: MIN_ATTENUATION_FACTOR.to_string(),
            max: f32::MAX.to_string(),
        });
    }
    Ok(factor)
}

fn resolve_update_interval(
    value: &time_period::TimePeriodValue,
) -> Result<UpdateInterval, ConfigError> {
    time_period::parse_update_interval(value).ok_or_else(|| ConfigError::InvalidDuration {
        field: "update_interval",
        value: value.to_string(),
    })
}

/// A resolved component: the device parameters plus the handles of the
/// sub-sensors registered for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComponent<H> {
    pub id: Option<String>,
    pub params: DeviceParameterRecord,
    pub ambient_light_sensor: Option<H>,
    pub white_sensor: Option<H>,
}

/// Resolves `raw` and registers its sub-sensors with `registry`.
///
/// Nothing is registered when validation fails. Registry errors are returned
/// as they are, wrapped in [`ResolveError::Registration`].
pub fn build<R: SensorRegistry>(
    raw: &RawConfig,
    registry: &mut R,
) -> Result<ResolvedComponent<R::Handle>, ResolveError<R::Error>> {
    let params = resolve(raw)?;

    let ambient_light_sensor = match &raw.ambient_light {
        Some(conf) => Some(
            registry
                .new_sensor(Channel::AmbientLight, conf)
                .map_err(ResolveError::Registration)?,
        ),
        None => None,
    };
    let white_sensor = match &raw.white {
        Some(conf) => Some(
            registry
                .new_sensor(Channel::White, conf)
                .map_err(ResolveError::Registration)?,
        ),
        None => None,
    };

    info!(
        "VEML7700{} configured",
        raw.id.as_deref().map(|id| format!(" '{id}'")).unwrap_or_default()
    );
    Ok(ResolvedComponent {
        id: raw.id.clone(),
        params,
        ambient_light_sensor,
        white_sensor,
    })
}
