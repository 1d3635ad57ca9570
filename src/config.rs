use std::{fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;

use crate::helpers::time_period::TimePeriodValue;
use crate::sensor::SensorConfig;

pub mod defaults {
    pub const GAIN: &str = "X1";
    pub const INTEGRATION_TIME_MS: u64 = 100;
    pub const GLASS_ATTENUATION_FACTOR: f64 = 1.0;
    pub const ADDRESS: u16 = 0x10;
    pub const UPDATE_INTERVAL: &str = "60s";
}

/// Configuration of one VEML7700 as written by the user. Every key is optional;
/// missing keys take the values in [`defaults`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub ambient_light: Option<SensorConfig>,
    #[serde(default)]
    pub white: Option<SensorConfig>,
    #[serde(default)]
    pub gain: Option<String>,
    #[serde(default)]
    pub integration_time: Option<TimePeriodValue>,
    #[serde(default)]
    pub glass_attenuation_factor: Option<f64>,
    #[serde(default)]
    pub address: Option<u16>,
    #[serde(default)]
    pub update_interval: Option<TimePeriodValue>,
}

impl RawConfig {
    pub fn gain(&self) -> &str {
        self.gain.as_deref().unwrap_or(defaults::GAIN)
    }

    pub fn integration_time(&self) -> TimePeriodValue {
        self.integration_time
            .clone()
            .unwrap_or_else(|| TimePeriodValue::millis(defaults::INTEGRATION_TIME_MS))
    }

    pub fn glass_attenuation_factor(&self) -> f64 {
        self.glass_attenuation_factor
            .unwrap_or(defaults::GLASS_ATTENUATION_FACTOR)
    }

    pub fn address(&self) -> u16 {
        self.address.unwrap_or(defaults::ADDRESS)
    }

    pub fn update_interval(&self) -> TimePeriodValue {
        self.update_interval
            .clone()
            .unwrap_or_else(|| TimePeriodValue::Text(defaults::UPDATE_INTERVAL.to_string()))
    }

    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        serde_json::from_str(s).context("invalid JSON sensor configuration")
    }

    pub fn from_yaml_str(s: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(s).context("invalid YAML sensor configuration")
    }

    /// Reads a configuration file. The format follows the file extension.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let parsed = match ext.as_str() {
            "json" => Self::from_json_str(&text),
            "yaml" | "yml" => Self::from_yaml_str(&text),
            _ => bail!(
                "unsupported configuration format for {} (expected .json, .yaml or .yml)",
                path.display()
            ),
        };
        parsed.with_context(|| format!("while loading {}", path.display()))
    }
}
