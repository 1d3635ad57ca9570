//! Label and millisecond tables for the VEML7700 gain and integration time.

use core::fmt;

use serde::Serialize;

/// Gain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GainCode {
    /// 2
    #[serde(rename = "X2")]
    Gain2,
    /// 1 (default)
    #[serde(rename = "X1")]
    Gain1,
    /// 1/4
    #[serde(rename = "X1/4")]
    Gain1_4,
    /// 1/8
    #[serde(rename = "X1/8")]
    Gain1_8,
}

impl GainCode {
    pub const ALL: [GainCode; 4] = [
        GainCode::Gain2,
        GainCode::Gain1,
        GainCode::Gain1_4,
        GainCode::Gain1_8,
    ];

    /// Labels accepted in configuration, in the same order as [`GainCode::ALL`].
    pub const LABELS: [&'static str; 4] = ["X2", "X1", "X1/4", "X1/8"];

    /// Exact, case-sensitive lookup of a configuration label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "X2" => Some(GainCode::Gain2),
            "X1" => Some(GainCode::Gain1),
            "X1/4" => Some(GainCode::Gain1_4),
            "X1/8" => Some(GainCode::Gain1_8),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GainCode::Gain2 => "X2",
            GainCode::Gain1 => "X1",
            GainCode::Gain1_4 => "X1/4",
            GainCode::Gain1_8 => "X1/8",
        }
    }

    /// ALS_GAIN field of the ALS_CONF_0 register (bits 12:11).
    pub fn register_bits(&self) -> u16 {
        match self {
            GainCode::Gain1 => 0b00,
            GainCode::Gain2 => 0b01,
            GainCode::Gain1_8 => 0b10,
            GainCode::Gain1_4 => 0b11,
        }
    }

    pub(crate) fn to_device(self) -> veml7700::Gain {
        match self {
            GainCode::Gain2 => veml7700::Gain::Two,
            GainCode::Gain1 => veml7700::Gain::One,
            GainCode::Gain1_4 => veml7700::Gain::OneQuarter,
            GainCode::Gain1_8 => veml7700::Gain::OneEighth,
        }
    }
}

impl fmt::Display for GainCode {
    // Lower-case, as printed in the device config dump
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GainCode::Gain2 => "x2",
            GainCode::Gain1 => "x1",
            GainCode::Gain1_4 => "x1/4",
            GainCode::Gain1_8 => "x1/8",
        };
        f.write_str(s)
    }
}

/// Integration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u16")]
pub enum IntegrationTimeCode {
    /// 25 ms
    _25ms,
    /// 50 ms
    _50ms,
    /// 100 ms (default)
    _100ms,
    /// 200 ms
    _200ms,
    /// 400 ms
    _400ms,
    /// 800 ms
    _800ms,
}

impl IntegrationTimeCode {
    pub const ALL: [IntegrationTimeCode; 6] = [
        IntegrationTimeCode::_25ms,
        IntegrationTimeCode::_50ms,
        IntegrationTimeCode::_100ms,
        IntegrationTimeCode::_200ms,
        IntegrationTimeCode::_400ms,
        IntegrationTimeCode::_800ms,
    ];

    pub const MILLIS: [u64; 6] = [25, 50, 100, 200, 400, 800];

    pub fn from_ms(ms: u64) -> Option<Self> {
        match ms {
            25 => Some(IntegrationTimeCode::_25ms),
            50 => Some(IntegrationTimeCode::_50ms),
            100 => Some(IntegrationTimeCode::_100ms),
            200 => Some(IntegrationTimeCode::_200ms),
            400 => Some(IntegrationTimeCode::_400ms),
            800 => Some(IntegrationTimeCode::_800ms),
            _ => None,
        }
    }

    /// Return the integration time in milliseconds
    pub fn as_ms(&self) -> u16 {
        match self {
            IntegrationTimeCode::_25ms => 25,
            IntegrationTimeCode::_50ms => 50,
            IntegrationTimeCode::_100ms => 100,
            IntegrationTimeCode::_200ms => 200,
            IntegrationTimeCode::_400ms => 400,
            IntegrationTimeCode::_800ms => 800,
        }
    }

    /// ALS_IT field of the ALS_CONF_0 register (bits 9:6).
    pub fn register_bits(&self) -> u16 {
        match self {
            IntegrationTimeCode::_25ms => 0b1100,
            IntegrationTimeCode::_50ms => 0b1000,
            IntegrationTimeCode::_100ms => 0b0000,
            IntegrationTimeCode::_200ms => 0b0001,
            IntegrationTimeCode::_400ms => 0b0010,
            IntegrationTimeCode::_800ms => 0b0011,
        }
    }

    pub(crate) fn to_device(self) -> veml7700::IntegrationTime {
        match self {
            IntegrationTimeCode::_25ms => veml7700::IntegrationTime::_25ms,
            IntegrationTimeCode::_50ms => veml7700::IntegrationTime::_50ms,
            IntegrationTimeCode::_100ms => veml7700::IntegrationTime::_100ms,
            IntegrationTimeCode::_200ms => veml7700::IntegrationTime::_200ms,
            IntegrationTimeCode::_400ms => veml7700::IntegrationTime::_400ms,
            IntegrationTimeCode::_800ms => veml7700::IntegrationTime::_800ms,
        }
    }
}

impl From<IntegrationTimeCode> for u16 {
    fn from(it: IntegrationTimeCode) -> Self {
        it.as_ms()
    }
}
