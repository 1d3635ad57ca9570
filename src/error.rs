use thiserror::Error;

/// All possible configuration errors.
///
/// These only happen while the configuration is loaded, before any bus traffic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("at least one of {fields:?} must be configured")]
    MissingRequiredField { fields: &'static [&'static str] },

    #[error("invalid value {value:?} for `{field}`, expected one of: {expected}")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("`{field}`: {value:?} is not a valid time period")]
    InvalidDuration { field: &'static str, value: String },

    #[error("`{field}`: {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },
}

impl ConfigError {
    /// Name of the configuration key the error is about.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::MissingRequiredField { fields } => fields.first().copied().unwrap_or(""),
            ConfigError::InvalidEnumValue { field, .. }
            | ConfigError::InvalidDuration { field, .. }
            | ConfigError::OutOfRange { field, .. } => field,
        }
    }
}

/// Error of [`crate::resolver::build`]: either the configuration was invalid
/// or the sensor registry refused a sub-sensor.
#[derive(Error, Debug)]
pub enum ResolveError<E> {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("sensor registration failed: {0}")]
    Registration(E),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
