use crate::error::ConfigError;

/// Default (and only) bus address of the VEML7700.
pub const DEVICE_ADDRESS: u8 = 0x10;

const MAX_SEVEN_BIT_ADDRESS: u16 = 0x7F;

/// Generic 7-bit I2C address range check.
pub fn validate(address: u16) -> Result<u8, ConfigError> {
    if address > MAX_SEVEN_BIT_ADDRESS {
        return Err(ConfigError::OutOfRange {
            field: "address",
            value: format!("0x{address:02X}"),
            min: "0x00".into(),
            max: format!("0x{MAX_SEVEN_BIT_ADDRESS:02X}"),
        });
    }
    Ok(address as u8)
}
