pub mod i2c_address;
pub mod time_period;
