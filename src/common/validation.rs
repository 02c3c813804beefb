use crate::{BinaryError, BinaryResult};
use std::fmt::LowerHex;

pub const BYTE_MAX: u64 = 0xFF;
pub const SHORT_MAX: u64 = 0xFFFF;
pub const INTEGER_MAX: u64 = 0xFFFF_FFFF;

pub fn validate_value_range<T>(value: T, max: u64, kind: &str) -> BinaryResult<()>
where
    T: Into<u64> + LowerHex + Copy,
{
    if value.into() > max {
        return Err(BinaryError::ValueExceeded(format!(
            "{} value {:#x} exceeds {:#x}",
            kind, value, max
        )));
    }
    Ok(())
}

pub fn validate_byte(value: u32) -> BinaryResult<u8> {
    validate_value_range(value, BYTE_MAX, "Byte")?;
    Ok(value as u8)
}

pub fn validate_short(value: u32) -> BinaryResult<u16> {
    validate_value_range(value, SHORT_MAX, "Short")?;
    Ok(value as u16)
}

pub fn validate_integer(value: u64) -> BinaryResult<u32> {
    validate_value_range(value, INTEGER_MAX, "Integer")?;
    Ok(value as u32)
}

pub fn validate_read_size(actual: usize, expected: usize) -> BinaryResult<()> {
    if actual > expected {
        return Err(BinaryError::InvalidValueSize { expected, actual });
    }
    Ok(())
}
