//! # Bit and Nibble Helpers
//!
//! Stateless functions for testing bits and for composing or splitting
//! bytes, shorts and integers. Byte arguments are taken as `u32` so that
//! out-of-range input can be reported as `BinaryError::ValueExceeded`
//! instead of being truncated silently.
use crate::common::validation::validate_byte;
use crate::BinaryResult;

/// Check whether the bit at `position` is set in `byte`
///
/// `position` is 1-based and counts from the least significant bit.
/// Positions outside `1..=8` always return `false`.
///
/// # Errors
/// Returns `BinaryError::ValueExceeded` if `byte > 0xFF`
pub fn is_bit_set(byte: u32, position: u32) -> BinaryResult<bool> {
    let byte = validate_byte(byte)?;
    if position == 0 {
        return Ok(false);
    }
    let shifted = u32::from(byte).checked_shr(position - 1).unwrap_or(0);
    Ok(shifted & 1 == 1)
}

/// Split `integer` into its four byte lanes, most significant first
///
/// Each lane is masked but kept in place, not shifted down: the result for
/// `0x12345678` is `[0x12000000, 0x00340000, 0x00005600, 0x00000078]`.
pub fn as_byte_array(integer: u32) -> [u32; 4] {
    [
        integer & 0xFF00_0000,
        integer & 0x00FF_0000,
        integer & 0x0000_FF00,
        integer & 0x0000_00FF,
    ]
}

/// Compose a short from its high and low byte
pub fn as_short(byte1: u32, byte2: u32) -> BinaryResult<u16> {
    let high = validate_byte(byte1)?;
    let low = validate_byte(byte2)?;
    Ok(u16::from_be_bytes([high, low]))
}

/// Compose an integer from four bytes, most significant first
pub fn as_integer(byte1: u32, byte2: u32, byte3: u32, byte4: u32) -> BinaryResult<u32> {
    Ok(u32::from_be_bytes([
        validate_byte(byte1)?,
        validate_byte(byte2)?,
        validate_byte(byte3)?,
        validate_byte(byte4)?,
    ]))
}

/// Split a byte into `[high nibble, low nibble]`
///
/// # Errors
/// Returns `BinaryError::ValueExceeded` if `byte > 0xFF`
pub fn extract_nibbles_from_byte(byte: u32) -> BinaryResult<[u8; 2]> {
    Ok(split_nibbles(validate_byte(byte)?))
}

fn split_nibbles(byte: u8) -> [u8; 2] {
    [(byte & 0xF0) >> 4, byte & 0x0F]
}

/// Split a short into its four nibbles, most significant first
pub fn extract_nibbles_from_short(short: u16) -> [u8; 4] {
    let [high, low] = short.to_be_bytes();
    let [h0, h1] = split_nibbles(high);
    let [l0, l1] = split_nibbles(low);
    [h0, h1, l0, l1]
}

/// Split an integer into its eight nibbles, most significant first
pub fn extract_nibbles_from_integer(integer: u32) -> [u8; 8] {
    let [h0, h1, h2, h3] = extract_nibbles_from_short((integer >> 16) as u16);
    let [l0, l1, l2, l3] = extract_nibbles_from_short((integer & 0xFFFF) as u16);
    [h0, h1, h2, h3, l0, l1, l2, l3]
}
