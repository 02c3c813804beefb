//! # Typed Offset Access
//!
//! [`BinaryFile`] reads and writes typed values at absolute offsets of a
//! [`ByteStore`]. Every call seeks first, so callers never depend on where
//! a previous call left the cursor.
//!
//! # Value widths
//! - byte: 1 byte, `0x00..=0xFF`
//! - short: 2 bytes, `0x0000..=0xFFFF`
//! - integer: 4 bytes, `0x0000_0000..=0xFFFF_FFFF`
//!
//! Multi-byte values are decoded and encoded in the given [`Endian`] order.
//! A short or integer that is cut off by the end of the store is left-padded
//! with zero bytes before decoding, so for little endian the available bytes
//! end up in the high-order positions.
use crate::common::field_ops::FieldCodec;
use crate::common::validation::{
    validate_byte, validate_integer, validate_read_size, validate_short,
};
use crate::{BinaryError, BinaryResult, ByteStore, Endian};
use tracing::debug;

/// Typed accessor over a byte store
#[derive(Debug)]
pub struct BinaryFile<S> {
    store: S,
}

impl<S: ByteStore> BinaryFile<S> {
    /// Create an accessor over an already opened store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Open the named resource with the store type `S`
    ///
    /// # Errors
    /// Returns `BinaryError::CouldNotOpen` if the store cannot be opened
    pub fn open(name: &str) -> BinaryResult<Self> {
        Ok(Self::new(S::open(name)?))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Seek to `offset` and read up to `length` bytes, failing if nothing is there
    fn read_at(&mut self, offset: u64, length: usize) -> BinaryResult<Vec<u8>> {
        self.store.seek(offset)?;
        match self.store.read(length)? {
            // an empty run for a non-empty request counts as no data
            Some(data) if !data.is_empty() || length == 0 => Ok(data),
            _ => {
                debug!(offset, length, "no data available");
                Err(BinaryError::GetValueFailed(offset))
            }
        }
    }

    fn write_at(&mut self, offset: u64, data: &[u8]) -> BinaryResult<()> {
        self.store.seek(offset)?;
        self.store.write(data)
    }

    fn get_value<T: FieldCodec>(&mut self, offset: u64, endian: Endian) -> BinaryResult<T> {
        let data = self.read_at(offset, T::WIDTH)?;
        validate_read_size(data.len(), T::WIDTH).inspect_err(|_| {
            debug!(offset, got = data.len(), "store returned oversized value");
        })?;
        Ok(T::decode_padded(&data, endian))
    }

    /// Read one byte at `offset`
    ///
    /// # Errors
    /// Returns `BinaryError::GetValueFailed` if no data is available
    pub fn get_byte(&mut self, offset: u64) -> BinaryResult<u8> {
        let data = self.read_at(offset, 1)?;
        data.first()
            .copied()
            .ok_or(BinaryError::GetValueFailed(offset))
    }

    /// Write one byte at `offset`
    ///
    /// # Errors
    /// Returns `BinaryError::ValueExceeded` if `value > 0xFF`
    pub fn set_byte(&mut self, offset: u64, value: u32) -> BinaryResult<()> {
        let byte = validate_byte(value)?;
        self.write_at(offset, &[byte])
    }

    /// Read a 16-bit short at `offset`
    ///
    /// A single available byte is left-padded to two bytes. A store that hands
    /// back more than two bytes yields `BinaryError::InvalidValueSize`.
    pub fn get_short(&mut self, offset: u64, endian: Endian) -> BinaryResult<u16> {
        self.get_value(offset, endian)
    }

    /// Write a 16-bit short at `offset` in the given byte order
    ///
    /// # Errors
    /// Returns `BinaryError::ValueExceeded` if `value > 0xFFFF`
    pub fn set_short(&mut self, offset: u64, value: u32, endian: Endian) -> BinaryResult<()> {
        let short = validate_short(value)?;
        self.write_at(offset, &short.encode(endian))
    }

    /// Read a 32-bit integer at `offset`
    ///
    /// Same padding and size rules as [`BinaryFile::get_short`], with 4 bytes.
    pub fn get_integer(&mut self, offset: u64, endian: Endian) -> BinaryResult<u32> {
        self.get_value(offset, endian)
    }

    /// Write a 32-bit integer at `offset` in the given byte order
    ///
    /// # Errors
    /// Returns `BinaryError::ValueExceeded` if `value > 0xFFFF_FFFF`
    pub fn set_integer(&mut self, offset: u64, value: u64, endian: Endian) -> BinaryResult<()> {
        let integer = validate_integer(value)?;
        self.write_at(offset, &integer.encode(endian))
    }

    /// Read up to `length` raw bytes starting at `offset`
    ///
    /// `length` is an upper bound: near the end of the store fewer bytes are
    /// returned. Only a position without any data is an error.
    pub fn get_bytes_as_string(&mut self, offset: u64, length: usize) -> BinaryResult<Vec<u8>> {
        self.read_at(offset, length)
    }

    /// Read bytes from `offset` up to and including the first `terminator`
    ///
    /// There is no length limit; the scan only stops at the terminator or at
    /// the end of the store, which is reported as `BinaryError::GetValueFailed`.
    pub fn get_bytes_as_string_until_terminator(
        &mut self,
        offset: u64,
        terminator: u8,
    ) -> BinaryResult<Vec<u8>> {
        self.store.seek(offset)?;
        let mut run = Vec::new();
        loop {
            let position = offset + run.len() as u64;
            let byte = match self.store.read(1)? {
                Some(data) => data
                    .first()
                    .copied()
                    .ok_or(BinaryError::GetValueFailed(position))?,
                None => {
                    debug!(offset, position, terminator, "terminator not found");
                    return Err(BinaryError::GetValueFailed(position));
                }
            };
            run.push(byte);
            if byte == terminator {
                return Ok(run);
            }
        }
    }

    /// Read up to `length` bytes starting at `offset` as individual values
    pub fn get_bytes(&mut self, offset: u64, length: usize) -> BinaryResult<Vec<u8>> {
        self.get_bytes_as_string(offset, length)
    }
}
