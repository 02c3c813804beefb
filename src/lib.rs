//! # Binary File Access Library
//!
//! This library provides typed, offset-addressed access to the contents of a
//! seekable byte store. It is meant as a building block for parsers of
//! binary file formats (ROM images, archives, containers) that need exact
//! control over where a value lives and how wide it is.
//!
//! ## Overview
//!
//! The library is split into two independent parts:
//! - [`binary_file::BinaryFile`] reads and writes bytes, 16-bit shorts,
//!   32-bit integers and byte runs at absolute offsets of a [`ByteStore`]
//! - [`binary_helper`] offers pure functions for bit testing and for
//!   composing/decomposing values into bytes and nibbles
//!
//! Concrete stores live in [`file_store`] (a local file opened for update)
//! and [`memory_store`] (an in-memory buffer).
//!
//! ## Example
//!
//! ```rust
//! use binfile::{BinaryResult, Endian};
//! use binfile::binary_file::BinaryFile;
//! use binfile::memory_store::MemoryStore;
//!
//! # fn main() -> BinaryResult<()> {
//! let mut file = BinaryFile::new(MemoryStore::new(vec![0x00; 8]));
//!
//! file.set_short(0, 0x1234, Endian::Big)?;
//! assert_eq!(file.get_short(0, Endian::Big)?, 0x1234);
//! assert_eq!(file.get_byte(1)?, 0x34);
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub mod binary_file;
pub mod binary_helper;
mod common;
mod stores;
pub use stores::file_store;
pub use stores::memory_store;

/// Result type for binary file operations
pub type BinaryResult<T> = Result<T, BinaryError>;

/// Byte order used to decode and encode multi-byte values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Least significant byte first
    #[default]
    Little,
    /// Most significant byte first
    Big,
}

/// Binary file error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BinaryError {
    /// The byte store could not be opened
    #[error("Could not open store: {0}")]
    CouldNotOpen(String),

    /// No data at all was available at the requested offset
    #[error("Could not get value at offset {0}: no data available")]
    GetValueFailed(u64),

    /// A value does not fit into the target width
    #[error("Value exceeded: {0}")]
    ValueExceeded(String),

    /// The store returned more bytes than the value width
    #[error("Invalid size of value: expected {expected} bytes, got {actual} bytes")]
    InvalidValueSize { expected: usize, actual: usize },

    /// The store backend failed to seek, read or write
    #[error("Store I/O failed: {0}")]
    Io(String),
}

/// Seekable, readable and writable byte-addressable resource
///
/// This trait is the only thing [`binary_file::BinaryFile`] needs from its
/// backing storage. Implementations decide where the bytes actually live.
pub trait ByteStore {
    /// Open an existing resource by name for reading and writing
    ///
    /// The resource is never created or truncated.
    ///
    /// # Errors
    /// Returns `BinaryError::CouldNotOpen` if the resource cannot be opened
    fn open(name: &str) -> BinaryResult<Self>
    where
        Self: Sized;

    /// Move the cursor to an absolute offset
    fn seek(&mut self, offset: u64) -> BinaryResult<()>;

    /// Read up to `length` bytes starting at the cursor
    ///
    /// # Returns
    /// * `Ok(Some(bytes))` with at most `length` bytes; fewer at end of data
    /// * `Ok(None)` if not a single byte could be read
    /// * `Err(BinaryError)` if the backend failed
    fn read(&mut self, length: usize) -> BinaryResult<Option<Vec<u8>>>;

    /// Write `data` at the cursor and advance it
    fn write(&mut self, data: &[u8]) -> BinaryResult<()>;
}
