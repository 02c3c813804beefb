use crate::{BinaryError, BinaryResult, ByteStore};
use tracing::trace;

/// Byte store backed by memory
///
/// Behaves like a sparse file: the cursor may move past the end, and a
/// write there zero-fills the gap before the written bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    data: Vec<u8>,
    position: usize,
}

impl MemoryStore {
    /// Create a new memory store
    ///
    /// ## Arguments
    /// * 'data' - The data buffer to consume
    pub fn new(data: Vec<u8>) -> MemoryStore {
        MemoryStore { data, position: 0 }
    }

    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl ByteStore for MemoryStore {
    /// Load the named file into memory; later writes only touch the copy
    fn open(name: &str) -> BinaryResult<Self> {
        let data = std::fs::read(name)
            .map_err(|err| BinaryError::CouldNotOpen(format!("{}: {}", name, err)))?;
        trace!(path = name, len = data.len(), "loaded memory store");
        Ok(Self::new(data))
    }

    fn seek(&mut self, offset: u64) -> BinaryResult<()> {
        self.position = usize::try_from(offset).map_err(|_| {
            BinaryError::Io(format!("seek to {} exceeds addressable memory", offset))
        })?;
        Ok(())
    }

    fn read(&mut self, length: usize) -> BinaryResult<Option<Vec<u8>>> {
        if length == 0 {
            return Ok(Some(Vec::new()));
        }
        if self.position >= self.data.len() {
            return Ok(None);
        }
        let end = self.position.saturating_add(length).min(self.data.len());
        let chunk = self.data[self.position..end].to_vec();
        self.position = end;
        Ok(Some(chunk))
    }

    fn write(&mut self, data: &[u8]) -> BinaryResult<()> {
        let Some(end) = self.position.checked_add(data.len()) else {
            return Err(BinaryError::Io(format!(
                "write of {} bytes at {} overflows",
                data.len(),
                self.position
            )));
        };
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.position..end].copy_from_slice(data);
        self.position = end;
        Ok(())
    }
}
