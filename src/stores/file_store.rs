//! # Local File Store
//!
//! [`FileStore`] backs a [`ByteStore`] with a file on the local file system.
//! The file is opened for update in binary mode: it must already exist and
//! it is never truncated.
use crate::{BinaryError, BinaryResult, ByteStore};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Byte store backed by a local file
#[derive(Debug)]
pub struct FileStore {
    file: File,
}

impl FileStore {
    /// Open an existing file at `path` for reading and writing
    pub fn open_path<P: AsRef<Path>>(path: P) -> BinaryResult<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|err| {
                debug!(path = %path.display(), error = %err, "failed to open file store");
                BinaryError::CouldNotOpen(format!("{}: {}", path.display(), err))
            })?;
        trace!(path = %path.display(), "opened file store");
        Ok(Self { file })
    }

    /// Wrap an already opened file
    pub fn from_file(file: File) -> Self {
        Self { file }
    }

    /// Give back the underlying file handle
    pub fn into_inner(self) -> File {
        self.file
    }
}

impl ByteStore for FileStore {
    fn open(name: &str) -> BinaryResult<Self> {
        Self::open_path(name)
    }

    fn seek(&mut self, offset: u64) -> BinaryResult<()> {
        trace!(offset, "seek");
        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|err| BinaryError::Io(format!("seek to {} failed: {}", offset, err)))?;
        Ok(())
    }

    fn read(&mut self, length: usize) -> BinaryResult<Option<Vec<u8>>> {
        // length is only an upper bound, so grow with what the file yields
        let mut buf = Vec::new();
        (&mut self.file)
            .take(length as u64)
            .read_to_end(&mut buf)
            .map_err(|err| BinaryError::Io(format!("read failed: {}", err)))?;
        if buf.is_empty() && length > 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }

    fn write(&mut self, data: &[u8]) -> BinaryResult<()> {
        self.file
            .write_all(data)
            .map_err(|err| BinaryError::Io(format!("write failed: {}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_read_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rom.bin");
        fs::write(&path, [0x10, 0x20, 0x30, 0x40]).unwrap();

        let mut store = FileStore::open(path.to_str().unwrap()).unwrap();
        store.seek(1).unwrap();
        assert_eq!(store.read(2).unwrap(), Some(vec![0x20, 0x30]));

        store.seek(0).unwrap();
        store.write(&[0xAA, 0xBB]).unwrap();
        drop(store);

        assert_eq!(fs::read(&path).unwrap(), vec![0xAA, 0xBB, 0x30, 0x40]);
    }

    #[test]
    fn test_file_store_short_read_and_eof() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rom.bin");
        fs::write(&path, [0x01, 0x02, 0x03]).unwrap();

        let mut store = FileStore::open_path(&path).unwrap();
        store.seek(2).unwrap();
        assert_eq!(store.read(4).unwrap(), Some(vec![0x03]));
        store.seek(3).unwrap();
        assert_eq!(store.read(1).unwrap(), None);
        // seeking past the end is not an error, reading there yields nothing
        store.seek(100).unwrap();
        assert_eq!(store.read(1).unwrap(), None);
    }

    #[test]
    fn test_file_store_huge_length_on_small_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rom.bin");
        fs::write(&path, [0x01, 0x02, 0x03]).unwrap();

        let mut store = FileStore::open_path(&path).unwrap();
        store.seek(0).unwrap();
        assert_eq!(
            store.read(usize::MAX / 2).unwrap(),
            Some(vec![0x01, 0x02, 0x03])
        );

        let mut file = crate::binary_file::BinaryFile::new(store);
        assert_eq!(
            file.get_bytes_as_string(1, usize::MAX / 2).unwrap(),
            vec![0x02, 0x03]
        );
    }

    #[test]
    fn test_file_store_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        let result = FileStore::open_path(&path);
        assert!(matches!(result, Err(BinaryError::CouldNotOpen(_))));
        // opening must not create the file
        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_does_not_truncate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rom.bin");
        fs::write(&path, [0x01, 0x02, 0x03]).unwrap();

        let store = FileStore::open_path(&path).unwrap();
        drop(store);
        assert_eq!(fs::read(&path).unwrap().len(), 3);
    }
}
