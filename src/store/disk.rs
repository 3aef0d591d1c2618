//! Append-only file store: open, append, flush, reload.
//!
//! On-disk layout is a flat sequence of records, each a u32
//! little-endian length prefix followed by that many bincode bytes.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use super::{ItemStore, StoreError};
use crate::item::Item;

pub struct DiskStore {
    path: PathBuf,
    file: File,
    len: usize, // record count, survives reopen
}

impl DiskStore {
    /// Create / open an append-only store file. Reopening an existing
    /// file resumes appending after its last record.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)?;
        let len = read_records(&path)?.len();

        Ok(Self { path, file, len })
    }

    /// Append a single record to the file.
    pub fn append(&mut self, item: &Item) -> Result<(), StoreError> {
        let bytes = item.to_bytes()?;
        self.file.write_all(&(bytes.len() as u32).to_le_bytes())?;
        self.file.write_all(&bytes)?;
        self.len += 1;
        Ok(())
    }

    /// Flush OS buffers.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.file.sync_all()?;
        Ok(())
    }

    /// Read every record back, in append order.
    pub fn load(&self) -> Result<Vec<Item>, StoreError> {
        read_records(&self.path)
    }
}

impl ItemStore for DiskStore {
    fn insert(&mut self, item: Item) -> Result<(), StoreError> {
        self.append(&item)
    }

    fn items(&self) -> Result<Vec<Item>, StoreError> {
        self.load()
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.len)
    }
}

fn read_records(path: &Path) -> Result<Vec<Item>, StoreError> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut items = Vec::new();

    loop {
        let mut len_buf = [0u8; 4];
        match reader.read_exact(&mut len_buf) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }
        let mut buf = vec![0u8; u32::from_le_bytes(len_buf) as usize];
        reader.read_exact(&mut buf)?;
        items.push(Item::from_bytes(&buf)?);
    }

    Ok(items)
}
