//! MemoryStore — хранит закодированный документ в памяти.
//!
//! Goes through the same encode/decode path as the file store, so tests
//! exercise the real document format without touching disk.

use anyhow::{anyhow, Result};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::document::{decode_document, encode_document};
use super::{Persistence, Snapshot};

#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: Mutex<Option<Vec<u8>>>,
    saves: AtomicU64,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw document bytes, as if a file was already on disk.
    pub fn with_document(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            doc: Mutex::new(Some(bytes.into())),
            ..Self::default()
        }
    }

    /// Every save fails (durability loss simulation).
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Number of successful saves.
    pub fn saves(&self) -> u64 {
        self.saves.load(Ordering::Relaxed)
    }

    pub fn document(&self) -> Option<Vec<u8>> {
        self.doc.lock().map(|d| d.clone()).unwrap_or(None)
    }

    /// Overwrite the stored document (external edit).
    pub fn set_document(&self, bytes: impl Into<Vec<u8>>) {
        if let Ok(mut d) = self.doc.lock() {
            *d = Some(bytes.into());
        }
    }
}

impl Persistence for MemoryStore {
    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if self.fail_saves {
            return Err(anyhow!("memory store: save disabled"));
        }
        let data = encode_document(snapshot, false)?;
        let mut d = self
            .doc
            .lock()
            .map_err(|_| anyhow!("memory store: poisoned"))?;
        *d = Some(data);
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>> {
        match self.document() {
            Some(bytes) => Ok(Some(decode_document(&bytes)?)),
            None => Ok(None),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
