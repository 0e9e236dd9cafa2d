//! persist — сохранение/загрузка снапшота реестра (best-effort на уровне store).
//!
//! - document.rs — JSON-документ на диске: encode + толерантный decode/merge
//! - file.rs     — JsonFileStore: атомарная запись tmp+rename, fs2-lock
//! - memory.rs   — MemoryStore: in-memory реализация для тестов и встраивания
//!
//! Реализации возвращают ошибки как есть; глотает их `SnippetStore`.

pub mod document;
pub mod file;
pub mod memory;

use anyhow::Result;
use indexmap::IndexMap;

pub use document::{decode_document, encode_document};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Full exportable state. `texts` order is the canonical order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub texts: IndexMap<String, String>,
    pub original_names: IndexMap<String, String>,
    /// None when the document did not carry the option.
    pub close_chat_after_send: Option<bool>,
}

impl Snapshot {
    pub fn order(&self) -> Vec<&str> {
        self.texts.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Durable storage for a registry snapshot, injected into the store.
pub trait Persistence {
    /// Write the whole snapshot.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;

    /// Read the snapshot; Ok(None) when nothing was stored yet.
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Human-readable location for status output.
    fn describe(&self) -> String;
}
