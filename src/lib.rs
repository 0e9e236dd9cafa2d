//! snipdb — упорядоченное хранилище текстовых сниппетов «имя -> сообщение».
//!
//! Слои:
//! - registry — in-memory упорядоченная карта (нормализация ключей, rename/move с сохранением позиции)
//! - persist  — снапшот на диске (order + textOriginalNames + texts + closeChatAfterSend)
//! - store    — registry + опции + внедрённое хранилище; каждая мутация сохраняется
//! - cli      — командный слой бинарника

pub mod consts;
pub mod config;
pub mod error;
pub mod lock;
pub mod normalize;
pub mod format;

pub mod registry; // src/registry/{mod,core,ops,order,snapshot}.rs
pub mod persist;  // src/persist/{mod,document,file,memory}.rs
pub mod store;
pub mod shared;
pub mod dispatch;

pub mod cli;

// Удобные реэкспорты
pub use config::SnipConfig;
pub use dispatch::{plan_send, ChatSink, Delivery, SendPlan};
pub use error::RegistryError;
pub use normalize::{normalize_key, strip_format_codes, unescape_ampersands};
pub use persist::{JsonFileStore, MemoryStore, Persistence, Snapshot};
pub use registry::{Listed, Moved, Registry, Snippet};
pub use shared::SharedStore;
pub use store::{LoadOutcome, SnippetStore};
