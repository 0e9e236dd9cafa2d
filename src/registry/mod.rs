//! registry — упорядоченный реестр сниппетов (in-memory, без I/O).
//!
//! Разделение по подмодулям:
//! - core.rs     — типы (Registry, Snippet, Listed), чтение и перечисление
//! - ops.rs      — add/remove/rename/update_body
//! - order.rs    — позиции: name_at_position, move_to, move_by_index
//! - snapshot.rs — load_snapshot (замена целиком) и экспорт в Snapshot
//!
//! Порядок вставки IndexMap и есть канонический порядок списка; позиции наружу 1-based.
//! Все входные имена нормализуются через `normalize::normalize_key`.

pub mod core;
pub mod ops;
pub mod order;
pub mod snapshot;

pub use self::core::{Listed, Registry, Snippet};
pub use self::order::Moved;
