//! Сигналы отказа операций реестра.
//!
//! Persistence errors never appear here: the store swallows them (see `store`).

use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryError {
    /// Name is empty after normalization.
    InvalidName(String),
    /// Normalized key already taken.
    Duplicate(String),
    /// No entry under this key.
    NotFound(String),
    /// Position outside `[1, size]`.
    InvalidIndex(i64),
}

impl RegistryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidName(raw) => write!(f, "invalid name: '{}'", raw),
            RegistryError::Duplicate(key) => write!(f, "name already in use: '{}'", key),
            RegistryError::NotFound(key) => write!(f, "not found: '{}'", key),
            RegistryError::InvalidIndex(idx) => write!(f, "invalid index: {}", idx),
        }
    }
}

impl StdError for RegistryError {}

pub fn to_exit_code(err: &RegistryError) -> i32 {
    match err {
        RegistryError::InvalidName(_) => 2,
        RegistryError::NotFound(_) => 3,
        RegistryError::Duplicate(_) => 4,
        RegistryError::InvalidIndex(_) => 5,
    }
}
