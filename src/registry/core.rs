//! registry/core — структура Registry и операции чтения.

use indexmap::IndexMap;
use serde::Serialize;

use crate::normalize::normalize_key;

/// Stored value: presentation name plus the text to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snippet {
    pub display_name: String,
    pub body: String,
}

/// Borrowed listing row, position is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Listed<'a> {
    pub position: usize,
    pub key: &'a str,
    #[serde(rename = "name")]
    pub display_name: &'a str,
    pub body: &'a str,
}

/// Ordered map of normalized key -> snippet.
///
/// Keys are unique and every key carries a display name (both live in one
/// entry). Iteration order is the externally visible order.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    pub(crate) entries: IndexMap<String, Snippet>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Body by raw name or key.
    pub fn get(&self, raw: &str) -> Option<&str> {
        self.entries
            .get(&normalize_key(raw))
            .map(|s| s.body.as_str())
    }

    pub fn display_name(&self, raw: &str) -> Option<&str> {
        self.entries
            .get(&normalize_key(raw))
            .map(|s| s.display_name.as_str())
    }

    /// 1-based position of a name, if present.
    pub fn position_of(&self, raw: &str) -> Option<usize> {
        self.entries.get_index_of(&normalize_key(raw)).map(|i| i + 1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = Listed<'_>> + '_ {
        self.entries.iter().enumerate().map(|(i, (k, s))| Listed {
            position: i + 1,
            key: k.as_str(),
            display_name: s.display_name.as_str(),
            body: s.body.as_str(),
        })
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
