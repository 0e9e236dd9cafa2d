//! registry/ops — добавление, удаление, переименование, правка тела.
//!
//! Rename keeps the list slot: when the key changes the entry is re-inserted
//! at the index the old key occupied.

use crate::error::RegistryError;
use crate::normalize::{normalize_key, unescape_ampersands};

use super::core::{Registry, Snippet};

impl Registry {
    /// Append a new snippet. Returns the normalized key.
    pub fn add(&mut self, raw_name: &str, body: &str) -> Result<String, RegistryError> {
        let name = unescape_ampersands(raw_name);
        let key = normalize_key(&name);
        if key.is_empty() {
            return Err(RegistryError::InvalidName(raw_name.to_string()));
        }
        if self.entries.contains_key(&key) {
            return Err(RegistryError::Duplicate(key));
        }
        self.entries.insert(
            key.clone(),
            Snippet {
                display_name: name,
                body: unescape_ampersands(body),
            },
        );
        Ok(key)
    }

    /// Remove by raw name or key; the rest keeps its relative order.
    pub fn remove(&mut self, raw: &str) -> Result<(String, Snippet), RegistryError> {
        let key = normalize_key(raw);
        match self.entries.shift_remove(&key) {
            Some(s) => Ok((key, s)),
            None => Err(RegistryError::NotFound(key)),
        }
    }

    /// Rename `old_raw` to `new_raw`. Returns the new key.
    ///
    /// Same key (case/format only): display name updated in place.
    /// Different key: moved into the old slot, collisions rejected.
    pub fn rename(&mut self, old_raw: &str, new_raw: &str) -> Result<String, RegistryError> {
        let new_name = unescape_ampersands(new_raw);
        let old_key = normalize_key(old_raw);
        let new_key = normalize_key(&new_name);

        if new_key.is_empty() {
            return Err(RegistryError::InvalidName(new_raw.to_string()));
        }
        let Some(idx) = self.entries.get_index_of(&old_key) else {
            return Err(RegistryError::NotFound(old_key));
        };

        if old_key == new_key {
            if let Some(s) = self.entries.get_mut(&old_key) {
                s.display_name = new_name;
            }
            return Ok(new_key);
        }
        if self.entries.contains_key(&new_key) {
            return Err(RegistryError::Duplicate(new_key));
        }

        let Some((_, old)) = self.entries.shift_remove_index(idx) else {
            return Err(RegistryError::NotFound(old_key));
        };
        self.entries.shift_insert(
            idx,
            new_key.clone(),
            Snippet {
                display_name: new_name,
                body: old.body,
            },
        );
        Ok(new_key)
    }

    /// Replace the body; key, display name and position stay. Empty body is fine.
    pub fn update_body(&mut self, raw: &str, new_body: &str) -> Result<(), RegistryError> {
        let key = normalize_key(raw);
        match self.entries.get_mut(&key) {
            Some(s) => {
                s.body = unescape_ampersands(new_body);
                Ok(())
            }
            None => Err(RegistryError::NotFound(key)),
        }
    }
}
