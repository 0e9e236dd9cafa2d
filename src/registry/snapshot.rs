//! registry/snapshot — загрузка целиком и экспорт.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::normalize::{normalize_key, unescape_ampersands};
use crate::persist::Snapshot;

use super::core::{Registry, Snippet};

impl Registry {
    /// Replace all state. Order follows `bodies`; keys are renormalized and
    /// values un-escaped; empty keys are skipped; a missing display name
    /// falls back to the key. Nothing is persisted here.
    pub fn load_snapshot(
        &mut self,
        bodies: &IndexMap<String, String>,
        display_names: &IndexMap<String, String>,
    ) {
        let mut names: HashMap<String, String> = HashMap::with_capacity(display_names.len());
        for (raw, name) in display_names {
            let key = normalize_key(raw);
            if key.is_empty() {
                continue;
            }
            names.insert(key, unescape_ampersands(name));
        }

        self.clear();
        for (raw, body) in bodies {
            let key = normalize_key(raw);
            if key.is_empty() {
                continue;
            }
            let body = unescape_ampersands(body);
            // повтор ключа после нормализации: позиция первого, значение последнего
            if let Some(s) = self.entries.get_mut(&key) {
                s.body = body;
                continue;
            }
            let display_name = names.get(&key).cloned().unwrap_or_else(|| key.clone());
            self.entries.insert(key, Snippet { display_name, body });
        }
    }

    /// Export current state in canonical order.
    pub fn to_snapshot(&self, close_chat_after_send: bool) -> Snapshot {
        let mut texts = IndexMap::with_capacity(self.len());
        let mut original_names = IndexMap::with_capacity(self.len());
        for (k, s) in &self.entries {
            texts.insert(k.clone(), s.body.clone());
            original_names.insert(k.clone(), s.display_name.clone());
        }
        Snapshot {
            texts,
            original_names,
            close_chat_after_send: Some(close_chat_after_send),
        }
    }
}
