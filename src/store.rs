//! store — реестр + опции + внедрённое хранилище.
//!
//! Каждая успешная мутация синхронно сохраняет полный снапшот (одна запись
//! на вызов, без батчинга). Ошибки хранилища логируются и не доходят до
//! вызывающего: состояние в памяти остаётся главным.

use anyhow::Result;
use log::{debug, info, warn};

use crate::config::SnipConfig;
use crate::consts::DEFAULT_CLOSE_CHAT_AFTER_SEND;
use crate::dispatch::{plan_send, ChatSink, SendPlan};
use crate::error::RegistryError;
use crate::persist::{JsonFileStore, Persistence, Snapshot};
use crate::registry::{Listed, Moved, Registry};

/// What a load/reload did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// State replaced with this many entries.
    Loaded(usize),
    /// Nothing stored yet; state untouched.
    Missing,
    /// Read/parse failed; state untouched.
    Failed,
}

pub struct SnippetStore<P: Persistence> {
    registry: Registry,
    close_chat_after_send: bool,
    persistence: P,
}

impl SnippetStore<JsonFileStore> {
    /// File-backed store at the configured path, loaded.
    pub fn open_with_config(cfg: &SnipConfig) -> Self {
        Self::open(JsonFileStore::from_config(cfg))
    }
}

impl<P: Persistence> SnippetStore<P> {
    /// Empty store; nothing is read.
    pub fn new(persistence: P) -> Self {
        Self {
            registry: Registry::new(),
            close_chat_after_send: DEFAULT_CLOSE_CHAT_AFTER_SEND,
            persistence,
        }
    }

    /// Empty store populated from persistence.
    pub fn open(persistence: P) -> Self {
        let mut store = Self::new(persistence);
        store.load();
        store
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    // ---------- reads ----------

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn get(&self, raw: &str) -> Option<&str> {
        self.registry.get(raw)
    }

    pub fn display_name(&self, raw: &str) -> Option<&str> {
        self.registry.display_name(raw)
    }

    pub fn name_at_position(&self, position: i64) -> Option<&str> {
        self.registry.name_at_position(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = Listed<'_>> + '_ {
        self.registry.iter()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.registry.to_snapshot(self.close_chat_after_send)
    }

    // ---------- mutations (each one saves) ----------

    pub fn add(&mut self, raw_name: &str, body: &str) -> Result<String, RegistryError> {
        let key = self.registry.add(raw_name, body)?;
        self.persist();
        Ok(key)
    }

    pub fn remove(&mut self, raw: &str) -> Result<String, RegistryError> {
        let (key, _) = self.registry.remove(raw)?;
        self.persist();
        Ok(key)
    }

    pub fn rename(&mut self, old_raw: &str, new_raw: &str) -> Result<String, RegistryError> {
        let key = self.registry.rename(old_raw, new_raw)?;
        self.persist();
        Ok(key)
    }

    pub fn update_body(&mut self, raw: &str, new_body: &str) -> Result<(), RegistryError> {
        self.registry.update_body(raw, new_body)?;
        self.persist();
        Ok(())
    }

    pub fn move_to(&mut self, raw: &str, target: i64) -> Result<Moved, RegistryError> {
        let moved = self.registry.move_to(raw, target)?;
        if !moved.is_noop() {
            self.persist();
        }
        Ok(moved)
    }

    pub fn move_by_index(&mut self, from: i64, to: i64) -> Result<Moved, RegistryError> {
        let moved = self.registry.move_by_index(from, to)?;
        if !moved.is_noop() {
            self.persist();
        }
        Ok(moved)
    }

    // ---------- options ----------

    pub fn close_chat_after_send(&self) -> bool {
        self.close_chat_after_send
    }

    pub fn set_close_chat_after_send(&mut self, value: bool) {
        self.close_chat_after_send = value;
        self.persist();
    }

    /// Flip the option; returns the new value.
    pub fn toggle_close_chat_after_send(&mut self) -> bool {
        let v = !self.close_chat_after_send;
        self.set_close_chat_after_send(v);
        v
    }

    // ---------- send ----------

    pub fn plan_send(&self, raw: &str) -> Result<SendPlan, RegistryError> {
        match self.registry.get(raw) {
            Some(body) => Ok(plan_send(body, self.close_chat_after_send)),
            None => Err(RegistryError::NotFound(crate::normalize::normalize_key(raw))),
        }
    }

    /// Look up and deliver through the host sink.
    pub fn send<S: ChatSink + ?Sized>(&self, raw: &str, sink: &mut S) -> Result<SendPlan> {
        let plan = self.plan_send(raw)?;
        plan.deliver(sink)?;
        Ok(plan)
    }

    // ---------- load / reload ----------

    /// Drop in-memory state and take whatever persistence holds.
    /// Missing or unreadable data leaves the state as it was.
    pub fn reload(&mut self) -> LoadOutcome {
        let outcome = self.load();
        info!("snippets reloaded from {}: {:?}", self.persistence.describe(), outcome);
        outcome
    }

    fn load(&mut self) -> LoadOutcome {
        match self.persistence.load() {
            Ok(Some(snap)) => {
                self.registry
                    .load_snapshot(&snap.texts, &snap.original_names);
                if let Some(v) = snap.close_chat_after_send {
                    self.close_chat_after_send = v;
                }
                debug!("store: {} snippet(s) in memory after load", self.registry.len());
                LoadOutcome::Loaded(self.registry.len())
            }
            Ok(None) => LoadOutcome::Missing,
            Err(e) => {
                warn!("snippet load failed ({}): {:#}", self.persistence.describe(), e);
                LoadOutcome::Failed
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.snapshot()) {
            warn!("snippet save failed ({}): {:#}", self.persistence.describe(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;

    #[test]
    fn every_mutation_saves_once() {
        let mut s = SnippetStore::open(MemoryStore::new());
        s.add("a", "1").unwrap();
        s.add("b", "2").unwrap();
        assert_eq!(s.persistence().saves(), 2);

        assert!(s.add("A", "dup").is_err());
        assert!(s.remove("zz").is_err());
        assert_eq!(s.persistence().saves(), 2);

        s.rename("a", "a2").unwrap();
        s.update_body("b", "").unwrap();
        s.move_to("b", 1).unwrap();
        s.set_close_chat_after_send(false);
        assert_eq!(s.persistence().saves(), 6);
    }

    #[test]
    fn self_move_does_not_save() {
        let mut s = SnippetStore::open(MemoryStore::new());
        s.add("a", "").unwrap();
        s.add("b", "").unwrap();
        let before = s.persistence().saves();
        assert!(s.move_to("a", 1).unwrap().is_noop());
        assert!(s.move_by_index(2, 9).unwrap().is_noop());
        assert_eq!(s.persistence().saves(), before);
    }

    #[test]
    fn failing_save_keeps_memory_state() {
        let mut s = SnippetStore::open(MemoryStore::failing());
        s.add("ban", "x").unwrap();
        assert_eq!(s.get("ban"), Some("x"));
        assert_eq!(s.persistence().saves(), 0);
    }

    #[test]
    fn option_defaults_and_toggles() {
        let mut s = SnippetStore::open(MemoryStore::new());
        assert!(s.close_chat_after_send());
        assert!(!s.toggle_close_chat_after_send());
        assert!(!s.snapshot().close_chat_after_send.unwrap_or(true));
    }

    #[test]
    fn plan_send_unknown_is_not_found() {
        let s = SnippetStore::new(MemoryStore::new());
        assert_eq!(
            s.plan_send("&cNope"),
            Err(RegistryError::NotFound("nope".into()))
        );
    }
}
