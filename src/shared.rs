//! SharedStore — разделяемый хэндл для хостов, которые зовут из нескольких потоков.
//!
//! One mutex covers each whole read/mutate/save, since rename and move
//! rebuild order and must not interleave.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::RegistryError;
use crate::persist::{Persistence, Snapshot};
use crate::store::{LoadOutcome, SnippetStore};

pub struct SharedStore<P: Persistence> {
    inner: Arc<Mutex<SnippetStore<P>>>,
}

impl<P: Persistence> Clone for SharedStore<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: Persistence> SharedStore<P> {
    pub fn new(store: SnippetStore<P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // Store is consistent between operations, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, SnippetStore<P>> {
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Run `f` with exclusive access.
    pub fn with<R>(&self, f: impl FnOnce(&mut SnippetStore<P>) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    pub fn add(&self, raw_name: &str, body: &str) -> Result<String, RegistryError> {
        self.lock().add(raw_name, body)
    }

    pub fn remove(&self, raw: &str) -> Result<String, RegistryError> {
        self.lock().remove(raw)
    }

    pub fn get(&self, raw: &str) -> Option<String> {
        self.lock().get(raw).map(str::to_string)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    pub fn reload(&self) -> LoadOutcome {
        self.lock().reload()
    }
}
