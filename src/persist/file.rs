//! JsonFileStore — снапшот в одном JSON-файле.
//!
//! Запись атомарная: <file>.tmp -> fsync (best-effort) -> rename.
//! Опционально держит fs2-lock на <file>.lock (exclusive на запись, shared на чтение).

use anyhow::{Context, Result};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SnipConfig;
use crate::consts::TMP_SUFFIX;
use crate::lock::{acquire_lock, LockMode};

use super::document::{decode_document, encode_document};
use super::{Persistence, Snapshot};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    file_lock: bool,
    pretty: bool,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: true,
            pretty: true,
        }
    }

    pub fn from_config(cfg: &SnipConfig) -> Self {
        Self {
            path: cfg.snippet_path(),
            file_lock: cfg.file_lock,
            pretty: cfg.pretty,
        }
    }

    pub fn with_file_lock(mut self, on: bool) -> Self {
        self.file_lock = on;
        self
    }

    pub fn with_pretty(mut self, on: bool) -> Self {
        self.pretty = on;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut s = self.path.as_os_str().to_os_string();
        s.push(TMP_SUFFIX);
        PathBuf::from(s)
    }
}

impl Persistence for JsonFileStore {
    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
            }
        }
        let _guard = if self.file_lock {
            Some(acquire_lock(&self.path, LockMode::Exclusive)?)
        } else {
            None
        };

        let data = encode_document(snapshot, self.pretty)?;
        let tmp = self.tmp_path();
        let mut f = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&tmp)
            .with_context(|| format!("open {}", tmp.display()))?;
        f.write_all(&data)
            .with_context(|| format!("write {}", tmp.display()))?;
        let _ = f.sync_all();
        drop(f);

        fs::rename(&tmp, &self.path)
            .with_context(|| format!("rename {} -> {}", tmp.display(), self.path.display()))?;
        debug!(
            "saved {} snippet(s) to {} ({} B)",
            snapshot.len(),
            self.path.display(),
            data.len()
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            debug!("snippet file {} not found, nothing to load", self.path.display());
            return Ok(None);
        }
        let _guard = if self.file_lock {
            Some(acquire_lock(&self.path, LockMode::Shared)?)
        } else {
            None
        };
        let bytes = fs::read(&self.path).with_context(|| format!("read {}", self.path.display()))?;
        let snap = decode_document(&bytes)
            .with_context(|| format!("decode {}", self.path.display()))?;
        debug!("loaded {} snippet(s) from {}", snap.len(), self.path.display());
        Ok(Some(snap))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
